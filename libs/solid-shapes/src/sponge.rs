//! # Sierpinski Sponge
//!
//! Recursive tetrahedron fractal. Level 0 is a single tetrahedron; level
//! `L` replaces it with four half-size copies, one at each corner of the
//! parent, for `4^L` tetrahedra in total.
//!
//! ## Buffer Layout
//!
//! ```text
//! level L buffer = [child 0 | child 1 | child 2 | child 3]
//!                   each a level L-1 buffer of 4^(L-1) * 36 floats
//! ```
//!
//! Each child is written through its own disjoint sub-slice, so the
//! recursion never indexes outside the range its parent handed it.
//! Offsets accumulate in `f64`; only the final positions are narrowed.

use crate::buffer;
use crate::catalog::TETRAHEDRON;
use crate::error::{ShapeError, ShapeResult};
use config::constants::GlobalConfig;
use glam::{DVec3, Vec3};
use log::debug;

/// Floats in one tetrahedron's vertex (or normal) block: 4 faces x 3 x 3.
const TETRAHEDRON_FLOATS: usize = 36;

/// Flat per-face arrays for a sponge of a given depth.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpongeBuffer {
    /// Vertex positions, 3 floats per slot
    vertices: Vec<f32>,
    /// Face normals repeated per slot
    normals: Vec<f32>,
}

/// Number of tetrahedra in a sponge of `levels` depth, `4^levels`.
///
/// Negative depths have none. Returns `None` on overflow.
pub fn tetrahedron_count(levels: i32) -> Option<usize> {
    if levels < 0 {
        return Some(0);
    }
    4usize.checked_pow(levels as u32)
}

impl SpongeBuffer {
    /// Generates a sponge with the default safety limits.
    ///
    /// # Arguments
    ///
    /// * `levels` - Recursion depth; negative yields an empty buffer
    /// * `offset` - Translation applied to the whole sponge
    /// * `scale` - Size of the level 0 tetrahedron
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use solid_shapes::sponge::SpongeBuffer;
    ///
    /// let sponge = SpongeBuffer::generate(2, DVec3::ZERO, 1.0).unwrap();
    /// assert_eq!(sponge.vertex_count(), 12 * 16);
    /// ```
    pub fn generate(levels: i32, offset: DVec3, scale: f64) -> ShapeResult<Self> {
        Self::generate_with(&GlobalConfig::default(), levels, offset, scale)
    }

    /// Generates a sponge, checking depth and size against `config`.
    ///
    /// # Errors
    ///
    /// `LimitExceeded` if `levels` is deeper than `config.max_sponge_levels`
    /// or the buffer would exceed `config.max_buffer_floats`. Both are
    /// checked before anything is allocated.
    pub fn generate_with(
        config: &GlobalConfig,
        levels: i32,
        offset: DVec3,
        scale: f64,
    ) -> ShapeResult<Self> {
        const CONTEXT: &str = "sierpinski_sponge";

        if levels < 0 {
            return Ok(Self::default());
        }
        if levels > config.max_sponge_levels {
            return Err(ShapeError::limit_exceeded(
                CONTEXT,
                levels as usize,
                config.max_sponge_levels.max(0) as usize,
            ));
        }

        let max = config.max_buffer_floats;
        let count = tetrahedron_count(levels)
            .ok_or_else(|| ShapeError::limit_exceeded(CONTEXT, usize::MAX, max))?;
        let float_len = buffer::element_count(CONTEXT, &[count, TETRAHEDRON_FLOATS], max)?;

        let mut vertices = buffer::zeroed(float_len, max, CONTEXT)?;
        let mut normals = buffer::zeroed(float_len, max, CONTEXT)?;
        fill(levels, offset, scale as f32, &mut vertices, &mut normals);

        debug!("sponge level {levels}: {count} tetrahedra, {float_len} floats");
        Ok(Self { vertices, normals })
    }

    /// Returns the flat vertex array.
    #[inline]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Returns the flat normal array.
    #[inline]
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Number of vertex slots, 12 per tetrahedron.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangular faces, 4 per tetrahedron.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// Number of tetrahedra.
    #[inline]
    pub fn tetrahedron_count(&self) -> usize {
        self.vertices.len() / TETRAHEDRON_FLOATS
    }

    /// Returns true for a negative-depth sponge.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Writes a level `levels` sponge into `vertices` and `normals`.
///
/// Both slices hold exactly `4^levels * 36` floats.
fn fill(levels: i32, offset: DVec3, scale: f32, vertices: &mut [f32], normals: &mut [f32]) {
    if levels == 0 {
        let origin = offset.as_vec3();
        for face in 0..TETRAHEDRON.face_count {
            let normal = TETRAHEDRON.normal(face);
            for (j, &corner) in TETRAHEDRON.face(face).iter().enumerate() {
                let position = origin + scale * Vec3::from(TETRAHEDRON.vertex(corner as usize));
                let slot = (face * 3 + j) * 3;
                vertices[slot..slot + 3].copy_from_slice(&position.to_array());
                normals[slot..slot + 3].copy_from_slice(&normal);
            }
        }
        return;
    }

    let child_scale = scale / 2.0;
    let stride = vertices.len() / 4;
    let children = vertices
        .chunks_exact_mut(stride)
        .zip(normals.chunks_exact_mut(stride))
        .enumerate();

    for (k, (child_vertices, child_normals)) in children {
        let corner = DVec3::from(TETRAHEDRON.vertex(k).map(f64::from));
        let child_offset = offset + f64::from(child_scale) * corner;
        fill(levels - 1, child_offset, child_scale, child_vertices, child_normals);
    }
}
