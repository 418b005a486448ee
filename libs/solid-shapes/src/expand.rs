//! # Geometry Expander
//!
//! Turns an indexed [`SolidDescriptor`] into flat vertex and normal arrays
//! with every vertex duplicated per face, so that faces meeting at a corner
//! can carry their own normals.
//!
//! ## Layout
//!
//! ```text
//! slot f*E + j  <-  catalog vertex face_indices[f*E + j], normal of face f
//! ```
//!
//! Non-triangular solids also get a triangle index array whose entries stay
//! inside each face's block of `E` slots.

use crate::buffer;
use crate::catalog::SolidDescriptor;
use crate::decompose::{decomposition_table, indices_per_face};
use crate::error::ShapeResult;
use config::constants::GlobalConfig;

/// Flat, per-face duplicated geometry for one solid.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedGeometry {
    /// Vertex positions, 3 floats per slot
    vertices: Vec<f32>,
    /// Vertex normals, 3 floats per slot
    normals: Vec<f32>,
    /// Triangle list into the flat arrays, `None` for triangular solids
    indices: Option<Vec<u32>>,
    /// Number of faces
    face_count: usize,
    /// Vertices per face
    edges_per_face: usize,
}

impl ExpandedGeometry {
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

    /// Returns the triangle index array, if the solid needed one.
    #[inline]
    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Returns the number of vertices per face.
    #[inline]
    pub fn edges_per_face(&self) -> usize {
        self.edges_per_face
    }

    /// Returns the number of flat vertex slots.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the vertex array multiplied by `scale`.
    ///
    /// Normals are direction-only and are left alone. The copy is held to
    /// `config.max_buffer_floats`.
    pub fn scaled_vertices(&self, config: &GlobalConfig, scale: f32) -> ShapeResult<Vec<f32>> {
        let mut scaled = buffer::with_capacity(
            self.vertices.len(),
            config.max_buffer_floats,
            "ExpandedGeometry::scaled",
        )?;
        scaled.extend(self.vertices.iter().map(|v| v * scale));
        Ok(scaled)
    }
}

/// Expands a solid descriptor into flat per-face geometry.
///
/// # Arguments
///
/// * `descriptor` - The solid to expand
///
/// # Returns
///
/// Flat vertex and normal arrays of `face_count * edges_per_face * 3`
/// floats, plus a triangle index array of
/// `face_count * 3 * (edges_per_face - 2)` entries when faces are not
/// triangles.
///
/// # Example
///
/// ```rust
/// use solid_shapes::catalog::CUBE;
/// use solid_shapes::expand::expand;
///
/// let cube = expand(&CUBE).unwrap();
/// assert_eq!(cube.vertices().len(), 6 * 4 * 3);
/// assert_eq!(cube.indices().map(<[u32]>::len), Some(36));
/// ```
pub fn expand(descriptor: &SolidDescriptor) -> ShapeResult<ExpandedGeometry> {
    expand_with(&GlobalConfig::default(), descriptor)
}

/// Expands a solid descriptor, holding every array to
/// `config.max_buffer_floats`.
///
/// # Errors
///
/// `LimitExceeded` if the flat arrays would pass the limit. Nothing is
/// allocated in that case.
pub fn expand_with(
    config: &GlobalConfig,
    descriptor: &SolidDescriptor,
) -> ShapeResult<ExpandedGeometry> {
    const CONTEXT: &str = "expand";

    let max = config.max_buffer_floats;
    let faces = descriptor.face_count;
    let edges = descriptor.edges_per_face;
    let float_len = buffer::element_count(CONTEXT, &[faces, edges, 3], max)?;

    let mut vertices = buffer::with_capacity(float_len, max, CONTEXT)?;
    let mut normals = buffer::with_capacity(float_len, max, CONTEXT)?;

    let table = decomposition_table(edges);
    let mut indices = match table {
        Some(_) => {
            let index_len =
                buffer::element_count(CONTEXT, &[faces, indices_per_face(edges)], max)?;
            Some(buffer::with_capacity(index_len, max, CONTEXT)?)
        }
        None => None,
    };

    for face in 0..faces {
        let normal = descriptor.normal(face);
        for &vertex in descriptor.face(face) {
            vertices.extend_from_slice(&descriptor.vertex(vertex as usize));
            normals.extend_from_slice(&normal);
        }

        if let (Some(table), Some(indices)) = (table, indices.as_mut()) {
            let first = (face * edges) as u32;
            indices.extend(table.iter().map(|&local| first + local as u32));
        }
    }

    Ok(ExpandedGeometry {
        vertices,
        normals,
        indices,
        face_count: faces,
        edges_per_face: edges,
    })
}
