//! # Torus
//!
//! Ring torus around the Z axis. A sample sits at ring angle ψ (around Z)
//! and side angle φ (around the tube):
//!
//! ```text
//! position = ((R + r cos φ) cos ψ, (R + r cos φ) sin ψ, r sin φ)
//! normal   = (cos φ cos ψ, cos φ sin ψ, sin φ)
//! ```
//!
//! with `R` the distance from the Z axis to the tube centre and `r` the tube
//! radius. The sample grid is `rings x sides` with no duplicated seam; faces
//! on the last ring or side wrap back to index 0.

use super::resolution;
use crate::buffer;
use crate::circle::CircleTable;
use crate::draw::{Primitive, Topology};
use crate::error::{ShapeError, ShapeResult};
use config::constants::GlobalConfig;
use glam::Vec3;

/// `rings x sides` grid of positions and normals, ring-major.
struct TorusGrid {
    sides: usize,
    rings: usize,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
}

impl TorusGrid {
    /// Samples the grid, holding its `3 * rings * sides` floats per array to
    /// `config.max_buffer_floats`.
    fn new(
        config: &GlobalConfig,
        inner_radius: f32,
        outer_radius: f32,
        sides: i32,
        rings: i32,
        context: &'static str,
    ) -> ShapeResult<Self> {
        let max = config.max_buffer_floats;
        let ring_table = CircleTable::new_with(config, rings, false)?;
        let side_table = CircleTable::new_with(config, -sides, false)?;
        let (ns, nr) = (sides as usize, rings as usize);

        let floats = buffer::element_count(context, &[ns, nr, 3], max)?;
        if floats > max {
            return Err(ShapeError::limit_exceeded(context, floats, max));
        }
        let mut positions = buffer::with_capacity(ns * nr, max, context)?;
        let mut normals = buffer::with_capacity(ns * nr, max, context)?;

        for j in 0..nr {
            let (cos_psi, sin_psi) = (ring_table.cos(j), ring_table.sin(j));
            for i in 0..ns {
                let (cos_phi, sin_phi) = (side_table.cos(i), side_table.sin(i));
                let normal = Vec3::new(cos_phi * cos_psi, cos_phi * sin_psi, sin_phi);
                let centre = Vec3::new(cos_psi, sin_psi, 0.0) * outer_radius;
                positions.push(centre + normal * inner_radius);
                normals.push(normal);
            }
        }

        Ok(Self {
            sides: ns,
            rings: nr,
            positions,
            normals,
        })
    }

    #[inline]
    fn push(&self, primitive: &mut Primitive, ring: usize, side: usize) {
        let k = (ring % self.rings) * self.sides + side % self.sides;
        primitive.push(self.positions[k], self.normals[k]);
    }
}

/// Builds the filled torus as a single batch of quads.
///
/// # Arguments
///
/// * `config` - Buffer limits
/// * `inner_radius` - Tube radius
/// * `outer_radius` - Distance from the Z axis to the tube centre
/// * `sides` - Subdivisions around the tube
/// * `rings` - Subdivisions around the Z axis
///
/// # Example
///
/// ```rust
/// use config::constants::GlobalConfig;
/// use solid_shapes::quadric::solid_torus_primitives;
///
/// let config = GlobalConfig::default();
/// let batches = solid_torus_primitives(&config, 0.25, 1.0, 8, 16).unwrap();
/// assert_eq!(batches[0].vertex_count(), 8 * 16 * 4);
/// ```
pub fn solid_torus_primitives(
    config: &GlobalConfig,
    inner_radius: f32,
    outer_radius: f32,
    sides: i32,
    rings: i32,
) -> ShapeResult<Vec<Primitive>> {
    const CONTEXT: &str = "solid_torus";

    let sides = resolution(CONTEXT, "sides", sides);
    let rings = resolution(CONTEXT, "rings", rings);
    let grid = TorusGrid::new(config, inner_radius, outer_radius, sides, rings, CONTEXT)?;

    let max = config.max_buffer_floats;
    let quad_vertices = buffer::element_count(CONTEXT, &[grid.sides, grid.rings, 4], max)?;
    let mut quads = Primitive::with_capacity(Topology::Quads, quad_vertices, max, CONTEXT)?;
    for i in 0..grid.sides {
        for j in 0..grid.rings {
            grid.push(&mut quads, j, i);
            grid.push(&mut quads, j, i + 1);
            grid.push(&mut quads, j + 1, i + 1);
            grid.push(&mut quads, j + 1, i);
        }
    }

    Ok(vec![quads])
}

/// Builds the torus outline: a loop around the Z axis for every side and a
/// loop around the tube for every ring.
pub fn wire_torus_primitives(
    config: &GlobalConfig,
    inner_radius: f32,
    outer_radius: f32,
    sides: i32,
    rings: i32,
) -> ShapeResult<Vec<Primitive>> {
    const CONTEXT: &str = "wire_torus";

    let sides = resolution(CONTEXT, "sides", sides);
    let rings = resolution(CONTEXT, "rings", rings);
    let grid = TorusGrid::new(config, inner_radius, outer_radius, sides, rings, CONTEXT)?;

    let max = config.max_buffer_floats;
    let mut primitives = Vec::with_capacity(grid.sides + grid.rings);

    for i in 0..grid.sides {
        let mut around_axis =
            Primitive::with_capacity(Topology::LineLoop, grid.rings, max, CONTEXT)?;
        for j in 0..grid.rings {
            grid.push(&mut around_axis, j, i);
        }
        primitives.push(around_axis);
    }

    for j in 0..grid.rings {
        let mut around_tube =
            Primitive::with_capacity(Topology::LineLoop, grid.sides, max, CONTEXT)?;
        for i in 0..grid.sides {
            grid.push(&mut around_tube, j, i);
        }
        primitives.push(around_tube);
    }

    Ok(primitives)
}
