//! # Sphere
//!
//! Latitude/longitude sphere centred on the origin with its axis along Z.
//!
//! ## Layout (solid)
//!
//! ```text
//! fan    apex (0,0,+r)  + ring 1
//! strip  ring i+1 / ring i       for i in 1..stacks-1
//! fan    apex (0,0,-r)  + last ring
//! ```
//!
//! The two caps are separate code paths. The top cap reads ring 1 straight
//! from the stack table; the bottom cap reuses the ring left over from the
//! strip loop.

use super::{resolution, ring_point};
use crate::circle::CircleTable;
use crate::draw::{Primitive, Topology};
use crate::error::ShapeResult;
use config::constants::GlobalConfig;
use glam::Vec3;

/// Number of vertices the solid sphere emits across all batches.
///
/// `2 (slices + 2) + max(stacks - 2, 0) * 2 (slices + 1)` for clamped
/// resolutions.
pub fn solid_sphere_vertex_count(slices: i32, stacks: i32) -> usize {
    let slices = slices.max(1) as usize;
    let stacks = stacks.max(1) as usize;
    2 * (slices + 2) + stacks.saturating_sub(2) * 2 * (slices + 1)
}

/// Builds the filled sphere.
///
/// # Arguments
///
/// * `config` - Buffer limits
/// * `radius` - Sphere radius
/// * `slices` - Subdivisions around the Z axis
/// * `stacks` - Subdivisions along the Z axis
///
/// # Example
///
/// ```rust
/// use config::constants::GlobalConfig;
/// use solid_shapes::quadric::solid_sphere_primitives;
///
/// let batches = solid_sphere_primitives(&GlobalConfig::default(), 1.0, 8, 4).unwrap();
/// // Two caps and two middle strips
/// assert_eq!(batches.len(), 4);
/// ```
pub fn solid_sphere_primitives(
    config: &GlobalConfig,
    radius: f32,
    slices: i32,
    stacks: i32,
) -> ShapeResult<Vec<Primitive>> {
    const CONTEXT: &str = "solid_sphere";

    let slices = resolution(CONTEXT, "slices", slices);
    let stacks = resolution(CONTEXT, "stacks", stacks);
    let ns = slices as usize;
    let max = config.max_buffer_floats;

    let around = CircleTable::new_with(config, -slices, false)?;
    let along = CircleTable::new_with(config, stacks, true)?;
    let (sin1, cos1) = (around.sines(), around.cosines());
    let (sin2, cos2) = (along.sines(), along.cosines());

    let mut primitives = Vec::with_capacity(stacks as usize);

    // Top cap
    let mut z1 = cos2[1];
    let mut r1 = sin2[1];
    let mut top = Primitive::with_capacity(Topology::TriangleFan, ns + 2, max, CONTEXT)?;
    top.push(Vec3::Z * radius, Vec3::Z);
    for j in (0..=ns).rev() {
        let (position, normal) = ring_point(cos1[j], sin1[j], r1, z1, radius);
        top.push(position, normal);
    }
    primitives.push(top);

    // Middle bands
    for i in 1..(stacks as usize).saturating_sub(1) {
        let (z0, r0) = (z1, r1);
        z1 = cos2[i + 1];
        r1 = sin2[i + 1];

        let mut band = Primitive::with_capacity(Topology::QuadStrip, 2 * (ns + 1), max, CONTEXT)?;
        for j in 0..=ns {
            let (position, normal) = ring_point(cos1[j], sin1[j], r1, z1, radius);
            band.push(position, normal);
            let (position, normal) = ring_point(cos1[j], sin1[j], r0, z0, radius);
            band.push(position, normal);
        }
        primitives.push(band);
    }

    // Bottom cap
    let (z0, r0) = (z1, r1);
    let mut bottom = Primitive::with_capacity(Topology::TriangleFan, ns + 2, max, CONTEXT)?;
    bottom.push(Vec3::NEG_Z * radius, Vec3::NEG_Z);
    for j in 0..=ns {
        let (position, normal) = ring_point(cos1[j], sin1[j], r0, z0, radius);
        bottom.push(position, normal);
    }
    primitives.push(bottom);

    Ok(primitives)
}

/// Builds the sphere outline: a loop per interior latitude, a pole-to-pole
/// strip per meridian.
///
/// Latitude loops carry the unit radial normal `(cos ρ, sin ρ, z)` of each
/// sample, the same normal the solid sphere uses, rather than the
/// unnormalised `(cos, sin, z)`. Lighting of the outline therefore matches
/// the filled shape at every latitude.
pub fn wire_sphere_primitives(
    config: &GlobalConfig,
    radius: f32,
    slices: i32,
    stacks: i32,
) -> ShapeResult<Vec<Primitive>> {
    const CONTEXT: &str = "wire_sphere";

    let slices = resolution(CONTEXT, "slices", slices);
    let stacks = resolution(CONTEXT, "stacks", stacks);
    let (ns, nt) = (slices as usize, stacks as usize);
    let max = config.max_buffer_floats;

    let around = CircleTable::new_with(config, -slices, false)?;
    let along = CircleTable::new_with(config, stacks, true)?;
    let (sin1, cos1) = (around.sines(), around.cosines());
    let (sin2, cos2) = (along.sines(), along.cosines());

    let mut primitives = Vec::with_capacity(nt + ns);

    for i in 1..nt {
        let mut latitude = Primitive::with_capacity(Topology::LineLoop, ns + 1, max, CONTEXT)?;
        for j in 0..=ns {
            let (position, normal) = ring_point(cos1[j], sin1[j], sin2[i], cos2[i], radius);
            latitude.push(position, normal);
        }
        primitives.push(latitude);
    }

    for i in 0..ns {
        let mut meridian = Primitive::with_capacity(Topology::LineStrip, nt + 1, max, CONTEXT)?;
        for j in 0..=nt {
            let (position, normal) = ring_point(cos1[i], sin1[i], sin2[j], cos2[j], radius);
            meridian.push(position, normal);
        }
        primitives.push(meridian);
    }

    Ok(primitives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use approx::assert_relative_eq;

    fn defaults() -> GlobalConfig {
        GlobalConfig::default()
    }

    fn total_vertices(primitives: &[Primitive]) -> usize {
        primitives.iter().map(Primitive::vertex_count).sum()
    }

    #[test]
    fn test_solid_vertex_count() {
        for (slices, stacks) in [(8, 4), (16, 16), (3, 2), (1, 1), (5, 3)] {
            let primitives = solid_sphere_primitives(&defaults(), 1.0, slices, stacks).unwrap();
            assert_eq!(
                total_vertices(&primitives),
                solid_sphere_vertex_count(slices, stacks),
                "slices {slices}, stacks {stacks}"
            );
        }
        assert_eq!(solid_sphere_vertex_count(8, 4), 2 * 10 + 2 * 18);
    }

    #[test]
    fn test_vertices_lie_on_sphere() {
        let radius = 2.5;
        let solid = solid_sphere_primitives(&defaults(), radius, 12, 7).unwrap();
        let wire = wire_sphere_primitives(&defaults(), radius, 12, 7).unwrap();
        for primitive in solid.iter().chain(&wire) {
            for i in 0..primitive.vertex_count() {
                let p = Vec3::from(primitive.vertex(i));
                assert_relative_eq!(p.length(), radius, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_normals_are_unit_and_radial() {
        let radius = 3.0;
        for primitive in solid_sphere_primitives(&defaults(), radius, 10, 6).unwrap() {
            for i in 0..primitive.vertex_count() {
                let p = Vec3::from(primitive.vertex(i));
                let n = Vec3::from(primitive.normal(i));
                assert_relative_eq!(n.length(), 1.0, epsilon = 1e-5);
                assert!((p / radius - n).length() < 1e-5);
            }
        }
    }

    #[test]
    fn test_batch_layout() {
        let primitives = solid_sphere_primitives(&defaults(), 1.0, 6, 5).unwrap();
        let topologies: Vec<Topology> = primitives.iter().map(|p| p.topology).collect();
        assert_eq!(topologies.first(), Some(&Topology::TriangleFan));
        assert_eq!(topologies.last(), Some(&Topology::TriangleFan));
        assert_eq!(topologies.len(), 5);
        assert!(topologies[1..4].iter().all(|&t| t == Topology::QuadStrip));

        assert_eq!(primitives[0].vertex(0), [0.0, 0.0, 1.0]);
        assert_eq!(primitives[4].vertex(0), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_single_stack_has_only_caps() {
        let primitives = solid_sphere_primitives(&defaults(), 1.0, 4, 1).unwrap();
        assert_eq!(primitives.len(), 2);
    }

    #[test]
    fn test_wire_counts() {
        let primitives = wire_sphere_primitives(&defaults(), 1.0, 8, 4).unwrap();
        let loops = primitives
            .iter()
            .filter(|p| p.topology == Topology::LineLoop)
            .count();
        let strips: Vec<&Primitive> = primitives
            .iter()
            .filter(|p| p.topology == Topology::LineStrip)
            .collect();
        assert_eq!(loops, 3);
        assert_eq!(strips.len(), 8);
        assert!(strips.iter().all(|p| p.vertex_count() == 5));
    }

    #[test]
    fn test_non_positive_resolution_is_clamped() {
        let clamped = solid_sphere_primitives(&defaults(), 1.0, 0, -3).unwrap();
        let minimal = solid_sphere_primitives(&defaults(), 1.0, 1, 1).unwrap();
        assert_eq!(clamped, minimal);
    }

    #[test]
    fn test_wire_latitude_normals_are_unit() {
        for primitive in wire_sphere_primitives(&defaults(), 2.0, 9, 5).unwrap() {
            for i in 0..primitive.vertex_count() {
                let n = Vec3::from(primitive.normal(i));
                assert_relative_eq!(n.length(), 1.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_configured_limit_applies_to_batches() {
        // A band of 64 slices holds 2 * 65 vertices, 390 floats
        let config = GlobalConfig::new(1, 389).unwrap();
        let err = solid_sphere_primitives(&config, 1.0, 64, 64).unwrap_err();
        assert_eq!(err, ShapeError::limit_exceeded("solid_sphere", 390, 389));

        // Latitude loops of 65 vertices fit; meridians of 65 do too
        assert!(wire_sphere_primitives(&config, 1.0, 64, 64).is_ok());
        let config = GlobalConfig::new(1, 194).unwrap();
        assert!(wire_sphere_primitives(&config, 1.0, 64, 64).is_err());
    }
}
