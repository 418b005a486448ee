//! # Cylinder
//!
//! Capped cylinder standing on the XY plane, axis along Z, from `z = 0` to
//! `z = height`. The topmost stack is pinned to `height` so accumulated
//! step error never leaves a gap under the top cap.

use super::resolution;
use crate::circle::CircleTable;
use crate::draw::{Primitive, Topology};
use crate::error::ShapeResult;
use config::constants::GlobalConfig;
use glam::Vec3;

/// Builds the filled cylinder: bottom cap, top cap, then one band per stack.
///
/// # Arguments
///
/// * `config` - Buffer limits
/// * `radius` - Cylinder radius
/// * `height` - Extent along +Z
/// * `slices` - Subdivisions around the Z axis
/// * `stacks` - Subdivisions along the Z axis
///
/// # Example
///
/// ```rust
/// use config::constants::GlobalConfig;
/// use solid_shapes::quadric::solid_cylinder_primitives;
///
/// let config = GlobalConfig::default();
/// let batches = solid_cylinder_primitives(&config, 1.0, 2.0, 12, 3).unwrap();
/// assert_eq!(batches.len(), 2 + 3);
/// ```
pub fn solid_cylinder_primitives(
    config: &GlobalConfig,
    radius: f32,
    height: f32,
    slices: i32,
    stacks: i32,
) -> ShapeResult<Vec<Primitive>> {
    const CONTEXT: &str = "solid_cylinder";

    let slices = resolution(CONTEXT, "slices", slices);
    let stacks = resolution(CONTEXT, "stacks", stacks);
    let ns = slices as usize;
    let max = config.max_buffer_floats;
    let z_step = height / stacks as f32;

    let table = CircleTable::new_with(config, -slices, false)?;
    let (sin, cos) = (table.sines(), table.cosines());

    let mut primitives = Vec::with_capacity(stacks as usize + 2);

    let rim = |j: usize, z: f32| Vec3::new(cos[j] * radius, sin[j] * radius, z);

    let mut bottom = Primitive::with_capacity(Topology::TriangleFan, ns + 2, max, CONTEXT)?;
    bottom.push(Vec3::ZERO, Vec3::NEG_Z);
    for j in 0..=ns {
        bottom.push(rim(j, 0.0), Vec3::NEG_Z);
    }
    primitives.push(bottom);

    let mut top = Primitive::with_capacity(Topology::TriangleFan, ns + 2, max, CONTEXT)?;
    top.push(Vec3::Z * height, Vec3::Z);
    for j in (0..=ns).rev() {
        top.push(rim(j, height), Vec3::Z);
    }
    primitives.push(top);

    let (mut z0, mut z1) = (0.0, z_step);
    for i in 1..=stacks {
        if i == stacks {
            z1 = height;
        }
        let mut band = Primitive::with_capacity(Topology::QuadStrip, 2 * (ns + 1), max, CONTEXT)?;
        for j in 0..=ns {
            let normal = Vec3::new(cos[j], sin[j], 0.0);
            band.push(rim(j, z0), normal);
            band.push(rim(j, z1), normal);
        }
        primitives.push(band);

        z0 = z1;
        z1 += z_step;
    }

    Ok(primitives)
}

/// Builds the cylinder outline: `stacks + 1` rings and one vertical segment
/// per slice.
pub fn wire_cylinder_primitives(
    config: &GlobalConfig,
    radius: f32,
    height: f32,
    slices: i32,
    stacks: i32,
) -> ShapeResult<Vec<Primitive>> {
    const CONTEXT: &str = "wire_cylinder";

    let slices = resolution(CONTEXT, "slices", slices);
    let stacks = resolution(CONTEXT, "stacks", stacks);
    let ns = slices as usize;
    let max = config.max_buffer_floats;
    let z_step = height / stacks as f32;

    let table = CircleTable::new_with(config, -slices, false)?;
    let (sin, cos) = (table.sines(), table.cosines());

    let mut primitives = Vec::with_capacity(stacks as usize + 2);

    let rim = |j: usize, z: f32| Vec3::new(cos[j] * radius, sin[j] * radius, z);
    let outward = |j: usize| Vec3::new(cos[j], sin[j], 0.0);

    let mut z = 0.0;
    for i in 0..=stacks {
        if i == stacks {
            z = height;
        }
        let mut ring = Primitive::with_capacity(Topology::LineLoop, ns, max, CONTEXT)?;
        for j in 0..ns {
            ring.push(rim(j, z), outward(j));
        }
        primitives.push(ring);
        z += z_step;
    }

    let mut rails = Primitive::with_capacity(Topology::Lines, 2 * ns, max, CONTEXT)?;
    for j in 0..ns {
        rails.push(rim(j, 0.0), outward(j));
        rails.push(rim(j, height), outward(j));
    }
    primitives.push(rails);

    Ok(primitives)
}
