//! # Cone
//!
//! Cone standing on the XY plane with its base centred on the origin and its
//! apex at `(0, 0, height)`.
//!
//! Every lateral vertex carries the slant normal
//! `(cos * cos_n, sin * cos_n, sin_n)`, where `cos_n = h / L`, `sin_n = b / L`
//! and `L` is the slant length. The apex has no single normal; each top
//! triangle gives it the normal of the triangle's first ring vertex.

use super::resolution;
use crate::circle::CircleTable;
use crate::draw::{Primitive, Topology};
use crate::error::ShapeResult;
use config::constants::GlobalConfig;
use glam::Vec3;

/// Slant normal components `(cos_n, sin_n)` for a cone.
///
/// A cone with zero base and zero height has no slant; its normal points
/// straight up.
fn slant(base: f32, height: f32) -> (f32, f32) {
    let length = (height * height + base * base).sqrt();
    if length > 0.0 {
        (height / length, base / length)
    } else {
        (0.0, 1.0)
    }
}

/// Builds the filled cone: base disc, `stacks - 1` lateral bands and a ring
/// of triangles meeting at the apex.
///
/// # Arguments
///
/// * `config` - Buffer limits
/// * `base` - Radius of the base
/// * `height` - Distance from base to apex
/// * `slices` - Subdivisions around the Z axis
/// * `stacks` - Subdivisions along the Z axis
pub fn solid_cone_primitives(
    config: &GlobalConfig,
    base: f32,
    height: f32,
    slices: i32,
    stacks: i32,
) -> ShapeResult<Vec<Primitive>> {
    const CONTEXT: &str = "solid_cone";

    let slices = resolution(CONTEXT, "slices", slices);
    let stacks = resolution(CONTEXT, "stacks", stacks);
    let ns = slices as usize;
    let max = config.max_buffer_floats;

    let z_step = height / stacks as f32;
    let r_step = base / stacks as f32;
    let (cos_n, sin_n) = slant(base, height);

    let table = CircleTable::new_with(config, -slices, false)?;
    let (sin, cos) = (table.sines(), table.cosines());
    let lateral = |j: usize| Vec3::new(cos[j] * cos_n, sin[j] * cos_n, sin_n);

    let mut primitives = Vec::with_capacity(stacks as usize + 1);

    let mut disc = Primitive::with_capacity(Topology::TriangleFan, ns + 2, max, CONTEXT)?;
    disc.push(Vec3::ZERO, Vec3::NEG_Z);
    for j in 0..=ns {
        disc.push(Vec3::new(cos[j], sin[j], 0.0) * base, Vec3::NEG_Z);
    }
    primitives.push(disc);

    let (mut z0, mut z1) = (0.0, z_step);
    let (mut r0, mut r1) = (base, base - r_step);

    for _ in 0..stacks - 1 {
        let mut band = Primitive::with_capacity(Topology::QuadStrip, 2 * (ns + 1), max, CONTEXT)?;
        for j in 0..=ns {
            band.push(Vec3::new(cos[j] * r0, sin[j] * r0, z0), lateral(j));
            band.push(Vec3::new(cos[j] * r1, sin[j] * r1, z1), lateral(j));
        }
        primitives.push(band);

        z0 = z1;
        z1 += z_step;
        r0 = r1;
        r1 -= r_step;
    }

    let apex = Vec3::Z * height;
    let mut tip = Primitive::with_capacity(Topology::Triangles, 3 * ns, max, CONTEXT)?;
    for j in 0..ns {
        tip.push(Vec3::new(cos[j] * r0, sin[j] * r0, z0), lateral(j));
        tip.push(apex, lateral(j));
        tip.push(Vec3::new(cos[j + 1] * r0, sin[j + 1] * r0, z0), lateral(j + 1));
    }
    primitives.push(tip);

    Ok(primitives)
}

/// Builds the cone outline: a loop per stack and a segment from every base
/// sample to the apex.
pub fn wire_cone_primitives(
    config: &GlobalConfig,
    base: f32,
    height: f32,
    slices: i32,
    stacks: i32,
) -> ShapeResult<Vec<Primitive>> {
    const CONTEXT: &str = "wire_cone";

    let slices = resolution(CONTEXT, "slices", slices);
    let stacks = resolution(CONTEXT, "stacks", stacks);
    let ns = slices as usize;
    let max = config.max_buffer_floats;

    let z_step = height / stacks as f32;
    let r_step = base / stacks as f32;
    let (cos_n, sin_n) = slant(base, height);

    let table = CircleTable::new_with(config, -slices, false)?;
    let (sin, cos) = (table.sines(), table.cosines());
    let lateral = |j: usize| Vec3::new(cos[j] * cos_n, sin[j] * cos_n, sin_n);

    let mut primitives = Vec::with_capacity(stacks as usize + 1);

    let (mut z, mut r) = (0.0, base);
    for _ in 0..stacks {
        let mut ring = Primitive::with_capacity(Topology::LineLoop, ns, max, CONTEXT)?;
        for j in 0..ns {
            ring.push(Vec3::new(cos[j] * r, sin[j] * r, z), lateral(j));
        }
        primitives.push(ring);
        z += z_step;
        r -= r_step;
    }

    let apex = Vec3::Z * height;
    let mut spokes = Primitive::with_capacity(Topology::Lines, 2 * ns, max, CONTEXT)?;
    for j in 0..ns {
        spokes.push(Vec3::new(cos[j], sin[j], 0.0) * base, lateral(j));
        spokes.push(apex, lateral(j));
    }
    primitives.push(spokes);

    Ok(primitives)
}
