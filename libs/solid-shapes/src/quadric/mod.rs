//! # Quadric Tessellators
//!
//! Curved shapes built on the fly from [`CircleTable`](crate::circle::CircleTable)
//! samples. Nothing here is cached: every call produces a fresh list of
//! [`Primitive`](crate::draw::Primitive) batches, one per logical strip,
//! fan or outline.
//!
//! ## Resolution
//!
//! `slices`, `stacks`, `sides` and `rings` below
//! [`MIN_RESOLUTION`](config::constants::MIN_RESOLUTION) are raised to it
//! with a warning.
//!
//! ## Limits
//!
//! Every generator takes the session's
//! [`GlobalConfig`](config::constants::GlobalConfig); no batch array or
//! sample table may hold more than `max_buffer_floats` floats.

pub mod cone;
pub mod cylinder;
pub mod sphere;
pub mod torus;

pub use cone::{solid_cone_primitives, wire_cone_primitives};
pub use cylinder::{solid_cylinder_primitives, wire_cylinder_primitives};
pub use sphere::{solid_sphere_primitives, wire_sphere_primitives};
pub use torus::{solid_torus_primitives, wire_torus_primitives};

use config::constants::clamp_resolution;
use glam::Vec3;
use log::warn;

/// Clamps a resolution argument, logging when it changes.
pub(crate) fn resolution(context: &'static str, name: &'static str, value: i32) -> i32 {
    let clamped = clamp_resolution(value);
    if clamped != value {
        warn!("{context}: {name} = {value} raised to {clamped}");
    }
    clamped
}

/// Position and normal of a point on a circle of radius `rho` at height `z`,
/// with the position scaled by `radius`.
#[inline]
pub(crate) fn ring_point(cos: f32, sin: f32, rho: f32, z: f32, radius: f32) -> (Vec3, Vec3) {
    let normal = Vec3::new(cos * rho, sin * rho, z);
    (normal * radius, normal)
}
