//! # Config Crate
//!
//! Centralized configuration constants for the solid-shapes geometry core.
//! Tolerances, tessellation floors and safety limits live here so that the
//! generators never scatter literals of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_resolution, EPSILON, MIN_RESOLUTION};
//!
//! // Use EPSILON for single-precision comparisons
//! let value: f32 = 1e-7;
//! assert!(value.abs() < EPSILON);
//!
//! // Resolution arguments never drop below the floor
//! assert_eq!(clamp_resolution(-3), MIN_RESOLUTION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Single Precision**: Tolerances are tuned for `f32` vertex data
//! - **Bounded Work**: Limits cap the size of any generated buffer

pub mod constants;
