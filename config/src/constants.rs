//! # Configuration Constants
//!
//! Centralized constants for the solid-shapes geometry core. Comparison
//! tolerances, tessellation floors and buffer limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Lower bound for slices, stacks, sides and rings
//! - **Limits**: Maximum values for safety bounds

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for single-precision comparisons.
///
/// All generated positions and normals are `f32`, so the tolerance is sized
/// for accumulated single-precision rounding rather than `f64` noise.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f32, b: f32) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-7));
/// ```
pub const EPSILON: f32 = 1e-5;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum value for any tessellation resolution argument.
///
/// Slices, stacks, sides and rings below this value are clamped up to it
/// before any circle table is built.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RESOLUTION;
///
/// let requested = 0;
/// assert_eq!(requested.max(MIN_RESOLUTION), 1);
/// ```
pub const MIN_RESOLUTION: i32 = 1;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum recursion depth for the Sierpinski sponge.
///
/// The sponge holds `12 * 4^levels` vertices, so every extra level
/// quadruples the buffer. Ten levels is already ~12.6 million vertices.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SPONGE_LEVELS;
///
/// let levels = 4;
/// assert!(levels <= MAX_SPONGE_LEVELS);
/// ```
pub const MAX_SPONGE_LEVELS: i32 = 10;

/// Maximum number of `f32` elements in any single working buffer.
///
/// Safety limit to keep a wild resolution argument from requesting an
/// allocation the host cannot satisfy.
pub const MAX_BUFFER_FLOATS: usize = 1 << 30;

// =============================================================================
// GLOBAL SNAPSHOT
// =============================================================================

/// Immutable snapshot of the configuration values a shape session uses.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.max_sponge_levels > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Deepest sponge a session will generate.
    pub max_sponge_levels: i32,
    /// Largest working buffer, in `f32` elements.
    pub max_buffer_floats: usize,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting values the generators cannot honour.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(6, 1 << 20).expect("valid config");
    /// assert_eq!(cfg.max_sponge_levels, 6);
    /// ```
    pub fn new(max_sponge_levels: i32, max_buffer_floats: usize) -> Result<Self, ConfigError> {
        if !(0..=MAX_SPONGE_LEVELS).contains(&max_sponge_levels) {
            return Err(ConfigError::InvalidSpongeLevels(max_sponge_levels));
        }
        if max_buffer_floats == 0 {
            return Err(ConfigError::InvalidBufferLimit(max_buffer_floats));
        }
        Ok(Self {
            max_sponge_levels,
            max_buffer_floats,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_sponge_levels: MAX_SPONGE_LEVELS,
            max_buffer_floats: MAX_BUFFER_FLOATS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the sponge depth limit is negative or above the hard cap.
    InvalidSpongeLevels(i32),
    /// Raised when the buffer limit is zero.
    InvalidBufferLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSpongeLevels(value) => {
                write!(
                    f,
                    "max_sponge_levels must be in 0..={MAX_SPONGE_LEVELS}: {value}"
                )
            }
            ConfigError::InvalidBufferLimit(value) => {
                write!(f, "max_buffer_floats must be non-zero: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a tessellation resolution argument to [`MIN_RESOLUTION`].
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_resolution;
///
/// assert_eq!(clamp_resolution(16), 16);
/// assert_eq!(clamp_resolution(0), 1);
/// ```
#[inline]
pub fn clamp_resolution(value: i32) -> i32 {
    value.max(MIN_RESOLUTION)
}

/// Checks if two f32 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-7));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}
