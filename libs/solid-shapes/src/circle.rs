//! # Circle Table
//!
//! Precomputed sine/cosine samples around a full or half circle, shared by
//! every quadric tessellator so that each angle is evaluated once per shape.

use crate::buffer;
use crate::error::ShapeResult;
use config::constants::GlobalConfig;
use std::f32::consts::PI;

/// Sine and cosine samples at equally spaced angles.
///
/// A table built for `n` samples holds `|n| + 1` entries. Entry 0 is always
/// `(sin 0, cos 1)`. The last entry closes the loop (full circle) or lands
/// exactly on the antipode `(0, -1)` (half circle). A negative `n` walks the
/// circle clockwise, which flips the sign of every sine.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleTable {
    sin: Vec<f32>,
    cos: Vec<f32>,
}

impl CircleTable {
    /// Builds a table of `|n|` steps around a full or half circle.
    ///
    /// # Arguments
    ///
    /// * `n` - Number of steps; the sign selects the direction
    /// * `half` - Sample `[0, PI]` instead of `[0, 2 PI]`
    ///
    /// # Example
    ///
    /// ```rust
    /// use solid_shapes::circle::CircleTable;
    ///
    /// let table = CircleTable::new(4, false).unwrap();
    /// assert_eq!(table.len(), 5);
    /// assert_eq!(table.cos(4), table.cos(0));
    /// ```
    pub fn new(n: i32, half: bool) -> ShapeResult<Self> {
        Self::new_with(&GlobalConfig::default(), n, half)
    }

    /// Builds a table, holding each of its two arrays of `|n| + 1` floats to
    /// `config.max_buffer_floats`.
    pub fn new_with(config: &GlobalConfig, n: i32, half: bool) -> ShapeResult<Self> {
        const CONTEXT: &str = "CircleTable::new";

        let size = n.unsigned_abs() as usize;
        let span = if half { 1.0 } else { 2.0 };
        let angle = span * PI / (if n == 0 { 1 } else { n }) as f32;

        let max = config.max_buffer_floats;
        let mut sin = buffer::with_capacity(size + 1, max, CONTEXT)?;
        let mut cos = buffer::with_capacity(size + 1, max, CONTEXT)?;

        sin.push(0.0);
        cos.push(1.0);

        // Direct evaluation per sample, no incremental rotation
        for i in 1..size {
            let theta = angle * i as f32;
            sin.push(theta.sin());
            cos.push(theta.cos());
        }

        // Closing entry: exact antipode, or a copy of entry 0
        if size > 0 {
            let (last_sin, last_cos) = if half { (0.0, -1.0) } else { (sin[0], cos[0]) };
            sin.push(last_sin);
            cos.push(last_cos);
        }

        Ok(Self { sin, cos })
    }

    /// Number of entries, `|n| + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.sin.len()
    }

    /// Always false: a table holds at least its closing entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sin.is_empty()
    }

    /// Sine of sample `i`.
    #[inline]
    pub fn sin(&self, i: usize) -> f32 {
        self.sin[i]
    }

    /// Cosine of sample `i`.
    #[inline]
    pub fn cos(&self, i: usize) -> f32 {
        self.cos[i]
    }

    /// All sines.
    #[inline]
    pub fn sines(&self) -> &[f32] {
        &self.sin
    }

    /// All cosines.
    #[inline]
    pub fn cosines(&self) -> &[f32] {
        &self.cos
    }
}
