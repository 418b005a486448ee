//! # Working Buffers
//!
//! Fallible allocation for the flat `f32`/`u32` arrays every generator fills.
//! Requests are checked against a float limit, normally
//! [`GlobalConfig::max_buffer_floats`](config::constants::GlobalConfig), and
//! reserved with `try_reserve_exact`, so an oversized request becomes a
//! [`ShapeError`] instead of an abort.

use crate::error::{ShapeError, ShapeResult};

/// Multiplies buffer dimensions, failing on overflow.
///
/// # Arguments
///
/// * `context` - Name of the generator, reported in the error
/// * `factors` - Dimensions to multiply (e.g. faces, vertices per face, 3)
/// * `max` - Limit reported when the product overflows
pub(crate) fn element_count(
    context: &'static str,
    factors: &[usize],
    max: usize,
) -> ShapeResult<usize> {
    factors.iter().try_fold(1usize, |acc, &factor| {
        acc.checked_mul(factor)
            .ok_or_else(|| ShapeError::limit_exceeded(context, usize::MAX, max))
    })
}

/// Reserves an empty vector with room for exactly `len` elements.
///
/// Fails with `LimitExceeded` when `len` is above `max`.
pub(crate) fn with_capacity<T>(
    len: usize,
    max: usize,
    context: &'static str,
) -> ShapeResult<Vec<T>> {
    if len > max {
        return Err(ShapeError::limit_exceeded(context, len, max));
    }
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| ShapeError::allocation_failed(context, len))?;
    Ok(buffer)
}

/// Allocates a zero-filled vector of `len` elements.
pub(crate) fn zeroed<T: Copy + Default>(
    len: usize,
    max: usize,
    context: &'static str,
) -> ShapeResult<Vec<T>> {
    let mut buffer = with_capacity(len, max, context)?;
    buffer.resize(len, T::default());
    Ok(buffer)
}
