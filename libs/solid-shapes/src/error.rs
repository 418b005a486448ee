//! # Shape Errors
//!
//! Error types for shape generation and drawing.
//!
//! ## Error Policy
//!
//! - Every failure is returned to the caller, nothing aborts the process
//! - No partial geometry is submitted when an operation fails
//! - Errors name the operation that raised them

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating or drawing a shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A shape operation was called before the rendering context was set up.
    #[error("{entry_point} called before the rendering context was initialised")]
    NotInitialised {
        /// Public operation that was called, e.g. `solid_cube`
        entry_point: &'static str,
    },

    /// A working buffer could not be allocated.
    #[error("Failed to allocate {requested} elements in {context}")]
    AllocationFailed {
        /// Generator that requested the buffer
        context: &'static str,
        /// Number of elements requested
        requested: usize,
    },

    /// A request exceeded a configured safety limit.
    #[error("{context} requested {requested} (max: {max})")]
    LimitExceeded {
        /// Generator that hit the limit
        context: &'static str,
        /// Requested amount
        requested: usize,
        /// Configured maximum
        max: usize,
    },

    /// Solid-mode faces with more than three vertices came without the
    /// triangle index array that splits them.
    #[error("solid faces with {edges_per_face} edges need a triangle index array")]
    MissingIndices {
        /// Vertices per face in the rejected buffer
        edges_per_face: usize,
    },
}

impl ShapeError {
    /// Creates a not-initialised error for the named entry point.
    pub fn not_initialised(entry_point: &'static str) -> Self {
        Self::NotInitialised { entry_point }
    }

    /// Creates an allocation failure error.
    pub fn allocation_failed(context: &'static str, requested: usize) -> Self {
        Self::AllocationFailed { context, requested }
    }

    /// Creates a limit exceeded error.
    pub fn limit_exceeded(context: &'static str, requested: usize, max: usize) -> Self {
        Self::LimitExceeded {
            context,
            requested,
            max,
        }
    }

    /// Creates a missing index array error.
    pub fn missing_indices(edges_per_face: usize) -> Self {
        Self::MissingIndices { edges_per_face }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for shape operations.
pub type ShapeResult<T> = Result<T, ShapeError>;
