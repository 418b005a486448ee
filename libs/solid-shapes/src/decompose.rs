//! # Face Decomposition
//!
//! Fixed tables that split a quad or pentagon into triangles. Entries are
//! local vertex positions within one face, and every output triangle keeps
//! the counter-clockwise winding of its input face.

/// Quad: 4 input vertices, 2 triangles.
pub const QUAD_DECOMPOSITION: [u8; 6] = [0, 1, 2, 0, 2, 3];

/// Pentagon: 5 input vertices, 3 triangles.
pub const PENTAGON_DECOMPOSITION: [u8; 9] = [0, 1, 2, 0, 2, 4, 4, 2, 3];

/// Returns the decomposition table for faces with `edges_per_face` vertices.
///
/// Triangles need no decomposition and return `None`, as does any edge
/// count with no table.
///
/// # Example
///
/// ```rust
/// use solid_shapes::decompose::decomposition_table;
///
/// assert_eq!(decomposition_table(4).map(<[u8]>::len), Some(6));
/// assert!(decomposition_table(3).is_none());
/// ```
pub fn decomposition_table(edges_per_face: usize) -> Option<&'static [u8]> {
    match edges_per_face {
        4 => Some(&QUAD_DECOMPOSITION),
        5 => Some(&PENTAGON_DECOMPOSITION),
        _ => None,
    }
}

/// Number of triangle-list indices one face contributes, `3 * (edges - 2)`.
#[inline]
pub fn indices_per_face(edges_per_face: usize) -> usize {
    3 * edges_per_face.saturating_sub(2)
}
