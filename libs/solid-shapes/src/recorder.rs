//! # Recording Sink
//!
//! A [`DrawSink`] that keeps every submission as a [`DrawCall`], with the
//! referenced vertices resolved in draw order. Useful for inspecting what a
//! shape operation sends to the backend without a rendering context.

use crate::draw::DrawSink;

/// One recorded submission.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// A triangle list.
    Triangles {
        /// Whether an index array was supplied
        indexed: bool,
        /// Count passed by the caller
        count: usize,
        /// Positions in draw order
        positions: Vec<[f32; 3]>,
        /// Normals in draw order
        normals: Vec<[f32; 3]>,
    },
    /// One closed outline.
    LineLoop {
        /// First vertex of the loop
        first: usize,
        /// Vertices in the loop
        count: usize,
        /// Positions in draw order
        positions: Vec<[f32; 3]>,
        /// Normals in draw order
        normals: Vec<[f32; 3]>,
    },
    /// Independent segments.
    Lines {
        /// Segment endpoints, two per segment
        positions: Vec<[f32; 3]>,
        /// Endpoint normals
        normals: Vec<[f32; 3]>,
    },
}

impl DrawCall {
    /// Positions referenced by the call, in draw order.
    pub fn positions(&self) -> &[[f32; 3]] {
        match self {
            DrawCall::Triangles { positions, .. }
            | DrawCall::LineLoop { positions, .. }
            | DrawCall::Lines { positions, .. } => positions,
        }
    }

    /// Normals referenced by the call, in draw order.
    pub fn normals(&self) -> &[[f32; 3]] {
        match self {
            DrawCall::Triangles { normals, .. }
            | DrawCall::LineLoop { normals, .. }
            | DrawCall::Lines { normals, .. } => normals,
        }
    }
}

/// Sink that records instead of drawing.
///
/// # Example
///
/// ```rust
/// use solid_shapes::draw::DrawSink;
/// use solid_shapes::recorder::Recorder;
///
/// let mut recorder = Recorder::new();
/// recorder.submit_line_loop(&[0.0; 9], &[0.0; 9], 0, 3);
/// assert_eq!(recorder.calls().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    /// Simulated context state
    uninitialised: bool,
    /// Submissions so far
    calls: Vec<DrawCall>,
}

impl Recorder {
    /// Creates a recorder that reports an initialised context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that reports no rendering context.
    pub fn uninitialised() -> Self {
        Self {
            uninitialised: true,
            calls: Vec::new(),
        }
    }

    /// Returns the recorded calls.
    #[inline]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Returns true if nothing was submitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Drops all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of recorded line loops.
    pub fn line_loop_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::LineLoop { .. }))
            .count()
    }
}

/// Reads triple `i` of a flat array, `None` past the end.
fn triple(buffer: &[f32], i: usize) -> Option<[f32; 3]> {
    buffer.get(i * 3..i * 3 + 3).map(|v| [v[0], v[1], v[2]])
}

fn gather(
    vertices: &[f32],
    normals: &[f32],
    order: impl Iterator<Item = usize>,
) -> (Vec<[f32; 3]>, Vec<[f32; 3]>) {
    order
        .filter_map(|i| Some((triple(vertices, i)?, triple(normals, i)?)))
        .unzip()
}

impl DrawSink for Recorder {
    fn is_initialised(&self) -> bool {
        !self.uninitialised
    }

    fn submit_triangles(
        &mut self,
        vertices: &[f32],
        normals: &[f32],
        indices: Option<&[u32]>,
        count: usize,
    ) {
        let (positions, vertex_normals) = match indices {
            Some(indices) => gather(
                vertices,
                normals,
                indices.iter().take(count).map(|&i| i as usize),
            ),
            None => gather(vertices, normals, 0..count),
        };
        self.calls.push(DrawCall::Triangles {
            indexed: indices.is_some(),
            count,
            positions,
            normals: vertex_normals,
        });
    }

    fn submit_line_loop(&mut self, vertices: &[f32], normals: &[f32], first: usize, count: usize) {
        let (positions, vertex_normals) = gather(vertices, normals, first..first + count);
        self.calls.push(DrawCall::LineLoop {
            first,
            count,
            positions,
            normals: vertex_normals,
        });
    }

    fn submit_lines(&mut self, vertices: &[f32], normals: &[f32], indices: &[u32]) {
        let (positions, vertex_normals) =
            gather(vertices, normals, indices.iter().map(|&i| i as usize));
        self.calls.push(DrawCall::Lines {
            positions,
            normals: vertex_normals,
        });
    }
}
