//! # Draw Dispatch
//!
//! The boundary between generated geometry and the rendering backend.
//!
//! ## Architecture
//!
//! ```text
//! ExpandedGeometry / SpongeBuffer --draw_faces--> DrawSink
//! Quadric tessellators --Vec<Primitive>--submit--> DrawSink
//! ```
//!
//! Wire mode walks the face structure with one line loop per face. Solid
//! mode prefers the flattest form: a plain triangle list for triangular
//! faces, the expander's index array otherwise.

use crate::buffer;
use crate::error::{ShapeError, ShapeResult};
use config::constants::MAX_BUFFER_FLOATS;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Backend that consumes generated buffers.
///
/// All arrays are flat `f32` triples with one normal per vertex.
pub trait DrawSink {
    /// Whether the rendering context behind this sink has been set up.
    ///
    /// Every shape operation checks this before generating anything.
    fn is_initialised(&self) -> bool;

    /// Submits a triangle list.
    ///
    /// With `indices`, `count` indices are read from it; without, `count`
    /// consecutive vertices are drawn.
    fn submit_triangles(
        &mut self,
        vertices: &[f32],
        normals: &[f32],
        indices: Option<&[u32]>,
        count: usize,
    );

    /// Submits one closed outline over `count` vertices starting at `first`.
    fn submit_line_loop(&mut self, vertices: &[f32], normals: &[f32], first: usize, count: usize);

    /// Submits independent line segments, two indices per segment.
    fn submit_lines(&mut self, vertices: &[f32], normals: &[f32], indices: &[u32]);
}

/// Outline or filled rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// One line loop per face
    Wire,
    /// Filled triangles
    Solid,
}

impl DrawMode {
    /// Maps the boolean wire flag onto a mode.
    pub fn from_wire(wire: bool) -> Self {
        if wire {
            DrawMode::Wire
        } else {
            DrawMode::Solid
        }
    }
}

/// Dispatches face-structured geometry to a sink.
///
/// # Arguments
///
/// * `sink` - Destination backend
/// * `vertices`, `normals` - Flat per-face arrays, `edges_per_face` slots per face
/// * `indices` - Triangle list for non-triangular faces
/// * `face_count` - Number of faces in the arrays
/// * `edges_per_face` - Vertices per face
/// * `mode` - Wire or solid
///
/// # Errors
///
/// `MissingIndices` in solid mode when faces are not triangles and no index
/// array was given. Nothing is submitted in that case.
pub fn draw_faces<S: DrawSink + ?Sized>(
    sink: &mut S,
    vertices: &[f32],
    normals: &[f32],
    indices: Option<&[u32]>,
    face_count: usize,
    edges_per_face: usize,
    mode: DrawMode,
) -> ShapeResult<()> {
    match mode {
        DrawMode::Wire => {
            for face in 0..face_count {
                sink.submit_line_loop(vertices, normals, face * edges_per_face, edges_per_face);
            }
        }
        DrawMode::Solid if edges_per_face == 3 => {
            sink.submit_triangles(vertices, normals, None, face_count * 3);
        }
        DrawMode::Solid => {
            let indices = indices.ok_or(ShapeError::missing_indices(edges_per_face))?;
            sink.submit_triangles(vertices, normals, Some(indices), indices.len());
        }
    }
    Ok(())
}

// =============================================================================
// PRIMITIVE BATCHES
// =============================================================================

/// Vertex ordering of a [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// First vertex is the hub, the rest a ring around it
    TriangleFan,
    /// Pairs of vertices forming consecutive quads
    QuadStrip,
    /// Independent triangles
    Triangles,
    /// Independent quads
    Quads,
    /// Closed outline
    LineLoop,
    /// Open polyline
    LineStrip,
    /// Independent segments
    Lines,
}

/// One logical batch of quadric geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// How the vertices connect
    pub topology: Topology,
    /// Vertex positions, 3 floats per vertex
    pub vertices: Vec<f32>,
    /// Vertex normals, 3 floats per vertex
    pub normals: Vec<f32>,
}

impl Primitive {
    /// Creates an empty batch with room for `vertex_count` vertices.
    ///
    /// Fails with `LimitExceeded` when the `3 * vertex_count` floats of
    /// either array would pass `max_floats`.
    pub(crate) fn with_capacity(
        topology: Topology,
        vertex_count: usize,
        max_floats: usize,
        context: &'static str,
    ) -> ShapeResult<Self> {
        let floats = buffer::element_count(context, &[vertex_count, 3], max_floats)?;
        Ok(Self {
            topology,
            vertices: buffer::with_capacity(floats, max_floats, context)?,
            normals: buffer::with_capacity(floats, max_floats, context)?,
        })
    }

    /// Appends one vertex with its normal.
    #[inline]
    pub(crate) fn push(&mut self, position: Vec3, normal: Vec3) {
        self.vertices.extend_from_slice(&position.to_array());
        self.normals.extend_from_slice(&normal.to_array());
    }

    /// Number of vertices in the batch.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns vertex `i` as a triple.
    #[inline]
    pub fn vertex(&self, i: usize) -> [f32; 3] {
        [
            self.vertices[i * 3],
            self.vertices[i * 3 + 1],
            self.vertices[i * 3 + 2],
        ]
    }

    /// Returns normal `i` as a triple.
    #[inline]
    pub fn normal(&self, i: usize) -> [f32; 3] {
        [
            self.normals[i * 3],
            self.normals[i * 3 + 1],
            self.normals[i * 3 + 2],
        ]
    }

    /// Sends the batch to a sink.
    ///
    /// Fans, strips and quads are converted to indexed triangle lists; line
    /// strips to indexed segments.
    pub fn submit<S: DrawSink + ?Sized>(&self, sink: &mut S) -> ShapeResult<()> {
        let indices = self.submission_indices()?;
        self.dispatch(sink, &indices);
        Ok(())
    }

    /// Index array the batch is submitted with, empty for `Triangles` and
    /// `LineLoop`.
    fn submission_indices(&self) -> ShapeResult<Vec<u32>> {
        let n = self.vertex_count();
        match self.topology {
            Topology::Triangles | Topology::LineLoop => Ok(Vec::new()),
            Topology::TriangleFan | Topology::QuadStrip | Topology::Quads => {
                triangle_indices(self.topology, n)
            }
            Topology::LineStrip => line_strip_indices(n),
            Topology::Lines => line_list_indices(n),
        }
    }

    fn dispatch<S: DrawSink + ?Sized>(&self, sink: &mut S, indices: &[u32]) {
        let n = self.vertex_count();
        match self.topology {
            Topology::Triangles => {
                sink.submit_triangles(&self.vertices, &self.normals, None, n - n % 3);
            }
            Topology::TriangleFan | Topology::QuadStrip | Topology::Quads => {
                let count = indices.len();
                sink.submit_triangles(&self.vertices, &self.normals, Some(indices), count);
            }
            Topology::LineLoop => {
                sink.submit_line_loop(&self.vertices, &self.normals, 0, n);
            }
            Topology::LineStrip | Topology::Lines => {
                sink.submit_lines(&self.vertices, &self.normals, indices);
            }
        }
    }
}

/// Submits every primitive in order.
///
/// All index arrays are built before the first submission, so an
/// allocation failure leaves the sink untouched.
pub fn submit_all<S: DrawSink + ?Sized>(
    sink: &mut S,
    primitives: &[Primitive],
) -> ShapeResult<()> {
    let mut prepared =
        buffer::with_capacity(primitives.len(), MAX_BUFFER_FLOATS, "submit_all")?;
    for primitive in primitives {
        prepared.push(primitive.submission_indices()?);
    }
    for (primitive, indices) in primitives.iter().zip(&prepared) {
        primitive.dispatch(sink, indices);
    }
    Ok(())
}

/// Builds the triangle list that covers `vertex_count` vertices of a fan,
/// quad strip or quad list, preserving winding.
///
/// Index arrays never outgrow the float arrays of their batch, so they are
/// only held to the hard [`MAX_BUFFER_FLOATS`] ceiling.
///
/// # Example
///
/// ```rust
/// use solid_shapes::draw::{triangle_indices, Topology};
///
/// let fan = triangle_indices(Topology::TriangleFan, 5).unwrap();
/// assert_eq!(fan, vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
/// ```
pub fn triangle_indices(topology: Topology, vertex_count: usize) -> ShapeResult<Vec<u32>> {
    const CONTEXT: &str = "triangle_indices";
    const MAX: usize = MAX_BUFFER_FLOATS;

    let n = vertex_count as u32;
    let indices = match topology {
        Topology::TriangleFan => {
            let len = 3 * vertex_count.saturating_sub(2);
            let mut indices = buffer::with_capacity(len, MAX, CONTEXT)?;
            for k in 1..n.saturating_sub(1) {
                indices.extend_from_slice(&[0, k, k + 1]);
            }
            indices
        }
        Topology::QuadStrip => {
            let quads = (n / 2).saturating_sub(1);
            let mut indices = buffer::with_capacity(6 * quads as usize, MAX, CONTEXT)?;
            for q in 0..quads {
                let k = 2 * q;
                indices.extend_from_slice(&[k, k + 1, k + 3, k, k + 3, k + 2]);
            }
            indices
        }
        Topology::Quads => {
            let quads = n / 4;
            let mut indices = buffer::with_capacity(6 * quads as usize, MAX, CONTEXT)?;
            for q in 0..quads {
                let k = 4 * q;
                indices.extend_from_slice(&[k, k + 1, k + 2, k, k + 2, k + 3]);
            }
            indices
        }
        Topology::Triangles => {
            let len = vertex_count - vertex_count % 3;
            let mut indices = buffer::with_capacity(len, MAX, CONTEXT)?;
            indices.extend(0..n - n % 3);
            indices
        }
        Topology::LineLoop | Topology::LineStrip | Topology::Lines => Vec::new(),
    };
    Ok(indices)
}

/// Builds segment pairs `(k, k+1)` walking an open polyline.
pub fn line_strip_indices(vertex_count: usize) -> ShapeResult<Vec<u32>> {
    let segments = vertex_count.saturating_sub(1);
    let mut indices =
        buffer::with_capacity(2 * segments, MAX_BUFFER_FLOATS, "line_strip_indices")?;
    for k in 0..segments as u32 {
        indices.extend_from_slice(&[k, k + 1]);
    }
    Ok(indices)
}

/// Builds consecutive segment pairs `(0,1), (2,3), ...`; a trailing odd
/// vertex is left out.
pub fn line_list_indices(vertex_count: usize) -> ShapeResult<Vec<u32>> {
    let len = vertex_count - vertex_count % 2;
    let mut indices = buffer::with_capacity(len, MAX_BUFFER_FLOATS, "line_list_indices")?;
    indices.extend(0..len as u32);
    Ok(indices)
}

#[cfg(test)]
mod tests;
