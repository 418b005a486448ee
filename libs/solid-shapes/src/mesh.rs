//! # Mesh Sink
//!
//! A [`DrawSink`] that accumulates every submission into one indexed mesh,
//! ready to hand to a GPU buffer upload or an exporter.

use crate::draw::DrawSink;
use config::constants::EPSILON;
use glam::Vec3;
use log::warn;
use serde::{Deserialize, Serialize};

/// Triangles and line segments gathered from draw calls.
///
/// Each submission appends its own copy of the vertices it references;
/// nothing is welded.
///
/// # Example
///
/// ```rust
/// use solid_shapes::draw::DrawMode;
/// use solid_shapes::mesh::Mesh;
/// use solid_shapes::{Shapes, Solid};
///
/// let mut shapes = Shapes::new();
/// let mut mesh = Mesh::new();
/// shapes.draw_solid(&mut mesh, Solid::Cube, 1.0, DrawMode::Solid).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<Vec3>,
    /// Vertex normals, one per position
    normals: Vec<Vec3>,
    /// Triangle indices
    triangles: Vec<[u32; 3]>,
    /// Line segment indices
    lines: Vec<[u32; 2]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of line segments.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns a reference to the line segments.
    #[inline]
    pub fn lines(&self) -> &[[u32; 2]] {
        &self.lines
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some((&first, rest)) = self.vertices.split_first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };
        rest.iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle and line indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        let lines_ok = self
            .lines
            .iter()
            .all(|line| line[0] < vertex_count && line[1] < vertex_count);

        lines_ok
            && self.triangles.iter().all(|tri| {
                if tri.iter().any(|&i| i >= vertex_count) {
                    return false;
                }
                if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                    return false;
                }
                let v0 = self.vertices[tri[0] as usize];
                let v1 = self.vertices[tri[1] as usize];
                let v2 = self.vertices[tri[2] as usize];
                (v1 - v0).cross(v2 - v0).length() >= EPSILON
            })
    }

    /// Exports vertices as a flat f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Exports normals as a flat f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports line segment indices as u32 array for GPU.
    pub fn line_indices_u32(&self) -> Vec<u32> {
        self.lines.iter().flatten().copied().collect()
    }

    /// Appends vertices `range` of a flat submission, returning the index of
    /// the first appended vertex. Submissions that reach past the end of
    /// their arrays are dropped whole.
    fn append(
        &mut self,
        vertices: &[f32],
        normals: &[f32],
        first: usize,
        count: usize,
    ) -> Option<u32> {
        let span = first * 3..(first + count) * 3;
        let (Some(positions), Some(directions)) =
            (vertices.get(span.clone()), normals.get(span))
        else {
            warn!("mesh: dropped submission of {count} vertices past the end of its arrays");
            return None;
        };

        let base = self.vertices.len() as u32;
        self.vertices
            .extend(positions.chunks_exact(3).map(Vec3::from_slice));
        self.normals
            .extend(directions.chunks_exact(3).map(Vec3::from_slice));
        Some(base)
    }

    /// Checks that every index stays inside a submission of `len` vertices.
    fn indices_in_range(indices: &[u32], len: usize) -> bool {
        let ok = indices.iter().all(|&i| (i as usize) < len);
        if !ok {
            warn!("mesh: dropped submission with indices past {len} vertices");
        }
        ok
    }
}

impl DrawSink for Mesh {
    fn is_initialised(&self) -> bool {
        true
    }

    fn submit_triangles(
        &mut self,
        vertices: &[f32],
        normals: &[f32],
        indices: Option<&[u32]>,
        count: usize,
    ) {
        match indices {
            Some(indices) => {
                let indices = &indices[..count.min(indices.len())];
                let len = vertices.len().min(normals.len()) / 3;
                if !Self::indices_in_range(indices, len) {
                    return;
                }
                if let Some(base) = self.append(vertices, normals, 0, len) {
                    self.triangles.extend(
                        indices
                            .chunks_exact(3)
                            .map(|t| [base + t[0], base + t[1], base + t[2]]),
                    );
                }
            }
            None => {
                if let Some(base) = self.append(vertices, normals, 0, count) {
                    self.triangles.extend((0..(count / 3) as u32).map(|t| {
                        let k = base + 3 * t;
                        [k, k + 1, k + 2]
                    }));
                }
            }
        }
    }

    fn submit_line_loop(&mut self, vertices: &[f32], normals: &[f32], first: usize, count: usize) {
        if let Some(base) = self.append(vertices, normals, first, count) {
            let n = count as u32;
            self.lines
                .extend((0..n).map(|k| [base + k, base + (k + 1) % n]));
        }
    }

    fn submit_lines(&mut self, vertices: &[f32], normals: &[f32], indices: &[u32]) {
        let len = vertices.len().min(normals.len()) / 3;
        if !Self::indices_in_range(indices, len) {
            return;
        }
        if let Some(base) = self.append(vertices, normals, 0, len) {
            self.lines
                .extend(indices.chunks_exact(2).map(|s| [base + s[0], base + s[1]]));
        }
    }
}
