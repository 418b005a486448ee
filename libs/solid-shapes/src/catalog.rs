//! # Solid Catalog
//!
//! Static topology for the six cataloged polyhedra: vertex coordinates,
//! one normal per face and the vertex indices of every face.
//!
//! All faces wind counter-clockwise when viewed from outside, and every
//! face of a solid has the same number of vertices.

#![allow(clippy::excessive_precision)]

use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Immutable description of a polyhedron.
///
/// `vertices` holds 3 floats per vertex, `normals` 3 floats per face and
/// `face_indices` `edges_per_face` entries per face, each indexing into
/// `vertices`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidDescriptor {
    /// Human readable name
    pub name: &'static str,
    /// Number of distinct vertices
    pub vertex_count: usize,
    /// Number of faces
    pub face_count: usize,
    /// Vertices per face (3, 4 or 5)
    pub edges_per_face: usize,
    /// Vertex coordinates, `vertex_count * 3` floats
    pub vertices: &'static [f32],
    /// Face normals, `face_count * 3` floats
    pub normals: &'static [f32],
    /// Face vertex indices, `face_count * edges_per_face` entries
    pub face_indices: &'static [u8],
}

impl SolidDescriptor {
    /// Returns the coordinates of catalog vertex `index`.
    #[inline]
    pub fn vertex(&self, index: usize) -> [f32; 3] {
        let base = index * 3;
        [
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        ]
    }

    /// Returns the normal of face `face`.
    #[inline]
    pub fn normal(&self, face: usize) -> [f32; 3] {
        let base = face * 3;
        [
            self.normals[base],
            self.normals[base + 1],
            self.normals[base + 2],
        ]
    }

    /// Returns the vertex indices of face `face`.
    #[inline]
    pub fn face(&self, face: usize) -> &'static [u8] {
        let base = face * self.edges_per_face;
        &self.face_indices[base..base + self.edges_per_face]
    }

    /// Number of vertices after per-face duplication.
    #[inline]
    pub fn expanded_vertex_count(&self) -> usize {
        self.face_count * self.edges_per_face
    }
}

// =============================================================================
// TETRAHEDRON
// =============================================================================
//
// r0 = ( 1, 0, 0 )
// r1 = ( -1/3, 2 sqrt(2) / 3, 0 )
// r2 = ( -1/3, -sqrt(2) / 3,  sqrt(6) / 3 )
// r3 = ( -1/3, -sqrt(2) / 3, -sqrt(6) / 3 )
//
// Each face normal is the negated vertex not on that face.

#[rustfmt::skip]
const TETRAHEDRON_VERTICES: [f32; 12] = [
    1.0, 0.0, 0.0,
    -0.333333333333, 0.942809041582, 0.0,
    -0.333333333333, -0.471404520791, 0.816496580928,
    -0.333333333333, -0.471404520791, -0.816496580928,
];

#[rustfmt::skip]
const TETRAHEDRON_NORMALS: [f32; 12] = [
    -1.0, 0.0, 0.0,
    0.333333333333, -0.942809041582, 0.0,
    0.333333333333, 0.471404520791, -0.816496580928,
    0.333333333333, 0.471404520791, 0.816496580928,
];

#[rustfmt::skip]
const TETRAHEDRON_FACES: [u8; 12] = [
    1, 3, 2,
    0, 2, 3,
    0, 3, 1,
    0, 1, 2,
];

/// Regular tetrahedron inscribed in the unit sphere.
pub const TETRAHEDRON: SolidDescriptor = SolidDescriptor {
    name: "tetrahedron",
    vertex_count: 4,
    face_count: 4,
    edges_per_face: 3,
    vertices: &TETRAHEDRON_VERTICES,
    normals: &TETRAHEDRON_NORMALS,
    face_indices: &TETRAHEDRON_FACES,
};

// =============================================================================
// CUBE
// =============================================================================

#[rustfmt::skip]
const CUBE_VERTICES: [f32; 24] = [
    0.5, 0.5, 0.5,
    -0.5, 0.5, 0.5,
    -0.5, -0.5, 0.5,
    0.5, -0.5, 0.5,
    0.5, -0.5, -0.5,
    0.5, 0.5, -0.5,
    -0.5, 0.5, -0.5,
    -0.5, -0.5, -0.5,
];

#[rustfmt::skip]
const CUBE_NORMALS: [f32; 18] = [
    0.0, 0.0, 1.0,
    1.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    -1.0, 0.0, 0.0,
    0.0, -1.0, 0.0,
    0.0, 0.0, -1.0,
];

#[rustfmt::skip]
const CUBE_FACES: [u8; 24] = [
    0, 1, 2, 3,
    0, 3, 4, 5,
    0, 5, 6, 1,
    1, 6, 7, 2,
    7, 4, 3, 2,
    4, 7, 6, 5,
];

/// Unit cube centered at the origin (coordinates in `[-0.5, 0.5]`).
pub const CUBE: SolidDescriptor = SolidDescriptor {
    name: "cube",
    vertex_count: 8,
    face_count: 6,
    edges_per_face: 4,
    vertices: &CUBE_VERTICES,
    normals: &CUBE_NORMALS,
    face_indices: &CUBE_FACES,
};

// =============================================================================
// OCTAHEDRON
// =============================================================================

#[rustfmt::skip]
const OCTAHEDRON_VERTICES: [f32; 18] = [
    1.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,
    -1.0, 0.0, 0.0,
    0.0, -1.0, 0.0,
    0.0, 0.0, -1.0,
];

// sqrt(1/3)
#[rustfmt::skip]
const OCTAHEDRON_NORMALS: [f32; 24] = [
    0.577350269189, 0.577350269189, 0.577350269189,
    0.577350269189, 0.577350269189, -0.577350269189,
    0.577350269189, -0.577350269189, 0.577350269189,
    0.577350269189, -0.577350269189, -0.577350269189,
    -0.577350269189, 0.577350269189, 0.577350269189,
    -0.577350269189, 0.577350269189, -0.577350269189,
    -0.577350269189, -0.577350269189, 0.577350269189,
    -0.577350269189, -0.577350269189, -0.577350269189,
];

#[rustfmt::skip]
const OCTAHEDRON_FACES: [u8; 24] = [
    0, 1, 2,
    0, 5, 1,
    0, 2, 4,
    0, 4, 5,
    3, 2, 1,
    3, 1, 5,
    3, 4, 2,
    3, 5, 4,
];

/// Regular octahedron with vertices on the coordinate axes.
pub const OCTAHEDRON: SolidDescriptor = SolidDescriptor {
    name: "octahedron",
    vertex_count: 6,
    face_count: 8,
    edges_per_face: 3,
    vertices: &OCTAHEDRON_VERTICES,
    normals: &OCTAHEDRON_NORMALS,
    face_indices: &OCTAHEDRON_FACES,
};

// =============================================================================
// DODECAHEDRON
// =============================================================================
//
// Built by attaching two pentagons to each face of a cube. Vertices are
// (+-x, 0, z), (+-1, +-1, +-1) and (0, z, x) with x = (sqrt(5) - 1) / 2
// and z = (sqrt(5) + 1) / 2.

#[rustfmt::skip]
const DODECAHEDRON_VERTICES: [f32; 60] = [
    0.0, 1.61803398875, 0.61803398875,
    -1.0, 1.0, 1.0,
    -0.61803398875, 0.0, 1.61803398875,
    0.61803398875, 0.0, 1.61803398875,
    1.0, 1.0, 1.0,
    0.0, 1.61803398875, -0.61803398875,
    1.0, 1.0, -1.0,
    0.61803398875, 0.0, -1.61803398875,
    -0.61803398875, 0.0, -1.61803398875,
    -1.0, 1.0, -1.0,
    0.0, -1.61803398875, 0.61803398875,
    1.0, -1.0, 1.0,
    -1.0, -1.0, 1.0,
    0.0, -1.61803398875, -0.61803398875,
    -1.0, -1.0, -1.0,
    1.0, -1.0, -1.0,
    1.61803398875, -0.61803398875, 0.0,
    1.61803398875, 0.61803398875, 0.0,
    -1.61803398875, 0.61803398875, 0.0,
    -1.61803398875, -0.61803398875, 0.0,
];

#[rustfmt::skip]
const DODECAHEDRON_NORMALS: [f32; 36] = [
    0.0, 0.525731112119, 0.850650808354,
    0.0, 0.525731112119, -0.850650808354,
    0.0, -0.525731112119, 0.850650808354,
    0.0, -0.525731112119, -0.850650808354,
    0.850650808354, 0.0, 0.525731112119,
    -0.850650808354, 0.0, 0.525731112119,
    0.850650808354, 0.0, -0.525731112119,
    -0.850650808354, 0.0, -0.525731112119,
    0.525731112119, 0.850650808354, 0.0,
    0.525731112119, -0.850650808354, 0.0,
    -0.525731112119, 0.850650808354, 0.0,
    -0.525731112119, -0.850650808354, 0.0,
];

#[rustfmt::skip]
const DODECAHEDRON_FACES: [u8; 60] = [
    0, 1, 2, 3, 4,
    5, 6, 7, 8, 9,
    10, 11, 3, 2, 12,
    13, 14, 8, 7, 15,
    3, 11, 16, 17, 4,
    2, 1, 18, 19, 12,
    7, 6, 17, 16, 15,
    8, 14, 19, 18, 9,
    17, 6, 5, 0, 4,
    16, 11, 10, 13, 15,
    18, 1, 0, 5, 9,
    19, 14, 13, 10, 12,
];

/// Regular dodecahedron with a circumradius of `sqrt(3)`.
pub const DODECAHEDRON: SolidDescriptor = SolidDescriptor {
    name: "dodecahedron",
    vertex_count: 20,
    face_count: 12,
    edges_per_face: 5,
    vertices: &DODECAHEDRON_VERTICES,
    normals: &DODECAHEDRON_NORMALS,
    face_indices: &DODECAHEDRON_FACES,
};

// =============================================================================
// ICOSAHEDRON
// =============================================================================

#[rustfmt::skip]
const ICOSAHEDRON_VERTICES: [f32; 36] = [
    1.0, 0.0, 0.0,
    0.447213595500, 0.894427191000, 0.0,
    0.447213595500, 0.276393202252, 0.850650808354,
    0.447213595500, -0.723606797748, 0.525731112119,
    0.447213595500, -0.723606797748, -0.525731112119,
    0.447213595500, 0.276393202252, -0.850650808354,
    -0.447213595500, -0.894427191000, 0.0,
    -0.447213595500, -0.276393202252, 0.850650808354,
    -0.447213595500, 0.723606797748, 0.525731112119,
    -0.447213595500, 0.723606797748, -0.525731112119,
    -0.447213595500, -0.276393202252, -0.850650808354,
    -1.0, 0.0, 0.0,
];

// Cross product of each face's first two edges, normalized.
#[rustfmt::skip]
const ICOSAHEDRON_NORMALS: [f32; 60] = [
    0.760845213037948, 0.470228201835026, 0.341640786498800,
    0.760845213036861, -0.179611190632978, 0.552786404500000,
    0.760845213033849, -0.581234022404097, 0.0,
    0.760845213036861, -0.179611190632978, -0.552786404500000,
    0.760845213037948, 0.470228201835026, -0.341640786498800,
    0.179611190628666, 0.760845213037948, 0.552786404498399,
    0.179611190634277, -0.290617011204044, 0.894427191000000,
    0.179611190633958, -0.940456403667806, 0.0,
    0.179611190634278, -0.290617011204044, -0.894427191000000,
    0.179611190628666, 0.760845213037948, -0.552786404498399,
    -0.179611190633958, 0.940456403667806, 0.0,
    -0.179611190634277, 0.290617011204044, 0.894427191000000,
    -0.179611190628666, -0.760845213037948, 0.552786404498399,
    -0.179611190628666, -0.760845213037948, -0.552786404498399,
    -0.179611190634277, 0.290617011204044, -0.894427191000000,
    -0.760845213036861, 0.179611190632978, -0.552786404500000,
    -0.760845213033849, 0.581234022404097, 0.0,
    -0.760845213036861, 0.179611190632978, 0.552786404500000,
    -0.760845213037948, -0.470228201835026, 0.341640786498800,
    -0.760845213037948, -0.470228201835026, -0.341640786498800,
];

#[rustfmt::skip]
const ICOSAHEDRON_FACES: [u8; 60] = [
    0, 1, 2,
    0, 2, 3,
    0, 3, 4,
    0, 4, 5,
    0, 5, 1,
    1, 8, 2,
    2, 7, 3,
    3, 6, 4,
    4, 10, 5,
    5, 9, 1,
    1, 9, 8,
    2, 8, 7,
    3, 7, 6,
    4, 6, 10,
    5, 10, 9,
    11, 9, 10,
    11, 8, 9,
    11, 7, 8,
    11, 6, 7,
    11, 10, 6,
];

/// Regular icosahedron inscribed in the unit sphere.
pub const ICOSAHEDRON: SolidDescriptor = SolidDescriptor {
    name: "icosahedron",
    vertex_count: 12,
    face_count: 20,
    edges_per_face: 3,
    vertices: &ICOSAHEDRON_VERTICES,
    normals: &ICOSAHEDRON_NORMALS,
    face_indices: &ICOSAHEDRON_FACES,
};

// =============================================================================
// RHOMBIC DODECAHEDRON
// =============================================================================

#[rustfmt::skip]
const RHOMBIC_DODECAHEDRON_VERTICES: [f32; 42] = [
    0.0, 0.0, 1.0,
    FRAC_1_SQRT_2, 0.0, 0.5,
    0.0, FRAC_1_SQRT_2, 0.5,
    -FRAC_1_SQRT_2, 0.0, 0.5,
    0.0, -FRAC_1_SQRT_2, 0.5,
    FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0,
    -FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0,
    -FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0,
    FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0,
    FRAC_1_SQRT_2, 0.0, -0.5,
    0.0, FRAC_1_SQRT_2, -0.5,
    -FRAC_1_SQRT_2, 0.0, -0.5,
    0.0, -FRAC_1_SQRT_2, -0.5,
    0.0, 0.0, -1.0,
];

#[rustfmt::skip]
const RHOMBIC_DODECAHEDRON_NORMALS: [f32; 36] = [
    0.353553390594, 0.353553390594, 0.5,
    -0.353553390594, 0.353553390594, 0.5,
    -0.353553390594, -0.353553390594, 0.5,
    0.353553390594, -0.353553390594, 0.5,
    0.0, 1.0, 0.0,
    -1.0, 0.0, 0.0,
    0.0, -1.0, 0.0,
    1.0, 0.0, 0.0,
    0.353553390594, 0.353553390594, -0.5,
    -0.353553390594, 0.353553390594, -0.5,
    -0.353553390594, -0.353553390594, -0.5,
    0.353553390594, -0.353553390594, -0.5,
];

#[rustfmt::skip]
const RHOMBIC_DODECAHEDRON_FACES: [u8; 48] = [
    0, 1, 5, 2,
    0, 2, 6, 3,
    0, 3, 7, 4,
    0, 4, 8, 1,
    5, 10, 6, 2,
    6, 11, 7, 3,
    7, 12, 8, 4,
    8, 9, 5, 1,
    5, 9, 13, 10,
    6, 10, 13, 11,
    7, 11, 13, 12,
    8, 12, 13, 9,
];

/// Rhombic dodecahedron with its long axis along Z.
pub const RHOMBIC_DODECAHEDRON: SolidDescriptor = SolidDescriptor {
    name: "rhombic dodecahedron",
    vertex_count: 14,
    face_count: 12,
    edges_per_face: 4,
    vertices: &RHOMBIC_DODECAHEDRON_VERTICES,
    normals: &RHOMBIC_DODECAHEDRON_NORMALS,
    face_indices: &RHOMBIC_DODECAHEDRON_FACES,
};

// =============================================================================
// SOLID IDENTIFIERS
// =============================================================================

/// Identifier for a cataloged polyhedron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Solid {
    /// Four triangular faces
    Tetrahedron,
    /// Six square faces
    Cube,
    /// Eight triangular faces
    Octahedron,
    /// Twelve pentagonal faces
    Dodecahedron,
    /// Twenty triangular faces
    Icosahedron,
    /// Twelve rhombic faces
    RhombicDodecahedron,
}

impl Solid {
    /// Every cataloged solid, in declaration order.
    pub const ALL: [Solid; 6] = [
        Solid::Tetrahedron,
        Solid::Cube,
        Solid::Octahedron,
        Solid::Dodecahedron,
        Solid::Icosahedron,
        Solid::RhombicDodecahedron,
    ];

    /// Returns the static descriptor for this solid.
    pub const fn descriptor(self) -> &'static SolidDescriptor {
        match self {
            Solid::Tetrahedron => &TETRAHEDRON,
            Solid::Cube => &CUBE,
            Solid::Octahedron => &OCTAHEDRON,
            Solid::Dodecahedron => &DODECAHEDRON,
            Solid::Icosahedron => &ICOSAHEDRON,
            Solid::RhombicDodecahedron => &RHOMBIC_DODECAHEDRON,
        }
    }

    /// Returns the solid's name.
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
