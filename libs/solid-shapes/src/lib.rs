//! # Solid Shapes
//!
//! Vertex, normal and index buffers for classic primitive solids, handed to
//! an external rendering backend through the [`DrawSink`] trait.
//!
//! ## Architecture
//!
//! ```text
//! catalog → expand → cache ─┐
//! circle → quadric ─────────┼→ draw → DrawSink
//! sponge ───────────────────┘
//! ```
//!
//! ## Shapes
//!
//! - **Polyhedra**: tetrahedron, cube, octahedron, dodecahedron,
//!   icosahedron, rhombic dodecahedron. Expanded once and cached.
//! - **Quadrics**: sphere, cone, cylinder, torus. Tessellated per call.
//! - **Fractal**: Sierpinski sponge of any depth up to a configured limit.
//!
//! ## Usage
//!
//! ```rust
//! use solid_shapes::mesh::Mesh;
//! use solid_shapes::Shapes;
//!
//! let mut shapes = Shapes::new();
//! let mut mesh = Mesh::new();
//! shapes.solid_torus(&mut mesh, 0.25, 1.0, 12, 24).unwrap();
//! assert_eq!(mesh.triangle_count(), 12 * 24 * 2);
//! ```

pub(crate) mod buffer;
pub mod cache;
pub mod catalog;
pub mod circle;
pub mod decompose;
pub mod draw;
pub mod error;
pub mod expand;
pub mod mesh;
pub mod quadric;
pub mod recorder;
pub mod shapes;
pub mod sponge;

pub use catalog::Solid;
pub use draw::{DrawMode, DrawSink};
pub use error::{ShapeError, ShapeResult};
pub use shapes::Shapes;
