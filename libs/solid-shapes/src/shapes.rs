//! # Shape Operations
//!
//! The public drawing surface: one `wire_*` and one `solid_*` operation per
//! shape, all routed through [`Shapes`].
//!
//! ## Contract
//!
//! Every operation:
//! 1. Checks [`DrawSink::is_initialised`] and fails with
//!    [`ShapeError::NotInitialised`] naming itself if the context is missing.
//! 2. Generates all geometry (cached polyhedra, fresh quadric batches, or a
//!    sponge buffer).
//! 3. Only then submits to the sink, so an error never leaves a half-drawn
//!    shape behind.
//!
//! ## Example
//!
//! ```rust
//! use solid_shapes::recorder::Recorder;
//! use solid_shapes::Shapes;
//!
//! let mut shapes = Shapes::new();
//! let mut sink = Recorder::new();
//! shapes.wire_cube(&mut sink, 2.0).unwrap();
//! shapes.solid_sphere(&mut sink, 1.0, 16, 8).unwrap();
//! assert_eq!(sink.line_loop_count(), 6);
//! ```

use crate::cache::GeometryCache;
use crate::catalog::Solid;
use crate::draw::{draw_faces, submit_all, DrawMode, DrawSink, Primitive};
use crate::error::{ShapeError, ShapeResult};
use crate::quadric::{
    solid_cone_primitives, solid_cylinder_primitives, solid_sphere_primitives,
    solid_torus_primitives, wire_cone_primitives, wire_cylinder_primitives,
    wire_sphere_primitives, wire_torus_primitives,
};
use crate::sponge::SpongeBuffer;
use config::constants::GlobalConfig;
use glam::DVec3;
use log::trace;

/// Name of the public operation that draws `solid` in `mode`.
const fn entry_point(solid: Solid, mode: DrawMode) -> &'static str {
    match (solid, mode) {
        (Solid::Tetrahedron, DrawMode::Wire) => "wire_tetrahedron",
        (Solid::Tetrahedron, DrawMode::Solid) => "solid_tetrahedron",
        (Solid::Cube, DrawMode::Wire) => "wire_cube",
        (Solid::Cube, DrawMode::Solid) => "solid_cube",
        (Solid::Octahedron, DrawMode::Wire) => "wire_octahedron",
        (Solid::Octahedron, DrawMode::Solid) => "solid_octahedron",
        (Solid::Dodecahedron, DrawMode::Wire) => "wire_dodecahedron",
        (Solid::Dodecahedron, DrawMode::Solid) => "solid_dodecahedron",
        (Solid::Icosahedron, DrawMode::Wire) => "wire_icosahedron",
        (Solid::Icosahedron, DrawMode::Solid) => "solid_icosahedron",
        (Solid::RhombicDodecahedron, DrawMode::Wire) => "wire_rhombic_dodecahedron",
        (Solid::RhombicDodecahedron, DrawMode::Solid) => "solid_rhombic_dodecahedron",
    }
}

fn ensure_initialised<S: DrawSink + ?Sized>(
    sink: &S,
    entry_point: &'static str,
) -> ShapeResult<()> {
    if sink.is_initialised() {
        Ok(())
    } else {
        Err(ShapeError::not_initialised(entry_point))
    }
}

/// Draws shapes into a [`DrawSink`], caching expanded polyhedra between
/// calls.
///
/// Holds its cache through `Rc`, so a `Shapes` stays on the thread that
/// owns the rendering context.
#[derive(Debug, Default)]
pub struct Shapes {
    /// Expanded polyhedra
    cache: GeometryCache,
    /// Sponge depth and buffer limits, shared with the cache
    config: GlobalConfig,
}

impl Shapes {
    /// Creates a drawer with an empty cache and default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a drawer with custom limits.
    ///
    /// `config.max_buffer_floats` bounds every working buffer: polyhedron
    /// expansion and scaling, quadric batches and sample tables, and the
    /// sponge.
    pub fn with_config(config: GlobalConfig) -> Self {
        Self {
            cache: GeometryCache::with_config(config),
            config,
        }
    }

    /// Returns the polyhedron cache.
    pub fn cache(&self) -> &GeometryCache {
        &self.cache
    }

    /// Returns the active limits.
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    // =========================================================================
    // POLYHEDRA
    // =========================================================================

    /// Draws a cataloged solid, scaled uniformly about the origin.
    ///
    /// # Arguments
    ///
    /// * `sink` - Destination backend
    /// * `solid` - Which polyhedron
    /// * `scale` - Uniform scale; exactly `1.0` draws the cached buffer as
    ///   is, any other value draws a scaled copy
    /// * `mode` - Wire or solid
    pub fn draw_solid<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        solid: Solid,
        scale: f64,
        mode: DrawMode,
    ) -> ShapeResult<()> {
        let entry_point = entry_point(solid, mode);
        ensure_initialised(sink, entry_point)?;

        let geometry = self.cache.get(solid)?;
        let scale = scale as f32;
        let scaled;
        let vertices = if scale == 1.0 {
            geometry.vertices()
        } else {
            scaled = geometry.scaled_vertices(&self.config, scale)?;
            scaled.as_slice()
        };

        trace!(
            "{entry_point}: {} faces x {} vertices",
            geometry.face_count(),
            geometry.edges_per_face()
        );
        draw_faces(
            sink,
            vertices,
            geometry.normals(),
            geometry.indices(),
            geometry.face_count(),
            geometry.edges_per_face(),
            mode,
        )
    }

    /// Draws the tetrahedron outline.
    pub fn wire_tetrahedron<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::Tetrahedron, scale, DrawMode::Wire)
    }

    /// Draws the filled tetrahedron.
    pub fn solid_tetrahedron<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::Tetrahedron, scale, DrawMode::Solid)
    }

    /// Draws the outline of an axis-aligned cube of edge `size` centred on
    /// the origin.
    pub fn wire_cube<S: DrawSink + ?Sized>(&mut self, sink: &mut S, size: f64) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::Cube, size, DrawMode::Wire)
    }

    /// Draws a filled axis-aligned cube of edge `size` centred on the origin.
    pub fn solid_cube<S: DrawSink + ?Sized>(&mut self, sink: &mut S, size: f64) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::Cube, size, DrawMode::Solid)
    }

    /// Draws the octahedron outline.
    pub fn wire_octahedron<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::Octahedron, scale, DrawMode::Wire)
    }

    /// Draws the filled octahedron.
    pub fn solid_octahedron<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::Octahedron, scale, DrawMode::Solid)
    }

    /// Draws the dodecahedron outline.
    pub fn wire_dodecahedron<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::Dodecahedron, scale, DrawMode::Wire)
    }

    /// Draws the filled dodecahedron.
    pub fn solid_dodecahedron<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::Dodecahedron, scale, DrawMode::Solid)
    }

    /// Draws the icosahedron outline.
    pub fn wire_icosahedron<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::Icosahedron, scale, DrawMode::Wire)
    }

    /// Draws the filled icosahedron.
    pub fn solid_icosahedron<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::Icosahedron, scale, DrawMode::Solid)
    }

    /// Draws the rhombic dodecahedron outline.
    pub fn wire_rhombic_dodecahedron<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::RhombicDodecahedron, scale, DrawMode::Wire)
    }

    /// Draws the filled rhombic dodecahedron.
    pub fn solid_rhombic_dodecahedron<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_solid(sink, Solid::RhombicDodecahedron, scale, DrawMode::Solid)
    }

    // =========================================================================
    // QUADRICS
    // =========================================================================

    /// Draws the sphere outline. See [`wire_sphere_primitives`].
    pub fn wire_sphere<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        radius: f64,
        slices: i32,
        stacks: i32,
    ) -> ShapeResult<()> {
        draw_primitives(sink, "wire_sphere", || {
            wire_sphere_primitives(&self.config, radius as f32, slices, stacks)
        })
    }

    /// Draws a filled sphere centred on the origin.
    ///
    /// # Arguments
    ///
    /// * `radius` - Sphere radius
    /// * `slices` - Subdivisions around the Z axis, at least 1
    /// * `stacks` - Subdivisions along the Z axis, at least 1
    pub fn solid_sphere<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        radius: f64,
        slices: i32,
        stacks: i32,
    ) -> ShapeResult<()> {
        draw_primitives(sink, "solid_sphere", || {
            solid_sphere_primitives(&self.config, radius as f32, slices, stacks)
        })
    }

    /// Draws the cone outline.
    pub fn wire_cone<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        base: f64,
        height: f64,
        slices: i32,
        stacks: i32,
    ) -> ShapeResult<()> {
        draw_primitives(sink, "wire_cone", || {
            wire_cone_primitives(&self.config, base as f32, height as f32, slices, stacks)
        })
    }

    /// Draws a filled cone with its base on the XY plane and apex at
    /// `(0, 0, height)`.
    pub fn solid_cone<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        base: f64,
        height: f64,
        slices: i32,
        stacks: i32,
    ) -> ShapeResult<()> {
        draw_primitives(sink, "solid_cone", || {
            solid_cone_primitives(&self.config, base as f32, height as f32, slices, stacks)
        })
    }

    /// Draws the cylinder outline.
    pub fn wire_cylinder<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        radius: f64,
        height: f64,
        slices: i32,
        stacks: i32,
    ) -> ShapeResult<()> {
        draw_primitives(sink, "wire_cylinder", || {
            wire_cylinder_primitives(&self.config, radius as f32, height as f32, slices, stacks)
        })
    }

    /// Draws a filled, capped cylinder from `z = 0` to `z = height`.
    pub fn solid_cylinder<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        radius: f64,
        height: f64,
        slices: i32,
        stacks: i32,
    ) -> ShapeResult<()> {
        draw_primitives(sink, "solid_cylinder", || {
            solid_cylinder_primitives(&self.config, radius as f32, height as f32, slices, stacks)
        })
    }

    /// Draws the torus outline.
    pub fn wire_torus<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        inner_radius: f64,
        outer_radius: f64,
        sides: i32,
        rings: i32,
    ) -> ShapeResult<()> {
        draw_primitives(sink, "wire_torus", || {
            let (inner, outer) = (inner_radius as f32, outer_radius as f32);
            wire_torus_primitives(&self.config, inner, outer, sides, rings)
        })
    }

    /// Draws a filled torus around the Z axis.
    ///
    /// # Arguments
    ///
    /// * `inner_radius` - Tube radius
    /// * `outer_radius` - Distance from the Z axis to the tube centre
    /// * `sides` - Subdivisions around the tube
    /// * `rings` - Subdivisions around the Z axis
    pub fn solid_torus<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        inner_radius: f64,
        outer_radius: f64,
        sides: i32,
        rings: i32,
    ) -> ShapeResult<()> {
        draw_primitives(sink, "solid_torus", || {
            let (inner, outer) = (inner_radius as f32, outer_radius as f32);
            solid_torus_primitives(&self.config, inner, outer, sides, rings)
        })
    }

    // =========================================================================
    // FRACTAL
    // =========================================================================

    /// Draws the Sierpinski sponge outline, one loop per triangle.
    pub fn wire_sierpinski_sponge<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        levels: i32,
        offset: DVec3,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_sponge(sink, levels, offset, scale, DrawMode::Wire)
    }

    /// Draws the filled Sierpinski sponge.
    ///
    /// # Arguments
    ///
    /// * `levels` - Recursion depth; negative draws nothing
    /// * `offset` - Translation of the whole sponge
    /// * `scale` - Size of the level 0 tetrahedron
    ///
    /// # Errors
    ///
    /// `LimitExceeded` when `levels` or the resulting buffer exceed the
    /// configured limits.
    pub fn solid_sierpinski_sponge<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        levels: i32,
        offset: DVec3,
        scale: f64,
    ) -> ShapeResult<()> {
        self.draw_sponge(sink, levels, offset, scale, DrawMode::Solid)
    }

    fn draw_sponge<S: DrawSink + ?Sized>(
        &mut self,
        sink: &mut S,
        levels: i32,
        offset: DVec3,
        scale: f64,
        mode: DrawMode,
    ) -> ShapeResult<()> {
        let entry_point = match mode {
            DrawMode::Wire => "wire_sierpinski_sponge",
            DrawMode::Solid => "solid_sierpinski_sponge",
        };
        ensure_initialised(sink, entry_point)?;

        let sponge = SpongeBuffer::generate_with(&self.config, levels, offset, scale)?;
        if sponge.is_empty() {
            return Ok(());
        }

        trace!("{entry_point}: {} triangles", sponge.face_count());
        draw_faces(
            sink,
            sponge.vertices(),
            sponge.normals(),
            None,
            sponge.face_count(),
            3,
            mode,
        )
    }
}

/// Checks the sink, builds the batches, then submits them all.
fn draw_primitives<S, F>(sink: &mut S, entry_point: &'static str, build: F) -> ShapeResult<()>
where
    S: DrawSink + ?Sized,
    F: FnOnce() -> ShapeResult<Vec<Primitive>>,
{
    ensure_initialised(sink, entry_point)?;
    let primitives = build()?;
    trace!("{entry_point}: {} batches", primitives.len());
    submit_all(sink, &primitives)
}

#[cfg(test)]
mod tests;
