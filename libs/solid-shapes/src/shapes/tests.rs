//! End-to-end tests for the shape operations.

use super::*;
use crate::mesh::Mesh;
use crate::quadric::sphere::solid_sphere_vertex_count;
use crate::recorder::{DrawCall, Recorder};
use approx::assert_relative_eq;

// =============================================================================
// POLYHEDRA
// =============================================================================

#[test]
fn test_wire_cube_size_two() {
    let mut shapes = Shapes::new();
    let mut sink = Recorder::new();
    shapes.wire_cube(&mut sink, 2.0).unwrap();

    assert_eq!(sink.calls().len(), 6);
    for call in sink.calls() {
        match call {
            DrawCall::LineLoop {
                count, positions, ..
            } => {
                assert_eq!(*count, 4);
                assert_eq!(positions.len(), 4);
                for p in positions {
                    assert!(p.iter().all(|c| c.abs() == 1.0), "{p:?}");
                }
            }
            other => panic!("unexpected call {other:?}"),
        }
    }
}

#[test]
fn test_solid_icosahedron_is_one_flat_triangle_list() {
    let mut shapes = Shapes::new();
    let mut sink = Recorder::new();
    shapes.solid_icosahedron(&mut sink, 1.0).unwrap();

    match sink.calls() {
        [DrawCall::Triangles {
            indexed, count, positions, ..
        }] => {
            assert!(!*indexed);
            assert_eq!(*count, 60);
            assert_eq!(positions.len(), 60);
        }
        other => panic!("unexpected calls {other:?}"),
    }
}

#[test]
fn test_solid_dodecahedron_uses_indices() {
    let mut shapes = Shapes::new();
    let mut sink = Recorder::new();
    shapes.solid_dodecahedron(&mut sink, 1.0).unwrap();

    match sink.calls() {
        [DrawCall::Triangles { indexed, count, .. }] => {
            assert!(*indexed);
            assert_eq!(*count, 12 * 9);
        }
        other => panic!("unexpected calls {other:?}"),
    }
}

#[test]
fn test_every_solid_in_both_modes() {
    let mut shapes = Shapes::new();
    for solid in Solid::ALL {
        let d = solid.descriptor();

        let mut wire = Recorder::new();
        shapes.draw_solid(&mut wire, solid, 1.0, DrawMode::Wire).unwrap();
        assert_eq!(wire.line_loop_count(), d.face_count, "{solid}");

        let mut filled = Mesh::new();
        shapes.draw_solid(&mut filled, solid, 1.0, DrawMode::Solid).unwrap();
        assert_eq!(filled.triangle_count(), d.face_count * (d.edges_per_face - 2), "{solid}");
        assert!(filled.validate(), "{solid}");
    }
    assert_eq!(shapes.cache().len(), Solid::ALL.len());
}

#[test]
fn test_scale_leaves_normals_alone() {
    let mut shapes = Shapes::new();
    let mut unit = Recorder::new();
    let mut scaled = Recorder::new();
    shapes.solid_octahedron(&mut unit, 1.0).unwrap();
    shapes.solid_octahedron(&mut scaled, 3.0).unwrap();

    let (a, b) = (&unit.calls()[0], &scaled.calls()[0]);
    assert_eq!(a.normals(), b.normals());
    for (p, q) in a.positions().iter().zip(b.positions()) {
        for axis in 0..3 {
            assert_relative_eq!(q[axis], 3.0 * p[axis], epsilon = 1e-6);
        }
    }
}

#[test]
fn test_scale_close_to_one_is_still_applied() {
    let mut shapes = Shapes::new();
    let mut unit = Mesh::new();
    let mut nudged = Mesh::new();
    shapes.solid_cube(&mut unit, 1.0).unwrap();
    shapes.solid_cube(&mut nudged, 1.000_009).unwrap();

    let (_, unit_max) = unit.bounding_box();
    let (_, nudged_max) = nudged.bounding_box();
    assert_eq!(unit_max.x, 0.5);
    assert_eq!(nudged_max.x, 0.5 * (1.000_009_f64 as f32));
    assert!(nudged_max.x > unit_max.x);
}

#[test]
fn test_cache_reused_across_calls() {
    let mut shapes = Shapes::new();
    let mut sink = Recorder::new();
    shapes.wire_tetrahedron(&mut sink, 1.0).unwrap();
    shapes.solid_tetrahedron(&mut sink, 2.0).unwrap();
    shapes.wire_rhombic_dodecahedron(&mut sink, 1.0).unwrap();
    shapes.solid_rhombic_dodecahedron(&mut sink, 1.0).unwrap();

    let stats = shapes.cache().stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 2);
}

// =============================================================================
// BUFFER LIMITS
// =============================================================================

#[test]
fn test_buffer_limit_reaches_every_generator() {
    let config = GlobalConfig::new(10, 100).unwrap();
    let mut shapes = Shapes::with_config(config);
    let mut sink = Recorder::new();

    let results = [
        shapes.solid_sierpinski_sponge(&mut sink, 1, DVec3::ZERO, 1.0),
        shapes.solid_sphere(&mut sink, 1.0, 64, 64),
        shapes.wire_sphere(&mut sink, 1.0, 64, 64),
        shapes.solid_cone(&mut sink, 1.0, 1.0, 64, 64),
        shapes.solid_cylinder(&mut sink, 1.0, 1.0, 64, 64),
        shapes.solid_torus(&mut sink, 0.25, 1.0, 64, 64),
        shapes.wire_torus(&mut sink, 0.25, 1.0, 64, 64),
        // 12 pentagons need 180 floats
        shapes.solid_dodecahedron(&mut sink, 1.0),
    ];
    for result in results {
        assert!(
            matches!(result, Err(ShapeError::LimitExceeded { max: 100, .. })),
            "{result:?}"
        );
    }
    assert!(sink.is_empty());
    assert!(!shapes.cache().is_cached(Solid::Dodecahedron));
}

#[test]
fn test_small_shapes_fit_a_tight_limit() {
    let config = GlobalConfig::new(10, 100).unwrap();
    let mut shapes = Shapes::with_config(config);
    let mut mesh = Mesh::new();

    // 72 floats, scaled copy included
    shapes.solid_cube(&mut mesh, 2.0).unwrap();
    // Largest batch is a 4-slice band of 10 vertices, 30 floats
    shapes.solid_sphere(&mut mesh, 1.0, 4, 4).unwrap();
    assert!(mesh.validate());
}

// =============================================================================
// INITIALISATION GUARD
// =============================================================================

#[test]
fn test_uninitialised_sink_is_rejected() {
    let mut shapes = Shapes::new();
    let mut sink = Recorder::uninitialised();

    assert_eq!(
        shapes.solid_cube(&mut sink, 1.0).unwrap_err(),
        ShapeError::not_initialised("solid_cube")
    );
    assert_eq!(
        shapes.wire_torus(&mut sink, 0.2, 1.0, 8, 8).unwrap_err(),
        ShapeError::not_initialised("wire_torus")
    );
    assert_eq!(
        shapes
            .solid_sierpinski_sponge(&mut sink, 1, DVec3::ZERO, 1.0)
            .unwrap_err(),
        ShapeError::not_initialised("solid_sierpinski_sponge")
    );
    assert!(sink.is_empty());
    // Nothing was generated either
    assert!(shapes.cache().is_empty());
}

#[test]
fn test_every_operation_names_itself() {
    let mut shapes = Shapes::new();
    let mut sink = Recorder::uninitialised();
    let origin = DVec3::ZERO;

    let results = [
        ("wire_octahedron", shapes.wire_octahedron(&mut sink, 1.0)),
        ("wire_dodecahedron", shapes.wire_dodecahedron(&mut sink, 1.0)),
        ("wire_icosahedron", shapes.wire_icosahedron(&mut sink, 1.0)),
        ("solid_sphere", shapes.solid_sphere(&mut sink, 1.0, 8, 8)),
        ("wire_sphere", shapes.wire_sphere(&mut sink, 1.0, 8, 8)),
        ("solid_cone", shapes.solid_cone(&mut sink, 1.0, 1.0, 8, 8)),
        ("wire_cone", shapes.wire_cone(&mut sink, 1.0, 1.0, 8, 8)),
        ("solid_cylinder", shapes.solid_cylinder(&mut sink, 1.0, 1.0, 8, 8)),
        ("wire_cylinder", shapes.wire_cylinder(&mut sink, 1.0, 1.0, 8, 8)),
        ("solid_torus", shapes.solid_torus(&mut sink, 0.2, 1.0, 8, 8)),
        (
            "wire_sierpinski_sponge",
            shapes.wire_sierpinski_sponge(&mut sink, 1, origin, 1.0),
        ),
    ];
    for (name, result) in results {
        assert_eq!(result, Err(ShapeError::not_initialised(name)));
    }
}

// =============================================================================
// QUADRICS
// =============================================================================

#[test]
fn test_solid_sphere_submits_every_vertex() {
    let mut shapes = Shapes::new();
    let mut sink = Recorder::new();
    shapes.solid_sphere(&mut sink, 2.0, 10, 6).unwrap();

    // Two fans and four strips
    assert_eq!(sink.calls().len(), 6);
    let mut mesh = Mesh::new();
    shapes.solid_sphere(&mut mesh, 2.0, 10, 6).unwrap();
    assert_eq!(mesh.vertex_count(), solid_sphere_vertex_count(10, 6));
    for v in mesh.vertices() {
        assert_relative_eq!(v.length(), 2.0, epsilon = 1e-5);
    }
}

#[test]
fn test_wire_sphere_mixes_loops_and_lines() {
    let mut shapes = Shapes::new();
    let mut sink = Recorder::new();
    shapes.wire_sphere(&mut sink, 1.0, 6, 4).unwrap();

    assert_eq!(sink.line_loop_count(), 3);
    let meridians = sink
        .calls()
        .iter()
        .filter(|call| matches!(call, DrawCall::Lines { .. }))
        .count();
    assert_eq!(meridians, 6);
}

#[test]
fn test_solid_cylinder_mesh_is_valid() {
    let mut shapes = Shapes::new();
    let mut mesh = Mesh::new();
    shapes.solid_cylinder(&mut mesh, 1.0, 2.0, 12, 3).unwrap();

    // Two caps of 12 triangles, three bands of 24
    assert_eq!(mesh.triangle_count(), 2 * 12 + 3 * 24);
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.z, 0.0);
    assert_relative_eq!(max.z, 2.0);
    assert!(mesh.validate());
}

#[test]
fn test_cone_and_torus_draw() {
    let mut shapes = Shapes::new();
    let mut mesh = Mesh::new();
    shapes.solid_cone(&mut mesh, 1.0, 2.0, 8, 2).unwrap();
    // Base fan 8, one band 16, tip 8
    assert_eq!(mesh.triangle_count(), 8 + 16 + 8);

    let mut mesh = Mesh::new();
    shapes.solid_torus(&mut mesh, 0.25, 1.0, 6, 10).unwrap();
    assert_eq!(mesh.triangle_count(), 6 * 10 * 2);
    assert!(mesh.validate());

    let mut mesh = Mesh::new();
    shapes.wire_cone(&mut mesh, 1.0, 2.0, 8, 2).unwrap();
    shapes.wire_cylinder(&mut mesh, 1.0, 2.0, 8, 2).unwrap();
    // Cone: 2 loops of 8 + 8 spokes. Cylinder: 3 loops of 8 + 8 rails
    assert_eq!(mesh.line_count(), (16 + 8) + (24 + 8));
}

// =============================================================================
// FRACTAL
// =============================================================================

#[test]
fn test_sponge_draws_one_triangle_list() {
    let mut shapes = Shapes::new();
    let mut sink = Recorder::new();
    shapes
        .solid_sierpinski_sponge(&mut sink, 2, DVec3::ZERO, 1.0)
        .unwrap();

    match sink.calls() {
        [DrawCall::Triangles { indexed, count, .. }] => {
            assert!(!*indexed);
            assert_eq!(*count, 12 * 16);
        }
        other => panic!("unexpected calls {other:?}"),
    }
}

#[test]
fn test_wire_sponge_loops_per_triangle() {
    let mut shapes = Shapes::new();
    let mut sink = Recorder::new();
    shapes
        .wire_sierpinski_sponge(&mut sink, 1, DVec3::new(1.0, 0.0, 0.0), 2.0)
        .unwrap();
    assert_eq!(sink.line_loop_count(), 16);
}

#[test]
fn test_negative_sponge_draws_nothing() {
    let mut shapes = Shapes::new();
    let mut sink = Recorder::new();
    shapes
        .solid_sierpinski_sponge(&mut sink, -2, DVec3::ZERO, 1.0)
        .unwrap();
    assert!(sink.is_empty());
}

#[test]
fn test_sponge_limit_submits_nothing() {
    let config = GlobalConfig::new(1, 1 << 20).unwrap();
    let mut shapes = Shapes::with_config(config);
    let mut sink = Recorder::new();

    let err = shapes
        .solid_sierpinski_sponge(&mut sink, 2, DVec3::ZERO, 1.0)
        .unwrap_err();
    assert!(matches!(err, ShapeError::LimitExceeded { .. }));
    assert!(sink.is_empty());
    assert_eq!(shapes.config().max_sponge_levels, 1);
}
