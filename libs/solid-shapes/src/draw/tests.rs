//! Tests for draw dispatch and primitive conversion.

use super::*;
use crate::catalog::{CUBE, ICOSAHEDRON};
use crate::expand::expand;
use crate::recorder::{DrawCall, Recorder};

fn primitive(topology: Topology, points: &[[f32; 3]]) -> Primitive {
    let mut primitive =
        Primitive::with_capacity(topology, points.len(), MAX_BUFFER_FLOATS, "test").unwrap();
    for &p in points {
        primitive.push(Vec3::from(p), Vec3::Z);
    }
    primitive
}

// =============================================================================
// FACE DISPATCH
// =============================================================================

#[test]
fn test_wire_emits_one_loop_per_face() {
    let cube = expand(&CUBE).unwrap();
    let mut recorder = Recorder::new();
    draw_faces(
        &mut recorder,
        cube.vertices(),
        cube.normals(),
        cube.indices(),
        cube.face_count(),
        cube.edges_per_face(),
        DrawMode::Wire,
    )
    .unwrap();

    assert_eq!(recorder.calls().len(), 6);
    for (face, call) in recorder.calls().iter().enumerate() {
        match call {
            DrawCall::LineLoop { first, count, .. } => {
                assert_eq!(*first, face * 4);
                assert_eq!(*count, 4);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }
}

#[test]
fn test_solid_quads_use_index_array() {
    let cube = expand(&CUBE).unwrap();
    let mut recorder = Recorder::new();
    draw_faces(
        &mut recorder,
        cube.vertices(),
        cube.normals(),
        cube.indices(),
        cube.face_count(),
        cube.edges_per_face(),
        DrawMode::Solid,
    )
    .unwrap();

    assert_eq!(recorder.calls().len(), 1);
    match &recorder.calls()[0] {
        DrawCall::Triangles { indexed, count, .. } => {
            assert!(*indexed);
            assert_eq!(*count, 36);
        }
        other => panic!("unexpected call {other:?}"),
    }
}

#[test]
fn test_solid_triangles_are_not_indexed() {
    let icosahedron = expand(&ICOSAHEDRON).unwrap();
    let mut recorder = Recorder::new();
    draw_faces(
        &mut recorder,
        icosahedron.vertices(),
        icosahedron.normals(),
        icosahedron.indices(),
        icosahedron.face_count(),
        icosahedron.edges_per_face(),
        DrawMode::Solid,
    )
    .unwrap();

    match &recorder.calls()[..] {
        [DrawCall::Triangles {
            indexed, count, ..
        }] => {
            assert!(!*indexed);
            assert_eq!(*count, 60);
        }
        other => panic!("unexpected calls {other:?}"),
    }
}

#[test]
fn test_solid_quads_without_indices_are_rejected() {
    let cube = expand(&CUBE).unwrap();
    let mut recorder = Recorder::new();
    let result = draw_faces(
        &mut recorder,
        cube.vertices(),
        cube.normals(),
        None,
        cube.face_count(),
        cube.edges_per_face(),
        DrawMode::Solid,
    );

    assert_eq!(result, Err(ShapeError::missing_indices(4)));
    assert!(recorder.is_empty());

    // Outlines never need the index array
    draw_faces(
        &mut recorder,
        cube.vertices(),
        cube.normals(),
        None,
        cube.face_count(),
        cube.edges_per_face(),
        DrawMode::Wire,
    )
    .unwrap();
    assert_eq!(recorder.line_loop_count(), 6);
}

#[test]
fn test_primitive_capacity_respects_limit() {
    // 34 vertices need 102 floats
    let result = Primitive::with_capacity(Topology::Lines, 34, 100, "test");
    assert_eq!(result, Err(ShapeError::limit_exceeded("test", 102, 100)));
    assert!(Primitive::with_capacity(Topology::Lines, 33, 100, "test").is_ok());
}

#[test]
fn test_draw_mode_from_wire() {
    assert_eq!(DrawMode::from_wire(true), DrawMode::Wire);
    assert_eq!(DrawMode::from_wire(false), DrawMode::Solid);
}

// =============================================================================
// PRIMITIVE CONVERSION
// =============================================================================

#[test]
fn test_fan_indices() {
    assert_eq!(
        triangle_indices(Topology::TriangleFan, 5).unwrap(),
        vec![0, 1, 2, 0, 2, 3, 0, 3, 4]
    );
    assert!(triangle_indices(Topology::TriangleFan, 2).unwrap().is_empty());
}

#[test]
fn test_quad_strip_indices() {
    assert_eq!(
        triangle_indices(Topology::QuadStrip, 6).unwrap(),
        vec![0, 1, 3, 0, 3, 2, 2, 3, 5, 2, 5, 4]
    );
}

#[test]
fn test_quad_indices() {
    assert_eq!(
        triangle_indices(Topology::Quads, 8).unwrap(),
        vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]
    );
}

#[test]
fn test_line_strip_indices() {
    assert_eq!(line_strip_indices(4).unwrap(), vec![0, 1, 1, 2, 2, 3]);
    assert!(line_strip_indices(1).unwrap().is_empty());
    assert!(line_strip_indices(0).unwrap().is_empty());
}

#[test]
fn test_quad_strip_keeps_counter_clockwise_winding() {
    // Strip along +X in the XY plane: upper vertex first, then lower
    let strip = primitive(
        Topology::QuadStrip,
        &[
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
        ],
    );
    let mut recorder = Recorder::new();
    strip.submit(&mut recorder).unwrap();

    let positions = recorder.calls()[0].positions();
    assert_eq!(positions.len(), 6);
    for tri in positions.chunks(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let z = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
        assert!(z > 0.0, "strip triangle {tri:?} flipped");
    }
}

#[test]
fn test_submit_line_topologies() {
    let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]];
    let mut recorder = Recorder::new();

    primitive(Topology::LineLoop, &points).submit(&mut recorder).unwrap();
    primitive(Topology::LineStrip, &points).submit(&mut recorder).unwrap();
    primitive(Topology::Lines, &points).submit(&mut recorder).unwrap();

    let calls = recorder.calls();
    assert!(matches!(calls[0], DrawCall::LineLoop { first: 0, count: 3, .. }));
    assert_eq!(calls[1].positions().len(), 4);
    // Odd trailing vertex is dropped
    assert_eq!(calls[2].positions(), &points[..2]);
}

#[test]
fn test_submit_all_preserves_order() {
    let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let batches = vec![
        primitive(Topology::Triangles, &points),
        primitive(Topology::LineLoop, &points),
    ];
    let mut recorder = Recorder::new();
    submit_all(&mut recorder, &batches).unwrap();

    assert!(matches!(
        recorder.calls()[0],
        DrawCall::Triangles { indexed: false, count: 3, .. }
    ));
    assert!(matches!(recorder.calls()[1], DrawCall::LineLoop { .. }));
}

#[test]
fn test_primitive_accessors() {
    let p = primitive(Topology::Triangles, &[[1.0, 2.0, 3.0]]);
    assert_eq!(p.vertex_count(), 1);
    assert_eq!(p.vertex(0), [1.0, 2.0, 3.0]);
    assert_eq!(p.normal(0), [0.0, 0.0, 1.0]);
}

#[test]
fn test_line_list_indices() {
    assert_eq!(line_list_indices(5).unwrap(), vec![0, 1, 2, 3]);
    assert!(line_list_indices(1).unwrap().is_empty());
}
