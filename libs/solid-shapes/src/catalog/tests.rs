//! # Catalog Tests
//!
//! Consistency checks over every cataloged solid.

use super::*;
use glam::Vec3;

fn vec(v: [f32; 3]) -> Vec3 {
    Vec3::from_array(v)
}

#[test]
fn test_array_lengths_match_counts() {
    for solid in Solid::ALL {
        let d = solid.descriptor();
        assert_eq!(d.vertices.len(), d.vertex_count * 3, "{solid}");
        assert_eq!(d.normals.len(), d.face_count * 3, "{solid}");
        assert_eq!(
            d.face_indices.len(),
            d.face_count * d.edges_per_face,
            "{solid}"
        );
    }
}

#[test]
fn test_face_indices_in_range() {
    for solid in Solid::ALL {
        let d = solid.descriptor();
        for &index in d.face_indices {
            assert!((index as usize) < d.vertex_count, "{solid}: index {index}");
        }
    }
}

#[test]
fn test_every_face_has_declared_edge_count() {
    for solid in Solid::ALL {
        let d = solid.descriptor();
        for face in 0..d.face_count {
            assert_eq!(d.face(face).len(), d.edges_per_face, "{solid}");
        }
    }
}

#[test]
fn test_winding_agrees_with_normals() {
    for solid in Solid::ALL {
        let d = solid.descriptor();
        for face in 0..d.face_count {
            let idx = d.face(face);
            let a = vec(d.vertex(idx[0] as usize));
            let b = vec(d.vertex(idx[1] as usize));
            let c = vec(d.vertex(idx[2] as usize));
            let n = vec(d.normal(face));
            assert!(
                (b - a).cross(c - a).dot(n) > 0.0,
                "{solid}: face {face} winds clockwise"
            );
        }
    }
}

#[test]
fn test_normals_point_outward() {
    for solid in Solid::ALL {
        let d = solid.descriptor();
        for face in 0..d.face_count {
            let centroid = d
                .face(face)
                .iter()
                .map(|&i| vec(d.vertex(i as usize)))
                .sum::<Vec3>()
                / d.edges_per_face as f32;
            assert!(centroid.dot(vec(d.normal(face))) > 0.0, "{solid}");
        }
    }
}

#[test]
fn test_faces_are_planar() {
    for solid in Solid::ALL {
        let d = solid.descriptor();
        for face in 0..d.face_count {
            let n = vec(d.normal(face));
            let heights: Vec<f32> = d
                .face(face)
                .iter()
                .map(|&i| vec(d.vertex(i as usize)).dot(n))
                .collect();
            let first = heights[0];
            for h in &heights {
                assert!((h - first).abs() < 1e-4, "{solid}: face {face}");
            }
        }
    }
}

#[test]
fn test_platonic_normals_are_unit_length() {
    // Icosahedron and rhombic dodecahedron normals are not normalized
    for solid in [
        Solid::Tetrahedron,
        Solid::Cube,
        Solid::Octahedron,
        Solid::Dodecahedron,
    ] {
        let d = solid.descriptor();
        for face in 0..d.face_count {
            let len = vec(d.normal(face)).length();
            assert!((len - 1.0).abs() < 1e-5, "{solid}: |n| = {len}");
        }
    }
}

#[test]
fn test_expanded_vertex_counts() {
    assert_eq!(TETRAHEDRON.expanded_vertex_count(), 12);
    assert_eq!(CUBE.expanded_vertex_count(), 24);
    assert_eq!(OCTAHEDRON.expanded_vertex_count(), 24);
    assert_eq!(DODECAHEDRON.expanded_vertex_count(), 60);
    assert_eq!(ICOSAHEDRON.expanded_vertex_count(), 60);
    assert_eq!(RHOMBIC_DODECAHEDRON.expanded_vertex_count(), 48);
}

#[test]
fn test_solid_names() {
    assert_eq!(Solid::Cube.name(), "cube");
    assert_eq!(Solid::RhombicDodecahedron.to_string(), "rhombic dodecahedron");
}

#[test]
fn test_solid_serialises_as_snake_case() {
    let json = serde_json::to_string(&Solid::RhombicDodecahedron).unwrap();
    assert_eq!(json, "\"rhombic_dodecahedron\"");
    let back: Solid = serde_json::from_str("\"icosahedron\"").unwrap();
    assert_eq!(back, Solid::Icosahedron);
}
