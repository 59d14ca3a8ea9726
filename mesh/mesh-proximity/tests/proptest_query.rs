//! Property-based tests for the closest-point query engine.
//!
//! These tests generate random non-degenerate triangle soups and verify
//! the engine's universal properties: returned points lie on the mesh,
//! results are idempotent, the search radius is honored, and the linear
//! and indexed search paths agree.
//!
//! Run with: cargo test -p mesh-proximity -- proptest

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::cast_possible_truncation)]

use mesh_proximity::{closest_point_on_face, is_no_hit, ClosestPointQuery, IndexParams};
use mesh_types::{Face, Point3, PolyMesh};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating random meshes
// =============================================================================

/// Generate a random point in a bounded region.
fn arb_point() -> impl Strategy<Value = Point3<f32>> {
    prop::array::uniform3(-50.0..50.0f32).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

/// Generate one well-conditioned triangle as three corner points.
fn arb_triangle() -> impl Strategy<Value = [Point3<f32>; 3]> {
    prop::array::uniform3(arb_point()).prop_filter("degenerate triangle", |&[a, b, c]| {
        (b - a).cross(&(c - a)).norm() > 1.0
    })
}

/// Generate a triangle soup with up to `max_triangles` faces. Every face is
/// non-degenerate and every index is in range by construction.
fn arb_mesh(max_triangles: usize) -> impl Strategy<Value = PolyMesh> {
    prop::collection::vec(arb_triangle(), 1..=max_triangles).prop_map(|triangles| {
        let mut mesh = PolyMesh::with_capacity(triangles.len() * 3, triangles.len());
        for [a, b, c] in triangles {
            let base = mesh.vertices.len() as u32;
            mesh.vertices.extend([a, b, c]);
            mesh.faces.push(Face::triangle(base, base + 1, base + 2));
        }
        mesh
    })
}

/// Minimum distance from `probe` to the mesh by brute force over faces.
fn brute_force_distance(mesh: &PolyMesh, probe: &Point3<f32>) -> f32 {
    mesh.faces
        .iter()
        .map(|face| {
            closest_point_on_face(probe, face, &mesh.vertices)
                .unwrap()
                .sqr_distance
        })
        .fold(f32::INFINITY, f32::min)
        .sqrt()
}

// =============================================================================
// Universal properties
// =============================================================================

proptest! {
    #[test]
    fn mesh_vertices_map_to_themselves(mesh in arb_mesh(12)) {
        let query = ClosestPointQuery::new(&mesh).unwrap();
        for vertex in &mesh.vertices {
            let closest = query.closest_point(vertex, f32::INFINITY).unwrap();
            prop_assert!(!is_no_hit(&closest));
            prop_assert!((closest - vertex).norm() <= 1e-3);
        }
    }

    #[test]
    fn unbounded_queries_are_idempotent(mesh in arb_mesh(12), probe in arb_point()) {
        let query = ClosestPointQuery::new(&mesh).unwrap();

        let first = query.closest_point(&probe, f32::INFINITY).unwrap();
        prop_assert!(!is_no_hit(&first));

        // The result lies on the surface, so querying it again moves nowhere.
        let second = query.closest_point(&first, f32::INFINITY).unwrap();
        prop_assert!((second - first).norm() <= 1e-2);
    }

    #[test]
    fn search_radius_is_honored(
        mesh in arb_mesh(10),
        probe in arb_point(),
        radius in 0.0..150.0f32,
    ) {
        let query = ClosestPointQuery::new(&mesh).unwrap();
        let result = query.closest_point(&probe, radius).unwrap();
        let true_distance = brute_force_distance(&mesh, &probe);

        if is_no_hit(&result) {
            // Nothing within the radius: the true closest point is outside it.
            prop_assert!(true_distance >= radius - 1e-3);
        } else {
            let distance = (result - probe).norm();
            prop_assert!(distance <= radius + 1e-3);
            // And the hit is the global minimum, not just any point in range.
            prop_assert!((distance - true_distance).abs() <= 1e-3);
        }
    }

    #[test]
    fn linear_and_indexed_paths_agree(mesh in arb_mesh(20), probe in arb_point()) {
        let forced_linear = ClosestPointQuery::with_params(
            &mesh,
            &IndexParams::default().linear_scan_threshold(usize::MAX),
        )
        .unwrap();
        let forced_indexed = ClosestPointQuery::with_params(
            &mesh,
            &IndexParams::default().linear_scan_threshold(0),
        )
        .unwrap();

        let a = forced_linear.closest_point(&probe, f32::INFINITY).unwrap();
        let b = forced_indexed.closest_point(&probe, f32::INFINITY).unwrap();

        // Tied faces may resolve to different points, so compare distances.
        let linear_distance = (a - probe).norm();
        let indexed_distance = (b - probe).norm();
        prop_assert!((linear_distance - indexed_distance).abs() <= 1e-3);
    }
}
