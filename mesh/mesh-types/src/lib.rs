//! Core mesh types for closest-point queries.
//!
//! This crate provides the foundational types consumed by the query engine:
//!
//! - [`PolyMesh`] - A polygonal mesh with indexed vertices
//! - [`Face`] - An ordered tuple of vertex indices (triangles, quads)
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`MeshSource`] - The mesh-provider capability queries are built from
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero framework dependencies**. It can be
//! used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Other game engines
//!
//! # Units and Precision
//!
//! This library is **unit-agnostic**. All coordinates are `f32`; the query
//! engine's external interfaces are single precision, and the types here
//! match it.
//!
//! # Example
//!
//! ```
//! use mesh_types::{PolyMesh, Face, Point3};
//!
//! // Create a simple triangle mesh
//! let mut mesh = PolyMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
//! mesh.faces.push(Face::triangle(0, 1, 2));
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod face;
mod mesh;
mod traits;

// Re-export core types
pub use bounds::Aabb;
pub use face::Face;
pub use mesh::{plane_grid, PolyMesh};
pub use traits::MeshSource;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
