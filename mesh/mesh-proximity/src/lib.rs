//! Closest-point-on-mesh queries accelerated by an octree index.
//!
//! Given a triangle/quadrilateral mesh, a query point, and a maximum search
//! radius, [`ClosestPointQuery`] returns the point on the mesh surface
//! nearest the query point, or an all-NaN sentinel when no surface lies
//! within the radius. The engine is built once per mesh and is intended for
//! thousands to millions of queries against that mesh.
//!
//! # Algorithm
//!
//! Construction snapshots the mesh and, above a face-count threshold,
//! partitions space with an octree of face bounding boxes. Queries run a
//! best-first search over the tree: a min-heap keyed by squared distance to
//! each node's bounding cube visits near nodes first, and the running best
//! hit prunes everything that can no longer win. Leaf faces are resolved
//! with an exact closest-point-on-triangle kernel (quads split into two
//! triangles). Small meshes skip the tree and scan every face.
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
//! # Example
//!
//! ```
//! use mesh_proximity::{is_no_hit, ClosestPointQuery};
//! use mesh_types::{plane_grid, Point3};
//!
//! let mesh = plane_grid(8);
//! let query = ClosestPointQuery::new(&mesh).unwrap();
//!
//! let closest = query
//!     .closest_point(&Point3::new(0.75, 1.0, 0.0), f32::INFINITY)
//!     .unwrap();
//! assert!((closest.x - 0.75).abs() < 1e-5);
//!
//! // A tight radius far from the plane finds nothing.
//! let miss = query
//!     .closest_point(&Point3::new(-1000.0, -1000.0, -1000.0), 1.0)
//!     .unwrap();
//! assert!(is_no_hit(&miss));
//! ```
//!
//! # Concurrency
//!
//! A constructed engine is read-only; sharing it across threads is safe and
//! each query carries its own search state. Construction itself is
//! single-threaded.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod error;
mod octree;
mod params;
mod query;
mod triangle;

// Re-export main types and functions
pub use bounds::{BoundingBox, BoundingCube};
pub use error::{ProximityError, ProximityResult};
pub use octree::OctreeNode;
pub use params::IndexParams;
pub use query::{is_no_hit, ClosestPointQuery, IndexStats};
pub use triangle::{closest_point_on_face, closest_point_on_triangle, SurfacePoint};
