//! Traits for mesh types.

use crate::Face;
use nalgebra::Point3;

/// A read-only mesh provider.
///
/// This is the capability the query engine is constructed from. Consumers
/// copy both sequences into their own storage and never call the provider
/// again, so implementations may generate data on demand.
///
/// Vertices are indexed from 0 in iteration order; face `vertex_ids` refer
/// to those indices.
pub trait MeshSource {
    /// Iterate over all vertex positions, one entry per vertex.
    fn vertices(&self) -> impl Iterator<Item = Point3<f32>>;

    /// Iterate over all face descriptors.
    fn faces(&self) -> impl Iterator<Item = Face>;
}
