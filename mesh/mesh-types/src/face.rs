//! Polygonal face referencing mesh vertices by index.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered tuple of vertex indices forming one mesh face.
///
/// The query engine supports triangles and quadrilaterals. Other arities can
/// be *stored* (providers are not validated up front) but are rejected with
/// an error when a query reaches them, so invalid faces in regions nobody
/// queries never surface.
///
/// Winding order carries no meaning here; the closest-point solver is
/// orientation-agnostic.
///
/// # Example
///
/// ```
/// use mesh_types::Face;
///
/// let tri = Face::triangle(0, 1, 2);
/// assert!(tri.is_triangle());
///
/// let quad = Face::quad(0, 1, 2, 3);
/// assert_eq!(quad.arity(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Vertex indices into the owning mesh's vertex array, in face order.
    pub vertex_ids: Vec<u32>,
}

impl Face {
    /// Create a triangular face.
    #[inline]
    #[must_use]
    pub fn triangle(v0: u32, v1: u32, v2: u32) -> Self {
        Self {
            vertex_ids: vec![v0, v1, v2],
        }
    }

    /// Create a quadrilateral face.
    #[inline]
    #[must_use]
    pub fn quad(v0: u32, v1: u32, v2: u32, v3: u32) -> Self {
        Self {
            vertex_ids: vec![v0, v1, v2, v3],
        }
    }

    /// Create a face from any ordered list of vertex indices.
    ///
    /// No arity check is performed; see the type-level docs.
    #[inline]
    #[must_use]
    pub fn from_ids(vertex_ids: impl Into<Vec<u32>>) -> Self {
        Self {
            vertex_ids: vertex_ids.into(),
        }
    }

    /// Number of vertices in this face.
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.vertex_ids.len()
    }

    /// True if this face has exactly three vertices.
    #[inline]
    #[must_use]
    pub fn is_triangle(&self) -> bool {
        self.vertex_ids.len() == 3
    }

    /// True if this face has exactly four vertices.
    #[inline]
    #[must_use]
    pub fn is_quad(&self) -> bool {
        self.vertex_ids.len() == 4
    }
}

impl From<[u32; 3]> for Face {
    fn from(ids: [u32; 3]) -> Self {
        Self {
            vertex_ids: ids.to_vec(),
        }
    }
}

impl From<[u32; 4]> for Face {
    fn from(ids: [u32; 4]) -> Self {
        Self {
            vertex_ids: ids.to_vec(),
        }
    }
}
