//! Indexed polygonal mesh.

use crate::{Aabb, Face, MeshSource};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed polygonal mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices by
/// index. Faces may be triangles or quadrilaterals; the query engine rejects
/// other arities when it reaches them.
///
/// # Example
///
/// ```
/// use mesh_types::{PolyMesh, Face, Point3};
///
/// let mut mesh = PolyMesh::new();
/// mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.faces.push(Face::triangle(0, 1, 2));
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f32>>,

    /// Faces as ordered vertex-index tuples.
    pub faces: Vec<Face>,
}

impl PolyMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{PolyMesh, Face, Point3};
    ///
    /// let vertices = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ];
    /// let faces = vec![Face::triangle(0, 1, 2)];
    ///
    /// let mesh = PolyMesh::from_parts(vertices, faces);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f32>>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Create a triangle mesh from raw coordinate and index data.
    ///
    /// # Arguments
    ///
    /// * `positions` - Flat array of vertex positions `[x0, y0, z0, x1, ...]`
    /// * `indices` - Flat array of triangle indices `[v0a, v1a, v2a, v0b, ...]`
    ///
    /// Returns an empty mesh if either slice length is not divisible by 3.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::PolyMesh;
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let indices = [0, 1, 2];
    ///
    /// let mesh = PolyMesh::from_raw(&positions, &indices);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f32], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| Face::triangle(c[0], c[1], c[2]))
            .collect();

        Self { vertices, faces }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices or no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Compute the axis-aligned bounding box of all vertices.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }
}

impl MeshSource for PolyMesh {
    fn vertices(&self) -> impl Iterator<Item = Point3<f32>> {
        self.vertices.iter().copied()
    }

    fn faces(&self) -> impl Iterator<Item = Face> {
        self.faces.iter().cloned()
    }
}

/// Build a slanted quad-grid plane mesh with `resolution`² faces.
///
/// Vertices lie at `(x, y, y) / resolution` for integer `x, y` in
/// `0..=resolution`, so the plane rises along +Y. Each grid cell is one
/// quadrilateral face. Deterministic; used by tests and benchmarks as a mesh
/// whose face count scales quadratically with `resolution`.
///
/// # Panics
///
/// Panics if `resolution` is zero.
///
/// # Example
///
/// ```
/// use mesh_types::plane_grid;
///
/// let mesh = plane_grid(4);
/// assert_eq!(mesh.vertex_count(), 25);
/// assert_eq!(mesh.face_count(), 16);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)] // grid resolutions are far below f32 integer range
pub fn plane_grid(resolution: u32) -> PolyMesh {
    assert!(resolution > 0, "plane_grid resolution must be positive");

    let r = resolution;
    let step = 1.0 / r as f32;
    let vertex_index = |x: u32, y: u32| x + y * (r + 1);

    let mut mesh = PolyMesh::with_capacity(((r + 1) * (r + 1)) as usize, (r * r) as usize);

    for y in 0..=r {
        for x in 0..=r {
            mesh.vertices
                .push(Point3::new(x as f32 * step, y as f32 * step, y as f32 * step));
        }
    }

    for y in 0..r {
        for x in 0..r {
            mesh.faces.push(Face::quad(
                vertex_index(x, y),
                vertex_index(x + 1, y),
                vertex_index(x + 1, y + 1),
                vertex_index(x, y + 1),
            ));
        }
    }

    mesh
}
