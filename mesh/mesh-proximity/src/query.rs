//! Closest-point query engine.
//!
//! [`ClosestPointQuery`] snapshots a mesh at construction, builds an octree
//! over per-face bounding boxes when the mesh is large enough to repay the
//! bookkeeping, and answers repeated queries with a best-first search over
//! the tree. Small meshes scan every face instead.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use mesh_types::{Aabb, Face, MeshSource};
use nalgebra::Point3;
use tracing::{debug, info};

use crate::bounds::{BoundingBox, BoundingCube};
use crate::error::{ProximityError, ProximityResult};
use crate::octree::OctreeNode;
use crate::params::IndexParams;
use crate::triangle::{closest_point_on_face, SurfacePoint};

/// One octree entry: a face, by index into the engine's face array, paired
/// with that face's bounding box.
#[derive(Debug, Clone)]
struct FaceElement {
    face: u32,
    bounds: BoundingBox,
}

/// Check if a point is the "no surface within range" sentinel.
///
/// [`ClosestPointQuery::closest_point`] reserves the all-NaN point for
/// exactly this meaning, so testing any component suffices.
#[inline]
#[must_use]
pub fn is_no_hit(point: &Point3<f32>) -> bool {
    point.x.is_nan() || point.y.is_nan() || point.z.is_nan()
}

fn no_hit() -> SurfacePoint {
    SurfacePoint {
        position: Point3::new(f32::NAN, f32::NAN, f32::NAN),
        sqr_distance: f32::INFINITY,
    }
}

/// Shape summary of a built spatial index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    /// Total node count, including the root.
    pub nodes: usize,
    /// Number of leaf nodes.
    pub leaves: usize,
    /// Element entries across all leaves. A face straddling a split plane
    /// counts once per leaf that holds it.
    pub elements: usize,
    /// Depth of the deepest leaf; the root is at depth 0.
    pub max_depth: usize,
}

/// Closest-point-on-mesh queries against a fixed mesh.
///
/// The engine copies the provider's vertices and faces at construction and
/// never calls the provider again. After construction all state is
/// read-only, so one engine can serve queries from many threads at once;
/// each query owns its own search state.
///
/// # Example
///
/// ```
/// use mesh_proximity::{is_no_hit, ClosestPointQuery};
/// use mesh_types::{Face, PolyMesh, Point3};
///
/// let mesh = PolyMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![Face::triangle(0, 1, 2)],
/// );
/// let query = ClosestPointQuery::new(&mesh).unwrap();
///
/// let closest = query
///     .closest_point(&Point3::new(0.25, 0.25, 1.0), f32::INFINITY)
///     .unwrap();
/// assert_eq!(closest, Point3::new(0.25, 0.25, 0.0));
///
/// // Nothing within half a unit of a faraway point.
/// let miss = query
///     .closest_point(&Point3::new(10.0, 10.0, 10.0), 0.5)
///     .unwrap();
/// assert!(is_no_hit(&miss));
/// ```
#[derive(Debug)]
pub struct ClosestPointQuery {
    vertices: Vec<Point3<f32>>,
    faces: Vec<Face>,
    index: Option<OctreeNode<FaceElement>>,
}

impl ClosestPointQuery {
    /// Build a query engine with default [`IndexParams`].
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::EmptyMesh`] if the provider yields no
    /// vertices. Face arity and degeneracy are *not* checked here; they
    /// surface from [`Self::closest_point`] when a query reaches an
    /// offending face.
    pub fn new(source: &impl MeshSource) -> ProximityResult<Self> {
        Self::with_params(source, &IndexParams::default())
    }

    /// Build a query engine with explicit index tunables.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::EmptyMesh`] if the provider yields no
    /// vertices.
    pub fn with_params(source: &impl MeshSource, params: &IndexParams) -> ProximityResult<Self> {
        let vertices: Vec<Point3<f32>> = source.vertices().collect();
        let faces: Vec<Face> = source.faces().collect();

        if vertices.is_empty() {
            return Err(ProximityError::empty_mesh());
        }

        let index = if faces.len() >= params.linear_scan_threshold {
            Some(build_index(&vertices, &faces, params))
        } else {
            None
        };

        info!(
            vertices = vertices.len(),
            faces = faces.len(),
            indexed = index.is_some(),
            "constructed closest-point query"
        );

        Ok(Self {
            vertices,
            faces,
            index,
        })
    }

    /// Return the closest point on the mesh within `max_dist` of `point`,
    /// or the all-NaN sentinel (see [`is_no_hit`]) if no surface is that
    /// close. `max_dist` must be non-negative and may be infinite.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::UnsupportedArity`] or
    /// [`ProximityError::DegenerateTriangle`] if the search reaches an
    /// invalid face. The engine itself stays usable, but queries that reach
    /// the same face will keep failing.
    pub fn closest_point(
        &self,
        point: &Point3<f32>,
        max_dist: f32,
    ) -> ProximityResult<Point3<f32>> {
        let sqr_max_dist = max_dist * max_dist;
        let best = match &self.index {
            Some(root) => self.search_index(root, point, sqr_max_dist)?,
            None => self.scan_faces(point, sqr_max_dist)?,
        };
        Ok(best.position)
    }

    /// Number of vertices in the snapshot.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces in the snapshot.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Shape of the spatial index, or `None` when the mesh fell below the
    /// linear-scan threshold and no index was built.
    #[must_use]
    pub fn stats(&self) -> Option<IndexStats> {
        self.index.as_ref().map(|root| {
            let mut stats = IndexStats::default();
            collect_stats(root, 0, &mut stats);
            stats
        })
    }

    /// Reduce over every face. Used when no index was built.
    fn scan_faces(&self, point: &Point3<f32>, sqr_max_dist: f32) -> ProximityResult<SurfacePoint> {
        let mut best = no_hit();
        for face in &self.faces {
            let candidate = closest_point_on_face(point, face, &self.vertices)?;
            if candidate.sqr_distance < sqr_max_dist && candidate.sqr_distance < best.sqr_distance {
                best = candidate;
            }
        }
        Ok(best)
    }

    /// Best-first search over the octree.
    ///
    /// The heap is keyed by squared distance from the query point to each
    /// node's cube, a lower bound on the distance to any surface the node's
    /// subtree holds. Children are pushed only while they can still beat
    /// the running best, and the pop-time check covers bests that improved
    /// after a push.
    fn search_index(
        &self,
        root: &OctreeNode<FaceElement>,
        point: &Point3<f32>,
        sqr_max_dist: f32,
    ) -> ProximityResult<SurfacePoint> {
        let mut best = no_hit();
        let mut heap = BinaryHeap::new();
        heap.push(SearchItem {
            sqr_distance: root.bounds().sqr_distance_to(point),
            node: root,
        });

        while let Some(item) = heap.pop() {
            if item.sqr_distance >= best.sqr_distance {
                // The nearest unvisited node cannot beat the running best,
                // so nothing on the heap can.
                break;
            }

            if item.node.is_leaf() {
                for element in item.node.elements() {
                    let face = &self.faces[element.face as usize];
                    let candidate = closest_point_on_face(point, face, &self.vertices)?;
                    if candidate.sqr_distance < sqr_max_dist
                        && candidate.sqr_distance < best.sqr_distance
                    {
                        best = candidate;
                    }
                }
            } else {
                for child in item.node.children() {
                    let sqr_distance = child.bounds().sqr_distance_to(point);
                    if sqr_distance < best.sqr_distance {
                        heap.push(SearchItem {
                            sqr_distance,
                            node: child,
                        });
                    }
                }
            }
        }

        Ok(best)
    }
}

/// Derive the root cube from the mesh extent and push every face in.
#[allow(clippy::cast_possible_truncation)] // face indices fit u32 by the mesh contract
fn build_index(
    vertices: &[Point3<f32>],
    faces: &[Face],
    params: &IndexParams,
) -> OctreeNode<FaceElement> {
    let extent = Aabb::from_points(vertices.iter());
    let mut root = OctreeNode::new(BoundingCube::from_aabb(&extent));

    let overlaps = |cube: &BoundingCube, element: &FaceElement| cube.overlaps(&element.bounds);
    for (face_index, face) in faces.iter().enumerate() {
        let face_extent =
            Aabb::from_points(face.vertex_ids.iter().map(|&id| &vertices[id as usize]));
        root.insert(
            FaceElement {
                face: face_index as u32,
                bounds: BoundingBox::from_aabb(&face_extent),
            },
            &overlaps,
            params.max_depth,
            params.max_fill,
        );
    }

    let mut stats = IndexStats::default();
    collect_stats(&root, 0, &mut stats);
    debug!(
        nodes = stats.nodes,
        leaves = stats.leaves,
        elements = stats.elements,
        max_depth = stats.max_depth,
        "built octree index"
    );

    root
}

fn collect_stats(node: &OctreeNode<FaceElement>, depth: usize, stats: &mut IndexStats) {
    stats.nodes += 1;
    if node.is_leaf() {
        stats.leaves += 1;
        stats.elements += node.elements().len();
        stats.max_depth = stats.max_depth.max(depth);
    } else {
        for child in node.children() {
            collect_stats(child, depth + 1, stats);
        }
    }
}

/// Heap entry holding a node reference for the duration of one query,
/// ordered so that [`BinaryHeap`] pops the smallest squared distance first.
struct SearchItem<'a> {
    sqr_distance: f32,
    node: &'a OctreeNode<FaceElement>,
}

impl PartialEq for SearchItem<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.sqr_distance == other.sqr_distance
    }
}

impl Eq for SearchItem<'_> {}

impl PartialOrd for SearchItem<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchItem<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; distances are never NaN.
        other
            .sqr_distance
            .partial_cmp(&self.sqr_distance)
            .unwrap_or(Ordering::Equal)
    }
}
