//! Generic octree over a cube-bounded region.
//!
//! The tree is grown by insertion only. Leaves hold elements; an internal
//! node owns up to eight lazily materialized children and no elements of its
//! own. Elements whose extent straddles a split plane are inserted into
//! every overlapping child, so one element may be reachable through several
//! leaves.

use crate::bounds::BoundingCube;

/// One node of an octree holding elements of type `T`.
///
/// The node is generic over the element type and an insertion-time
/// intersection predicate, so the same structure serves point sets and
/// box-bounded faces alike.
///
/// # Growth policy
///
/// A leaf at `depth` subdivides when `elements / (1 + depth)` exceeds
/// `max_fill`, unless `max_depth` is reached. On subdivision the existing
/// elements are re-inserted from scratch at the same depth, which pushes
/// them down into whichever children they overlap and leaves the now
/// internal node empty.
///
/// # Example
///
/// ```
/// use mesh_proximity::{BoundingCube, OctreeNode};
/// use nalgebra::Point3;
///
/// let mut root = OctreeNode::new(BoundingCube::new(Point3::origin(), 1.0));
/// let contains = |cube: &BoundingCube, point: &Point3<f32>| cube.contains(point);
///
/// root.insert(Point3::new(0.5, 0.5, 0.5), &contains, 10, 3.0);
/// assert!(root.is_leaf());
/// assert_eq!(root.elements().len(), 1);
/// ```
#[derive(Debug)]
pub struct OctreeNode<T> {
    bounds: BoundingCube,
    elements: Vec<T>,
    children: [Option<Box<OctreeNode<T>>>; 8],
    is_leaf: bool,
}

impl<T: Clone> OctreeNode<T> {
    /// Create a leaf node with the given bounds.
    #[must_use]
    pub fn new(bounds: BoundingCube) -> Self {
        Self {
            bounds,
            elements: Vec::new(),
            children: std::array::from_fn(|_| None),
            is_leaf: true,
        }
    }

    /// The node's bounding cube.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> &BoundingCube {
        &self.bounds
    }

    /// True if this node holds elements rather than children.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Insert an element under this node.
    ///
    /// `intersects` decides which child cubes an element belongs to; an
    /// element is duplicated into every child it overlaps. An element that
    /// overlaps no child of an internal node is dropped, which cannot
    /// happen when elements lie within the root bounds.
    pub fn insert<F>(&mut self, element: T, intersects: &F, max_depth: usize, max_fill: f32)
    where
        F: Fn(&BoundingCube, &T) -> bool,
    {
        self.walk_insert(element, intersects, 0, max_depth, max_fill);
    }

    #[allow(clippy::cast_precision_loss)] // leaf sizes are far below f32 integer range
    fn walk_insert<F>(
        &mut self,
        element: T,
        intersects: &F,
        depth: usize,
        max_depth: usize,
        max_fill: f32,
    ) where
        F: Fn(&BoundingCube, &T) -> bool,
    {
        if self.is_leaf {
            let fill = self.elements.len() as f32 / (1 + depth) as f32;
            if fill > max_fill && depth < max_depth {
                // Subdivide: existing elements are re-inserted at the same
                // depth and fall through to the children, then the incoming
                // element follows.
                self.is_leaf = false;
                let existing = std::mem::take(&mut self.elements);
                for e in existing {
                    self.walk_insert(e, intersects, depth, max_depth, max_fill);
                }
                self.walk_insert(element, intersects, depth, max_depth, max_fill);
            } else {
                self.elements.push(element);
            }
            return;
        }

        for index in 0..8 {
            let child_bounds = match &self.children[index] {
                Some(child) => child.bounds,
                None => self.bounds.child(index),
            };
            if intersects(&child_bounds, &element) {
                let child = self.children[index]
                    .get_or_insert_with(|| Box::new(OctreeNode::new(child_bounds)));
                child.walk_insert(element.clone(), intersects, depth + 1, max_depth, max_fill);
            }
        }
    }

    /// Iterate the materialized children of an internal node in child-index
    /// order. Empty for leaves.
    pub fn children(&self) -> impl Iterator<Item = &OctreeNode<T>> {
        self.children.iter().filter_map(|c| c.as_deref())
    }

    /// The elements of this node in insertion order. Empty for internal
    /// nodes.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }
}
