//! Center/half-width bounding volumes for the octree.
//!
//! The octree partitions space with cubes so that children subdivide
//! uniformly; per-face bounds stay rectangular. Both are stored as a center
//! and half-widths, which makes the overlap and distance tests symmetric
//! around the center.

use mesh_types::Aabb;
use nalgebra::{Point3, Vector3};

/// An axis-aligned bounding cube: a center and one half-width shared by all
/// three axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCube {
    /// Cube center.
    pub center: Point3<f32>,
    /// Half the cube's edge length.
    pub half_width: f32,
}

impl BoundingCube {
    /// Create a cube from its center and half-width.
    #[inline]
    #[must_use]
    pub const fn new(center: Point3<f32>, half_width: f32) -> Self {
        Self { center, half_width }
    }

    /// The smallest cube enclosing an extent: centered at the extent's
    /// midpoint with half the longest axis as half-width.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            center: aabb.center(),
            half_width: aabb.max_extent() * 0.5,
        }
    }

    /// Bounds of the child cube at `index`.
    ///
    /// Children are indexed by the sign of each axis relative to the parent
    /// center: bit 0 = x, bit 1 = y, bit 2 = z, with a set bit on the
    /// positive side. The child half-width is half the parent's and its
    /// center is offset by that amount along each axis.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        debug_assert!(index < 8);
        let half_width = self.half_width * 0.5;
        let offset = |bit: usize| {
            if index & bit != 0 {
                half_width
            } else {
                -half_width
            }
        };
        Self {
            center: Point3::new(
                self.center.x + offset(1),
                self.center.y + offset(2),
                self.center.z + offset(4),
            ),
            half_width,
        }
    }

    /// Squared distance from `point` to the closest point of the cube.
    ///
    /// Zero when the point is inside. For any surface contained in the
    /// cube this is a lower bound on the squared distance from `point` to
    /// that surface, which is what makes it a valid best-first search key.
    #[inline]
    #[must_use]
    pub fn sqr_distance_to(&self, point: &Point3<f32>) -> f32 {
        let d = (point - self.center).abs() - Vector3::repeat(self.half_width);
        Vector3::new(d.x.max(0.0), d.y.max(0.0), d.z.max(0.0)).norm_squared()
    }

    /// Check if the cube contains a point. Boundary points are inside.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f32>) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_width && d.y <= self.half_width && d.z <= self.half_width
    }

    /// Check if the cube overlaps a bounding box. Touching counts.
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        let d = (self.center - other.center).abs();
        d.x <= self.half_width + other.half_width.x
            && d.y <= self.half_width + other.half_width.y
            && d.z <= self.half_width + other.half_width.z
    }
}

/// An axis-aligned bounding box: a center and per-axis half-widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Box center.
    pub center: Point3<f32>,
    /// Half the box's extent along each axis.
    pub half_width: Vector3<f32>,
}

impl BoundingBox {
    /// Create a box from its center and half-widths.
    #[inline]
    #[must_use]
    pub const fn new(center: Point3<f32>, half_width: Vector3<f32>) -> Self {
        Self { center, half_width }
    }

    /// The tight box around an extent.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            center: aabb.center(),
            half_width: aabb.size() * 0.5,
        }
    }
}
