//! Exact closest-point kernels for triangles and faces.

use crate::error::{ProximityError, ProximityResult};
use mesh_types::Face;
use nalgebra::Point3;

/// A point on the mesh surface paired with its squared distance to the
/// query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    /// Position on the surface.
    pub position: Point3<f32>,
    /// Squared Euclidean distance from the query point to `position`.
    pub sqr_distance: f32,
}

/// Compute the point on a triangle closest to `from`.
///
/// Implements the method described in "Distance Between Point and Triangle
/// in 3D" by David Eberly: the triangle is parameterized as
/// `v0 + s*e0 + t*e1`, and the (s, t) plane is split into seven regions,
/// each with its own projection onto the closed triangle.
///
/// The squared distance is recomputed from the final point instead of the
/// parameter algebra, which would lose accuracy to cancellation near edges.
///
/// # Errors
///
/// Returns [`ProximityError::DegenerateTriangle`] if the vertices are
/// collinear.
///
/// # Example
///
/// ```
/// use mesh_proximity::closest_point_on_triangle;
/// use nalgebra::Point3;
///
/// let closest = closest_point_on_triangle(
///     &Point3::new(0.25, 0.25, 1.0),
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// )
/// .unwrap();
///
/// assert_eq!(closest.position, Point3::new(0.25, 0.25, 0.0));
/// assert!((closest.sqr_distance - 1.0).abs() < 1e-6);
/// ```
#[allow(clippy::many_single_char_names)] // the a..e coefficients follow the paper
#[allow(clippy::similar_names)]
pub fn closest_point_on_triangle(
    from: &Point3<f32>,
    v0: Point3<f32>,
    v1: Point3<f32>,
    v2: Point3<f32>,
) -> ProximityResult<SurfacePoint> {
    let edge0 = v1 - v0;
    let edge1 = v2 - v0;
    let v = v0 - from;

    let a = edge0.dot(&edge0);
    let b = edge0.dot(&edge1);
    let c = edge1.dot(&edge1);
    let d = edge0.dot(&v);
    let e = edge1.dot(&v);

    let det = a.mul_add(c, -(b * b));
    if det == 0.0 {
        return Err(ProximityError::degenerate_triangle());
    }

    // Unnormalized minimizer; region selection uses its raw signs.
    let s = b.mul_add(e, -(c * d));
    let t = b.mul_add(d, -(a * e));

    let (s, t) = if s + t <= det {
        if s < 0.0 {
            if t < 0.0 {
                // Region 4: behind the v0 corner
                if d < 0.0 {
                    (if -d >= a { 1.0 } else { -d / a }, 0.0)
                } else {
                    (0.0, edge_parameter(e, c))
                }
            } else {
                // Region 3: edge v0-v2
                (0.0, edge_parameter(e, c))
            }
        } else if t < 0.0 {
            // Region 5: edge v0-v1
            (edge_parameter(d, a), 0.0)
        } else {
            // Region 0: interior
            let inv_det = 1.0 / det;
            (s * inv_det, t * inv_det)
        }
    } else if s < 0.0 {
        // Region 2: vertex v2 or edge v1-v2
        let tmp0 = b + d;
        let tmp1 = c + e;
        if tmp1 > tmp0 {
            let num = tmp1 - tmp0;
            let denom = 2.0f32.mul_add(-b, a + c);
            let s = if num >= denom { 1.0 } else { num / denom };
            (s, 1.0 - s)
        } else {
            (0.0, if tmp1 <= 0.0 { 1.0 } else { edge_parameter(e, c) })
        }
    } else if t < 0.0 {
        // Region 6: vertex v1 or edge v1-v2, mirror of region 2
        let tmp0 = b + e;
        let tmp1 = a + d;
        if tmp1 > tmp0 {
            let num = tmp1 - tmp0;
            let denom = 2.0f32.mul_add(-b, a + c);
            let t = if num >= denom { 1.0 } else { num / denom };
            (1.0 - t, t)
        } else {
            (if tmp1 <= 0.0 { 1.0 } else { edge_parameter(d, a) }, 0.0)
        }
    } else {
        // Region 1: edge v1-v2
        let num = c + e - b - d;
        let s = if num <= 0.0 {
            0.0
        } else {
            let denom = 2.0f32.mul_add(-b, a + c);
            if num >= denom {
                1.0
            } else {
                num / denom
            }
        };
        (s, 1.0 - s)
    };

    let position = v0 + edge0 * s + edge1 * t;
    let sqr_distance = (from - position).norm_squared();
    Ok(SurfacePoint {
        position,
        sqr_distance,
    })
}

/// Clamped projection `-numerator / length` onto a single edge.
#[inline]
fn edge_parameter(numerator: f32, length: f32) -> f32 {
    if numerator >= 0.0 {
        0.0
    } else if -numerator >= length {
        1.0
    } else {
        -numerator / length
    }
}

/// Compute the closest point on a face to `from`.
///
/// Triangles evaluate the triangle kernel directly. Quadrilaterals are
/// split along the v0-v2 diagonal into triangles (v0, v1, v2) and
/// (v2, v3, v0) and the closer result wins; on a tie the first triangle's
/// result is kept. Non-planar or non-convex quads are therefore treated as
/// the union of the two triangles.
///
/// Vertex indices must be in range for `vertices`; that is the mesh
/// provider's contract.
///
/// # Errors
///
/// Returns [`ProximityError::UnsupportedArity`] for faces that are neither
/// triangles nor quadrilaterals, and propagates
/// [`ProximityError::DegenerateTriangle`] from the triangle kernel. A quad
/// with a degenerate first half fails before its second half is examined.
pub fn closest_point_on_face(
    from: &Point3<f32>,
    face: &Face,
    vertices: &[Point3<f32>],
) -> ProximityResult<SurfacePoint> {
    if !face.is_triangle() && !face.is_quad() {
        return Err(ProximityError::unsupported_arity(face.arity()));
    }

    let v0 = vertices[face.vertex_ids[0] as usize];
    let v1 = vertices[face.vertex_ids[1] as usize];
    let v2 = vertices[face.vertex_ids[2] as usize];

    let first = closest_point_on_triangle(from, v0, v1, v2)?;
    if face.is_triangle() {
        return Ok(first);
    }

    let v3 = vertices[face.vertex_ids[3] as usize];
    let second = closest_point_on_triangle(from, v2, v3, v0)?;
    Ok(if second.sqr_distance < first.sqr_distance {
        second
    } else {
        first
    })
}
