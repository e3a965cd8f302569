//! View frustum for culling
//!
//! Extracts frustum planes from an OpenGL-convention view-projection matrix
//! and provides intersection tests for points, spheres and boxes.

use glam::{Mat4, Vec3, Vec4};

use crate::mesh::BoundingBox;

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z, distance)
/// where the plane equation is: ax + by + cz + d = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Normalize raw plane coefficients. A zero-length normal yields the
    /// degenerate plane that accepts every point.
    #[must_use]
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let len = coefficients.truncate().length();
        if len > 0.0 {
            Self {
                normal: coefficients.truncate() / len,
                distance: coefficients.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum consisting of 6 planes
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix built with
    /// [`Mat4::perspective_rh_gl`] (clip depth in [-1, 1]).
    ///
    /// Gribb/Hartmann extraction; planes point inward.
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        Self {
            planes: [
                Plane::from_coefficients(row3 + row0),
                Plane::from_coefficients(row3 - row0),
                Plane::from_coefficients(row3 + row1),
                Plane::from_coefficients(row3 - row1),
                // [-1,1] depth: near is w + z, not z alone
                Plane::from_coefficients(row3 + row2),
                Plane::from_coefficients(row3 - row2),
            ],
        }
    }

    /// Test if a point is inside the frustum
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Test if a sphere intersects or is inside the frustum
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }

    /// Test if a sphere is completely inside the frustum (not just
    /// intersecting)
    #[inline]
    #[must_use]
    pub fn contains_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= radius)
    }

    /// Conservative box test: rejects only when the corner furthest along
    /// some plane's normal is still behind it.
    #[must_use]
    pub fn intersects_box(&self, min: Vec3, max: Vec3) -> bool {
        self.planes.iter().all(|plane| {
            let positive =
                Vec3::select(plane.normal.cmpge(Vec3::ZERO), max, min);
            plane.distance_to_point(positive) >= 0.0
        })
    }

    /// [`intersects_box`](Self::intersects_box) for a bounding box. Invalid
    /// boxes carry no extent information and are reported visible.
    #[must_use]
    pub fn intersects_bounding_box(&self, bbox: &BoundingBox) -> bool {
        !bbox.is_valid || self.intersects_box(bbox.min, bbox.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_at_origin() -> Frustum {
        let proj =
            Mat4::perspective_rh_gl(45.0_f32.to_radians(), 1.0, 0.1, 100.0);
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        Frustum::from_view_projection(proj * view)
    }

    #[test]
    fn test_frustum_contains_origin() {
        let frustum = looking_at_origin();

        // Origin should be inside the frustum
        assert!(frustum.contains_point(Vec3::ZERO));

        // Point far behind camera should be outside
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 20.0)));
    }

    #[test]
    fn near_and_far_planes_sit_at_clip_distances() {
        let frustum = looking_at_origin();
        let near = frustum.planes[4];
        let far = frustum.planes[5];
        // Camera at z=10 looking down -Z
        assert!(near.distance_to_point(Vec3::new(0.0, 0.0, 9.8)) > 0.0);
        assert!(near.distance_to_point(Vec3::new(0.0, 0.0, 9.95)) < 0.0);
        assert!(far.distance_to_point(Vec3::new(0.0, 0.0, -89.0)) > 0.0);
        assert!(far.distance_to_point(Vec3::new(0.0, 0.0, -91.0)) < 0.0);
    }

    #[test]
    fn test_sphere_intersection() {
        let frustum = looking_at_origin();

        // Sphere at origin should intersect
        assert!(frustum.intersects_sphere(Vec3::ZERO, 1.0));
        assert!(frustum.contains_sphere(Vec3::ZERO, 1.0));

        // Sphere behind camera that doesn't reach frustum
        assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, 50.0), 1.0));
    }

    #[test]
    fn sphere_straddling_a_side_plane() {
        let frustum = looking_at_origin();
        // Half-width of the view at distance 10 is ~4.14
        let edge = Vec3::new(4.2, 0.0, 0.0);
        assert!(!frustum.contains_point(edge));
        assert!(frustum.intersects_sphere(edge, 0.5));
        assert!(!frustum.contains_sphere(edge, 0.5));
    }

    #[test]
    fn box_tests() {
        let frustum = looking_at_origin();
        assert!(frustum.intersects_box(Vec3::splat(-1.0), Vec3::splat(1.0)));
        // Huge box enclosing the camera is visible even with all corners out
        assert!(
            frustum.intersects_box(Vec3::splat(-500.0), Vec3::splat(500.0))
        );
        let behind = BoundingBox::new(
            Vec3::new(-1.0, -1.0, 30.0),
            Vec3::new(1.0, 1.0, 32.0),
        );
        assert!(!frustum.intersects_bounding_box(&behind));
        assert!(frustum.intersects_bounding_box(&BoundingBox::INVALID));
    }
}
