//! Rays (half-infinite line segments) and their construction from viewer poses.

use core::f64::consts::TAU;

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

use crate::math::{
    EyeVector, FreeCoordinate, FreePoint, FreeVector, LineVertex, ViewTransform, Wireframe,
};

/// A ray; a half-infinite line segment (sometimes used as finite by the length of the
/// direction vector).
///
/// Distances along the ray (`t` values, as in [`Hit::t_distance`]) are measured in
/// multiples of `direction`, so callers wanting world-unit distances should supply a
/// unit-length direction.
///
/// [`Hit::t_distance`]: crate::query::Hit
#[allow(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Ray {
    /// The sole endpoint of the ray.
    pub origin: FreePoint,

    /// The direction in which the ray extends infinitely.
    ///
    /// The meaning, if any, of the magnitude of this vector depends on context;
    /// considered as a geometric object it is a parameter.
    pub direction: FreeVector,
}

impl Ray {
    /// Constructs a [`Ray`] from convertible types (e.g. tuples or 3-element arrays).
    /// Other than the use of [`Into`], this is equivalent to a struct literal.
    ///
    /// ```
    /// use easytrace::euclid::{point3, vec3};
    /// use easytrace::ray::Ray;
    ///
    /// assert_eq!(
    ///     Ray::new([1., 2., 3.], [4., 5., 6.]),
    ///     Ray {
    ///         origin: point3(1., 2., 3.),
    ///         direction: vec3(4., 5., 6.),
    ///     }
    /// );
    /// ```
    #[allow(clippy::missing_inline_in_public_items)] // is generic already
    pub fn new(origin: impl Into<FreePoint>, direction: impl Into<FreeVector>) -> Self {
        Self {
            origin: origin.into(),
            direction: direction.into(),
        }
    }

    /// Constructs a [`Ray`] originating at the viewer's eye and extending `length`
    /// along the viewer's look direction (the −Z axis of eye space).
    #[must_use]
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn from_view_transform(transform: &ViewTransform, length: FreeCoordinate) -> Self {
        Self {
            origin: transform.translation.to_point(),
            direction: transform
                .rotation
                .transform_vector3d(EyeVector::new(0., 0., -length)),
        }
    }

    /// Scale the ray's direction vector by the given factor.
    #[must_use]
    #[inline]
    pub fn scale_direction(self, scale: FreeCoordinate) -> Self {
        Self {
            origin: self.origin,
            direction: self.direction * scale,
        }
    }

    /// Return `self.origin + self.direction`, the “far end” of the ray.
    ///
    /// This only makes sense in contexts which are specifically using the length of the
    /// direction vector as a distance, or for visualization as a line segment.
    #[must_use]
    #[inline]
    pub fn unit_endpoint(self) -> FreePoint {
        self.origin + self.direction
    }

    /// Move the ray's origin `t` multiples of `direction` forward, leaving the
    /// direction unchanged.
    #[must_use]
    #[inline]
    pub fn advance(self, t: FreeCoordinate) -> Self {
        Self {
            origin: self.origin + self.direction * t,
            direction: self.direction,
        }
    }
}

impl Wireframe for Ray {
    #[allow(clippy::missing_inline_in_public_items)]
    fn wireframe_points<E>(&self, output: &mut E)
    where
        E: Extend<LineVertex>,
    {
        // Draw line
        let tip = self.unit_endpoint();
        output.extend([self.origin.into(), tip.into()]);

        // If the length is nonzero, draw arrowhead
        let length = self.direction.length();
        if length.partial_cmp(&0.0) != Some(core::cmp::Ordering::Greater) {
            return;
        }
        let norm_dir = self.direction / length;

        // Pick a size of arrowhead
        let head_length = (length * 0.25).min(0.125);
        let head_width = head_length * 0.25;
        let head_base_point = tip - norm_dir * head_length;

        // Pick a set of perpendicular axes
        let mut perp1 = norm_dir.cross(FreeVector::new(0., 1., 0.));
        if (perp1.length() - 1.0).abs() > 1e-2 {
            // handle parallel-to-up vectors
            perp1 = norm_dir.cross(FreeVector::new(1., 0., 0.));
        }
        let perp2 = norm_dir.cross(perp1);

        // Generate a wireframe cone
        fn ang(step: i32) -> f64 {
            f64::from(step) * (TAU / 8.0)
        }
        for step in 0..8 {
            let circle_point = head_base_point
                + perp1 * head_width * ang(step).sin()
                + perp2 * head_width * ang(step).cos();
            let adj_circle_point = head_base_point
                + perp1 * head_width * ang(step + 1).sin()
                + perp2 * head_width * ang(step + 1).cos();
            output.extend([
                circle_point.into(),
                tip.into(),
                circle_point.into(),
                adj_circle_point.into(),
            ]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use euclid::{Angle, Rotation3D, point3, vec3};

    #[test]
    fn advance_moves_origin_only() {
        let ray = Ray::new([1., 2., 3.], [10., 0., 0.]);
        assert_eq!(ray.advance(0.5), Ray::new([6., 2., 3.], [10., 0., 0.]));
    }

    #[test]
    fn unit_endpoint_and_scale() {
        let ray = Ray::new([0., 0., 0.], [1., 2., 3.]);
        assert_eq!(ray.unit_endpoint(), point3(1., 2., 3.));
        assert_eq!(
            ray.scale_direction(2.0).unit_endpoint(),
            point3(2., 4., 6.)
        );
    }

    #[test]
    fn from_view_transform_looks_along_negative_z() {
        let transform = ViewTransform {
            rotation: Rotation3D::identity(),
            translation: vec3(1., 2., 3.),
        };
        assert_eq!(
            Ray::from_view_transform(&transform, 10.0),
            Ray::new([1., 2., 3.], [0., 0., -10.])
        );
    }

    #[test]
    fn from_view_transform_applies_rotation() {
        // Yaw 90° to the left turns −Z into −X.
        let transform = ViewTransform {
            rotation: Rotation3D::around_y(Angle::degrees(90.0)),
            translation: vec3(0., 0., 0.),
        };
        let ray = Ray::from_view_transform(&transform, 1.0);
        assert!((ray.direction - vec3(-1., 0., 0.)).length() < 1e-9);
    }

    #[test]
    fn wireframe_smoke_test() {
        let mut output: Vec<LineVertex> = Vec::new();
        Ray::new([1., 2., 3.], [0., 0., -1.]).wireframe_points(&mut output);
        assert!(output.len() > 2);
        assert_eq!(output[0].position, point3(1., 2., 3.));
        assert_eq!(output[1].position, point3(1., 2., 2.));

        // A zero-length ray draws no arrowhead.
        output.clear();
        Ray::new([1., 2., 3.], [0., 0., 0.]).wireframe_points(&mut output);
        assert_eq!(output.len(), 2);
    }
}
