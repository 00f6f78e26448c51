//! Projection and view geometry: viewport and aspect ratio, screen-point to
//! scene rays, and view-frustum cross sections.

use core::fmt;

use euclid::Size2D;
use manyfmt::Refmt as _;

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

use crate::math::{FreeCoordinate, FreePoint, NdcPoint2, NominalPoint2, NominalSize};
use crate::ray::Ray;
use crate::util::ConciseDebug;

pub use crate::math::ViewTransform;

mod frustum;
pub use frustum::*;
mod options;
pub use options::*;

#[cfg(test)]
mod tests;

// -------------------------------------------------------------------------------------------------

/// Distance from the eye to the near plane of [`Camera::view_frustum()`].
const NEAR_PLANE_DISTANCE: FreeCoordinate = 1. / 32.;

/// Unit type for framebuffer coordinates (pixels of the rendered image, which
/// may differ in scale from [`NominalPixel`](crate::math::NominalPixel)s).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum FramebufferPixel {}

/// Viewport dimensions for aspect ratio and pointer-event interpretation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(clippy::exhaustive_structs)]
pub struct Viewport {
    /// Viewport dimensions to use for determining aspect ratio and interpreting
    /// pointer events.
    pub nominal_size: NominalSize,
    /// Viewport dimensions to use for framebuffer configuration.
    /// This aspect ratio may differ to represent non-square pixels.
    pub framebuffer_size: Size2D<u32, FramebufferPixel>,
}

impl Viewport {
    /// Construct a [`Viewport`] from a pixel count and a scale factor
    /// (the ratio of framebuffer pixels to nominal units, e.g. 2 on a “2×” display).
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn with_scale(
        scale: FreeCoordinate,
        framebuffer_size: Size2D<u32, FramebufferPixel>,
    ) -> Self {
        Self {
            nominal_size: (framebuffer_size.cast::<FreeCoordinate>() / scale).cast_unit(),
            framebuffer_size,
        }
    }

    /// An arbitrary choice of viewport for tests and other situations where the
    /// exact dimensions are irrelevant.
    #[doc(hidden)]
    pub const ARBITRARY: Viewport = Viewport {
        nominal_size: Size2D::new(2.0, 2.0),
        framebuffer_size: Size2D::new(2, 2),
    };

    /// Calculates the aspect ratio (width divided by height) of the `nominal_size` of this
    /// viewport.
    ///
    /// If the ratio would not be finite and positive (zero-sized viewport),
    /// returns 1.0 instead, so that downstream projection math stays finite.
    #[inline]
    pub fn nominal_aspect_ratio(&self) -> FreeCoordinate {
        let ratio = self.nominal_size.width / self.nominal_size.height;
        if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 }
    }

    /// Convert a point in the [`Self::nominal_size`] coordinate system (+y down)
    /// to normalized device coordinates, range −1 to 1, +y up.
    ///
    /// A degenerate (zero-sized) viewport maps every point to the center.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn normalize_nominal_point(&self, point: NominalPoint2) -> NdcPoint2 {
        let Size2D { width, height, .. } = self.nominal_size;
        if !(width > 0.0 && height > 0.0) {
            return NdcPoint2::origin();
        }
        NdcPoint2::new(
            point.x / width * 2.0 - 1.0,
            -(point.y / height * 2.0 - 1.0),
        )
    }
}

// -------------------------------------------------------------------------------------------------

/// Defines a perspective view in/of the scene, and converts screen positions
/// to scene [`Ray`]s and frustum geometry.
///
/// A [`Camera`] has the following independently controllable properties:
///
/// * A [`ViewTransform`], which specifies the viewpoint (eye position) and
///   look direction.
/// * A [`Viewport`], whose aspect ratio widens or narrows the horizontal field
///   of view.
/// * A [`ViewOptions`], whose `fov_y` and `view_distance` control the shape
///   of the view frustum.
///
/// It does not know what scene is being viewed; it is a plain data structure
/// that does some calculations. Pair it with a
/// [`SceneQuery`](crate::query::SceneQuery) to turn screen positions into
/// scene hits.
#[derive(Clone, PartialEq)]
pub struct Camera {
    options: ViewOptions,
    viewport: Viewport,
    view_transform: ViewTransform,
}

impl Camera {
    /// Constructs a [`Camera`] which will use the given options and viewport,
    /// and an identity view transform (eye at the origin looking along −Z).
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn new(options: ViewOptions, viewport: Viewport) -> Self {
        Self {
            options: options.repair(),
            viewport,
            view_transform: ViewTransform {
                rotation: euclid::Rotation3D::identity(),
                translation: euclid::Vector3D::zero(),
            },
        }
    }

    /// Returns the options last provided.
    #[inline]
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Replaces the options, first constraining them with [`ViewOptions::repair()`].
    #[inline]
    pub fn set_options(&mut self, options: ViewOptions) {
        self.options = options.repair();
    }

    /// Returns the viewport last provided.
    #[inline]
    #[mutants::skip] // trivial accessor
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Sets the viewport, affecting the aspect ratio of subsequent projections.
    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Returns the view transform last provided.
    #[inline]
    pub fn view_transform(&self) -> ViewTransform {
        self.view_transform
    }

    /// Sets the view transform; the pose of the eye within the scene.
    #[inline]
    pub fn set_view_transform(&mut self, view_transform: ViewTransform) {
        self.view_transform = view_transform;
    }

    /// Position of the eye in the scene.
    #[inline]
    pub fn view_position(&self) -> FreePoint {
        self.view_transform.translation.to_point()
    }

    /// The ray from the eye along the look direction, as long as the view distance.
    #[inline]
    pub fn look_ray(&self) -> Ray {
        Ray::from_view_transform(&self.view_transform, self.options.view_distance.into_inner())
    }

    /// Converts a screen position in normalized device coordinates (as produced by
    /// [`Viewport::normalize_nominal_point`]) into a ray in the scene.
    ///
    /// The ray originates at the eye, and its direction vector spans the distance
    /// to the far plane, so `t = 1` on the resulting ray lies on the plane at
    /// [`ViewOptions::view_distance`].
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn project_ndc_into_world(&self, ndc: NdcPoint2) -> Ray {
        let tan_half_fov = self.tan_half_fov();
        let aspect = self.viewport.nominal_aspect_ratio();
        let distance = self.options.view_distance.into_inner();
        Ray {
            origin: self.view_position(),
            direction: self.view_transform.rotation.transform_vector3d(euclid::vec3(
                ndc.x * tan_half_fov * aspect * distance,
                ndc.y * tan_half_fov * distance,
                -distance,
            )),
        }
    }

    /// Converts a position in the viewport's nominal coordinates (pointer events)
    /// into a ray in the scene.
    #[inline]
    pub fn project_nominal_into_world(&self, point: NominalPoint2) -> Ray {
        self.project_ndc_into_world(self.viewport.normalize_nominal_point(point))
    }

    /// Computes the cross-section of the view frustum at the given eye-space
    /// depth (distance in front of the eye along the look direction).
    ///
    /// The depth need not lie between the near and far planes.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn frustum_slice(&self, depth: FreeCoordinate) -> Result<FrustumSlice, FrustumError> {
        if !(depth.is_finite() && depth > 0.0) {
            return Err(FrustumError { depth });
        }
        Ok(self.slice_at(depth))
    }

    /// Computes the eight corners of the view frustum.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn view_frustum(&self) -> FrustumPoints {
        let near = self.slice_at(NEAR_PLANE_DISTANCE);
        let far = self.slice_at(self.options.view_distance.into_inner());
        FrustumPoints {
            lbn: near.lb,
            ltn: near.lt,
            rbn: near.rb,
            rtn: near.rt,
            lbf: far.lb,
            ltf: far.lt,
            rbf: far.rb,
            rtf: far.rt,
        }
    }

    /// Frustum cross-section corners; depth must already be validated.
    fn slice_at(&self, depth: FreeCoordinate) -> FrustumSlice {
        let half_height = self.tan_half_fov() * depth;
        let half_width = half_height * self.viewport.nominal_aspect_ratio();
        let corner = |x: FreeCoordinate, y: FreeCoordinate| -> FreePoint {
            let rotated = self
                .view_transform
                .rotation
                .transform_vector3d(euclid::vec3(x, y, -depth));
            (rotated + self.view_transform.translation).to_point()
        };
        FrustumSlice {
            lb: corner(-half_width, -half_height),
            lt: corner(-half_width, half_height),
            rb: corner(half_width, -half_height),
            rt: corner(half_width, half_height),
        }
    }

    fn tan_half_fov(&self) -> FreeCoordinate {
        (self.options.fov_y.into_inner() / 2.0).to_radians().tan()
    }
}

impl fmt::Debug for Camera {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            options,
            viewport,
            view_transform,
        } = self;
        f.debug_struct("Camera")
            .field("options", options)
            .field("viewport", viewport)
            .field(
                "eye_position",
                &view_transform.translation.to_point().refmt(&ConciseDebug),
            )
            .finish_non_exhaustive()
    }
}
