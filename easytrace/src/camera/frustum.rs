use core::fmt;

use manyfmt::Refmt as _;

use crate::math::{FreeCoordinate, FreePoint, LineVertex, Wireframe, line_loop};
use crate::util::ConciseDebug;

#[cfg(doc)]
use crate::camera::Camera;

// -------------------------------------------------------------------------------------------------

/// A cross-section of a [`Camera`]'s view frustum: the four corners of the
/// rectangle where the frustum meets the plane at a given eye-space depth,
/// expressed in scene coordinates.
///
/// Produced by [`Camera::frustum_slice()`]. Its [`Wireframe`] implementation
/// draws the rectangle's outline.
#[derive(Clone, Copy, PartialEq)]
#[expect(clippy::exhaustive_structs)]
pub struct FrustumSlice {
    /// Left bottom corner.
    pub lb: FreePoint,
    /// Left top corner.
    pub lt: FreePoint,
    /// Right bottom corner.
    pub rb: FreePoint,
    /// Right top corner.
    pub rt: FreePoint,
}

impl FrustumSlice {
    /// Interpolate a point on the slice.
    ///
    /// `u` ranges 0 to 1 from the left edge to the right edge, and `v` ranges
    /// 0 to 1 from the top edge to the bottom edge, matching the row-major
    /// scan order of [`ScanGrid`](crate::scan::ScanGrid). Inputs outside that
    /// range extrapolate.
    #[must_use]
    #[inline]
    pub fn point_at(&self, u: FreeCoordinate, v: FreeCoordinate) -> FreePoint {
        let top = self.lt.lerp(self.rt, u);
        let bottom = self.lb.lerp(self.rb, u);
        top.lerp(bottom, v)
    }

    /// Length of the slice's top edge.
    #[inline]
    pub fn width(&self) -> FreeCoordinate {
        (self.rt - self.lt).length()
    }

    /// Length of the slice's left edge.
    #[inline]
    pub fn height(&self) -> FreeCoordinate {
        (self.lt - self.lb).length()
    }
}

impl fmt::Debug for FrustumSlice {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { lb, lt, rb, rt } = self;
        f.debug_struct("FrustumSlice")
            .field("lb", &lb.refmt(&ConciseDebug))
            .field("lt", &lt.refmt(&ConciseDebug))
            .field("rb", &rb.refmt(&ConciseDebug))
            .field("rt", &rt.refmt(&ConciseDebug))
            .finish()
    }
}

impl Wireframe for FrustumSlice {
    #[allow(clippy::missing_inline_in_public_items)]
    fn wireframe_points<E>(&self, output: &mut E)
    where
        E: Extend<LineVertex>,
    {
        line_loop(
            [self.lb, self.lt, self.rt, self.rb].map(LineVertex::from),
            output,
        );
    }
}

// -------------------------------------------------------------------------------------------------

/// All eight corners of a [`Camera`]'s view frustum, expressed in scene
/// coordinates.
///
/// Corner names: `l`eft/`r`ight, `b`ottom/`t`op, `n`ear/`f`ar.
/// Its [`Wireframe`] implementation draws the twelve frustum edges.
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(clippy::exhaustive_structs)]
#[allow(missing_docs)]
pub struct FrustumPoints {
    pub lbn: FreePoint,
    pub ltn: FreePoint,
    pub rbn: FreePoint,
    pub rtn: FreePoint,
    pub lbf: FreePoint,
    pub ltf: FreePoint,
    pub rbf: FreePoint,
    pub rtf: FreePoint,
}

impl FrustumPoints {
    /// The near-plane cross-section.
    #[inline]
    pub fn near_slice(&self) -> FrustumSlice {
        FrustumSlice {
            lb: self.lbn,
            lt: self.ltn,
            rb: self.rbn,
            rt: self.rtn,
        }
    }

    /// The far-plane cross-section.
    #[inline]
    pub fn far_slice(&self) -> FrustumSlice {
        FrustumSlice {
            lb: self.lbf,
            lt: self.ltf,
            rb: self.rbf,
            rt: self.rtf,
        }
    }
}

impl Wireframe for FrustumPoints {
    #[allow(clippy::missing_inline_in_public_items)]
    fn wireframe_points<E>(&self, output: &mut E)
    where
        E: Extend<LineVertex>,
    {
        self.near_slice().wireframe_points(output);
        self.far_slice().wireframe_points(output);
        // Edges connecting the two planes.
        output.extend(
            [
                self.lbn, self.lbf, self.ltn, self.ltf, self.rbn, self.rbf, self.rtn, self.rtf,
            ]
            .map(LineVertex::from),
        );
    }
}

// -------------------------------------------------------------------------------------------------

/// Error from [`Camera::frustum_slice()`].
#[derive(Clone, Copy, Debug, PartialEq, displaydoc::Display)]
#[displaydoc("frustum slice depth must be positive and finite, but was {depth}")]
#[non_exhaustive]
pub struct FrustumError {
    /// The rejected depth value.
    pub depth: FreeCoordinate,
}

impl core::error::Error for FrustumError {}
