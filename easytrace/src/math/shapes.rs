use core::f64::consts::TAU;

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

use crate::math::{FreeCoordinate, FreePoint, FreeVector, LineVertex, Wireframe};

/// Number of line segments making up each debug-drawn circle.
const CIRCLE_SEGMENTS: usize = 24;

/// A sphere given by center and radius, for debug drawing.
///
/// Its wireframe is three axis-aligned great circles.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[expect(clippy::exhaustive_structs)]
pub struct Sphere {
    /// Center point.
    pub center: FreePoint,
    /// Distance from the center to the surface.
    pub radius: FreeCoordinate,
}

impl Wireframe for Sphere {
    #[allow(clippy::missing_inline_in_public_items)]
    fn wireframe_points<E>(&self, output: &mut E)
    where
        E: Extend<LineVertex>,
    {
        fn ang(step: usize) -> f64 {
            (step as f64) * (TAU / CIRCLE_SEGMENTS as f64)
        }

        // One circle per coordinate plane, each defined by the two axes it spans.
        const PLANES: [[FreeVector; 2]; 3] = [
            [FreeVector::new(1., 0., 0.), FreeVector::new(0., 1., 0.)],
            [FreeVector::new(0., 1., 0.), FreeVector::new(0., 0., 1.)],
            [FreeVector::new(0., 0., 1.), FreeVector::new(1., 0., 0.)],
        ];
        for [axis_1, axis_2] in PLANES {
            let circle_point = |step: usize| -> LineVertex {
                (self.center
                    + axis_1 * (self.radius * ang(step).cos())
                    + axis_2 * (self.radius * ang(step).sin()))
                .into()
            };
            output.extend(
                (0..CIRCLE_SEGMENTS).flat_map(|step| [circle_point(step), circle_point(step + 1)]),
            );
        }
    }
}

/// A three-axis cross marker, for debug drawing at sample and hit points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[expect(clippy::exhaustive_structs)]
pub struct Cross {
    /// Center point.
    pub center: FreePoint,
    /// Distance from the center to each of the six arm tips.
    pub half_size: FreeCoordinate,
}

impl Wireframe for Cross {
    #[allow(clippy::missing_inline_in_public_items)]
    fn wireframe_points<E>(&self, output: &mut E)
    where
        E: Extend<LineVertex>,
    {
        const AXES: [FreeVector; 3] = [
            FreeVector::new(1., 0., 0.),
            FreeVector::new(0., 1., 0.),
            FreeVector::new(0., 0., 1.),
        ];
        output.extend(AXES.into_iter().flat_map(|axis| {
            [
                (self.center - axis * self.half_size).into(),
                (self.center + axis * self.half_size).into(),
            ]
        }));
    }
}
