//! Mathematical utilities and decisions.

pub use ordered_float::{FloatIsNan, NotNan};

use crate::util::MapExtend;

mod color;
pub use color::*;
mod coord;
pub use coord::*;
mod shapes;
pub use shapes::*;

/// Allows writing a [`NotNan`] value as a constant expression (which is not currently
/// a feature provided by the [`ordered_float`] crate itself).
///
/// Note that if the expression does not need to be constant, this macro may not be
/// needed; infallible construction can be written using `NotNan::from(an_integer)`,
/// `NotNan::zero()`, and `NotNan::one()`.
///
/// # Examples
///
/// ```
/// use easytrace::{notnan, math::NotNan};
///
/// const X: NotNan<f32> = notnan!(1.234);
/// ```
///
/// If anything other than a floating-point literal is used, the code will not compile:
///
/// ```compile_fail
/// # use easytrace::{notnan, math::NotNan};
/// // Not a literal; will not compile
/// const X: NotNan<f32> = notnan!(f32::NAN);
/// ```
#[macro_export]
macro_rules! notnan {
    ($value:literal) => {
        match $value {
            value => {
                // Safety: Only literal values are allowed, which will either be a non-NaN
                // float or (as checked below) a type mismatch.
                let result = unsafe { $crate::math::NotNan::new_unchecked(value) };

                // Ensure that the type is one which could have resulted from a float literal,
                // by requiring type unification with a literal. This prohibits char, &str, etc.
                let _ = if false {
                    // Safety: Statically never NaN, and is also never executed.
                    unsafe { $crate::math::NotNan::new_unchecked(0.0) }
                } else {
                    result
                };

                result
            }
        }
    };
}

/// Geometric objects that can be drawn as wireframes.
pub trait Wireframe {
    /// Represent this object as a line drawing, or wireframe.
    ///
    /// The generated points should be in pairs, each pair defining a line segment.
    /// If there are an odd number of vertices, the caller should ignore the last.
    ///
    /// Design note: This method accepts a destination to write to, rather than returning an
    /// iterator, because if it did return an iterator, it would be difficult to compose in
    /// ways like allocating a temporary `Wireframe` and delegating to that, if it borrowed
    /// its input, and would risk composing a very large yet unnecessary iterator struct
    /// if it owned its input.
    /// This way, composition is simply calling further functions.
    fn wireframe_points<E>(&self, output: &mut E)
    where
        E: Extend<LineVertex>;
}

impl<T: Wireframe> Wireframe for Option<T> {
    #[allow(clippy::missing_inline_in_public_items)]
    fn wireframe_points<E>(&self, output: &mut E)
    where
        E: Extend<LineVertex>,
    {
        if let Some(value) = self {
            value.wireframe_points(output)
        }
    }
}

/// One end of a line to be drawn.
///
/// These are the output of [`Wireframe::wireframe_points()`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(clippy::exhaustive_structs)]
pub struct LineVertex {
    /// Position of the vertex.
    pub position: FreePoint,

    /// Color in which to draw the line.
    ///
    /// If [`None`], a color set by the context/parent should be used instead.
    ///
    /// If the ends of a line are different colors, color should be interpolated along
    /// the line.
    pub color: Option<Rgba>,
}

impl From<FreePoint> for LineVertex {
    #[inline]
    fn from(position: FreePoint) -> Self {
        Self {
            position,
            color: None,
        }
    }
}

/// Emit an array of vertices as a closed line loop.
/// That is, `[a, b, c]` is emitted as the segments `[a, b], [b, c], [c, a]`.
#[doc(hidden)] // for implementors’ use; not sure if good API
#[allow(clippy::missing_inline_in_public_items)] // already generic
pub fn line_loop<E, const N: usize>(vertices: [LineVertex; N], output: &mut E)
where
    E: Extend<LineVertex>,
{
    output.extend((0..N).flat_map(|i| [vertices[i], vertices[(i + 1) % N]]));
}

/// Add color to all vertices that don't have it.
#[inline]
pub fn colorize<E>(output: &mut E, color: Rgba) -> impl Extend<LineVertex>
where
    E: Extend<LineVertex>,
{
    MapExtend::new(output, move |mut vertex: LineVertex| {
        vertex.color.get_or_insert(color);
        vertex
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use euclid::point3;

    fn v(x: f64, y: f64, z: f64) -> LineVertex {
        LineVertex::from(point3(x, y, z))
    }

    #[test]
    fn line_loop_closes_the_loop() {
        let mut output: Vec<LineVertex> = Vec::new();
        line_loop([v(0., 0., 0.), v(1., 0., 0.), v(1., 1., 0.)], &mut output);
        assert_eq!(
            output.iter().map(|vertex| vertex.position).collect::<Vec<_>>(),
            vec![
                point3(0., 0., 0.),
                point3(1., 0., 0.),
                point3(1., 0., 0.),
                point3(1., 1., 0.),
                point3(1., 1., 0.),
                point3(0., 0., 0.),
            ]
        );
    }

    #[test]
    fn colorize_fills_only_missing_colors() {
        let mut output: Vec<LineVertex> = Vec::new();
        colorize(&mut output, Rgba::RED).extend([
            v(0., 0., 0.),
            LineVertex {
                position: point3(1., 0., 0.),
                color: Some(Rgba::GREEN),
            },
        ]);
        assert_eq!(output[0].color, Some(Rgba::RED));
        assert_eq!(output[1].color, Some(Rgba::GREEN));
    }

    #[test]
    fn wireframe_for_option() {
        let mut output: Vec<LineVertex> = Vec::new();
        None::<Cross>.wireframe_points(&mut output);
        assert!(output.is_empty());
    }
}
