//! Color type for tagging debug lines.

use core::fmt;

/// A color with red, green, blue, and alpha components, in linear color space
/// and nonpremultiplied.
///
/// This type exists to label [`LineVertex`](crate::math::LineVertex)es; it does
/// not perform color arithmetic. Component values are expected to be in the
/// range 0 to 1 and not NaN, but this is not enforced.
#[derive(Clone, Copy, PartialEq)]
#[expect(clippy::exhaustive_structs)]
pub struct Rgba {
    /// Red component.
    pub red: f32,
    /// Green component.
    pub green: f32,
    /// Blue component.
    pub blue: f32,
    /// Alpha (opacity) component.
    pub alpha: f32,
}

impl Rgba {
    /// Pure white, fully opaque.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Pure red, fully opaque.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Pure green, fully opaque.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Pure blue, fully opaque.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Pure yellow, fully opaque.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);

    /// Constructs an [`Rgba`] from its components.
    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl fmt::Debug for Rgba {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            red,
            green,
            blue,
            alpha,
        } = self;
        write!(fmt, "Rgba({red}, {green}, {blue}, {alpha})")
    }
}
