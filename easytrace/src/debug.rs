//! Collection of wireframe lines for debug drawing.

use alloc::vec::Vec;
use core::fmt;

use crate::math::{LineVertex, Rgba, Wireframe, colorize};

/// Accumulates line segments from [`Wireframe`] shapes for a debug overlay to
/// draw.
///
/// A buffer is either enabled or disabled for its whole lifetime. Drawing into
/// a disabled buffer is a no-op which performs no allocation, so call sites
/// need not be conditional:
///
/// ```
/// use easytrace::debug::DebugLineBuffer;
/// use easytrace::ray::Ray;
///
/// let mut lines = DebugLineBuffer::disabled();
/// lines.draw(&Ray::new([0., 0., 0.], [0., 0., -1.]));
/// assert!(lines.vertices().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct DebugLineBuffer {
    enabled: bool,
    vertices: Vec<LineVertex>,
}

impl DebugLineBuffer {
    /// Constructs a buffer which is enabled iff `enabled` is true.
    #[inline]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            vertices: Vec::new(),
        }
    }

    /// Constructs an enabled buffer.
    #[inline]
    pub fn enabled() -> Self {
        Self::new(true)
    }

    /// Constructs a disabled buffer; every drawing operation on it is a no-op.
    #[inline]
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Whether drawing operations will record anything.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append `shape`'s wireframe, leaving vertex colors unset.
    #[inline]
    pub fn draw(&mut self, shape: &impl Wireframe) {
        if self.enabled {
            shape.wireframe_points(&mut self.vertices);
        }
    }

    /// Append `shape`'s wireframe, in the given color (except where the shape
    /// specifies its own).
    #[inline]
    pub fn draw_colored(&mut self, shape: &impl Wireframe, color: Rgba) {
        if self.enabled {
            shape.wireframe_points(&mut colorize(&mut self.vertices, color));
        }
    }

    /// All recorded vertices, in pairs forming line segments.
    #[inline]
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// The recorded line segments.
    ///
    /// Per the [`Wireframe`] contract, a trailing unpaired vertex, if any, is
    /// ignored.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn segments(&self) -> impl Iterator<Item = [LineVertex; 2]> {
        self.vertices
            .chunks_exact(2)
            .map(|pair| [pair[0], pair[1]])
    }

    /// Discard all recorded vertices, keeping the enabled flag.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl fmt::Debug for DebugLineBuffer {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { enabled, vertices } = self;
        f.debug_struct("DebugLineBuffer")
            .field("enabled", enabled)
            .field("vertices", &vertices.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Sphere;
    use euclid::point3;

    #[test]
    fn disabled_buffer_records_nothing() {
        let mut lines = DebugLineBuffer::disabled();
        lines.draw(&Sphere {
            center: point3(0., 0., 0.),
            radius: 1.0,
        });
        assert!(!lines.is_enabled());
        assert!(lines.vertices().is_empty());
    }

    #[test]
    fn draw_colored_tags_vertices() {
        let mut lines = DebugLineBuffer::enabled();
        lines.draw_colored(
            &Sphere {
                center: point3(0., 0., 0.),
                radius: 1.0,
            },
            Rgba::YELLOW,
        );
        assert!(!lines.vertices().is_empty());
        assert!(
            lines
                .vertices()
                .iter()
                .all(|vertex| vertex.color == Some(Rgba::YELLOW))
        );
    }

    #[test]
    fn segments_pair_up_vertices() {
        let mut lines = DebugLineBuffer::enabled();
        lines.draw(&Sphere {
            center: point3(0., 0., 0.),
            radius: 1.0,
        });
        assert_eq!(lines.segments().count() * 2, lines.vertices().len());

        lines.clear();
        assert_eq!(lines.segments().count(), 0);
    }
}
