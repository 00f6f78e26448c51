use core::fmt;

use crate::math::{FreeCoordinate, NotNan};

#[cfg(doc)]
use crate::camera::Camera;

/// Options controlling the view geometry a [`Camera`] derives its rays and
/// frusta from.
#[derive(Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
pub struct ViewOptions {
    /// Field of view, in degrees from top to bottom edge of the viewport.
    pub fov_y: NotNan<FreeCoordinate>,

    /// Distance from the eye to the farthest point queries and frusta may reach.
    ///
    /// This is the length of [`Camera::look_ray()`] and the depth of the far
    /// plane of [`Camera::view_frustum()`].
    pub view_distance: NotNan<FreeCoordinate>,
}

impl ViewOptions {
    /// Constrain fields to valid/practical values.
    #[must_use]
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn repair(mut self) -> Self {
        self.fov_y = self.fov_y.clamp(notnan!(1.0), notnan!(179.0));
        self.view_distance = self.view_distance.clamp(notnan!(1.0), notnan!(10000.0));
        self
    }
}

impl fmt::Debug for ViewOptions {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            fov_y,
            view_distance,
        } = self;
        // This custom impl reduces unnecessary text by stripping off NotNan wrappers.
        f.debug_struct("ViewOptions")
            .field("fov_y", &fov_y.into_inner())
            .field("view_distance", &view_distance.into_inner())
            .finish()
    }
}

impl Default for ViewOptions {
    #[inline]
    fn default() -> Self {
        Self {
            fov_y: notnan!(90.0),
            view_distance: notnan!(200.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn debug() {
        let options = ViewOptions::default();
        assert_eq!(
            format!("{options:#?}"),
            indoc::indoc! {
                r"ViewOptions {
                    fov_y: 90.0,
                    view_distance: 200.0,
                }"
            }
        );
    }

    #[test]
    fn default_is_clean() {
        assert_eq!(ViewOptions::default(), ViewOptions::default().repair());
    }

    #[test]
    fn repair_clamps_out_of_range_values() {
        let options = ViewOptions {
            fov_y: notnan!(1000.0),
            view_distance: notnan!(0.125),
        }
        .repair();
        assert_eq!(options.fov_y.into_inner(), 179.0);
        assert_eq!(options.view_distance.into_inner(), 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let options = ViewOptions {
            fov_y: notnan!(60.0),
            ..ViewOptions::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            serde_json::from_str::<ViewOptions>(&json).unwrap(),
            options
        );
    }
}
