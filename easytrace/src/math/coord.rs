//! Numeric types used for coordinates and related quantities.

use euclid::{Point2D, Point3D, RigidTransform3D, Size2D, Vector3D};

/// Unit type for coordinates in the scene (world space).
///
/// This is the space in which query results, frustum corners, and debug lines
/// are expressed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum World {}

/// Unit type for coordinates relative to the viewer's eye:
/// +X right, +Y up, and the look direction along −Z.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum Eye {}

/// Unit type for normalized device coordinates
/// (range −1 to 1 rightward and upward across the viewport).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum Ndc {}

/// Unit type for positions within a [`Viewport`](crate::camera::Viewport)'s
/// nominal (pointer-event) coordinate system; +Y downward.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum NominalPixel {}

/// Coordinates that are not locked to any grid.
pub type FreeCoordinate = f64;

/// Positions in scene space.
pub type FreePoint = Point3D<FreeCoordinate, World>;

/// Vectors in scene space.
pub type FreeVector = Vector3D<FreeCoordinate, World>;

/// Positions in eye space.
pub type EyePoint = Point3D<FreeCoordinate, Eye>;

/// Vectors in eye space.
pub type EyeVector = Vector3D<FreeCoordinate, Eye>;

/// A point on the viewport in normalized device coordinates.
pub type NdcPoint2 = Point2D<FreeCoordinate, Ndc>;

/// A point on the viewport in nominal (pointer-event) coordinates.
pub type NominalPoint2 = Point2D<FreeCoordinate, NominalPixel>;

/// Sizes of viewports in nominal (pointer-event) coordinates.
pub type NominalSize = Size2D<FreeCoordinate, NominalPixel>;

/// The pose of the viewer: the rigid transformation from [`Eye`] space to
/// [`World`] space. Its translation component is the eye position.
pub type ViewTransform = RigidTransform3D<FreeCoordinate, Eye, World>;
