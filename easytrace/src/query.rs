//! The scene-query capability: the seam between this crate's geometry and a
//! host-provided physics/scene backend.

use alloc::collections::BTreeSet;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use manyfmt::Refmt as _;

use crate::math::{FreeCoordinate, FreePoint, FreeVector, NotNan};
use crate::ray::Ray;
use crate::util::ConciseDebug;

// -------------------------------------------------------------------------------------------------

/// Identity of an object in the scene, as assigned by the [`SceneQuery`]
/// backend (an entity id, instance id, or similar).
///
/// Two [`Hit`]s refer to the same object exactly when their `ObjectId`s are
/// equal; this is the key used by [`dedup_hits()`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[expect(clippy::exhaustive_structs)]
pub struct ObjectId(pub u64);

/// A bitmask of up to 32 scene layers, used to restrict queries to objects on
/// particular layers.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct LayerMask(u32);

impl LayerMask {
    /// Matches objects on every layer.
    pub const ALL: Self = Self(u32::MAX);
    /// Matches no objects at all.
    pub const NONE: Self = Self(0);

    /// A mask matching exactly the given layer.
    ///
    /// Panics if `layer` is 32 or greater.
    #[inline]
    #[track_caller]
    pub const fn only(layer: u32) -> Self {
        assert!(layer < 32, "layer index out of range");
        Self(1 << layer)
    }

    /// This mask, additionally matching the given layer.
    ///
    /// Panics if `layer` is 32 or greater.
    #[must_use]
    #[inline]
    #[track_caller]
    pub const fn with(self, layer: u32) -> Self {
        assert!(layer < 32, "layer index out of range");
        Self(self.0 | (1 << layer))
    }

    /// Whether this mask matches the given layer.
    ///
    /// Panics if `layer` is 32 or greater.
    #[inline]
    #[track_caller]
    pub const fn contains(self, layer: u32) -> bool {
        assert!(layer < 32, "layer index out of range");
        self.0 & (1 << layer) != 0
    }

    /// Whether the two masks match any layer in common.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// The raw bit representation; bit _n_ is layer _n_.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl Default for LayerMask {
    #[inline]
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Debug for LayerMask {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerMask({:#010x})", self.0)
    }
}

// -------------------------------------------------------------------------------------------------

/// Result of a successful ray cast: what was struck, and where.
#[derive(Clone, Copy, PartialEq)]
#[expect(clippy::exhaustive_structs)]
pub struct Hit {
    /// The object that was struck.
    pub object: ObjectId,

    /// Distance from the ray origin to the point of impact, measured in
    /// multiples of the ray's direction vector.
    pub t_distance: FreeCoordinate,

    /// The point of impact on the object's surface.
    pub point: FreePoint,

    /// The surface normal at the point of impact, unit length, pointing away
    /// from the object.
    pub normal: FreeVector,
}

impl fmt::Debug for Hit {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            object,
            t_distance,
            point,
            normal,
        } = self;
        f.debug_struct("Hit")
            .field("object", object)
            .field("t_distance", t_distance)
            .field("point", &point.refmt(&ConciseDebug))
            .field("normal", &normal.refmt(&ConciseDebug))
            .finish()
    }
}

/// Restrictions applied to a [`SceneQuery`] operation.
///
/// The default filter matches everything. Use the builder methods to narrow it:
///
/// ```
/// use easytrace::query::{LayerMask, ObjectId, QueryFilter};
///
/// let filter = QueryFilter::default()
///     .with_mask(LayerMask::only(2))
///     .excluding(ObjectId(17));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[allow(clippy::module_name_repetitions)]
#[non_exhaustive]
pub struct QueryFilter {
    /// Layers to which the query is restricted.
    pub mask: LayerMask,

    /// Maximum distance of accepted hits, measured in multiples of the ray's
    /// direction vector (hence in world units if the direction is unit
    /// length). [`None`] is unlimited. Ignored by overlap queries.
    pub max_distance: Option<NotNan<FreeCoordinate>>,

    /// An object to ignore entirely, typically the one the query originates
    /// from.
    pub exclude: Option<ObjectId>,
}

impl QueryFilter {
    /// Restrict the query to layers matched by `mask`.
    #[must_use]
    #[inline]
    pub fn with_mask(mut self, mask: LayerMask) -> Self {
        self.mask = mask;
        self
    }

    /// Reject hits farther along the ray than `max_distance`.
    #[must_use]
    #[inline]
    pub fn within(mut self, max_distance: NotNan<FreeCoordinate>) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Ignore the given object.
    #[must_use]
    #[inline]
    pub fn excluding(mut self, object: ObjectId) -> Self {
        self.exclude = Some(object);
        self
    }
}

// -------------------------------------------------------------------------------------------------

/// Capability to query a scene for objects struck by rays or overlapping
/// volumes.
///
/// Implementations are expected to be provided by the host application,
/// wrapping whatever physics or spatial index it uses. Implementors must:
///
/// * honor every field of the [`QueryFilter`],
/// * never report hits behind the ray origin (`t_distance < 0`), and
/// * report [`Hit::t_distance`] in multiples of the ray's direction vector.
#[allow(clippy::module_name_repetitions)]
pub trait SceneQuery {
    /// Find the nearest object struck by `ray`, if any.
    fn cast(&self, ray: Ray, filter: QueryFilter) -> Option<Hit>;

    /// Find every object struck by `ray`, nearest first.
    fn cast_all(&self, ray: Ray, filter: QueryFilter) -> Vec<Hit>;

    /// Find every object whose volume overlaps the given sphere.
    ///
    /// The result is duplicate-free but in no particular order.
    fn overlap_sphere(
        &self,
        center: FreePoint,
        radius: FreeCoordinate,
        filter: QueryFilter,
    ) -> Vec<ObjectId>;
}

#[allow(clippy::missing_inline_in_public_items)]
impl<T: ?Sized + SceneQuery> SceneQuery for &T {
    fn cast(&self, ray: Ray, filter: QueryFilter) -> Option<Hit> {
        (**self).cast(ray, filter)
    }
    fn cast_all(&self, ray: Ray, filter: QueryFilter) -> Vec<Hit> {
        (**self).cast_all(ray, filter)
    }
    fn overlap_sphere(
        &self,
        center: FreePoint,
        radius: FreeCoordinate,
        filter: QueryFilter,
    ) -> Vec<ObjectId> {
        (**self).overlap_sphere(center, radius, filter)
    }
}

#[allow(clippy::missing_inline_in_public_items)]
impl<T: ?Sized + SceneQuery> SceneQuery for Arc<T> {
    fn cast(&self, ray: Ray, filter: QueryFilter) -> Option<Hit> {
        (**self).cast(ray, filter)
    }
    fn cast_all(&self, ray: Ray, filter: QueryFilter) -> Vec<Hit> {
        (**self).cast_all(ray, filter)
    }
    fn overlap_sphere(
        &self,
        center: FreePoint,
        radius: FreeCoordinate,
        filter: QueryFilter,
    ) -> Vec<ObjectId> {
        (**self).overlap_sphere(center, radius, filter)
    }
}

// -------------------------------------------------------------------------------------------------

/// Remove every [`Hit`] referring to an object already hit earlier in the
/// vector, preserving the order of the remaining hits.
#[allow(clippy::missing_inline_in_public_items)]
pub fn dedup_hits(hits: &mut Vec<Hit>) {
    let mut seen: BTreeSet<ObjectId> = BTreeSet::new();
    hits.retain(|hit| seen.insert(hit.object));
}
