//! Deterministic grid sampling of the view frustum: cast one ray per sample
//! point and collect which objects were seen.

use alloc::vec::Vec;

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

use crate::camera::{Camera, FrustumSlice};
use crate::math::{FreeCoordinate, FreePoint};
use crate::query::{Hit, QueryFilter, SceneQuery, dedup_hits};
use crate::ray::Ray;

// -------------------------------------------------------------------------------------------------

/// Upper bound on the number of sample points in a [`ScanGrid`].
///
/// Far-away or finely-spaced scans saturate at this count rather than casting
/// an unbounded number of rays.
pub const MAX_SCAN_POINTS: u32 = 1500;

/// A rectangular grid of sample positions across a [`FrustumSlice`].
///
/// The grid is deterministic: the same grid over the same slice always yields
/// the same points, in row-major order from the top-left corner to the
/// bottom-right.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::module_name_repetitions)]
pub struct ScanGrid {
    columns: u32,
    rows: u32,
}

impl ScanGrid {
    /// Constructs a grid with the given number of sample columns and rows.
    ///
    /// Zero counts are raised to 1. If `columns × rows` exceeds
    /// [`MAX_SCAN_POINTS`], both counts are scaled down proportionally to fit.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn new(columns: u32, rows: u32) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        let total = u64::from(columns) * u64::from(rows);
        if total <= u64::from(MAX_SCAN_POINTS) {
            return Self { columns, rows };
        }

        let scale = (f64::from(MAX_SCAN_POINTS) / total as f64).sqrt();
        let mut clamped_columns = ((f64::from(columns) * scale) as u32).max(1);
        let mut clamped_rows = ((f64::from(rows) * scale) as u32).max(1);
        // Proportional scaling can still overshoot when one axis bottoms out at 1.
        if u64::from(clamped_columns) * u64::from(clamped_rows) > u64::from(MAX_SCAN_POINTS) {
            clamped_rows = (MAX_SCAN_POINTS / clamped_columns).max(1);
        }
        if u64::from(clamped_columns) * u64::from(clamped_rows) > u64::from(MAX_SCAN_POINTS) {
            clamped_columns = (MAX_SCAN_POINTS / clamped_rows).max(1);
        }
        log::debug!(
            "scan grid {columns}×{rows} exceeds {MAX_SCAN_POINTS} samples; \
             clamped to {clamped_columns}×{clamped_rows}"
        );
        Self {
            columns: clamped_columns,
            rows: clamped_rows,
        }
    }

    /// Constructs a grid whose sample points are approximately `spacing` scene
    /// units apart on the given slice.
    ///
    /// Slices near the eye are small and produce few points; distant slices
    /// produce many, up to the [`MAX_SCAN_POINTS`] cap.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn from_spacing(slice: &FrustumSlice, spacing: FreeCoordinate) -> Result<Self, ScanError> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(ScanError { spacing });
        }
        let count = |extent: FreeCoordinate| -> u32 {
            ((extent / spacing).floor().min(f64::from(MAX_SCAN_POINTS)) as u32) + 1
        };
        Ok(Self::new(count(slice.width()), count(slice.height())))
    }

    /// Number of sample columns.
    #[inline]
    pub fn columns(self) -> u32 {
        self.columns
    }

    /// Number of sample rows.
    #[inline]
    pub fn rows(self) -> u32 {
        self.rows
    }

    /// Total number of sample points; at most [`MAX_SCAN_POINTS`].
    #[inline]
    pub fn point_count(self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Sample positions on the slice, row-major from the top-left.
    ///
    /// A single-column or single-row grid samples the slice's center line
    /// rather than an edge.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn points(self, slice: FrustumSlice) -> impl Iterator<Item = FreePoint> {
        let fraction = |index: u32, count: u32| -> FreeCoordinate {
            if count == 1 {
                0.5
            } else {
                FreeCoordinate::from(index) / FreeCoordinate::from(count - 1)
            }
        };
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| {
                slice.point_at(
                    fraction(column, self.columns),
                    fraction(row, self.rows),
                )
            })
        })
    }

    /// One ray per sample position, originating at the camera's eye; `t = 1`
    /// on each ray lies on the slice.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn rays(self, camera: &Camera, slice: FrustumSlice) -> impl Iterator<Item = Ray> {
        let origin = camera.view_position();
        self.points(slice).map(move |point| Ray {
            origin,
            direction: point - origin,
        })
    }
}

// -------------------------------------------------------------------------------------------------

/// Error from [`ScanGrid::from_spacing()`].
#[derive(Clone, Copy, Debug, PartialEq, displaydoc::Display)]
#[displaydoc("scan spacing must be positive and finite, but was {spacing}")]
#[allow(clippy::module_name_repetitions)]
#[non_exhaustive]
pub struct ScanError {
    /// The rejected spacing value.
    pub spacing: FreeCoordinate,
}

impl core::error::Error for ScanError {}

// -------------------------------------------------------------------------------------------------

/// Scan the view frustum: cast one ray through each sample point of `grid` on
/// `slice` and return the hits, deduplicated by object identity in order of
/// first detection.
///
/// Returning no hits is a normal outcome. The returned [`Hit::t_distance`]s
/// are relative to the corresponding sample rays, whose direction vectors span
/// eye to slice (so `t_distance = 1` lies on the slice).
#[allow(clippy::missing_inline_in_public_items)]
pub fn field_of_view<S: SceneQuery + ?Sized>(
    scene: &S,
    camera: &Camera,
    slice: FrustumSlice,
    grid: ScanGrid,
    filter: QueryFilter,
) -> Vec<Hit> {
    let mut hits: Vec<Hit> = Vec::new();
    for ray in grid.rays(camera, slice) {
        if let Some(hit) = scene.cast(ray, filter) {
            hits.push(hit);
        }
    }
    dedup_hits(&mut hits);
    hits
}
