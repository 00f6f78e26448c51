//! A small geometry/query facade for scene tracing: convenience ray
//! construction, delegation to a pluggable [scene-query backend](query::SceneQuery),
//! deterministic grid-sampling of a view frustum, hit deduplication by object
//! identity, and flag-gated wireframe generation for debug drawing.
//!
//! This crate contains no physics engine of its own. It computes the geometry
//! of *queries* (rays, frustum cross-sections, sample grids) and hands them to
//! whatever [`query::SceneQuery`] implementation the host application
//! provides, so all of the logic here is testable without one.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
#[macro_use]
extern crate alloc;

#[macro_use]
pub mod math;

pub mod camera;

pub mod debug;

pub mod query;

pub mod ray;

pub mod scan;

pub mod util;

// reexport for convenience of our tests
#[doc(hidden)]
pub use euclid;
