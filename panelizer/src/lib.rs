//!
//! A deterministic panel layout optimizer for PCB manufacturing.
//!
//! Given one board footprint and a catalog of panel stock sizes, `panelizer` fits the
//! board onto every eligible panel as a uniform grid (respecting edge margins,
//! inter-board gaps, cutting kerf and optional 90° rotation), validates the resulting
//! placements and ranks the candidates by panel utilization.
//!

/// Entities to model the panelization problem
pub mod entities;

/// Geometric primitives and grid-fitting helpers
pub mod geometry;

/// Enumeration, validation, scoring and ranking of layout candidates
pub mod layout;

/// Importing presets and form arguments into and rendering layouts out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use layout::{compute_candidates, panelize, summarize};
