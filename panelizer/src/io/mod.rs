/// External (serializable) representations of presets, defaults and the panel catalog.
pub mod ext_repr;

/// All logic for converting external representations and form arguments into internal ones
pub mod import;

/// All logic for creating SVG from [`LayoutCandidate`](crate::entities::LayoutCandidate)s
pub mod svg;
