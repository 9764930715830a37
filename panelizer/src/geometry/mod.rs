/// Closed-form grid fitting along a single axis
pub mod grid;
pub mod primitives;
