use std::cmp::Ordering;

/// Absolute tolerance (in millimeters) for every grid-fit decision.
/// Accumulated board and gap extents are the result of floating point arithmetic,
/// a strict comparison against the panel dimension undercounts exact fits.
pub const EPSILON: f64 = 1e-6;

/// Smallest nonzero margin, gap or kerf (in millimeters).
/// Finer overhead would be swallowed by [`EPSILON`] and let a grid run past the panel edge.
pub const MIN_OVERHEAD: f64 = 2.0 * EPSILON;

/// `a ≤ b`, with a tolerance of [`EPSILON`]
#[inline(always)]
pub fn almost_le(a: f64, b: f64) -> bool {
    a <= b + EPSILON
}

/// `a ≥ b`, with a tolerance of [`EPSILON`]
#[inline(always)]
pub fn almost_ge(a: f64, b: f64) -> bool {
    a + EPSILON >= b
}

/// Millimeter value compared with a tolerance of [`EPSILON`] (via [`float_cmp::approx_eq!()`]).
/// Values within tolerance of each other are equal, otherwise the plain order applies.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = EPSILON)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}
