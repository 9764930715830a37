use crate::util::{almost_ge, almost_le};
use serde::Serialize;

/// Maximum number `n ≥ 0` of boards of size `board_extent`, separated by `gap`,
/// that fit within `panel_extent` minus a `margin` on both sides.
///
/// Closed form: `n = floor((panel_extent - 2 * margin + gap) / (board_extent + gap))`.
/// The quotient is corrected by one step when rounding noise puts it on the wrong side
/// of an exact fit, so the result agrees with [`fits_on_axis`]. Float to integer
/// conversion saturates, the count never overflows.
pub fn upper_bound_grid_count(panel_extent: f64, board_extent: f64, gap: f64, margin: f64) -> u64 {
    debug_assert!(board_extent > 0.0 && gap >= 0.0 && margin >= 0.0);
    let usable = panel_extent - 2.0 * margin;
    if !almost_ge(usable, board_extent) {
        return 0;
    }
    let quotient = ((usable + gap) / (board_extent + gap)).floor();
    let mut n = match quotient.is_finite() && quotient > 0.0 {
        true => quotient as u64,
        false => 0,
    };
    if fits_on_axis(n.saturating_add(1), usable, board_extent, gap) {
        n = n.saturating_add(1);
    } else if n > 0 && !fits_on_axis(n, usable, board_extent, gap) {
        n -= 1;
    }
    n
}

/// Returns true if `n` boards separated by `gap` span at most `usable` (tolerant).
pub fn fits_on_axis(n: u64, usable: f64, board_extent: f64, gap: f64) -> bool {
    match n {
        0 => true,
        n => almost_le(n as f64 * board_extent + (n - 1) as f64 * gap, usable),
    }
}

/// A row (or column) of equally spaced boards along one axis:
/// the `i`-th board occupies `[start + i * pitch, start + i * pitch + extent]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridAxis {
    pub start: f64,
    pub extent: f64,
    pub pitch: f64,
    pub count: u64,
}

impl GridAxis {
    pub fn new(margin: f64, extent: f64, gap: f64, count: u64) -> Self {
        Self {
            start: margin,
            extent,
            pitch: extent + gap,
            count,
        }
    }

    pub fn interval(&self, i: u64) -> (f64, f64) {
        let lo = self.start + i as f64 * self.pitch;
        (lo, lo + self.extent)
    }

    /// Coordinate where the last board ends, or `start` for an empty axis
    pub fn span_end(&self) -> f64 {
        match self.count {
            0 => self.start,
            n => self.interval(n - 1).1,
        }
    }
}
