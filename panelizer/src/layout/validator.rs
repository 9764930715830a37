use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::entities::{LayoutCandidate, PlacementConfig};
use crate::geometry::grid::GridAxis;
use crate::geometry::primitives::Rect;
use crate::util::{EPSILON, almost_ge};

/// Up to this many boards, every cell is materialized and checked against the others.
/// Larger grids are checked in closed form on their two axes.
pub const EXPLICIT_VALIDATION_LIMIT: u64 = 4096;

/// The grid formula and the reconstructed geometry disagree.
/// Always a defect in the enumerator, never a consequence of user input.
#[derive(Clone, Debug, PartialEq)]
pub enum ConsistencyError {
    CountMismatch {
        panel_id: String,
        rotated: bool,
        expected: u64,
        reconstructed: u64,
    },
    Overlap {
        panel_id: String,
        rotated: bool,
        first: Rect,
        second: Rect,
    },
    OutOfBounds {
        panel_id: String,
        rotated: bool,
        cell: Rect,
        usable: Rect,
    },
}

impl Display for ConsistencyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsistencyError::CountMismatch {
                panel_id,
                rotated,
                expected,
                reconstructed,
            } => write!(
                f,
                "panel {panel_id} (rotated: {rotated}): grid formula gives {expected} boards, reconstructed placement holds {reconstructed}"
            ),
            ConsistencyError::Overlap {
                panel_id,
                rotated,
                first,
                second,
            } => write!(
                f,
                "panel {panel_id} (rotated: {rotated}): boards overlap, {first:?} and {second:?}"
            ),
            ConsistencyError::OutOfBounds {
                panel_id,
                rotated,
                cell,
                usable,
            } => write!(
                f,
                "panel {panel_id} (rotated: {rotated}): board {cell:?} exceeds the usable area {usable:?}"
            ),
        }
    }
}

impl Error for ConsistencyError {}

/// Checks that the candidate's cells all lie within the usable panel area (inside the edge margins),
/// that no two of them overlap (shared edges are fine) and that their number equals `rows * cols`.
pub fn validate(candidate: &LayoutCandidate, config: &PlacementConfig) -> Result<(), ConsistencyError> {
    if !candidate.is_feasible() {
        return Ok(());
    }
    let panel = candidate.panel();
    let usable = Rect {
        x_min: config.edge_margin_w(),
        y_min: config.edge_margin_h(),
        x_max: panel.width() - config.edge_margin_w(),
        y_max: panel.height() - config.edge_margin_h(),
    };

    match candidate.board_count() <= EXPLICIT_VALIDATION_LIMIT {
        true => validate_explicit(candidate, usable),
        false => validate_closed_form(candidate, usable),
    }
}

/// Materializes every cell and sweeps over them sorted by `x_min`.
fn validate_explicit(candidate: &LayoutCandidate, usable: Rect) -> Result<(), ConsistencyError> {
    let mut cells = candidate.cells().collect::<Vec<Rect>>();

    if cells.len() as u64 != candidate.board_count() {
        return Err(ConsistencyError::CountMismatch {
            panel_id: candidate.panel().id().to_string(),
            rotated: candidate.rotated(),
            expected: candidate.board_count(),
            reconstructed: cells.len() as u64,
        });
    }

    if let Some(cell) = cells.iter().find(|c| !c.almost_within(&usable)) {
        return Err(ConsistencyError::OutOfBounds {
            panel_id: candidate.panel().id().to_string(),
            rotated: candidate.rotated(),
            cell: *cell,
            usable,
        });
    }

    if let Some((first, second)) = first_overlap(&mut cells) {
        return Err(ConsistencyError::Overlap {
            panel_id: candidate.panel().id().to_string(),
            rotated: candidate.rotated(),
            first,
            second,
        });
    }
    Ok(())
}

/// Returns a pair of rectangles whose interiors intersect, if any.
/// Sorts `rects` by `x_min` and sweeps over them, only comparing rectangles whose x-ranges can overlap.
pub fn first_overlap(rects: &mut [Rect]) -> Option<(Rect, Rect)> {
    rects.sort_by(|a, b| a.x_min.total_cmp(&b.x_min));
    rects.iter().enumerate().find_map(|(i, first)| {
        rects[i + 1..]
            .iter()
            .take_while(|second| second.x_min < first.x_max - EPSILON)
            .find(|second| first.interiors_overlap(second))
            .map(|second| (*first, *second))
    })
}

/// Cells of a grid overlap iff the intervals of one of its axes do. Along an axis, equally spaced
/// intervals are disjoint iff the pitch is at least the extent, and they fit iff the first and
/// last one do.
fn validate_closed_form(candidate: &LayoutCandidate, usable: Rect) -> Result<(), ConsistencyError> {
    let col_axis = candidate.col_axis();
    let row_axis = candidate.row_axis();

    if col_axis.count.checked_mul(row_axis.count) != Some(candidate.board_count()) {
        return Err(ConsistencyError::CountMismatch {
            panel_id: candidate.panel().id().to_string(),
            rotated: candidate.rotated(),
            expected: candidate.board_count(),
            reconstructed: col_axis.count.saturating_mul(row_axis.count),
        });
    }

    let cell = |i: u64, j: u64| {
        let (x_min, x_max) = col_axis.interval(i);
        let (y_min, y_max) = row_axis.interval(j);
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    };
    let (last_i, last_j) = (col_axis.count - 1, row_axis.count - 1);

    for corner in [cell(0, 0), cell(last_i, last_j)] {
        if !corner.almost_within(&usable) {
            return Err(ConsistencyError::OutOfBounds {
                panel_id: candidate.panel().id().to_string(),
                rotated: candidate.rotated(),
                cell: corner,
                usable,
            });
        }
    }

    let axis_overlaps = |axis: &GridAxis| axis.count > 1 && !almost_ge(axis.pitch, axis.extent);
    if axis_overlaps(col_axis) {
        return Err(ConsistencyError::Overlap {
            panel_id: candidate.panel().id().to_string(),
            rotated: candidate.rotated(),
            first: cell(0, 0),
            second: cell(1, 0),
        });
    }
    if axis_overlaps(row_axis) {
        return Err(ConsistencyError::Overlap {
            panel_id: candidate.panel().id().to_string(),
            rotated: candidate.rotated(),
            first: cell(0, 0),
            second: cell(0, 1),
        });
    }
    Ok(())
}
