use std::fmt::{Display, Formatter};

use crate::entities::PanelOption;
use crate::geometry::grid::GridAxis;
use crate::geometry::primitives::Rect;
use serde::Serialize;

/// Why a (panel option, orientation) pair holds no boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Infeasibility {
    /// The edge margins consume the whole panel in at least one direction
    NoUsableArea,
    /// Not even a single board fits across the panel width
    NoColumns,
    /// Not even a single board fits along the panel height
    NoRows,
}

impl Display for Infeasibility {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Infeasibility::NoUsableArea => "edge margins leave no usable panel area",
            Infeasibility::NoColumns => "board does not fit across the panel width",
            Infeasibility::NoRows => "board does not fit along the panel height",
        };
        f.write_str(reason)
    }
}

/// Panel border left on each side once the grid is placed against the bottom-left margins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Margins {
    /// `|left - right| + |bottom - top|`, zero for a perfectly centered grid
    pub fn uniformity(&self) -> f64 {
        (self.left - self.right).abs() + (self.bottom - self.top).abs()
    }
}

/// A uniform grid of boards on one panel option, in one orientation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutCandidate {
    pub(crate) panel: PanelOption,
    pub(crate) rotated: bool,
    pub(crate) rows: u64,
    pub(crate) cols: u64,
    pub(crate) board_count: u64,
    /// Boards on one jumbo sheet, `board_count` times the panels cut from a sheet
    pub(crate) boards_per_jumbo: u64,
    /// Nominal board width as placed (after rotation)
    pub(crate) board_width: f64,
    /// Nominal board height as placed (after rotation)
    pub(crate) board_height: f64,
    /// Kerf-inflated cells along the x-axis
    pub(crate) col_axis: GridAxis,
    /// Kerf-inflated cells along the y-axis
    pub(crate) row_axis: GridAxis,
    pub(crate) used_area: f64,
    pub(crate) panel_area: f64,
    pub(crate) unused_area: f64,
    pub(crate) utilization: f64,
    pub(crate) margins: Margins,
    pub(crate) margin_uniformity: f64,
    pub(crate) infeasibility: Option<Infeasibility>,
}

impl LayoutCandidate {
    /// Creates an unscored candidate, see [`crate::layout::scorer`].
    pub(crate) fn new(
        panel: PanelOption,
        rotated: bool,
        board_width: f64,
        board_height: f64,
        col_axis: GridAxis,
        row_axis: GridAxis,
        board_count: u64,
        boards_per_jumbo: u64,
        infeasibility: Option<Infeasibility>,
    ) -> Self {
        let (rows, cols) = (row_axis.count, col_axis.count);
        debug_assert!(rows.checked_mul(cols) == Some(board_count));
        debug_assert!(infeasibility.is_some() == (board_count == 0));
        let margins = Margins {
            left: col_axis.start,
            right: panel.width() - col_axis.span_end(),
            bottom: row_axis.start,
            top: panel.height() - row_axis.span_end(),
        };
        let panel_area = panel.area();
        Self {
            panel,
            rotated,
            rows,
            cols,
            board_count,
            boards_per_jumbo,
            board_width,
            board_height,
            col_axis,
            row_axis,
            used_area: 0.0,
            panel_area,
            unused_area: panel_area,
            utilization: 0.0,
            margin_uniformity: margins.uniformity(),
            margins,
            infeasibility,
        }
    }

    pub fn panel(&self) -> &PanelOption {
        &self.panel
    }

    pub fn rotated(&self) -> bool {
        self.rotated
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn cols(&self) -> u64 {
        self.cols
    }

    pub fn board_count(&self) -> u64 {
        self.board_count
    }

    pub fn boards_per_jumbo(&self) -> u64 {
        self.boards_per_jumbo
    }

    pub fn board_width(&self) -> f64 {
        self.board_width
    }

    pub fn board_height(&self) -> f64 {
        self.board_height
    }

    pub fn col_axis(&self) -> &GridAxis {
        &self.col_axis
    }

    pub fn row_axis(&self) -> &GridAxis {
        &self.row_axis
    }

    pub fn used_area(&self) -> f64 {
        self.used_area
    }

    pub fn panel_area(&self) -> f64 {
        self.panel_area
    }

    pub fn unused_area(&self) -> f64 {
        self.unused_area
    }

    pub fn utilization(&self) -> f64 {
        self.utilization
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    pub fn margin_uniformity(&self) -> f64 {
        self.margin_uniformity
    }

    pub fn infeasibility(&self) -> Option<Infeasibility> {
        self.infeasibility
    }

    pub fn is_feasible(&self) -> bool {
        self.board_count > 0
    }

    /// The kerf-inflated cell reserved for each board, in row-major order (bottom row first).
    pub fn cells(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.rows).flat_map(move |j| {
            let (y_min, y_max) = self.row_axis.interval(j);
            (0..self.cols).map(move |i| {
                let (x_min, x_max) = self.col_axis.interval(i);
                Rect {
                    x_min,
                    y_min,
                    x_max,
                    y_max,
                }
            })
        })
    }

    /// The nominal board outlines, each anchored at the bottom-left corner of its cell.
    pub fn placements(&self) -> impl Iterator<Item = Rect> + '_ {
        self.cells().map(|cell| Rect {
            x_min: cell.x_min,
            y_min: cell.y_min,
            x_max: cell.x_min + self.board_width,
            y_max: cell.y_min + self.board_height,
        })
    }
}
