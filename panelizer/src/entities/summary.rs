use crate::entities::LayoutCandidate;
use serde::Serialize;

/// Ranked outcome of one optimization run. Recomputed on every call, never cached.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelizerSummary {
    /// Head of the full ranking, `None` if no panel option holds a single board
    pub best: Option<LayoutCandidate>,
    /// Number of (panel option, orientation) pairs evaluated
    pub considered: usize,
    /// Number of candidates holding at least one board
    pub feasible: usize,
    pub max_utilization: Option<f64>,
    pub min_utilization: Option<f64>,
    /// Most boards per jumbo sheet over the feasible candidates
    pub max_boards_per_jumbo: Option<u64>,
    /// The result limit of the run
    pub limit: usize,
    /// `min(feasible, limit)`
    pub shown: usize,
    /// The top `shown` feasible candidates, in rank order
    pub candidates: Vec<LayoutCandidate>,
}

impl PanelizerSummary {
    pub fn is_feasible(&self) -> bool {
        self.best.is_some()
    }

    /// One-line description of the run, for display.
    pub fn message(&self) -> String {
        match self.feasible {
            0 => "No feasible layouts under current constraints.".to_string(),
            n => format!(
                "Found {n} feasible layouts. Showing top {} by Utilization.",
                self.shown
            ),
        }
    }
}
