use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::entities::{LayoutCandidate, PanelizerSummary};
use crate::layout::ranker::rank_order;
use crate::util::FPA;
use float_cmp::approx_eq;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

pub fn ranking_is_sorted<C: Borrow<LayoutCandidate>>(ranked: &[C]) -> bool {
    ranked
        .windows(2)
        .all(|w| rank_order(w[0].borrow(), w[1].borrow()) != Ordering::Greater)
}

/// Board count, areas and utilization of a scored candidate agree with its grid.
pub fn candidate_is_consistent(c: &LayoutCandidate) -> bool {
    if c.rows().checked_mul(c.cols()) != Some(c.board_count()) {
        error!("board count {} != {} rows x {} cols", c.board_count(), c.rows(), c.cols());
        return false;
    }
    if c.infeasibility().is_some() == c.is_feasible() {
        error!("infeasibility {:?} with {} boards", c.infeasibility(), c.board_count());
        return false;
    }
    if c.board_count().checked_mul(u64::from(c.panel().panels_per_jumbo())) != Some(c.boards_per_jumbo()) {
        error!("{} boards per jumbo for {} boards on panel {}", c.boards_per_jumbo(), c.board_count(), c.panel().id());
        return false;
    }
    let used_area = c.board_count() as f64 * c.board_width() * c.board_height();
    approx_eq!(f64, c.used_area(), used_area, ulps = 4)
        && approx_eq!(f64, c.used_area() + c.unused_area(), c.panel_area(), ulps = 4)
        && approx_eq!(f64, c.utilization(), used_area / c.panel_area(), ulps = 4)
        && c.utilization() >= 0.0
        && FPA(c.utilization()) <= FPA(1.0)
}

/// `summary` is what ranking `candidates` should produce.
pub fn summary_matches_candidates(summary: &PanelizerSummary, candidates: &[LayoutCandidate]) -> bool {
    let feasible = candidates.iter().filter(|c| c.is_feasible()).count();
    summary.considered == candidates.len()
        && summary.feasible == feasible
        && summary.shown == usize::min(feasible, summary.limit)
        && summary.candidates.len() == summary.shown
        && ranking_is_sorted(&summary.candidates)
        && summary.best.is_some() == (feasible > 0)
        && summary.max_boards_per_jumbo
            == candidates.iter().filter(|c| c.is_feasible()).map(|c| c.boards_per_jumbo()).max()
        && summary
            .best
            .as_ref()
            .is_none_or(|best| candidates.iter().all(|c| !c.is_feasible() || rank_order(best, c) != Ordering::Greater))
}
