use std::cmp::Ordering;

use crate::entities::{LayoutCandidate, PanelizerSummary, PlacementConfig};
use crate::util::assertions;
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Utilizations closer than this rank as equal
pub const UTILIZATION_RESOLUTION: f64 = 1e-9;

/// Quantized utilization. Equal layouts on panels of different area can differ by a few ulps;
/// quantizing (instead of comparing with a tolerance) keeps the ordering transitive.
pub fn utilization_key(utilization: f64) -> i64 {
    (utilization / UTILIZATION_RESOLUTION).round() as i64
}

/// Total order on candidates, best first:
/// 1. utilization, descending
/// 2. board count, descending
/// 3. panel area, ascending
/// 4. panel id, ascending
/// 5. unrotated before rotated
pub fn rank_order(a: &LayoutCandidate, b: &LayoutCandidate) -> Ordering {
    utilization_key(b.utilization())
        .cmp(&utilization_key(a.utilization()))
        .then(b.board_count().cmp(&a.board_count()))
        .then(OrderedFloat(a.panel_area()).cmp(&OrderedFloat(b.panel_area())))
        .then_with(|| a.panel().id().cmp(b.panel().id()))
        .then(a.rotated().cmp(&b.rotated()))
}

/// Ranks the feasible candidates and summarizes them.
///
/// The best candidate and the statistics are always computed over all feasible candidates,
/// `config.result_limit()` only truncates the listed candidates (a limit of 0 lists none).
pub fn summarize(candidates: &[LayoutCandidate], config: &PlacementConfig) -> PanelizerSummary {
    let ranked = candidates
        .iter()
        .filter(|c| c.is_feasible())
        .sorted_by(|a, b| rank_order(a, b))
        .collect_vec();
    debug_assert!(assertions::ranking_is_sorted(&ranked));

    let utilizations = ranked.iter().map(|c| OrderedFloat(c.utilization()));
    let max_utilization = utilizations.clone().max().map(|u| u.0);
    let min_utilization = utilizations.min().map(|u| u.0);
    let max_boards_per_jumbo = ranked.iter().map(|c| c.boards_per_jumbo()).max();

    let limit = config.result_limit();
    let shown = usize::min(ranked.len(), limit);

    PanelizerSummary {
        best: ranked.first().map(|&c| c.clone()),
        considered: candidates.len(),
        feasible: ranked.len(),
        max_utilization,
        min_utilization,
        max_boards_per_jumbo,
        limit,
        shown,
        candidates: ranked.iter().take(shown).map(|&c| c.clone()).collect(),
    }
}
