/// Grid placement of the board on every eligible (panel option, orientation) pair
pub mod enumerator;

/// Ordering of feasible candidates and the summary built from them
pub mod ranker;

/// Utilization of a candidate's panel
pub mod scorer;

/// Independent geometric check of the placements the enumerator derived
pub mod validator;

use crate::entities::{BoardFootprint, LayoutCandidate, PanelOption, PanelizerSummary, PlacementConfig};
use anyhow::Result;
use itertools::Itertools;
use log::{debug, error, info};

#[doc(inline)]
pub use ranker::summarize;

#[doc(inline)]
pub use validator::ConsistencyError;

/// Enumerates, validates and scores every candidate for `footprint` on the eligible `panel_options`.
///
/// Infeasible candidates (zero boards) are part of the result, flagged with the reason they failed.
/// A placement that fails validation is a defect of the enumerator: it is logged and returned
/// as a [`ConsistencyError`], never dropped.
pub fn compute_candidates(
    footprint: &BoardFootprint,
    panel_options: &[PanelOption],
    config: &PlacementConfig,
) -> Result<Vec<LayoutCandidate>> {
    let mut candidates = enumerator::enumerate(footprint, panel_options, config)?;
    for candidate in candidates.iter_mut() {
        if let Err(err) = validator::validate(candidate, config) {
            error!("[PNL] internal consistency failure: {err}");
            return Err(err.into());
        }
        scorer::score(candidate);
        debug!(
            "[PNL] panel {}{}: {}x{} boards, utilization {:.4}",
            candidate.panel().id(),
            if candidate.rotated() { " (rotated)" } else { "" },
            candidate.cols(),
            candidate.rows(),
            candidate.utilization()
        );
    }
    Ok(candidates)
}

/// Runs the full pipeline: [`compute_candidates`] followed by [`summarize`].
/// Returns every candidate (for diagnostics) alongside the summary.
pub fn panelize(
    footprint: &BoardFootprint,
    panel_options: &[PanelOption],
    config: &PlacementConfig,
) -> Result<(Vec<LayoutCandidate>, PanelizerSummary)> {
    let candidates = compute_candidates(footprint, panel_options, config)?;
    let summary = summarize(&candidates, config);

    match &summary.best {
        Some(best) => info!(
            "[PNL] {} of {} candidates feasible, best: panel {} with {} boards ({:.2}% utilization)",
            summary.feasible,
            summary.considered,
            best.panel().id(),
            best.board_count(),
            best.utilization() * 100.0
        ),
        None => info!(
            "[PNL] none of {} candidates feasible [{}]",
            summary.considered,
            candidates
                .iter()
                .filter_map(|c| c.infeasibility().map(|r| format!("{}: {r}", c.panel().id())))
                .unique()
                .join(", ")
        ),
    }

    Ok((candidates, summary))
}
