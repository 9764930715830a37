use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use log::{info, warn};
use panelizer::io::ext_repr::RawArgs;
use panelizer::io::import::{build_config, build_footprint, import_catalog};
use thousands::Separable;

use crate::config::PanelizerPreset;
use crate::io::output::PanelizerOutput;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Turns one form post into a ranked panelization, using `preset` for everything the form leaves out.
/// With `all_candidates`, the output also lists every evaluated candidate, infeasible ones included.
pub fn run(preset: &PanelizerPreset, raw_args: &RawArgs, all_candidates: bool) -> Result<PanelizerOutput> {
    let footprint = build_footprint(raw_args, &preset.defaults)?;
    let config = build_config(raw_args, &preset.defaults)?;
    let panel_options = import_catalog(&preset.catalog)?;

    info!(
        "[RUN] board {} x {} mm (rotation allowed: {}), {} panel options in catalog",
        footprint.width(),
        footprint.height(),
        footprint.allow_rotation(),
        panel_options.len()
    );

    let (candidates, summary) = panelizer::panelize(&footprint, &panel_options, &config)?;

    match &summary.best {
        Some(best) => info!(
            "[RUN] best layout places {} boards on panel {} ({} per jumbo sheet, most over all layouts: {})",
            best.board_count().separate_with_commas(),
            best.panel().id(),
            best.boards_per_jumbo().separate_with_commas(),
            summary.max_boards_per_jumbo.unwrap_or_default().separate_with_commas()
        ),
        None => warn!("[RUN] {}", summary.message()),
    }

    Ok(PanelizerOutput {
        footprint,
        config,
        message: summary.message(),
        summary,
        candidates: all_candidates.then_some(candidates),
    })
}
