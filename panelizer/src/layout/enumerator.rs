use crate::entities::{BoardFootprint, Infeasibility, LayoutCandidate, PanelOption, PlacementConfig};
use crate::geometry::grid::{GridAxis, upper_bound_grid_count};
use anyhow::{Context, Result};

/// Produces one candidate per eligible (panel option, orientation) pair.
///
/// Eligible panel options are those whose style class is included by `config`, each followed by
/// its jumbo variant if it has a multiplier. Panels keep their catalog order, the normal
/// orientation precedes the rotated one. The grid size comes straight from the closed-form
/// bound on each axis: the cost is linear in the number of pairs, independent of the board count.
pub fn enumerate(
    footprint: &BoardFootprint,
    panel_options: &[PanelOption],
    config: &PlacementConfig,
) -> Result<Vec<LayoutCandidate>> {
    let orientations = orientations(footprint);
    eligible_panels(panel_options, config)
        .flat_map(|panel| {
            orientations
                .iter()
                .map(move |(rotated, board)| fit_grid(&panel, *rotated, board, config))
                .collect::<Vec<Result<_>>>()
        })
        .collect()
}

/// Panel options with an included style class, plus their jumbo variants
pub fn eligible_panels<'a>(
    panel_options: &'a [PanelOption],
    config: &'a PlacementConfig,
) -> impl Iterator<Item = PanelOption> + 'a {
    panel_options
        .iter()
        .filter(|p| config.includes(p.style_class()))
        .flat_map(|p| std::iter::once(p.clone()).chain(p.jumbo_variant()))
}

/// The board as-is, and turned by 90° if rotation is allowed and changes the footprint
pub fn orientations(footprint: &BoardFootprint) -> Vec<(bool, BoardFootprint)> {
    let mut orientations = vec![(false, *footprint)];
    if footprint.allow_rotation() && !footprint.is_square() {
        orientations.push((true, footprint.rotated()));
    }
    orientations
}

/// Fits `board` (already in its placement orientation) onto `panel` as a uniform grid.
/// Fails if the number of boards (or boards per jumbo sheet) does not fit in a `u64`.
pub fn fit_grid(
    panel: &PanelOption,
    rotated: bool,
    board: &BoardFootprint,
    config: &PlacementConfig,
) -> Result<LayoutCandidate> {
    let (margin_w, margin_h) = (config.edge_margin_w(), config.edge_margin_h());
    let (gap_w, gap_h) = (config.gap_w(), config.gap_h());
    //every cut removes material on top of the configured gap
    let cell_w = board.width() + config.kerf();
    let cell_h = board.height() + config.kerf();

    let no_usable_area =
        panel.width() - 2.0 * margin_w <= 0.0 || panel.height() - 2.0 * margin_h <= 0.0;

    let (cols, rows) = match no_usable_area {
        true => (0, 0),
        false => (
            upper_bound_grid_count(panel.width(), cell_w, gap_w, margin_w),
            upper_bound_grid_count(panel.height(), cell_h, gap_h, margin_h),
        ),
    };

    let infeasibility = if no_usable_area {
        Some(Infeasibility::NoUsableArea)
    } else if cols == 0 {
        Some(Infeasibility::NoColumns)
    } else if rows == 0 {
        Some(Infeasibility::NoRows)
    } else {
        None
    };

    let board_count = cols.checked_mul(rows).with_context(|| {
        format!(
            "panel {} (rotated: {rotated}) holds {cols} x {rows} boards, more than can be counted",
            panel.id()
        )
    })?;
    let boards_per_jumbo = board_count
        .checked_mul(u64::from(panel.panels_per_jumbo()))
        .with_context(|| {
            format!(
                "panel {} (rotated: {rotated}): {board_count} boards x {} panels per jumbo sheet cannot be counted",
                panel.id(),
                panel.panels_per_jumbo()
            )
        })?;

    Ok(LayoutCandidate::new(
        panel.clone(),
        rotated,
        board.width(),
        board.height(),
        GridAxis::new(margin_w, cell_w, gap_w, cols),
        GridAxis::new(margin_h, cell_h, gap_h, rows),
        board_count,
        boards_per_jumbo,
        infeasibility,
    ))
}
