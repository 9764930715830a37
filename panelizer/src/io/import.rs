use crate::entities::{BoardFootprint, JumboMultiplier, PanelOption, PlacementConfig, StyleClass};
use crate::io::ext_repr::{ExtPanelCatalog, ExtPlacementDefaults, RawArgs};
use anyhow::{Context, Result, bail, ensure};
use log::debug;

/// Form field keys
pub mod keys {
    pub const BOARD_WIDTH: &str = "CBW";
    pub const BOARD_LENGTH: &str = "CBL";
    pub const ALLOW_ROTATION: &str = "ARB";
    pub const PANEL_EDGE_MARGIN_W: &str = "PEW";
    pub const PANEL_EDGE_MARGIN_L: &str = "PEL";
    pub const INTER_BOARD_GAP_W: &str = "CW";
    pub const INTER_BOARD_GAP_L: &str = "CL";
    pub const KERF: &str = "KERF";
    pub const LIMIT: &str = "LIMIT";

    /// Checkbox key of a style class, e.g. `SET_A`
    pub fn include_set(style: crate::entities::StyleClass) -> String {
        format!("SET_{style}")
    }
}

/// Builds the [`PlacementConfig`] of a request from its form arguments, falling back on `defaults`.
///
/// Missing or empty values take the default. Values that are present but malformed are rejected,
/// the error names the form field.
pub fn build_config(args: &RawArgs, defaults: &ExtPlacementDefaults) -> Result<PlacementConfig> {
    let include_styles = StyleClass::ALL
        .into_iter()
        .filter(|&style| {
            form_checkbox(
                args,
                &keys::include_set(style),
                defaults.include_sets.contains(&style),
            )
        })
        .collect::<Vec<_>>();

    let config = PlacementConfig::builder()
        .edge_margins(
            form_float(args, keys::PANEL_EDGE_MARGIN_W, defaults.panel_edge_margin_w)?,
            form_float(args, keys::PANEL_EDGE_MARGIN_L, defaults.panel_edge_margin_l)?,
        )
        .gaps(
            form_float(args, keys::INTER_BOARD_GAP_W, defaults.inter_board_gap_w)?,
            form_float(args, keys::INTER_BOARD_GAP_L, defaults.inter_board_gap_l)?,
        )
        .kerf(form_float(args, keys::KERF, defaults.kerf_allowance)?)
        .result_limit(form_limit(args, keys::LIMIT, defaults.limit)?)
        .include_styles(include_styles)
        .build()?;

    debug!("[IMPORT] placement config: {config:?}");
    Ok(config)
}

/// Builds the [`BoardFootprint`] of a request from its form arguments, falling back on `defaults`.
pub fn build_footprint(args: &RawArgs, defaults: &ExtPlacementDefaults) -> Result<BoardFootprint> {
    BoardFootprint::try_new(
        form_float(args, keys::BOARD_WIDTH, defaults.board_width)?,
        form_float(args, keys::BOARD_LENGTH, defaults.board_length)?,
        form_checkbox(args, keys::ALLOW_ROTATION, defaults.allow_rotation),
    )
}

/// Converts the external catalog into panel options, in id order.
/// The style class of each option is the first letter of its id.
pub fn import_catalog(ext_catalog: &ExtPanelCatalog) -> Result<Vec<PanelOption>> {
    if let Some(unknown) = ext_catalog
        .jumbo_multiplier
        .keys()
        .find(|id| !ext_catalog.panel_options.contains_key(*id))
    {
        bail!("jumbo multiplier given for unknown panel option {unknown:?}");
    }
    if let Some(unknown) = ext_catalog
        .panels_per_jumbo
        .keys()
        .find(|id| !ext_catalog.panel_options.contains_key(*id))
    {
        bail!("panels per jumbo sheet given for unknown panel option {unknown:?}");
    }

    ext_catalog
        .panel_options
        .iter()
        .map(|(id, &(width, height))| {
            let style = id
                .chars()
                .next()
                .and_then(StyleClass::from_letter)
                .with_context(|| {
                    format!("panel option {id:?} does not start with a style class (A-E)")
                })?;
            let mut option = PanelOption::try_new(id.as_str(), style, width, height)?;
            if let Some(&n) = ext_catalog.panels_per_jumbo.get(id) {
                option = option.with_panels_per_jumbo(n)?;
            }
            match ext_catalog.jumbo_multiplier.get(id) {
                None => Ok(option),
                Some(ext_jm) => {
                    let jm = JumboMultiplier::try_new(ext_jm.width, ext_jm.height)
                        .with_context(|| format!("invalid jumbo multiplier for panel option {id:?}"))?;
                    Ok(option.with_jumbo_multiplier(jm))
                }
            }
        })
        .collect()
}

fn form_value<'a>(args: &'a RawArgs, key: &str) -> Option<&'a str> {
    args.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn form_float(args: &RawArgs, key: &str, default: f64) -> Result<f64> {
    match form_value(args, key) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("form field {key} is not a number: {raw:?}")),
    }
}

fn form_limit(args: &RawArgs, key: &str, default: usize) -> Result<usize> {
    match form_value(args, key) {
        None => Ok(default),
        Some(raw) => {
            let limit = raw
                .parse::<i64>()
                .with_context(|| format!("form field {key} is not an integer: {raw:?}"))?;
            ensure!(limit >= 0, "form field {key} must not be negative, got {limit}");
            usize::try_from(limit).with_context(|| format!("form field {key} is out of range: {limit}"))
        }
    }
}

/// HTML forms omit unchecked checkboxes: an absent key means `false`,
/// unless nothing was posted at all, in which case the default applies.
fn form_checkbox(args: &RawArgs, key: &str, default: bool) -> bool {
    match args.get(key) {
        Some(raw) => parse_bool(raw),
        None if args.is_empty() => default,
        None => false,
    }
}

fn parse_bool(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || ["1", "true", "on", "yes"].iter().any(|t| raw.eq_ignore_ascii_case(t))
}
