use std::collections::BTreeMap;

use crate::entities::StyleClass;
use serde::{Deserialize, Serialize};

/// Raw form arguments, as posted by an HTML form: field key to (unparsed) value.
pub type RawArgs = BTreeMap<String, String>;

/// Fallback values for every form field, typically loaded from a preset file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacementDefaults {
    /// Width of a single board (mm)
    pub board_width: f64,
    /// Length of a single board (mm)
    pub board_length: f64,
    /// Whether the board may be turned by 90°
    #[serde(default)]
    pub allow_rotation: bool,
    /// Clearance from the panel's left and right edges (mm)
    pub panel_edge_margin_w: f64,
    /// Clearance from the panel's bottom and top edges (mm)
    pub panel_edge_margin_l: f64,
    /// Spacing between horizontally adjacent boards (mm)
    pub inter_board_gap_w: f64,
    /// Spacing between vertically adjacent boards (mm)
    pub inter_board_gap_l: f64,
    /// Material removed per cut (mm)
    #[serde(default)]
    pub kerf_allowance: f64,
    /// Maximum number of layouts listed
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Panel style classes included in the search
    #[serde(default)]
    pub include_sets: Vec<StyleClass>,
}

fn default_limit() -> usize {
    10
}

impl Default for ExtPlacementDefaults {
    fn default() -> Self {
        Self {
            board_width: 52.0,
            board_length: 76.2,
            allow_rotation: true,
            panel_edge_margin_w: 5.0,
            panel_edge_margin_l: 5.0,
            inter_board_gap_w: 2.0,
            inter_board_gap_l: 2.0,
            kerf_allowance: 0.0,
            limit: 20,
            include_sets: vec![StyleClass::A, StyleClass::B, StyleClass::C],
        }
    }
}

/// External representation of the panel stock catalog.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPanelCatalog {
    /// Panel dimensions `[width, height]` by panel id. The first letter of the id is its style class.
    pub panel_options: BTreeMap<String, (f64, f64)>,
    /// Optional large-format scale factors by panel id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub jumbo_multiplier: BTreeMap<String, ExtJumboMultiplier>,
    /// Panels cut from one jumbo sheet of stock, by panel id. Absent ids count as 1.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub panels_per_jumbo: BTreeMap<String, u32>,
}

/// Scale factors of a jumbo variant, an omitted factor leaves that dimension unscaled
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtJumboMultiplier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Default for ExtPanelCatalog {
    /// The standard panel stock table, styles A through E, with the panels cut per jumbo sheet.
    fn default() -> Self {
        let panel_options = [
            ("A1", (520.5, 622.5)),
            ("A2", (415.0, 622.5)),
            ("A3", (347.0, 622.5)),
            ("A4", (520.5, 415.0)),
            ("B1", (546.0, 622.5)),
            ("B2", (415.0, 622.5)),
            ("B3", (415.0, 546.0)),
            ("B4", (364.0, 622.5)),
            ("C1", (546.0, 647.5)),
            ("C2", (431.6, 647.5)),
            ("C3", (431.6, 546.0)),
            ("C4", (364.0, 647.5)),
            ("D1", (520.5, 694.0)),
            ("D2", (415.0, 694.0)),
            ("D3", (416.4, 622.5)),
            ("D4", (365.0, 622.5)),
            ("E1", (546.0, 728.0)),
            ("E2", (431.5, 728.0)),
            ("E3", (436.8, 647.5)),
            ("E4", (384.1, 647.5)),
        ]
        .into_iter()
        .map(|(id, dims)| (id.to_string(), dims))
        .collect();

        let panels_per_jumbo = [
            ("A1", 4),
            ("A2", 5),
            ("A3", 6),
            ("A4", 6),
            ("B1", 4),
            ("B2", 5),
            ("B3", 6),
            ("B4", 6),
            ("C1", 4),
            ("C2", 5),
            ("C3", 6),
            ("C4", 6),
            ("D1", 7),
            ("D2", 9),
            ("D3", 10),
            ("D4", 11),
            ("E1", 7),
            ("E2", 9),
            ("E3", 10),
            ("E4", 11),
        ]
        .into_iter()
        .map(|(id, n)| (id.to_string(), n))
        .collect();

        Self {
            panel_options,
            jumbo_multiplier: BTreeMap::new(),
            panels_per_jumbo,
        }
    }
}
