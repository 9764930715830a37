use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    /// Draws the usable area inside the edge margins
    #[serde(default)]
    pub usable_area: bool,
    /// Draws the kerf-inflated cell behind every board
    #[serde(default)]
    pub kerf_cells: bool,
}

#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub panel_fill: &'static str,
    pub board_fill: &'static str,
    pub board_stroke: &'static str,
    pub cell_fill: &'static str,
    pub usable_stroke: &'static str,
}

pub static EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    panel_fill: "#CC824A",
    board_fill: "#FFC879",
    board_stroke: "#7F643C",
    cell_fill: "#2D2D2D",
    usable_stroke: "#FFFFFF",
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.5,
    panel_fill: "#C3C3C3",
    board_fill: "#8F8F8F",
    board_stroke: "#474747",
    cell_fill: "#636363",
    usable_stroke: "#000000",
};
