use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::entities::ensure_positive;
use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};

/// Suffix appended to the id of a panel option to name its large-format variant
pub const JUMBO_ID_SUFFIX: &str = "-J";

/// Categorical tag grouping panel stock options, filterable by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StyleClass {
    A,
    B,
    C,
    D,
    E,
}

impl StyleClass {
    pub const ALL: [StyleClass; 5] = [
        StyleClass::A,
        StyleClass::B,
        StyleClass::C,
        StyleClass::D,
        StyleClass::E,
    ];

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(StyleClass::A),
            'B' => Some(StyleClass::B),
            'C' => Some(StyleClass::C),
            'D' => Some(StyleClass::D),
            'E' => Some(StyleClass::E),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            StyleClass::A => 'A',
            StyleClass::B => 'B',
            StyleClass::C => 'C',
            StyleClass::D => 'D',
            StyleClass::E => 'E',
        }
    }
}

impl FromStr for StyleClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next().and_then(StyleClass::from_letter), chars.next()) {
            (Some(style), None) => Ok(style),
            _ => bail!("unknown panel style class {s:?}, expected one of A, B, C, D, E"),
        }
    }
}

impl Display for StyleClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Scale factors deriving a large-format ("jumbo") variant from a panel option.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct JumboMultiplier {
    width: f64,
    height: f64,
}

impl JumboMultiplier {
    /// An omitted factor leaves that dimension unscaled.
    pub fn try_new(width: Option<f64>, height: Option<f64>) -> Result<Self> {
        let width = width.unwrap_or(1.0);
        let height = height.unwrap_or(1.0);
        ensure!(
            width.is_finite() && width > 0.0,
            "jumbo width multiplier must be strictly positive, got {width}"
        );
        ensure!(
            height.is_finite() && height > 0.0,
            "jumbo height multiplier must be strictly positive, got {height}"
        );
        ensure!(
            width != 1.0 || height != 1.0,
            "jumbo multiplier must scale at least one dimension"
        );
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// A panel stock size from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelOption {
    id: String,
    style_class: StyleClass,
    width: f64,
    height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    jumbo_multiplier: Option<JumboMultiplier>,
    /// Panels of this size cut from one jumbo sheet of stock
    panels_per_jumbo: u32,
}

impl PanelOption {
    pub fn try_new(
        id: impl Into<String>,
        style_class: StyleClass,
        width: f64,
        height: f64,
    ) -> Result<Self> {
        let id = id.into();
        ensure!(!id.trim().is_empty(), "panel option id must not be empty");
        ensure_positive(&format!("width of panel {id}"), width)?;
        ensure_positive(&format!("height of panel {id}"), height)?;
        Ok(Self {
            id,
            style_class,
            width,
            height,
            jumbo_multiplier: None,
            panels_per_jumbo: 1,
        })
    }

    pub fn with_jumbo_multiplier(mut self, multiplier: JumboMultiplier) -> Self {
        self.jumbo_multiplier = Some(multiplier);
        self
    }

    pub fn with_panels_per_jumbo(mut self, panels_per_jumbo: u32) -> Result<Self> {
        ensure!(
            panels_per_jumbo > 0,
            "panel {} must yield at least one panel per jumbo sheet",
            self.id
        );
        self.panels_per_jumbo = panels_per_jumbo;
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn style_class(&self) -> StyleClass {
        self.style_class
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn jumbo_multiplier(&self) -> Option<JumboMultiplier> {
        self.jumbo_multiplier
    }

    pub fn panels_per_jumbo(&self) -> u32 {
        self.panels_per_jumbo
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The synthetic large-format option of the same style, if a multiplier is configured.
    /// The variant carries no multiplier of its own and counts as a whole jumbo sheet.
    pub fn jumbo_variant(&self) -> Option<PanelOption> {
        self.jumbo_multiplier.map(|m| PanelOption {
            id: format!("{}{}", self.id, JUMBO_ID_SUFFIX),
            style_class: self.style_class,
            width: self.width * m.width,
            height: self.height * m.height,
            jumbo_multiplier: None,
            panels_per_jumbo: 1,
        })
    }
}
