use std::collections::BTreeSet;

use crate::entities::{StyleClass, ensure_overhead};
use anyhow::Result;
use serde::Serialize;

/// Per-run placement constraints, validated on construction.
/// Passed by value into the optimizer; there is no global configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacementConfig {
    /// Clearance between the panel's left/right edges and the outermost boards
    edge_margin_w: f64,
    /// Clearance between the panel's bottom/top edges and the outermost boards
    edge_margin_h: f64,
    /// Spacing between horizontally adjacent boards
    gap_w: f64,
    /// Spacing between vertically adjacent boards
    gap_h: f64,
    /// Material removed per cut, added to the board extent in both directions
    kerf: f64,
    /// Maximum number of candidates listed in the summary
    result_limit: usize,
    /// Style classes whose panel options are eligible
    include_styles: BTreeSet<StyleClass>,
}

impl PlacementConfig {
    pub fn builder() -> PlacementConfigBuilder {
        PlacementConfigBuilder::default()
    }

    pub fn edge_margin_w(&self) -> f64 {
        self.edge_margin_w
    }

    pub fn edge_margin_h(&self) -> f64 {
        self.edge_margin_h
    }

    pub fn gap_w(&self) -> f64 {
        self.gap_w
    }

    pub fn gap_h(&self) -> f64 {
        self.gap_h
    }

    pub fn kerf(&self) -> f64 {
        self.kerf
    }

    pub fn result_limit(&self) -> usize {
        self.result_limit
    }

    pub fn include_styles(&self) -> &BTreeSet<StyleClass> {
        &self.include_styles
    }

    pub fn includes(&self, style: StyleClass) -> bool {
        self.include_styles.contains(&style)
    }

    /// True if any margin, gap or kerf takes up panel area
    pub fn has_overhead(&self) -> bool {
        [
            self.edge_margin_w,
            self.edge_margin_h,
            self.gap_w,
            self.gap_h,
            self.kerf,
        ]
        .iter()
        .any(|&v| v > 0.0)
    }
}

/// Builder for [`PlacementConfig`].
/// Defaults: no margins, gaps or kerf, a result limit of 10 and all style classes included.
#[derive(Clone, Debug)]
pub struct PlacementConfigBuilder {
    edge_margin_w: f64,
    edge_margin_h: f64,
    gap_w: f64,
    gap_h: f64,
    kerf: f64,
    result_limit: usize,
    include_styles: BTreeSet<StyleClass>,
}

impl Default for PlacementConfigBuilder {
    fn default() -> Self {
        Self {
            edge_margin_w: 0.0,
            edge_margin_h: 0.0,
            gap_w: 0.0,
            gap_h: 0.0,
            kerf: 0.0,
            result_limit: 10,
            include_styles: StyleClass::ALL.into_iter().collect(),
        }
    }
}

impl PlacementConfigBuilder {
    pub fn edge_margins(mut self, w: f64, h: f64) -> Self {
        self.edge_margin_w = w;
        self.edge_margin_h = h;
        self
    }

    pub fn gaps(mut self, w: f64, h: f64) -> Self {
        self.gap_w = w;
        self.gap_h = h;
        self
    }

    pub fn kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    pub fn result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    pub fn include_styles(mut self, styles: impl IntoIterator<Item = StyleClass>) -> Self {
        self.include_styles = styles.into_iter().collect();
        self
    }

    /// Validates every field, failing on the first offending one.
    pub fn build(self) -> Result<PlacementConfig> {
        ensure_overhead("edge_margin_w", self.edge_margin_w)?;
        ensure_overhead("edge_margin_h", self.edge_margin_h)?;
        ensure_overhead("gap_w", self.gap_w)?;
        ensure_overhead("gap_h", self.gap_h)?;
        ensure_overhead("kerf", self.kerf)?;
        Ok(PlacementConfig {
            edge_margin_w: self.edge_margin_w,
            edge_margin_h: self.edge_margin_h,
            gap_w: self.gap_w,
            gap_h: self.gap_h,
            kerf: self.kerf,
            result_limit: self.result_limit,
            include_styles: self.include_styles,
        })
    }
}
