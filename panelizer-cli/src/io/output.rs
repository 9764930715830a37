use panelizer::entities::{BoardFootprint, LayoutCandidate, PanelizerSummary, PlacementConfig};
use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
pub struct PanelizerOutput {
    pub footprint: BoardFootprint,
    pub config: PlacementConfig,
    pub message: String,
    pub summary: PanelizerSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<LayoutCandidate>>,
}
