use crate::entities::LayoutCandidate;
use crate::util::FPA;

/// Fraction of the panel covered by the nominal area of `board_count` boards.
/// Margins, gaps and kerf are manufacturing overhead and never count as used area.
pub fn utilization(board_count: u64, board_width: f64, board_height: f64, panel_area: f64) -> f64 {
    debug_assert!(panel_area > 0.0);
    board_count as f64 * board_width * board_height / panel_area
}

/// Annotates `candidate` with its used area, unused area and utilization.
pub fn score(candidate: &mut LayoutCandidate) {
    let used_area = candidate.board_count as f64 * candidate.board_width * candidate.board_height;
    candidate.used_area = used_area;
    candidate.unused_area = candidate.panel_area - used_area;
    candidate.utilization = utilization(
        candidate.board_count,
        candidate.board_width,
        candidate.board_height,
        candidate.panel_area,
    );
    debug_assert!(candidate.utilization >= 0.0 && FPA(candidate.utilization) <= FPA(1.0));
}
