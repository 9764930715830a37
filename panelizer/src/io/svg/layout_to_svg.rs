use crate::entities::LayoutCandidate;
use crate::geometry::primitives::Rect;
use crate::io::svg::SvgDrawOptions;
use svg::Document;
use log::warn;
use svg::node::element::{Group, Rectangle, Title};

/// Boards (and kerf cells) beyond this count are left out of the drawing
pub const MAX_DRAWN_BOARDS: usize = 10_000;

/// Draws the panel of `candidate` with all of its boards.
/// Panel coordinates have their origin in the bottom-left corner, the drawing flips the y-axis accordingly.
pub fn candidate_to_svg(candidate: &LayoutCandidate, options: SvgDrawOptions) -> Document {
    let panel = candidate.panel();
    let (panel_w, panel_h) = (panel.width(), panel.height());
    let theme = options.theme.get_theme();
    let stroke_width = f64::min(panel_w, panel_h) * 0.001 * theme.stroke_width_multiplier;
    let pad = f64::max(panel_w, panel_h) * 0.025;

    if candidate.board_count() > MAX_DRAWN_BOARDS as u64 {
        warn!(
            "[SVG] panel {} holds {} boards, only drawing the first {MAX_DRAWN_BOARDS}",
            panel.id(),
            candidate.board_count()
        );
    }

    //converts a rectangle in panel coordinates to an svg element
    let rect_to_svg = |r: &Rect| {
        Rectangle::new()
            .set("x", r.x_min)
            .set("y", panel_h - r.y_max)
            .set("width", r.width())
            .set("height", r.height())
    };

    let panel_group = Group::new()
        .set("id", format!("panel_{}", panel.id()))
        .add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", panel_w)
                .set("height", panel_h)
                .set("fill", theme.panel_fill)
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
        .add(Title::new(format!(
            "panel {} (style {}), {panel_w} x {panel_h} mm, {} x {} boards{}, {} per jumbo sheet, utilization: {:.3}%",
            panel.id(),
            panel.style_class(),
            candidate.cols(),
            candidate.rows(),
            if candidate.rotated() { " (rotated)" } else { "" },
            candidate.boards_per_jumbo(),
            candidate.utilization() * 100.0
        )));

    let usable_group = match options.usable_area {
        false => None,
        true => {
            let margins = candidate.margins();
            let usable = Rect {
                x_min: margins.left,
                y_min: margins.bottom,
                x_max: panel_w - margins.left,
                y_max: panel_h - margins.bottom,
            };
            Some(
                Group::new().set("id", "usable_area").add(
                    rect_to_svg(&usable)
                        .set("fill", "none")
                        .set("stroke", theme.usable_stroke)
                        .set("stroke-width", stroke_width)
                        .set("stroke-dasharray", format!("{} {}", 4.0 * stroke_width, 2.0 * stroke_width)),
                ),
            )
        }
    };

    let cell_group = match options.kerf_cells {
        false => None,
        true => Some(candidate.cells().take(MAX_DRAWN_BOARDS).fold(
            Group::new().set("id", "kerf_cells"),
            |group, cell| {
                group.add(
                    rect_to_svg(&cell)
                        .set("fill", theme.cell_fill)
                        .set("fill-opacity", "0.5"),
                )
            },
        )),
    };

    let board_group = candidate.placements().take(MAX_DRAWN_BOARDS).enumerate().fold(
        Group::new().set("id", "boards"),
        |group, (i, board)| {
            group.add(
                rect_to_svg(&board)
                    .set("fill", theme.board_fill)
                    .set("stroke", theme.board_stroke)
                    .set("stroke-width", stroke_width)
                    .add(Title::new(format!(
                        "board #{i}, at ({:.3}, {:.3})",
                        board.x_min, board.y_min
                    ))),
            )
        },
    );

    let vbox_svg = (-pad, -pad, panel_w + 2.0 * pad, panel_h + 2.0 * pad);

    let optionals = [usable_group, cell_group]
        .into_iter()
        .flatten()
        .fold(Group::new().set("id", "optionals"), |g, opt| g.add(opt));

    Document::new()
        .set("viewBox", vbox_svg)
        .add(panel_group)
        .add(optionals)
        .add(board_group)
}
