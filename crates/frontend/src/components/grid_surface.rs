use dioxus::prelude::*;
use pinpoint_shared::grid::cell_fill;
use pinpoint_shared::models::ViewGeometry;

/// Inline style sizing the surface to the geometry's extent with a checkerboard fill.
///
/// The background repeats a 2x2-cell tile. The conic gradient starts at the
/// tile's top-right quadrant (cell (1, 0)) and sweeps clockwise, so only the
/// fills of cells (1, 0) and (1, 1) are needed.
fn checkerboard_style(geometry: &ViewGeometry) -> String {
    let w = geometry.extent_width();
    let h = geometry.extent_height();
    let tile_w = geometry.cell_width * 2.0;
    let tile_h = geometry.cell_height * 2.0;
    let top_right = cell_fill(1, 0);
    let bottom_right = cell_fill(1, 1);
    format!(
        "width: {w}px; height: {h}px; \
         background: repeating-conic-gradient({top_right} 0 25%, {bottom_right} 0 50%) 0 0 / {tile_w}px {tile_h}px;"
    )
}

/// The scalable content of a view: the cell matrix plus anything drawn in surface space.
#[component]
pub fn GridSurface(geometry: ViewGeometry, transform_style: String) -> Element {
    let style = format!("{} {}", checkerboard_style(&geometry), transform_style);
    rsx! {
        div { class: "grid-content", style: "{style}" }
    }
}
