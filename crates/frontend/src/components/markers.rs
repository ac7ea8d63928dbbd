use dioxus::prelude::*;
use pinpoint_shared::coords::CursorReadout;
use pinpoint_shared::models::PointerSample;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerKind {
    Pin,
    Answer,
}

impl MarkerKind {
    fn class(self) -> &'static str {
        match self {
            MarkerKind::Pin => "pin",
            MarkerKind::Answer => "answer-pin",
        }
    }
}

/// A dot at a container-relative screen position with a label above it.
#[component]
pub fn Marker(kind: MarkerKind, screen: PointerSample, label: String) -> Element {
    let left = screen.screen_x;
    let top = screen.screen_y;
    rsx! {
        div {
            class: kind.class(),
            style: "left: {left}px; top: {top}px;",
            div { class: "pin-label", "{label}" }
        }
    }
}

/// Cursor position readout, drawn next to the pointer.
#[component]
pub fn CursorLabel(readout: CursorReadout) -> Element {
    let text = format!(
        "Cursor Position: {} | Surface {}",
        readout.screen_label(),
        readout.surface_label()
    );
    let style = match readout.screen() {
        Some(p) => format!("left: {}px; top: {}px;", p.screen_x + 12.0, p.screen_y + 12.0),
        None => "left: 4px; top: 4px;".to_string(),
    };
    rsx! {
        div { class: "cursor-position", style: "{style}", "{text}" }
    }
}

/// Straight line between two screen points, as an inline SVG overlay.
pub fn line_svg(from: PointerSample, to: PointerSample) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" style="position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;"><line x1="{}" y1="{}" x2="{}" y2="{}" stroke="red" stroke-width="2"/></svg>"#,
        from.screen_x, from.screen_y, to.screen_x, to.screen_y
    )
}
