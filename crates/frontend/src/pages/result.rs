use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use pinpoint_shared::session::Session;
use pinpoint_shared::view::{ResultOverlay, ResultView};
use pinpoint_shared::viewport::ViewportTransform;

use crate::components::grid_surface::GridSurface;
use crate::components::markers::{line_svg, CursorLabel, Marker, MarkerKind};
use crate::coords::{self, PanAnchor};
use crate::Route;

const GRID_CONTAINER_ID: &str = "result-grid-container";

/// Report a pan in flight to the view and stop following the pointer.
fn end_pan(
    view: &mut Signal<ResultView>,
    pan_anchor: &mut Signal<Option<PanAnchor>>,
    live_pan: &mut Signal<Option<(f64, f64)>>,
) {
    let pan = *live_pan.peek();
    if let Some((px, py)) = pan {
        view.write().on_pan_end(px, py);
        live_pan.set(None);
    }
    pan_anchor.set(None);
}

#[component]
pub fn ResultPage() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let nav = navigator();

    // The selection screen's "Result" button already moved the session on.
    let mut view = use_signal(|| session.peek().result_view());
    let mut pan_anchor = use_signal(|| None::<PanAnchor>);
    let mut live_pan = use_signal(|| None::<(f64, f64)>);

    let committed = view.read().transform();
    let display = match *live_pan.read() {
        Some((px, py)) => ViewportTransform::new(committed.scale, px, py),
        None => committed,
    };
    let geometry = view.read().geometry();
    let readout = view.read().cursor_readout();
    let overlay = view.read().overlay_at(&display);
    let line = overlay.line().map(|(from, to)| line_svg(from, to));
    let reference_screen = overlay.reference_screen();
    let listing = overlay.pin_listing();
    let container_class = if live_pan.read().is_some() {
        "grid-container dragging"
    } else {
        "grid-container"
    };

    rsx! {
        div { class: "container",
            div { class: "button-container",
                button {
                    class: "btn",
                    onclick: move |_| {
                        session.write().restart();
                        nav.push(Route::EntryPage {});
                    },
                    "Back"
                }
            }

            div {
                id: GRID_CONTAINER_ID,
                class: "{container_class}",

                onwheel: move |evt: Event<WheelData>| {
                    evt.prevent_default();
                    let Some(rect) = coords::container_rect(GRID_CONTAINER_ID) else { return };
                    let client = evt.data().client_coordinates();
                    let delta_y = coords::wheel_delta_y(evt.data().delta());
                    let current = view.read().transform();
                    let bounds = view.read().viewport().bounds();
                    if let Some(next) = coords::wheel_zoom(
                        delta_y, client.x - rect.left, client.y - rect.top, current, bounds,
                    ) {
                        let mut v = view.write();
                        v.on_zoom_end(next.scale);
                        v.on_pan_end(next.pan_offset_x, next.pan_offset_y);
                    }
                },

                onmousedown: move |evt: Event<MouseData>| {
                    if evt.trigger_button() != Some(MouseButton::Primary) {
                        return;
                    }
                    let client = evt.client_coordinates();
                    let rect = coords::container_rect(GRID_CONTAINER_ID);
                    view.write().pointer_down(client.x, client.y, rect.as_ref());
                    let transform = view.read().transform();
                    pan_anchor.set(Some(PanAnchor::new(client.x, client.y, &transform)));
                },

                onmousemove: move |evt: Event<MouseData>| {
                    let client = evt.client_coordinates();
                    let rect = coords::container_rect(GRID_CONTAINER_ID);
                    view.write().pointer_move(client.x, client.y, rect.as_ref());
                    let anchor = *pan_anchor.read();
                    if let Some(anchor) = anchor {
                        live_pan.set(Some(anchor.pan_at(client.x, client.y)));
                    }
                },

                onmouseup: move |evt: Event<MouseData>| {
                    let client = evt.client_coordinates();
                    let rect = coords::container_rect(GRID_CONTAINER_ID);
                    view.write().pointer_up(client.x, client.y, rect.as_ref());
                    end_pan(&mut view, &mut pan_anchor, &mut live_pan);
                },

                onmouseleave: move |_| {
                    end_pan(&mut view, &mut pan_anchor, &mut live_pan);
                },

                GridSurface { geometry, transform_style: coords::transform_style(&display) }

                if let Some(svg) = line {
                    div { dangerous_inner_html: "{svg}" }
                }

                if let ResultOverlay::Scored { pin_screen, score, .. } = overlay {
                    Marker { kind: MarkerKind::Pin, screen: pin_screen, label: score.label() }
                }

                Marker {
                    kind: MarkerKind::Answer,
                    screen: reference_screen,
                    label: "Answer Pin".to_string(),
                }

                CursorLabel { readout }
            }

            div { class: "pin-listing",
                for entry in listing {
                    p { "{entry}" }
                }
            }
        }
    }
}
