use dioxus::html::input_data::MouseButton;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use pinpoint_shared::gesture::PointerTarget;
use pinpoint_shared::session::Session;
use pinpoint_shared::view::SelectionView;
use pinpoint_shared::viewport::ViewportTransform;

use crate::components::grid_surface::GridSurface;
use crate::components::markers::{CursorLabel, Marker, MarkerKind};
use crate::coords::{self, PanAnchor};
use crate::Route;

const GRID_CONTAINER_ID: &str = "selection-grid-container";

/// Release handling shared by the surface and the control buttons.
fn finish_gesture(
    client_x: f64,
    client_y: f64,
    target: PointerTarget,
    view: &mut Signal<SelectionView>,
    session: &mut Signal<Session>,
    pan_anchor: &mut Signal<Option<PanAnchor>>,
    live_pan: &mut Signal<Option<(f64, f64)>>,
) {
    let rect = coords::container_rect(GRID_CONTAINER_ID);
    let outcome = view
        .write()
        .pointer_up(client_x, client_y, rect.as_ref(), target);

    // A pan that ended (wherever it ended) is reported to the view.
    let pan = *live_pan.peek();
    if let Some((px, py)) = pan {
        view.write().on_pan_end(px, py);
        live_pan.set(None);
    }
    pan_anchor.set(None);

    if let Some(coord) = session.write().commit_click(&view.read(), outcome) {
        tracing::debug!(x = coord.x, y = coord.y, "Selection click committed");
    }
}

/// The pointer left the tracked area mid-gesture; its release will never arrive.
fn abandon_gesture(
    view: &mut Signal<SelectionView>,
    pan_anchor: &mut Signal<Option<PanAnchor>>,
    live_pan: &mut Signal<Option<(f64, f64)>>,
) {
    let pan = *live_pan.peek();
    let mut v = view.write();
    if let Some((px, py)) = pan {
        v.on_pan_end(px, py);
        live_pan.set(None);
    }
    v.cancel_gesture();
    pan_anchor.set(None);
}

#[component]
pub fn SelectionPage() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let nav = navigator();

    // Dropped with the page, which releases its input subscription.
    let mut view = use_signal(|| session.peek().enter_selection());
    let mut pan_anchor = use_signal(|| None::<PanAnchor>);
    let mut live_pan = use_signal(|| None::<(f64, f64)>);

    let committed = view.read().transform();
    let display = match *live_pan.read() {
        Some((px, py)) => ViewportTransform::new(committed.scale, px, py),
        None => committed,
    };
    let geometry = view.read().geometry();
    let readout = view.read().cursor_readout();
    let pin_overlay = view.read().pin_overlay_at(session.read().pin(), &display);
    let container_class = if live_pan.read().is_some() {
        "grid-container dragging"
    } else {
        "grid-container"
    };

    rsx! {
        div {
            class: "container",

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
                    if view.read().is_dragging() {
                        live_pan.set(Some(anchor.pan_at(client.x, client.y)));
                    }
                }
            },

            onmouseup: move |evt: Event<MouseData>| {
                let client = evt.client_coordinates();
                finish_gesture(
                    client.x, client.y, PointerTarget::Surface,
                    &mut view, &mut session, &mut pan_anchor, &mut live_pan,
                );
            },

            onmouseleave: move |_| {
                abandon_gesture(&mut view, &mut pan_anchor, &mut live_pan);
            },

            div { class: "button-container",
                button {
                    class: "btn",
                    onmouseup: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        let client = evt.client_coordinates();
                        finish_gesture(
                            client.x, client.y, PointerTarget::Control,
                            &mut view, &mut session, &mut pan_anchor, &mut live_pan,
                        );
                    },
                    onclick: move |_| {
                        session.write().restart();
                        nav.push(Route::EntryPage {});
                    },
                    "Back"
                }
                button {
                    class: "btn",
                    onmouseup: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        let client = evt.client_coordinates();
                        finish_gesture(
                            client.x, client.y, PointerTarget::Control,
                            &mut view, &mut session, &mut pan_anchor, &mut live_pan,
                        );
                    },
                    onclick: move |_| {
                        session.write().finish_selection();
                        nav.push(Route::ResultPage {});
                    },
                    "Result"
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

                GridSurface { geometry, transform_style: coords::transform_style(&display) }

                if let Some(overlay) = pin_overlay {
                    Marker {
                        kind: MarkerKind::Pin,
                        screen: overlay.screen,
                        label: overlay.score.label(),
                    }
                }

                CursorLabel { readout }
            }
        }
    }
}
