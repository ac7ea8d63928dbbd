use dioxus::html::geometry::WheelDelta;
use pinpoint_shared::models::{ContainerRect, ScaleBounds};
use pinpoint_shared::viewport::{self, ViewportTransform};

const ZOOM_STEP: f64 = 1.1;

/// Bounding rect of the element with `container_id`, or `None` before it mounts.
pub fn container_rect(container_id: &str) -> Option<ContainerRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    let rect = element.get_bounding_client_rect();
    Some(ContainerRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
pub fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Transform after one wheel step at container-relative (`cursor_x`, `cursor_y`),
/// or `None` if the scale is already at its bound.
pub fn wheel_zoom(
    delta_y: f64,
    cursor_x: f64,
    cursor_y: f64,
    current: ViewportTransform,
    bounds: ScaleBounds,
) -> Option<ViewportTransform> {
    let factor = if delta_y < 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
    let new_scale = bounds.clamp(current.scale * factor);
    if (new_scale - current.scale).abs() < 1e-12 {
        return None;
    }
    let (pan_x, pan_y) = viewport::zoom_anchor_pan(cursor_x, cursor_y, current, new_scale);
    Some(ViewportTransform::new(new_scale, pan_x, pan_y))
}

/// Press position and offset at the start of a pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanAnchor {
    pub client_x: f64,
    pub client_y: f64,
    pub pan_offset_x: f64,
    pub pan_offset_y: f64,
}

impl PanAnchor {
    pub fn new(client_x: f64, client_y: f64, transform: &ViewportTransform) -> Self {
        PanAnchor {
            client_x,
            client_y,
            pan_offset_x: transform.pan_offset_x,
            pan_offset_y: transform.pan_offset_y,
        }
    }

    /// Offset while the pointer is at (`client_x`, `client_y`). Content follows
    /// the pointer, so the offset moves the opposite way.
    pub fn pan_at(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (
            self.pan_offset_x - (client_x - self.client_x),
            self.pan_offset_y - (client_y - self.client_y),
        )
    }
}

/// CSS transform placing the content so surface points land at `surface * scale - pan`.
pub fn transform_style(t: &ViewportTransform) -> String {
    format!(
        "transform: translate({}px, {}px) scale({});",
        -t.pan_offset_x, -t.pan_offset_y, t.scale
    )
}
