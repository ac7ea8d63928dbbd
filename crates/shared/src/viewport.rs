use serde::{Deserialize, Serialize};

use crate::models::ScaleBounds;

/// Zoom scale and pan offset of one view.
///
/// `pan_offset_x`/`pan_offset_y` are the screen-space translation of the
/// content origin, so a surface point lands at `surface * scale - pan_offset`.
/// Updated only when a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportTransform {
    pub scale: f64,
    pub pan_offset_x: f64,
    pub pan_offset_y: f64,
}

impl ViewportTransform {
    pub const fn new(scale: f64, pan_offset_x: f64, pan_offset_y: f64) -> Self {
        Self {
            scale,
            pan_offset_x,
            pan_offset_y,
        }
    }

    pub const fn at_scale(scale: f64) -> Self {
        Self::new(scale, 0.0, 0.0)
    }
}

/// Transform state for one view, bounded to the view's scale range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    transform: ViewportTransform,
    bounds: ScaleBounds,
}

impl ViewportState {
    pub fn new(initial_scale: f64, bounds: ScaleBounds) -> Self {
        Self {
            transform: ViewportTransform::at_scale(bounds.clamp(initial_scale)),
            bounds,
        }
    }

    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    pub fn pan_offset(&self) -> (f64, f64) {
        (self.transform.pan_offset_x, self.transform.pan_offset_y)
    }

    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    /// Apply the scale reported at the end of a zoom gesture.
    /// Returns `false` if nothing changed.
    pub fn on_zoom_end(&mut self, new_scale: f64) -> bool {
        let scale = self.bounds.clamp(new_scale);
        if scale == self.transform.scale {
            return false;
        }
        tracing::trace!(scale, "Zoom ended");
        self.transform.scale = scale;
        true
    }

    /// Apply the offset reported at the end of a pan gesture.
    /// Returns `false` if nothing changed.
    pub fn on_pan_end(&mut self, pan_offset_x: f64, pan_offset_y: f64) -> bool {
        if (pan_offset_x, pan_offset_y) == self.pan_offset() {
            return false;
        }
        tracing::trace!(pan_offset_x, pan_offset_y, "Pan ended");
        self.transform.pan_offset_x = pan_offset_x;
        self.transform.pan_offset_y = pan_offset_y;
        true
    }
}

/// Pan offset that keeps the surface point under `cursor` fixed while the
/// scale changes from `old_scale` to `new_scale`.
pub fn zoom_anchor_pan(
    cursor_x: f64,
    cursor_y: f64,
    old: ViewportTransform,
    new_scale: f64,
) -> (f64, f64) {
    let surface_x = (cursor_x + old.pan_offset_x) / old.scale;
    let surface_y = (cursor_y + old.pan_offset_y) / old.scale;
    (
        surface_x * new_scale - cursor_x,
        surface_y * new_scale - cursor_y,
    )
}
