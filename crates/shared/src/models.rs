use serde::{Deserialize, Serialize};

/// A point in the grid's canonical, zoom/pan-independent coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceCoordinate {
    pub x: f64,
    pub y: f64,
}

impl SurfaceCoordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer position relative to the viewport container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub screen_x: f64,
    pub screen_y: f64,
}

impl PointerSample {
    pub const fn new(screen_x: f64, screen_y: f64) -> Self {
        Self { screen_x, screen_y }
    }

    /// Straight-line distance to another sample, in screen pixels.
    pub fn distance_to(self, other: PointerSample) -> f64 {
        let dx = other.screen_x - self.screen_x;
        let dy = other.screen_y - self.screen_y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Bounding box of the viewport container in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Fixed cell layout of one view's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewGeometry {
    pub column_count: u32,
    pub row_count: u32,
    pub cell_width: f64,
    pub cell_height: f64,
}

/// Inclusive scale range a view's transform is held to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
}

impl ScaleBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Hold `scale` inside the range. Inverted bounds resolve to `max`
    /// instead of panicking.
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }

    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

/// Which screen of the exercise a view belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    Selection,
    Result,
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Selection => write!(f, "Selection"),
            ViewKind::Result => write!(f, "Result"),
        }
    }
}
