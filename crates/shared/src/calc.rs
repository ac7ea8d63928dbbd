use serde::{Deserialize, Serialize};

use crate::grid;
use crate::models::{SurfaceCoordinate, ViewGeometry};

/// Divisor taking a selection-view coordinate into result-view units.
pub const CROSS_VIEW_SCALE_FACTOR: f64 = 10.0;

/// Euclidean distance between two surface coordinates.
pub fn distance(a: SurfaceCoordinate, b: SurfaceCoordinate) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Round to two decimal places, the precision distances are reported at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Distance label as shown next to a pin, e.g. `Distance: 78.10 px`.
pub fn format_distance(dist: f64) -> String {
    format!("Distance: {:.2} px", dist)
}

/// Remaps a pin captured under the selection geometry into result-view units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossViewAdapter {
    factor: f64,
}

impl Default for CrossViewAdapter {
    fn default() -> Self {
        Self::new(CROSS_VIEW_SCALE_FACTOR)
    }
}

impl CrossViewAdapter {
    pub fn new(factor: f64) -> Self {
        debug_assert!(factor > 0.0, "cross-view factor must be positive");
        Self { factor }
    }

    /// Derive the factor from the two surfaces' widths instead of configuring it.
    pub fn from_geometries(from: &ViewGeometry, to: &ViewGeometry) -> Self {
        Self::new(grid::extent_ratio(from, to))
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn adapt(&self, coord: SurfaceCoordinate) -> SurfaceCoordinate {
        SurfaceCoordinate {
            x: coord.x / self.factor,
            y: coord.y / self.factor,
        }
    }
}

/// Distance of a pin from a reference point, both in the displaying view's units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub pin: SurfaceCoordinate,
    pub reference: SurfaceCoordinate,
    /// Rounded to two decimals.
    pub distance: f64,
}

impl Score {
    pub fn compute(pin: SurfaceCoordinate, reference: SurfaceCoordinate) -> Self {
        Score {
            pin,
            reference,
            distance: round2(distance(pin, reference)),
        }
    }

    pub fn label(&self) -> String {
        format_distance(self.distance)
    }
}
