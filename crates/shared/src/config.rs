use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calc::CROSS_VIEW_SCALE_FACTOR;
use crate::gesture::DRAG_THRESHOLD;
use crate::grid::{RESULT_GEOMETRY, SELECTION_GEOMETRY};
use crate::models::{ScaleBounds, SurfaceCoordinate, ViewGeometry, ViewKind};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse exercise config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{view} view: scale bounds [{min}, {max}] must be positive and ordered")]
    ScaleBounds { view: ViewKind, min: f64, max: f64 },
    #[error("{view} view: initial scale {scale} is outside [{min}, {max}]")]
    InitialScale {
        view: ViewKind,
        scale: f64,
        min: f64,
        max: f64,
    },
    #[error("{view} view: grid must have at least one cell of positive size")]
    Geometry { view: ViewKind },
    #[error("cross-view scale factor must be positive and finite, got {0}")]
    CrossViewFactor(f64),
    #[error("drag threshold must be non-negative and finite, got {0}")]
    DragThreshold(f64),
}

/// Fixed settings of one view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    pub geometry: ViewGeometry,
    pub scale_bounds: ScaleBounds,
    pub initial_scale: f64,
    /// Expressed in this view's own geometry.
    pub reference_point: SurfaceCoordinate,
}

impl ViewConfig {
    pub fn selection_default() -> Self {
        ViewConfig {
            geometry: SELECTION_GEOMETRY,
            scale_bounds: ScaleBounds::new(0.01, 100.0),
            initial_scale: 0.1,
            reference_point: SurfaceCoordinate::new(500.0, 400.0),
        }
    }

    pub fn result_default() -> Self {
        ViewConfig {
            geometry: RESULT_GEOMETRY,
            scale_bounds: ScaleBounds::new(1.0, 8.0),
            initial_scale: 1.0,
            reference_point: SurfaceCoordinate::new(100.0, 100.0),
        }
    }

    fn validate(&self, view: ViewKind) -> Result<(), ConfigError> {
        let ScaleBounds { min, max } = self.scale_bounds;
        if !(min > 0.0 && min.is_finite() && max.is_finite() && min <= max) {
            return Err(ConfigError::ScaleBounds { view, min, max });
        }
        if !self.scale_bounds.contains(self.initial_scale) {
            return Err(ConfigError::InitialScale {
                view,
                scale: self.initial_scale,
                min,
                max,
            });
        }
        let g = &self.geometry;
        if g.column_count == 0 || g.row_count == 0 || g.cell_width <= 0.0 || g.cell_height <= 0.0
        {
            return Err(ConfigError::Geometry { view });
        }
        Ok(())
    }
}

/// Settings for a whole exercise session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseConfig {
    pub selection: ViewConfig,
    pub result: ViewConfig,
    pub cross_view_scale_factor: f64,
    pub drag_threshold: f64,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        ExerciseConfig {
            selection: ViewConfig::selection_default(),
            result: ViewConfig::result_default(),
            cross_view_scale_factor: CROSS_VIEW_SCALE_FACTOR,
            drag_threshold: DRAG_THRESHOLD,
        }
    }
}

impl ExerciseConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ExerciseConfig = serde_json::from_str(json)?;
        config.validate()?;
        tracing::info!(
            factor = config.cross_view_scale_factor,
            drag_threshold = config.drag_threshold,
            "Loaded exercise config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.selection.validate(ViewKind::Selection)?;
        self.result.validate(ViewKind::Result)?;
        let factor = self.cross_view_scale_factor;
        if !(factor > 0.0 && factor.is_finite()) {
            return Err(ConfigError::CrossViewFactor(factor));
        }
        let threshold = self.drag_threshold;
        if !(threshold >= 0.0 && threshold.is_finite()) {
            return Err(ConfigError::DragThreshold(threshold));
        }
        Ok(())
    }

    pub fn view(&self, kind: ViewKind) -> &ViewConfig {
        match kind {
            ViewKind::Selection => &self.selection,
            ViewKind::Result => &self.result,
        }
    }
}
