//! Per-screen view state: transform, gesture tracking and overlay geometry.
//!
//! Views are created by [`Session`](crate::session::Session) when their screen
//! mounts and dropped when it unmounts. Each view holds an [`InputSubscription`]
//! marking that lifetime in the log; the screen stops forwarding pointer
//! events once it drops the view.

use crate::calc::{CrossViewAdapter, Score};
use crate::config::ViewConfig;
use crate::coords::{self, CursorReadout};
use crate::gesture::{GestureDisambiguator, GestureOutcome, PointerTarget};
use crate::models::{ContainerRect, PointerSample, SurfaceCoordinate, ViewGeometry, ViewKind};
use crate::pin::Pin;
use crate::viewport::{ViewportState, ViewportTransform};

/// Mount-lifetime marker of a view: logged when acquired and when dropped.
#[derive(Debug)]
pub struct InputSubscription {
    view: ViewKind,
}

impl InputSubscription {
    fn acquire(view: ViewKind) -> Self {
        tracing::debug!(%view, "Input subscription acquired");
        Self { view }
    }
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        tracing::debug!(view = %self.view, "Input subscription released");
    }
}

/// Pin marker as drawn on the selection view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinOverlay {
    pub screen: PointerSample,
    /// Against the selection view's own reference point, in its surface units.
    pub score: Score,
}

#[derive(Debug)]
pub struct SelectionView {
    config: ViewConfig,
    viewport: ViewportState,
    gestures: GestureDisambiguator,
    cursor: CursorReadout,
    _subscription: InputSubscription,
}

impl SelectionView {
    pub(crate) fn mount(config: ViewConfig, drag_threshold: f64) -> Self {
        SelectionView {
            viewport: ViewportState::new(config.initial_scale, config.scale_bounds),
            gestures: GestureDisambiguator::new(drag_threshold),
            cursor: CursorReadout::Unknown,
            _subscription: InputSubscription::acquire(ViewKind::Selection),
            config,
        }
    }

    pub fn geometry(&self) -> ViewGeometry {
        self.config.geometry
    }

    pub fn transform(&self) -> ViewportTransform {
        self.viewport.transform()
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn cursor_readout(&self) -> CursorReadout {
        self.cursor
    }

    pub fn on_zoom_end(&mut self, new_scale: f64) -> bool {
        self.viewport.on_zoom_end(new_scale)
    }

    pub fn on_pan_end(&mut self, pan_offset_x: f64, pan_offset_y: f64) -> bool {
        self.viewport.on_pan_end(pan_offset_x, pan_offset_y)
    }

    pub fn pointer_down(&mut self, client_x: f64, client_y: f64, rect: Option<&ContainerRect>) {
        if let Some(sample) = coords::normalize_pointer(client_x, client_y, rect) {
            self.gestures.pointer_down(sample);
        }
    }

    /// Refresh the cursor readout and feed the drag detector.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, rect: Option<&ContainerRect>) {
        self.cursor = CursorReadout::from_client(client_x, client_y, rect, &self.transform());
        if let Some(sample) = self.cursor.screen() {
            self.gestures.pointer_move(sample);
        }
    }

    pub fn pointer_up(
        &mut self,
        client_x: f64,
        client_y: f64,
        rect: Option<&ContainerRect>,
        target: PointerTarget,
    ) -> GestureOutcome {
        let Some(sample) = coords::normalize_pointer(client_x, client_y, rect) else {
            self.gestures.cancel();
            return GestureOutcome::Ignored;
        };
        let outcome = self.gestures.pointer_up(sample, target);
        tracing::debug!(?outcome, "Pointer released on selection view");
        outcome
    }

    /// Abandon the press in flight, e.g. when the pointer leaves the container
    /// and its release will never be seen.
    pub fn cancel_gesture(&mut self) {
        self.gestures.cancel();
    }

    /// Surface coordinate a click outcome lands on, under the current transform.
    pub fn click_coordinate(&self, outcome: GestureOutcome) -> Option<SurfaceCoordinate> {
        match outcome {
            GestureOutcome::Click(sample) => Some(coords::to_surface(sample, &self.transform())),
            GestureOutcome::PanEnd | GestureOutcome::Ignored => None,
        }
    }

    /// Whether the gesture in progress has turned into a pan.
    pub fn is_dragging(&self) -> bool {
        self.gestures.drag_state().is_some_and(|d| d.is_dragging)
    }

    pub fn pin_overlay(&self, pin: Option<Pin>) -> Option<PinOverlay> {
        self.pin_overlay_at(pin, &self.transform())
    }

    /// Pin overlay under an explicit transform, e.g. a pan still in flight.
    pub fn pin_overlay_at(
        &self,
        pin: Option<Pin>,
        transform: &ViewportTransform,
    ) -> Option<PinOverlay> {
        let coord = pin?.coord();
        Some(PinOverlay {
            screen: coords::to_screen(coord, transform),
            score: Score::compute(coord, self.config.reference_point),
        })
    }
}

/// Everything the result screen draws over its grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultOverlay {
    NoPin {
        reference_screen: PointerSample,
    },
    Scored {
        /// Pin remapped into result-view units.
        adapted_pin: SurfaceCoordinate,
        pin_screen: PointerSample,
        reference_screen: PointerSample,
        score: Score,
    },
}

impl ResultOverlay {
    pub fn reference_screen(&self) -> PointerSample {
        match self {
            ResultOverlay::NoPin { reference_screen }
            | ResultOverlay::Scored {
                reference_screen, ..
            } => *reference_screen,
        }
    }

    /// Endpoints of the pin-to-reference line, if a pin exists.
    pub fn line(&self) -> Option<(PointerSample, PointerSample)> {
        match self {
            ResultOverlay::Scored {
                pin_screen,
                reference_screen,
                ..
            } => Some((*pin_screen, *reference_screen)),
            ResultOverlay::NoPin { .. } => None,
        }
    }

    pub fn distance_label(&self) -> Option<String> {
        match self {
            ResultOverlay::Scored { score, .. } => Some(score.label()),
            ResultOverlay::NoPin { .. } => None,
        }
    }

    /// Pin coordinate listing shown under the grid.
    pub fn pin_listing(&self) -> Vec<String> {
        match self {
            ResultOverlay::Scored { adapted_pin, .. } => vec![
                "Pin Position:".to_string(),
                format!("X: {:.2}", adapted_pin.x),
                format!("Y: {:.2}", adapted_pin.y),
            ],
            ResultOverlay::NoPin { .. } => vec!["No pin set".to_string()],
        }
    }
}

#[derive(Debug)]
pub struct ResultView {
    config: ViewConfig,
    viewport: ViewportState,
    adapted_pin: Option<SurfaceCoordinate>,
    cursor: CursorReadout,
    _subscription: InputSubscription,
}

impl ResultView {
    /// The pin is adapted once, here; later reads reuse the adapted value.
    pub(crate) fn mount(config: ViewConfig, adapter: CrossViewAdapter, pin: Option<Pin>) -> Self {
        let adapted_pin = pin.map(|p| adapter.adapt(p.coord()));
        if let Some(p) = adapted_pin {
            tracing::debug!(
                x = p.x,
                y = p.y,
                factor = adapter.factor(),
                "Pin adapted to result view"
            );
        }
        ResultView {
            viewport: ViewportState::new(config.initial_scale, config.scale_bounds),
            adapted_pin,
            cursor: CursorReadout::Unknown,
            _subscription: InputSubscription::acquire(ViewKind::Result),
            config,
        }
    }

    pub fn geometry(&self) -> ViewGeometry {
        self.config.geometry
    }

    pub fn adapted_pin(&self) -> Option<SurfaceCoordinate> {
        self.adapted_pin
    }

    pub fn transform(&self) -> ViewportTransform {
        self.viewport.transform()
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn cursor_readout(&self) -> CursorReadout {
        self.cursor
    }

    pub fn on_zoom_end(&mut self, new_scale: f64) -> bool {
        self.viewport.on_zoom_end(new_scale)
    }

    pub fn on_pan_end(&mut self, pan_offset_x: f64, pan_offset_y: f64) -> bool {
        self.viewport.on_pan_end(pan_offset_x, pan_offset_y)
    }

    // The result view never touches the pin: every pointer event only
    // refreshes the cursor readout.

    pub fn pointer_down(&mut self, client_x: f64, client_y: f64, rect: Option<&ContainerRect>) {
        self.pointer_move(client_x, client_y, rect);
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, rect: Option<&ContainerRect>) {
        self.cursor = CursorReadout::from_client(client_x, client_y, rect, &self.transform());
    }

    pub fn pointer_up(&mut self, client_x: f64, client_y: f64, rect: Option<&ContainerRect>) {
        self.pointer_move(client_x, client_y, rect);
    }

    pub fn overlay(&self) -> ResultOverlay {
        self.overlay_at(&self.transform())
    }

    pub fn overlay_at(&self, transform: &ViewportTransform) -> ResultOverlay {
        let reference = self.config.reference_point;
        let reference_screen = coords::to_screen(reference, transform);
        match self.adapted_pin {
            Some(adapted_pin) => ResultOverlay::Scored {
                adapted_pin,
                pin_screen: coords::to_screen(adapted_pin, transform),
                reference_screen,
                score: Score::compute(adapted_pin, reference),
            },
            None => ResultOverlay::NoPin { reference_screen },
        }
    }
}
