use crate::calc::CrossViewAdapter;
use crate::config::ExerciseConfig;
use crate::gesture::GestureOutcome;
use crate::models::SurfaceCoordinate;
use crate::pin::{Pin, PinState};
use crate::view::{ResultView, SelectionView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoPin,
    PinPlaced,
    /// The pin is read-only from here until [`Session::restart`].
    ResultShown,
}

/// One linear exercise run: select a point, then view the result.
///
/// Owns the only pin; views read it through the session and never keep a
/// copy that could diverge.
#[derive(Debug, Clone)]
pub struct Session {
    config: ExerciseConfig,
    adapter: CrossViewAdapter,
    pins: PinState,
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ExerciseConfig::default())
    }
}

impl Session {
    /// A config that fails validation is replaced by the defaults.
    pub fn new(config: ExerciseConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                tracing::warn!(%err, "Invalid exercise config, using defaults");
                ExerciseConfig::default()
            }
        };
        Session {
            adapter: CrossViewAdapter::new(config.cross_view_scale_factor),
            config,
            pins: PinState::new(),
            state: SessionState::NoPin,
        }
    }

    pub fn config(&self) -> &ExerciseConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pin(&self) -> Option<Pin> {
        self.pins.read()
    }

    /// Mount the selection screen's view.
    pub fn enter_selection(&self) -> SelectionView {
        SelectionView::mount(self.config.selection, self.config.drag_threshold)
    }

    /// Place the pin for a click released on the selection view.
    ///
    /// Returns the placed coordinate, or `None` if the outcome was not a click
    /// or the result has already been shown.
    pub fn commit_click(
        &mut self,
        view: &SelectionView,
        outcome: GestureOutcome,
    ) -> Option<SurfaceCoordinate> {
        let coord = view.click_coordinate(outcome)?;
        if self.state == SessionState::ResultShown {
            tracing::warn!("Ignoring click after the result was shown");
            return None;
        }
        self.pins.place(coord);
        if self.state == SessionState::NoPin {
            tracing::info!(x = coord.x, y = coord.y, "Session: pin placed");
        }
        self.state = SessionState::PinPlaced;
        Some(coord)
    }

    /// Leave the selection screen: a placed pin becomes read-only.
    pub fn finish_selection(&mut self) {
        if self.state == SessionState::PinPlaced {
            tracing::info!("Session: result shown");
            self.state = SessionState::ResultShown;
        }
    }

    /// Mount the result screen's view over the current pin. Does not change state.
    pub fn result_view(&self) -> ResultView {
        ResultView::mount(self.config.result, self.adapter, self.pins.read())
    }

    pub fn show_result(&mut self) -> ResultView {
        self.finish_selection();
        self.result_view()
    }

    /// Back to the entry screen: the pin is discarded.
    pub fn restart(&mut self) {
        tracing::info!(from = ?self.state, "Session: restarted");
        self.pins.reset();
        self.state = SessionState::NoPin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::PointerTarget;
    use crate::models::{ContainerRect, PointerSample, ScaleBounds};

    const RECT: ContainerRect = ContainerRect {
        left: 0.0,
        top: 0.0,
        width: 1024.0,
        height: 768.0,
    };

    fn click(view: &mut SelectionView, x: f64, y: f64) -> GestureOutcome {
        view.pointer_down(x, y, Some(&RECT));
        view.pointer_up(x, y, Some(&RECT), PointerTarget::Surface)
    }

    #[test]
    fn test_new_session_has_no_pin() {
        let session = Session::default();
        assert_eq!(session.state(), SessionState::NoPin);
        assert!(session.pin().is_none());
    }

    #[test]
    fn test_click_places_pin() {
        let mut session = Session::default();
        let mut view = session.enter_selection();
        let outcome = click(&mut view, 50.0, 40.0);
        let placed = session.commit_click(&view, outcome).unwrap();
        assert_eq!(placed, SurfaceCoordinate::new(500.0, 400.0));
        assert_eq!(session.state(), SessionState::PinPlaced);
        assert_eq!(session.pin().unwrap().coord(), placed);
    }

    #[test]
    fn test_second_click_replaces_pin() {
        let mut session = Session::default();
        let mut view = session.enter_selection();
        let first = click(&mut view, 50.0, 40.0);
        session.commit_click(&view, first);
        let second = click(&mut view, 10.0, 20.0);
        session.commit_click(&view, second);
        assert_eq!(session.pin().unwrap().coord(), SurfaceCoordinate::new(100.0, 200.0));
    }

    #[test]
    fn test_pan_end_leaves_pin_alone() {
        let mut session = Session::default();
        let view = session.enter_selection();
        assert!(session.commit_click(&view, GestureOutcome::PanEnd).is_none());
        assert_eq!(session.state(), SessionState::NoPin);
    }

    #[test]
    fn test_pin_read_only_after_result() {
        let mut session = Session::default();
        let view = session.enter_selection();
        session.commit_click(&view, GestureOutcome::Click(PointerSample::new(50.0, 40.0)));
        let _result = session.show_result();
        assert_eq!(session.state(), SessionState::ResultShown);
        let late = session.commit_click(&view, GestureOutcome::Click(PointerSample::new(1.0, 1.0)));
        assert!(late.is_none());
        assert_eq!(session.pin().unwrap().coord(), SurfaceCoordinate::new(500.0, 400.0));
    }

    #[test]
    fn test_result_without_pin_stays_no_pin() {
        let mut session = Session::default();
        let result = session.show_result();
        assert_eq!(session.state(), SessionState::NoPin);
        assert!(result.adapted_pin().is_none());
    }

    #[test]
    fn test_restart_resets_pin() {
        let mut session = Session::default();
        let view = session.enter_selection();
        session.commit_click(&view, GestureOutcome::Click(PointerSample::new(50.0, 40.0)));
        session.show_result();
        session.restart();
        assert_eq!(session.state(), SessionState::NoPin);
        assert!(session.pin().is_none());
    }

    #[test]
    fn test_configured_factor_reaches_result_view() {
        let config = ExerciseConfig {
            cross_view_scale_factor: 6.25,
            ..ExerciseConfig::default()
        };
        let mut session = Session::new(config);
        let view = session.enter_selection();
        session.commit_click(&view, GestureOutcome::Click(PointerSample::new(50.0, 40.0)));
        let result = session.show_result();
        let adapted = result.adapted_pin().unwrap();
        assert!((adapted.x - 80.0).abs() < 1e-9);
        assert!((adapted.y - 64.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let mut config = ExerciseConfig::default();
        config.selection.scale_bounds = ScaleBounds::new(10.0, 1.0);
        let session = Session::new(config);
        assert_eq!(session.config(), &ExerciseConfig::default());
        let view = session.enter_selection();
        assert!((view.transform().scale - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_result_view_does_not_change_state() {
        let mut session = Session::default();
        let view = session.enter_selection();
        session.commit_click(&view, GestureOutcome::Click(PointerSample::new(50.0, 40.0)));
        let result = session.result_view();
        assert_eq!(session.state(), SessionState::PinPlaced);
        assert!(result.adapted_pin().is_some());
        session.finish_selection();
        assert_eq!(session.state(), SessionState::ResultShown);
    }

    #[test]
    fn test_result_view_press_release_keeps_pin() {
        let mut session = Session::default();
        let mut selection = session.enter_selection();
        let outcome = click(&mut selection, 50.0, 40.0);
        session.commit_click(&selection, outcome);
        let mut result = session.show_result();
        result.pointer_down(300.0, 200.0, Some(&RECT));
        result.pointer_move(320.0, 210.0, Some(&RECT));
        result.pointer_up(320.0, 210.0, Some(&RECT));
        assert_eq!(session.state(), SessionState::ResultShown);
        assert_eq!(session.pin().unwrap().coord(), SurfaceCoordinate::new(500.0, 400.0));
        assert_eq!(result.adapted_pin(), Some(SurfaceCoordinate::new(50.0, 40.0)));
    }
}
