//! Click-versus-drag disambiguation for a pointer-down/move/up gesture.
//!
//! Both pin placement and panning start with a press on the same surface, so
//! the decision is made from displacement: once the pointer strays more than
//! the threshold from where it was pressed, the gesture is a drag for the rest
//! of its life and its release places nothing.

use crate::models::PointerSample;

/// Drag threshold in screen pixels. Displacement strictly above this is a drag.
pub const DRAG_THRESHOLD: f64 = 5.0;

/// What the pointer was over when it was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Surface,
    /// A control button ("Back", "Result"); releases over these never place a pin.
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start_sample: PointerSample,
    pub is_dragging: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Intentional click at the release position.
    Click(PointerSample),
    /// End of a pan; the viewport collaborator already applied it.
    PanEnd,
    /// Release over a control, or with no press recorded.
    Ignored,
}

/// Whether `sample` is further than `threshold` from `start`.
pub fn exceeds_threshold(start: PointerSample, sample: PointerSample, threshold: f64) -> bool {
    start.distance_to(sample) > threshold
}

#[derive(Debug, Clone)]
pub struct GestureDisambiguator {
    threshold: f64,
    drag: Option<DragState>,
}

impl Default for GestureDisambiguator {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

impl GestureDisambiguator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            drag: None,
        }
    }

    pub fn drag_state(&self) -> Option<DragState> {
        self.drag
    }

    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.drag = Some(DragState {
            start_sample: sample,
            is_dragging: false,
        });
    }

    /// Track a move while pressed. Returns whether the gesture is now a drag.
    pub fn pointer_move(&mut self, sample: PointerSample) -> bool {
        let threshold = self.threshold;
        match self.drag.as_mut() {
            Some(drag) => {
                if !drag.is_dragging && exceeds_threshold(drag.start_sample, sample, threshold) {
                    tracing::trace!(
                        x = sample.screen_x,
                        y = sample.screen_y,
                        "Gesture became a drag"
                    );
                    drag.is_dragging = true;
                }
                drag.is_dragging
            }
            None => false,
        }
    }

    /// Finish the gesture. The drag state is consumed whatever the outcome.
    pub fn pointer_up(&mut self, sample: PointerSample, target: PointerTarget) -> GestureOutcome {
        // The release position counts as the last move of the gesture.
        let dragged = self.drag.is_some() && self.pointer_move(sample);
        let Some(_) = self.drag.take() else {
            return GestureOutcome::Ignored;
        };
        if target == PointerTarget::Control {
            return GestureOutcome::Ignored;
        }
        if dragged {
            GestureOutcome::PanEnd
        } else {
            GestureOutcome::Click(sample)
        }
    }

    /// Drop any in-flight gesture (view unmounted mid-press).
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: f64, y: f64) -> PointerSample {
        PointerSample::new(x, y)
    }

    #[test]
    fn test_press_release_in_place_is_click() {
        let mut g = GestureDisambiguator::default();
        g.pointer_down(p(50.0, 40.0));
        assert_eq!(
            g.pointer_up(p(50.0, 40.0), PointerTarget::Surface),
            GestureOutcome::Click(p(50.0, 40.0))
        );
        assert!(g.drag_state().is_none());
    }

    #[test]
    fn test_jitter_within_threshold_is_click() {
        let mut g = GestureDisambiguator::default();
        g.pointer_down(p(10.0, 10.0));
        assert!(!g.pointer_move(p(13.0, 14.0))); // exactly 5px
        assert!(!g.pointer_move(p(11.0, 9.0)));
        assert_eq!(
            g.pointer_up(p(12.0, 12.0), PointerTarget::Surface),
            GestureOutcome::Click(p(12.0, 12.0))
        );
    }

    #[test]
    fn test_drag_is_not_rearmed_by_returning() {
        let mut g = GestureDisambiguator::default();
        g.pointer_down(p(10.0, 10.0));
        assert!(g.pointer_move(p(30.0, 10.0)));
        // Back to the start point: still a drag
        assert!(g.pointer_move(p(10.0, 10.0)));
        assert_eq!(
            g.pointer_up(p(10.0, 10.0), PointerTarget::Surface),
            GestureOutcome::PanEnd
        );
    }

    #[test]
    fn test_release_far_from_press_is_drag() {
        let mut g = GestureDisambiguator::default();
        g.pointer_down(p(0.0, 0.0));
        assert_eq!(
            g.pointer_up(p(6.0, 0.0), PointerTarget::Surface),
            GestureOutcome::PanEnd
        );
    }

    #[test]
    fn test_release_over_control_is_ignored() {
        let mut g = GestureDisambiguator::default();
        g.pointer_down(p(5.0, 5.0));
        assert_eq!(
            g.pointer_up(p(5.0, 5.0), PointerTarget::Control),
            GestureOutcome::Ignored
        );
        assert!(g.drag_state().is_none());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut g = GestureDisambiguator::default();
        assert_eq!(
            g.pointer_up(p(5.0, 5.0), PointerTarget::Surface),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn test_move_without_press_is_not_drag() {
        let mut g = GestureDisambiguator::default();
        assert!(!g.pointer_move(p(500.0, 500.0)));
        assert!(g.drag_state().is_none());
    }

    #[test]
    fn test_cancel_drops_gesture() {
        let mut g = GestureDisambiguator::default();
        g.pointer_down(p(1.0, 1.0));
        g.cancel();
        assert_eq!(
            g.pointer_up(p(1.0, 1.0), PointerTarget::Surface),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn test_new_press_resets_drag_flag() {
        let mut g = GestureDisambiguator::default();
        g.pointer_down(p(0.0, 0.0));
        g.pointer_move(p(100.0, 0.0));
        g.pointer_down(p(0.0, 0.0));
        assert_eq!(
            g.drag_state(),
            Some(DragState {
                start_sample: p(0.0, 0.0),
                is_dragging: false
            })
        );
    }

    proptest! {
        #[test]
        fn small_wiggles_always_click(
            moves in proptest::collection::vec((-3.5f64..3.5, -3.5f64..3.5), 0..20),
        ) {
            let mut g = GestureDisambiguator::default();
            g.pointer_down(p(100.0, 100.0));
            for (dx, dy) in &moves {
                prop_assert!(!g.pointer_move(p(100.0 + dx, 100.0 + dy)));
            }
            let outcome = g.pointer_up(p(100.0, 100.0), PointerTarget::Surface);
            prop_assert_eq!(outcome, GestureOutcome::Click(p(100.0, 100.0)));
        }

        #[test]
        fn one_large_excursion_never_clicks(
            excursion in 5.01f64..400.0,
            angle in 0.0f64..std::f64::consts::TAU,
        ) {
            let mut g = GestureDisambiguator::default();
            g.pointer_down(p(0.0, 0.0));
            g.pointer_move(p(excursion * angle.cos(), excursion * angle.sin()));
            let outcome = g.pointer_up(p(0.0, 0.0), PointerTarget::Surface);
            prop_assert_eq!(outcome, GestureOutcome::PanEnd);
        }
    }
}
