use crate::models::{ContainerRect, PointerSample, SurfaceCoordinate};
use crate::viewport::ViewportTransform;

/// Placeholder shown when the cursor position cannot be computed.
pub const UNKNOWN_PLACEHOLDER: &str = "--";

/// Convert client (page) coordinates to container-relative screen coordinates.
pub fn client_to_container(client_x: f64, client_y: f64, rect: &ContainerRect) -> PointerSample {
    PointerSample::new(client_x - rect.left, client_y - rect.top)
}

/// Like [`client_to_container`], but fails soft when the container is not mounted.
pub fn normalize_pointer(
    client_x: f64,
    client_y: f64,
    rect: Option<&ContainerRect>,
) -> Option<PointerSample> {
    rect.map(|r| client_to_container(client_x, client_y, r))
}

/// Screen position (container-relative) to surface coordinates, undoing zoom and pan.
pub fn to_surface(sample: PointerSample, transform: &ViewportTransform) -> SurfaceCoordinate {
    debug_assert!(transform.scale > 0.0, "viewport scale must be positive");
    SurfaceCoordinate {
        x: (sample.screen_x + transform.pan_offset_x) / transform.scale,
        y: (sample.screen_y + transform.pan_offset_y) / transform.scale,
    }
}

/// Surface coordinates to container-relative screen position. Inverse of [`to_surface`].
pub fn to_screen(coord: SurfaceCoordinate, transform: &ViewportTransform) -> PointerSample {
    PointerSample {
        screen_x: coord.x * transform.scale - transform.pan_offset_x,
        screen_y: coord.y * transform.scale - transform.pan_offset_y,
    }
}

/// Live cursor position readout for a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorReadout {
    /// Container bounding box unavailable.
    Unknown,
    Known {
        screen: PointerSample,
        surface: SurfaceCoordinate,
    },
}

impl CursorReadout {
    /// Build a readout from a raw client position. O(1), runs on every pointer move.
    pub fn from_client(
        client_x: f64,
        client_y: f64,
        rect: Option<&ContainerRect>,
        transform: &ViewportTransform,
    ) -> Self {
        match normalize_pointer(client_x, client_y, rect) {
            Some(screen) => CursorReadout::Known {
                screen,
                surface: to_surface(screen, transform),
            },
            None => CursorReadout::Unknown,
        }
    }

    pub fn screen(&self) -> Option<PointerSample> {
        match self {
            CursorReadout::Known { screen, .. } => Some(*screen),
            CursorReadout::Unknown => None,
        }
    }

    /// Screen position label, e.g. `X: 12.00 px, Y: 3.50 px`.
    pub fn screen_label(&self) -> String {
        match self {
            CursorReadout::Known { screen, .. } => {
                format!("X: {:.2} px, Y: {:.2} px", screen.screen_x, screen.screen_y)
            }
            CursorReadout::Unknown => {
                format!("X: {UNKNOWN_PLACEHOLDER} px, Y: {UNKNOWN_PLACEHOLDER} px")
            }
        }
    }

    /// Surface coordinate label, e.g. `(500.00, 400.00)`.
    pub fn surface_label(&self) -> String {
        match self {
            CursorReadout::Known { surface, .. } => format!("({:.2}, {:.2})", surface.x, surface.y),
            CursorReadout::Unknown => format!("({UNKNOWN_PLACEHOLDER}, {UNKNOWN_PLACEHOLDER})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect() -> ContainerRect {
        ContainerRect {
            left: 320.0,
            top: 50.0,
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn test_client_to_container_origin() {
        let p = client_to_container(320.0, 50.0, &rect());
        assert!((p.screen_x - 0.0).abs() < 1e-9);
        assert!((p.screen_y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_client_to_container_offset() {
        let p = client_to_container(450.0, 350.0, &rect());
        assert!((p.screen_x - 130.0).abs() < 1e-9);
        assert!((p.screen_y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_without_container() {
        assert!(normalize_pointer(10.0, 10.0, None).is_none());
    }

    #[test]
    fn test_to_surface_initial_view() {
        let t = ViewportTransform::at_scale(0.1);
        let s = to_surface(PointerSample::new(50.0, 40.0), &t);
        assert!((s.x - 500.0).abs() < 1e-9);
        assert!((s.y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_surface_with_pan() {
        let t = ViewportTransform::new(2.0, 100.0, 50.0);
        let s = to_surface(PointerSample::new(300.0, 150.0), &t);
        assert!((s.x - 200.0).abs() < 1e-9);
        assert!((s.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_screen_with_pan() {
        let t = ViewportTransform::new(2.0, 100.0, 50.0);
        let p = to_screen(SurfaceCoordinate::new(200.0, 100.0), &t);
        assert!((p.screen_x - 300.0).abs() < 1e-9);
        assert!((p.screen_y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_readout_unknown_without_container() {
        let t = ViewportTransform::at_scale(1.0);
        let readout = CursorReadout::from_client(10.0, 10.0, None, &t);
        assert_eq!(readout, CursorReadout::Unknown);
        assert_eq!(readout.screen_label(), "X: -- px, Y: -- px");
        assert_eq!(readout.surface_label(), "(--, --)");
        assert!(readout.screen().is_none());
    }

    #[test]
    fn test_readout_known() {
        let t = ViewportTransform::at_scale(0.1);
        let readout = CursorReadout::from_client(370.0, 90.0, Some(&rect()), &t);
        assert_eq!(readout.screen_label(), "X: 50.00 px, Y: 40.00 px");
        assert_eq!(readout.surface_label(), "(500.00, 400.00)");
    }

    proptest! {
        #[test]
        fn screen_surface_round_trip(
            x in 0.0f64..2000.0,
            y in 0.0f64..2000.0,
            scale in 0.01f64..100.0,
            pan_x in -5000.0f64..5000.0,
            pan_y in -5000.0f64..5000.0,
        ) {
            let t = ViewportTransform::new(scale, pan_x, pan_y);
            let back = to_screen(to_surface(PointerSample::new(x, y), &t), &t);
            prop_assert!((back.screen_x - x).abs() < 1e-6);
            prop_assert!((back.screen_y - y).abs() < 1e-6);
        }

        #[test]
        fn zooming_in_shrinks_surface_offset(
            x in 1.0f64..2000.0,
            y in 1.0f64..2000.0,
            scale in 0.01f64..50.0,
            factor in 1.01f64..2.0,
        ) {
            let lo = to_surface(PointerSample::new(x, y), &ViewportTransform::at_scale(scale));
            let hi = to_surface(PointerSample::new(x, y), &ViewportTransform::at_scale(scale * factor));
            prop_assert!(hi.x.hypot(hi.y) < lo.x.hypot(lo.y));
        }
    }
}
