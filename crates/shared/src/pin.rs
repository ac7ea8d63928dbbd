use crate::models::SurfaceCoordinate;

/// The single user-selected point of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pin {
    coord: SurfaceCoordinate,
}

impl Pin {
    pub fn coord(&self) -> SurfaceCoordinate {
        self.coord
    }
}

/// Holds at most one pin. No range validation happens here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinState {
    pin: Option<Pin>,
}

impl PinState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any prior pin wholesale.
    pub fn place(&mut self, coord: SurfaceCoordinate) {
        tracing::debug!(x = coord.x, y = coord.y, "Pin placed");
        self.pin = Some(Pin { coord });
    }

    pub fn read(&self) -> Option<Pin> {
        self.pin
    }

    pub fn reset(&mut self) {
        if self.pin.take().is_some() {
            tracing::debug!("Pin cleared");
        }
    }
}
