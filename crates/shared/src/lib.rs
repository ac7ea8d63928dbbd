//! Coordinate-transform and pin-placement engine for the grid pointing exercise.
//!
//! A pin is dropped with a click on the selection view, then scored against a
//! fixed reference point on the differently scaled result view.

pub mod calc;
pub mod config;
pub mod coords;
pub mod gesture;
pub mod grid;
pub mod models;
pub mod pin;
pub mod session;
pub mod view;
pub mod viewport;
