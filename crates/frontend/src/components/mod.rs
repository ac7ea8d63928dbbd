pub mod grid_surface;
pub mod markers;
