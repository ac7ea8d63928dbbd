/// Exercise grid layouts.
///
/// The selection view is a 50x50 matrix of 100-unit cells (5000x5000 surface).
/// The result view is an 80x80 matrix of 10-unit cells (800x800 surface).
/// Both are rendered as a checkerboard by the cell renderer.
use crate::models::ViewGeometry;

pub const SELECTION_GEOMETRY: ViewGeometry = ViewGeometry {
    column_count: 50,
    row_count: 50,
    cell_width: 100.0,
    cell_height: 100.0,
};

pub const RESULT_GEOMETRY: ViewGeometry = ViewGeometry {
    column_count: 80,
    row_count: 80,
    cell_width: 10.0,
    cell_height: 10.0,
};

// Checkerboard fills
pub const CELL_FILL_EVEN: &str = "#f8f8f0";
pub const CELL_FILL_ODD: &str = "#ffffff";

impl ViewGeometry {
    /// Surface width in units (`column_count * cell_width`).
    pub fn extent_width(&self) -> f64 {
        self.column_count as f64 * self.cell_width
    }

    /// Surface height in units (`row_count * cell_height`).
    pub fn extent_height(&self) -> f64 {
        self.row_count as f64 * self.cell_height
    }
}

/// Checkerboard fill for the cell at (`col`, `row`).
pub fn cell_fill(col: u32, row: u32) -> &'static str {
    if (col + row) % 2 == 0 {
        CELL_FILL_EVEN
    } else {
        CELL_FILL_ODD
    }
}

/// Ratio between two surfaces' widths: how many `from` units make one `to` unit.
pub fn extent_ratio(from: &ViewGeometry, to: &ViewGeometry) -> f64 {
    from.extent_width() / to.extent_width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_extent() {
        assert!((SELECTION_GEOMETRY.extent_width() - 5000.0).abs() < 1e-9);
        assert!((SELECTION_GEOMETRY.extent_height() - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn test_result_extent() {
        assert!((RESULT_GEOMETRY.extent_width() - 800.0).abs() < 1e-9);
        assert!((RESULT_GEOMETRY.extent_height() - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_extent_ratio_of_default_grids() {
        // 5000 / 800, not the explicit factor of 10
        let ratio = extent_ratio(&SELECTION_GEOMETRY, &RESULT_GEOMETRY);
        assert!((ratio - 6.25).abs() < 1e-9);
    }

    #[test]
    fn test_cell_fill_alternates() {
        assert_eq!(cell_fill(0, 0), CELL_FILL_EVEN);
        assert_eq!(cell_fill(1, 0), CELL_FILL_ODD);
        assert_eq!(cell_fill(1, 1), CELL_FILL_EVEN);
    }
}
