//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`array`]: the elements of the current step, colored by role
//! - [`recursion`]: active range per recursion depth and collapsed sorted
//!   branches
//! - [`code`]: pseudocode listing with the current line highlighted
//! - [`status`]: status bar with keybindings and playback state
//!
//! The array and recursion panes draw one fixed-width cell per index behind a
//! label gutter of the same width, so their columns line up.

pub mod array;
pub mod code;
pub mod recursion;
pub mod status;

pub use array::render_array_pane;
pub use code::{render_code_pane, CodeScrollState};
pub use recursion::render_recursion_pane;
pub use status::render_status_bar;

use crate::model::Element;
use ratatui::text::Span;

/// Width of the row label column left of the cells
pub(crate) const GUTTER_WIDTH: usize = 7;

/// Cell width wide enough for the longest value plus one space each side
pub(crate) fn cell_width(data: &[Element]) -> usize {
    let widest = data
        .iter()
        .map(|e| e.value.to_string().chars().count())
        .max()
        .unwrap_or(1);
    widest.max(2) + 2
}

/// `text` centered in a cell
pub(crate) fn cell(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

pub(crate) fn gutter(label: &str) -> Span<'static> {
    Span::raw(format!("{:<width$}", label, width = GUTTER_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_width_fits_widest_value() {
        assert_eq!(cell_width(&Element::from_values(&[1, 2])), 4);
        assert_eq!(cell_width(&Element::from_values(&[5, -1000])), 7);
        assert_eq!(cell_width(&[]), 4);
        assert_eq!(cell("7", 4).chars().count(), 4);
    }
}
