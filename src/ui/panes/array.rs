//! Array pane: the elements of one step, one cell per index
//!
//! Rows, top to bottom:
//!
//! - lift: elements in the middle of a swap, drawn one row above their slot
//! - values: the array, colored by role (comparing, swapped, pivot, finalized,
//!   outside the active range)
//! - markers: `i`, `j` and `P` (pivot) under their indices
//! - ranges: the active range, or the split/merge halves when present
//! - indices
//! - merged: the merge overlay, shown while a merge is in progress
//! - a one-line description of the step

use super::{cell, cell_width, gutter};
use crate::model::{IndexRange, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Style of the value cell at `index`, strongest role first
fn value_style(step: &Step, index: usize) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    if step.placing.is_some_and(|p| p.from == index) {
        base.fg(DEFAULT_THEME.placing)
    } else if step.swapped.contains(&index) {
        base.fg(DEFAULT_THEME.swapped)
    } else if step.comparing.contains(&index) {
        base.fg(DEFAULT_THEME.comparing)
    } else if step.pivot == Some(index) {
        base.fg(DEFAULT_THEME.pivot)
    } else if step.finalized.contains(index) {
        Style::default().fg(DEFAULT_THEME.finalized)
    } else if step.active_range.is_some_and(|r| !r.contains(index)) {
        Style::default().fg(DEFAULT_THEME.inactive)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

fn marker(step: &Step, index: usize) -> String {
    let mut text = String::new();
    if step.i_marker == Some(index) {
        text.push('i');
    }
    if step.j_marker == Some(index) {
        text.push('j');
    }
    if step.pivot == Some(index) {
        text.push('P');
    }
    text
}

/// The range bar glyph and style for `index`
fn range_cell(step: &Step, index: usize, width: usize) -> Span<'static> {
    let bar = |range: Option<IndexRange>| range.is_some_and(|r| r.contains(index));
    let (glyph, color) = if bar(step.split_left) || bar(step.merge_left) {
        ("─", DEFAULT_THEME.primary)
    } else if bar(step.split_right) || bar(step.merge_right) {
        ("─", DEFAULT_THEME.secondary)
    } else if bar(step.active_range) {
        ("━", DEFAULT_THEME.comment)
    } else {
        (" ", DEFAULT_THEME.comment)
    };
    Span::styled(glyph.repeat(width), Style::default().fg(color))
}

/// Render the array pane for `step`
pub fn render_array_pane(frame: &mut Frame, area: Rect, title: &str, step: &Step) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let n = step.data.len();
    let width = cell_width(&step.data);
    let label_style = Style::default().fg(DEFAULT_THEME.comment);

    let mut lift = vec![gutter("")];
    let mut values = vec![gutter("value").patch_style(label_style)];
    let mut markers = vec![gutter("")];
    let mut ranges = vec![gutter("")];
    let mut indices = vec![gutter("index").patch_style(label_style)];

    for (index, element) in step.data.iter().enumerate() {
        let text = element.value.to_string();
        if step.airborne.contains(&index) {
            lift.push(Span::styled(cell(&text, width), value_style(step, index)));
            values.push(Span::raw(cell("", width)));
        } else {
            lift.push(Span::raw(cell("", width)));
            values.push(Span::styled(cell(&text, width), value_style(step, index)));
        }

        markers.push(Span::styled(
            cell(&marker(step, index), width),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ));
        ranges.push(range_cell(step, index, width));
        indices.push(Span::styled(cell(&index.to_string(), width), label_style));
    }

    let mut lines = vec![
        Line::from(lift),
        Line::from(values),
        Line::from(markers),
        Line::from(ranges),
        Line::from(indices),
    ];

    let merging = step.merge_left.is_some() || !step.placed.is_empty();
    if merging {
        let mut merged = vec![gutter("merged").patch_style(label_style)];
        for index in 0..n {
            let in_transit = step.placing.filter(|p| p.to == index);
            let span = match (in_transit, step.placed_at(index)) {
                (Some(p), _) => Span::styled(
                    cell(&format!("↓{}", p.element.value), width),
                    Style::default()
                        .fg(DEFAULT_THEME.placing)
                        .add_modifier(Modifier::BOLD),
                ),
                (None, Some(p)) => Span::styled(
                    cell(&p.element.value.to_string(), width),
                    Style::default().fg(DEFAULT_THEME.placing),
                ),
                (None, None) => Span::raw(cell("", width)),
            };
            merged.push(span);
        }
        lines.push(Line::from(merged));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", step.describe()),
        Style::default().fg(DEFAULT_THEME.fg),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Finalized};

    #[test]
    fn test_role_priority() {
        let step = Step {
            data: Element::from_values(&[1, 2, 3, 4]),
            comparing: vec![0, 1],
            swapped: vec![1],
            pivot: Some(3),
            finalized: Finalized::Indices([1, 2].into_iter().collect()),
            ..Step::default()
        };
        assert_eq!(value_style(&step, 0).fg, Some(DEFAULT_THEME.comparing));
        assert_eq!(value_style(&step, 1).fg, Some(DEFAULT_THEME.swapped));
        assert_eq!(value_style(&step, 2).fg, Some(DEFAULT_THEME.finalized));
        assert_eq!(value_style(&step, 3).fg, Some(DEFAULT_THEME.pivot));
    }

    #[test]
    fn test_markers_combine() {
        let step = Step {
            i_marker: Some(2),
            j_marker: Some(2),
            pivot: Some(4),
            ..Step::default()
        };
        assert_eq!(marker(&step, 2), "ij");
        assert_eq!(marker(&step, 4), "P");
        assert_eq!(marker(&step, 0), "");
    }
}
