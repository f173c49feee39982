//! Recursion pane: one row per active call depth, then the sorted branches
//! that stay on screen while their siblings run

use super::{cell, cell_width, gutter};
use crate::model::{Element, IndexRange, RangeSnapshot, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Cells for `values` laid out at `range`, blank elsewhere
fn range_row(
    label: &str,
    n: usize,
    width: usize,
    range: IndexRange,
    values: &[Element],
    style: Style,
) -> Line<'static> {
    let mut spans = vec![gutter(label).patch_style(Style::default().fg(DEFAULT_THEME.comment))];
    for index in 0..n {
        let text = index
            .checked_sub(range.low)
            .filter(|_| range.contains(index))
            .and_then(|offset| values.get(offset))
            .map_or_else(String::new, |e| e.value.to_string());
        spans.push(Span::styled(cell(&text, width), style));
    }
    Line::from(spans)
}

/// Render the recursion pane for `step`.
///
/// `path` is the active range per depth, root first; `snapshots` are the
/// collapsed sorted branches visible at this step.
pub fn render_recursion_pane(
    frame: &mut Frame,
    area: Rect,
    step: &Step,
    path: &[IndexRange],
    snapshots: &[&RangeSnapshot],
) {
    let block = Block::default()
        .title(" Recursion ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let n = step.data.len();
    let width = cell_width(&step.data);
    let deepest = path.len().saturating_sub(1);

    let mut lines: Vec<Line> = path
        .iter()
        .enumerate()
        .map(|(depth, range)| {
            let style = if depth == deepest {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let values = step.data.get(range.low..=range.high).unwrap_or(&[]);
            range_row(&format!("d{}", depth), n, width, *range, values, style)
        })
        .collect();

    if !snapshots.is_empty() {
        lines.push(Line::from(""));
        let mut ordered = snapshots.to_vec();
        ordered.sort_by_key(|s| (s.range.low, s.depth));
        for snapshot in ordered {
            lines.push(range_row(
                &format!("✓ d{}", snapshot.depth),
                n,
                width,
                snapshot.range,
                &snapshot.data,
                Style::default().fg(DEFAULT_THEME.snapshot),
            ));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
