//! Status bar rendering with keybindings and playback state

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The badge shown after the keybindings, if any
fn badge(
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
) -> Option<(&'static str, Color)> {
    if is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if current_step + 1 >= total_steps {
        Some((" END ", DEFAULT_THEME.error))
    } else if current_step == 0 {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bar = Style::default().bg(DEFAULT_THEME.current_line_bg);

    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", current_step + 1, total_steps),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar.fg(DEFAULT_THEME.comment)),
        Span::styled(format!(" {} ", message), bar.fg(DEFAULT_THEME.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar.fg(DEFAULT_THEME.fg);
    let sep_style = bar.fg(DEFAULT_THEME.comment);

    let keys = [
        (" ←/→ ", " step "),
        (" 1-9 ", " skip "),
        (" ⎵ ", " play "),
        (" ↵ / ⌫ ", " end/start "),
        ("q", " quit "),
    ];
    let mut right_spans = Vec::new();
    for (i, (key, desc)) in keys.into_iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    if let Some((label, color)) = badge(current_step, total_steps, is_playing) {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
