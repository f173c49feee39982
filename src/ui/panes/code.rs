//! Pseudocode pane with syntax highlighting
//!
//! Shows the listing for the running algorithm with the current line
//! highlighted. The current line stays at a fixed visual row while stepping;
//! Up/Down move that row.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn push_word(word: &mut String, spans: &mut Vec<Span<'static>>, next: Option<char>) {
    if !word.is_empty() {
        let style = word_style(word, next == Some('('));
        spans.push(Span::styled(std::mem::take(word), style));
    }
}

/// Highlight one line of Python-style pseudocode
fn highlight_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    for (i, c) in line.char_indices() {
        if c == '#' {
            push_word(&mut current_word, &mut spans, None);
            spans.push(Span::styled(
                line[i..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        if c.is_alphanumeric() || c == '_' {
            current_word.push(c);
            continue;
        }

        push_word(&mut current_word, &mut spans, Some(c));
        let style = match c {
            '(' | ')' | '[' | ']' | ':' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
    }
    push_word(&mut current_word, &mut spans, None);

    Line::from(spans)
}

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "def" | "return" | "if" | "elif" | "else" | "while" | "for" | "in" | "not" | "and"
        | "or" | "break" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "True" | "False" | "None" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Scroll state for the code pane
#[derive(Debug, Clone, Default)]
pub struct CodeScrollState {
    pub offset: usize,
    /// Visual row of the current line (None = center on first render)
    pub target_line_row: Option<usize>,
}

/// Render the pseudocode pane. `current_line` is a 0-based listing index.
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    listing: &[&str],
    current_line: Option<usize>,
    scroll_state: &mut CodeScrollState,
) {
    let block = Block::default()
        .title(" Pseudocode ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let total_lines = listing.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    if let Some(line) = current_line.filter(|&l| l < total_lines) {
        scroll_state.offset = if total_lines > visible_height {
            line.saturating_sub(target_row).min(total_lines - visible_height)
        } else {
            0
        };
    }

    let visible_lines: Vec<Line> = listing
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, text)| {
            let is_current = current_line == Some(idx);
            let (arrow, num_style) = if is_current {
                (
                    "▶",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut content = highlight_line(text);
            if is_current {
                let current_bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(current_bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{}{:3} ", arrow, idx + 1), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let source = "    for j in range(low, high):  # scan";
        assert_eq!(text_of(&highlight_line(source)), source);
    }

    #[test]
    fn test_keywords_and_calls() {
        let line = highlight_line("if len(arr) <= 1:");
        let style_of = |word: &str| {
            line.spans
                .iter()
                .find(|s| s.content == word)
                .and_then(|s| s.style.fg)
        };
        assert_eq!(style_of("if"), Some(DEFAULT_THEME.keyword));
        assert_eq!(style_of("len"), Some(DEFAULT_THEME.function));
        assert_eq!(style_of("1"), Some(DEFAULT_THEME.number));
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        let line = highlight_line("x = 1 # Swap elements");
        let last = line.spans.last().unwrap();
        assert_eq!(last.content, "# Swap elements");
        assert_eq!(last.style.fg, Some(DEFAULT_THEME.comment));
    }
}
