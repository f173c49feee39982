//! Main TUI application state and logic

use crate::errors::SortError;
use crate::player::Player;
use crate::ui::panes::{self, CodeScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input before the autoplay clock is checked again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Key repeat shorter than this does not toggle playback again
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

/// The main application state
pub struct App {
    pub player: Player,

    /// Keeps the highlighted pseudocode line at a fixed row
    pub code_scroll: CodeScrollState,

    pub should_quit: bool,

    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(player: Player) -> Self {
        let now = Instant::now();
        App {
            player,
            code_scroll: CodeScrollState::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: now.checked_sub(SPACE_DEBOUNCE).unwrap_or(now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.player.tick(Instant::now()) {
                self.status_message = if self.player.is_playing() {
                    "Playing...".to_string()
                } else {
                    "Playback complete".to_string()
                };
            }

            let timeout = POLL_INTERVAL.min(self.player.interval());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[0]);

        // Left column: Array (top) | Recursion (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(12), Constraint::Min(0)])
            .split(columns[0]);

        let trace = self.player.trace();
        let algorithm = trace.algorithm();

        if let Some(step) = self.player.current() {
            panes::render_array_pane(frame, left_rows[0], algorithm.name(), step);
            panes::render_recursion_pane(
                frame,
                left_rows[1],
                step,
                &self.player.recursion_path(),
                &self.player.visible_snapshots(),
            );
        }

        panes::render_code_pane(
            frame,
            columns[1],
            algorithm.pseudocode(),
            self.player.current().and_then(|s| s.code_line),
            &mut self.code_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.player.position(),
            self.player.total(),
            self.player.is_playing(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.player.pause();
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                let stepped = self.player.step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left => {
                self.player.pause();
                let result = self.player.step_backward();
                self.report(result, "Stepped backward");
            }
            KeyCode::Right => {
                self.player.pause();
                let result = self.player.step_forward();
                self.report(result, "Stepped forward");
            }
            KeyCode::Up => {
                // Scrolling up makes the current line move down visually
                if let Some(row) = self.code_scroll.target_line_row {
                    self.code_scroll.target_line_row = Some(row.saturating_add(1));
                }
            }
            KeyCode::Down => {
                if let Some(row) = self.code_scroll.target_line_row {
                    self.code_scroll.target_line_row = Some(row.saturating_sub(1));
                }
            }
            KeyCode::Char(' ') => {
                if self.last_space_press.elapsed() >= SPACE_DEBOUNCE {
                    let now = Instant::now();
                    self.last_space_press = now;
                    self.player.toggle_play(now);
                    self.status_message = if self.player.is_playing() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Enter => {
                self.player.pause();
                self.player.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.player.pause();
                self.player.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn report(&mut self, result: Result<(), SortError>, success: &str) {
        self.status_message = match result {
            Ok(()) => success.to_string(),
            Err(e) if e.is_navigation() => format!("Cannot move: {}", e),
            Err(e) => format!("Error: {}", e),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::model::Element;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app(algorithm: Algorithm, values: &[i64]) -> App {
        let trace = algorithm.generate(&Element::from_values(values)).unwrap();
        App::new(Player::new(trace, Duration::from_millis(100)))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_arrow_keys_move_cursor() {
        let mut app = app(Algorithm::Bubble, &[3, 1, 2]);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.player.position(), 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.player.position(), 1);
    }

    #[test]
    fn test_step_past_start_reports_status() {
        let mut app = app(Algorithm::Bubble, &[3, 1, 2]);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.player.position(), 0);
        assert!(app.status_message.starts_with("Cannot move"));
    }

    #[test]
    fn test_number_keys_and_jumps() {
        let mut app = app(Algorithm::Quick, &[5, 2, 8, 1, 9, 3]);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.player.position(), 4);

        press(&mut app, KeyCode::Enter);
        assert!(app.player.is_at_end());

        press(&mut app, KeyCode::Backspace);
        assert!(app.player.is_at_start());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_space_toggles_playback() {
        let mut app = app(Algorithm::Merge, &[4, 2, 1, 3]);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.player.is_playing());

        press(&mut app, KeyCode::Right);
        assert!(!app.player.is_playing(), "manual stepping pauses playback");
    }

    #[test]
    fn test_render_every_step() {
        for algorithm in Algorithm::ALL {
            let mut app = app(algorithm, &[42, 7, 19, 7, 88, 3]);
            let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
            loop {
                terminal.draw(|f| app.render(f)).unwrap();
                if app.player.step_forward().is_err() {
                    break;
                }
            }
        }
    }

    #[test]
    fn test_render_tiny_terminal() {
        let mut app = app(Algorithm::Merge, &[4, 2, 1, 3]);
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        press(&mut app, KeyCode::Char('5'));
        terminal.draw(|f| app.render(f)).unwrap();
    }
}
