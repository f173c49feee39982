//! Terminal mode guard
//!
//! Tracks which terminal modes were switched on and switches exactly those
//! back off, on [`TerminalGuard::restore`] or on drop. A failure halfway
//! through setup therefore never leaves the shell in raw mode.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
    alternate_screen: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// A guard that has not changed anything yet
    pub fn new(out: W) -> Self {
        TerminalGuard {
            out,
            raw_mode: false,
            alternate_screen: false,
        }
    }

    pub fn enable_raw_mode(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        self.raw_mode = true;
        Ok(())
    }

    pub fn enter_alternate_screen(&mut self) -> io::Result<()> {
        execute!(self.out, EnterAlternateScreen)?;
        self.alternate_screen = true;
        Ok(())
    }

    /// Undo every mode entered so far. Calling it again is a no-op.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.alternate_screen {
            self.alternate_screen = false;
            execute!(self.out, LeaveAlternateScreen, Show)?;
        }
        // Raw mode goes last
        if self.raw_mode {
            self.raw_mode = false;
            disable_raw_mode()?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTER: &str = "\x1b[?1049h";
    const LEAVE: &str = "\x1b[?1049l";

    #[test]
    fn test_drop_leaves_alternate_screen() {
        let mut out = Vec::new();
        {
            let mut guard = TerminalGuard::new(&mut out);
            guard.enter_alternate_screen().unwrap();
            // Dropped without an explicit restore, as on an early `?` return
        }
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with(ENTER));
        assert!(written.contains(LEAVE));
    }

    #[test]
    fn test_restore_runs_once() {
        let mut out = Vec::new();
        {
            let mut guard = TerminalGuard::new(&mut out);
            guard.enter_alternate_screen().unwrap();
            guard.restore().unwrap();
            guard.restore().unwrap();
        }
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.matches(LEAVE).count(), 1);
    }

    #[test]
    fn test_untouched_guard_writes_nothing() {
        let mut out = Vec::new();
        drop(TerminalGuard::new(&mut out));
        assert!(out.is_empty());
    }
}
