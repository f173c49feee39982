//! Playback over a completed [`StepTrace`]
//!
//! The trace never changes after generation, so moving through it is plain
//! index arithmetic: nothing is re-computed when stepping backward or
//! jumping.
//!
//! Time is passed in explicitly (`tick(now)`) rather than read from the clock,
//! which keeps autoplay deterministic under test.

use crate::errors::{Result, SortError};
use crate::model::{IndexRange, RangeSnapshot, Step};
use crate::trace::StepTrace;
use std::time::{Duration, Instant};

/// A cursor into a trace plus autoplay state
#[derive(Debug)]
pub struct Player {
    trace: StepTrace,
    position: usize,
    playing: bool,
    interval: Duration,
    last_tick: Instant,
}

impl Player {
    pub fn new(trace: StepTrace, interval: Duration) -> Self {
        Player {
            trace,
            position: 0,
            playing: false,
            interval,
            last_tick: Instant::now(),
        }
    }

    pub fn trace(&self) -> &StepTrace {
        &self.trace
    }

    /// The step under the cursor. Only `None` for a trace with no steps,
    /// which the generators never produce.
    pub fn current(&self) -> Option<&Step> {
        self.trace.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.trace.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    pub fn step_forward(&mut self) -> Result<()> {
        if self.is_at_end() {
            return Err(SortError::AtEnd);
        }
        self.position += 1;
        tracing::trace!(position = self.position, "step forward");
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<()> {
        if self.is_at_start() {
            return Err(SortError::AtStart);
        }
        self.position -= 1;
        tracing::trace!(position = self.position, "step backward");
        Ok(())
    }

    /// Step forward up to `count` times, stopping at the end. Returns how many
    /// steps were taken.
    pub fn step_forward_by(&mut self, count: usize) -> usize {
        let remaining = self.trace.len().saturating_sub(self.position + 1);
        let taken = count.min(remaining);
        self.position += taken;
        taken
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.trace.len() {
            return Err(SortError::StepOutOfRange {
                index,
                total: self.trace.len(),
            });
        }
        self.position = index;
        tracing::debug!(position = index, "jump");
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.trace.len().saturating_sub(1);
    }

    /// Start autoplay. Playing from the last step restarts from the first.
    pub fn play(&mut self, now: Instant) {
        if self.is_at_end() {
            self.rewind_to_start();
        }
        self.playing = true;
        // Due immediately on the next tick
        self.last_tick = now.checked_sub(self.interval).unwrap_or(now);
        tracing::debug!(position = self.position, "play");
    }

    pub fn pause(&mut self) {
        self.playing = false;
        tracing::debug!(position = self.position, "pause");
    }

    pub fn toggle_play(&mut self, now: Instant) {
        if self.playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Advance one step if playing and an interval has elapsed since the last
    /// advance. Playback pauses on reaching the last step. Returns whether
    /// the cursor moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing || now.saturating_duration_since(self.last_tick) < self.interval {
            return false;
        }
        self.last_tick = now;
        let moved = self.step_forward().is_ok();
        if self.is_at_end() {
            self.playing = false;
        }
        moved
    }

    /// Collapsed sorted branches visible at the cursor
    pub fn visible_snapshots(&self) -> Vec<&RangeSnapshot> {
        self.trace.visible_snapshots(self.position)
    }

    /// Active range per depth at the cursor, root first
    pub fn recursion_path(&self) -> Vec<IndexRange> {
        self.trace.recursion_path(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::model::Element;

    fn player(values: &[i64]) -> Player {
        let trace = Algorithm::Bubble
            .generate(&Element::from_values(values))
            .unwrap();
        Player::new(trace, Duration::from_millis(100))
    }

    #[test]
    fn test_step_bounds() {
        let mut player = player(&[2, 1]);
        assert!(player.is_at_start());
        assert!(matches!(player.step_backward(), Err(SortError::AtStart)));

        player.jump_to_end();
        assert!(player.is_at_end());
        assert!(matches!(player.step_forward(), Err(SortError::AtEnd)));

        player.step_backward().unwrap();
        assert_eq!(player.position(), player.total() - 2);
    }

    #[test]
    fn test_step_forward_by_stops_at_end() {
        let mut player = player(&[3, 2, 1]);
        let total = player.total();
        assert_eq!(player.step_forward_by(2), 2);
        assert_eq!(player.step_forward_by(1000), total - 3);
        assert!(player.is_at_end());
        assert_eq!(player.step_forward_by(1), 0);
    }

    #[test]
    fn test_jump_to_rejects_out_of_range() {
        let mut player = player(&[2, 1]);
        let total = player.total();
        assert!(player.jump_to(total - 1).is_ok());
        match player.jump_to(total) {
            Err(SortError::StepOutOfRange { index, total: t }) => {
                assert_eq!(index, total);
                assert_eq!(t, total);
            }
            other => panic!("Expected StepOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_tick_advances_once_per_interval() {
        let mut player = player(&[3, 2, 1]);
        let start = Instant::now();

        assert!(!player.tick(start), "paused player must not advance");

        player.play(start);
        assert!(player.tick(start));
        assert_eq!(player.position(), 1);

        assert!(!player.tick(start + Duration::from_millis(50)));
        assert!(player.tick(start + Duration::from_millis(100)));
        assert_eq!(player.position(), 2);
    }

    #[test]
    fn test_playback_pauses_at_end_and_restarts() {
        let mut player = player(&[2, 1]);
        let mut now = Instant::now();
        player.play(now);
        while player.is_playing() {
            player.tick(now);
            now += Duration::from_millis(100);
        }
        assert!(player.is_at_end());

        player.toggle_play(now);
        assert!(player.is_playing());
        assert!(player.is_at_start());
    }
}
