// Step sink shared by the recursive generators

use crate::model::{Element, Finalized, IndexRange, Step};
use std::collections::BTreeSet;

/// Accumulates steps and the run-wide finalized set.
///
/// Recursive generators thread one `Recorder` through every call instead of
/// closing over shared mutable state.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    steps: Vec<Step>,
    finalized: BTreeSet<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    /// Mark an index as holding its final value. Repeated calls are no-ops.
    pub fn finalize(&mut self, index: usize) {
        self.finalized.insert(index);
    }

    pub fn finalize_all(&mut self, len: usize) {
        self.finalized.extend(0..len);
    }

    /// A step carrying the shared context; callers fill in the rest with
    /// struct update syntax
    pub fn frame(&self, data: &[Element], line: usize, depth: usize, range: IndexRange) -> Step {
        Step {
            data: data.to_vec(),
            code_line: Some(line),
            finalized: Finalized::Indices(self.finalized.clone()),
            depth,
            active_range: Some(range),
            ..Step::default()
        }
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn finish(self) -> Vec<Step> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_is_idempotent() {
        let mut recorder = Recorder::new();
        recorder.finalize(2);
        recorder.finalize(2);
        let step = recorder.frame(&Element::from_values(&[1, 2, 3]), 0, 0, IndexRange::new(0, 2));
        assert_eq!(step.finalized, Finalized::Indices([2].into_iter().collect()));
    }

    #[test]
    fn test_frames_snapshot_finalized_at_push_time() {
        let data = Element::from_values(&[1, 2]);
        let mut recorder = Recorder::new();
        let before = recorder.frame(&data, 0, 0, IndexRange::new(0, 1));
        recorder.push(before);
        recorder.finalize_all(2);
        let after = recorder.frame(&data, 1, 0, IndexRange::new(0, 1));
        recorder.push(after);

        let steps = recorder.finish();
        assert_eq!(steps[0].finalized.count(2), 0);
        assert!(steps[1].finalized.is_complete(2));
    }
}
