//! Merge sort step generator
//!
//! # Divide
//!
//! `split(low, high)` records an entry step, stops at single-element ranges,
//! and otherwise splits at `mid = low + (high - low) / 2`. After each half
//! returns, a [`RangeSnapshot`] of the now-sorted half is recorded so the
//! renderer can keep the finished branch on screen while its sibling runs.
//!
//! # Merge
//!
//! Both halves are copied into temporary buffers before anything is written.
//! Two arrays are kept apart for the whole merge:
//!
//! - the **backdrop**, a frozen copy of the array as it was when the merge
//!   began, which every merge step shows as `data`
//! - the **working** array, which receives the writes and becomes the real
//!   result
//!
//! Writes are exposed as an overlay (`placing` for the element in transit,
//! `placed` for everything written so far) on top of the backdrop.
//!
//! Heads are compared with `<=`, so equal values leave the left buffer first
//! and the sort is stable. Only the top-level merge writes final positions;
//! each of its placements finalizes its destination slot.

use super::recorder::Recorder;
use crate::model::{Element, Finalized, IndexRange, Placement, RangeSnapshot, Step};

pub const PSEUDOCODE: &[&str] = &[
    "def merge_sort(arr):",
    "    if len(arr) > 1:",
    "        mid = len(arr) // 2",
    "        L = arr[:mid]",
    "        R = arr[mid:]",
    "",
    "        merge_sort(L)",
    "        merge_sort(R)",
    "",
    "        i = j = k = 0",
    "",
    "        # Merge the temp arrays back into arr",
    "        while i < len(L) and j < len(R):",
    "            if L[i] < R[j]:",
    "                arr[k] = L[i]",
    "                i += 1",
    "            else:",
    "                arr[k] = R[j]",
    "                j += 1",
    "            k += 1",
    "",
    "        # Checking for leftover elements",
    "        while i < len(L):",
    "            arr[k] = L[i]",
    "            i += 1",
    "            k += 1",
    "",
    "        while j < len(R):",
    "            arr[k] = R[j]",
    "            j += 1",
    "            k += 1",
];

const LINE_ENTRY: usize = 0;
const LINE_BASE_CASE: usize = 1;
const LINE_MID: usize = 2;
const LINE_SORT_LEFT: usize = 6;
const LINE_SORT_RIGHT: usize = 7;
const LINE_MERGE_SETUP: usize = 9;
const LINE_MERGE_COMPARE: usize = 13;
const LINE_TAKE_LEFT: usize = 14;
const LINE_TAKE_RIGHT: usize = 17;
const LINE_DRAIN_LEFT: usize = 23;
const LINE_DRAIN_RIGHT: usize = 28;

/// The halves and depth of one merge call
#[derive(Debug, Clone, Copy)]
struct MergeWindow {
    left: IndexRange,
    right: IndexRange,
    depth: usize,
}

impl MergeWindow {
    fn range(&self) -> IndexRange {
        IndexRange::new(self.left.low, self.right.high)
    }
}

struct MergeSort {
    working: Vec<Element>,
    recorder: Recorder,
}

impl MergeSort {
    fn split(&mut self, low: usize, high: usize, depth: usize) {
        let range = IndexRange::new(low, high);
        let step = self.recorder.frame(&self.working, LINE_ENTRY, depth, range);
        self.recorder.push(step);

        if low >= high {
            let step = self.recorder.frame(&self.working, LINE_BASE_CASE, depth, range);
            self.recorder.push(step);
            return;
        }

        let mid = low + (high - low) / 2;
        let left = IndexRange::new(low, mid);
        let right = IndexRange::new(mid + 1, high);

        let step = Step {
            split_left: Some(left),
            split_right: Some(right),
            ..self.recorder.frame(&self.working, LINE_MID, depth, range)
        };
        self.recorder.push(step);

        self.split(low, mid, depth + 1);
        self.record_sorted_branch(left, range, depth, LINE_SORT_LEFT);

        self.split(mid + 1, high, depth + 1);
        self.record_sorted_branch(right, range, depth, LINE_SORT_RIGHT);

        self.merge(MergeWindow { left, right, depth });
    }

    /// Snapshot a half that its recursive call just finished sorting
    fn record_sorted_branch(
        &mut self,
        half: IndexRange,
        parent: IndexRange,
        depth: usize,
        line: usize,
    ) {
        let snapshot = RangeSnapshot {
            data: self.working[half.indices()].to_vec(),
            range: half,
            depth: depth + 1,
        };
        let step = Step {
            snapshot: Some(snapshot),
            ..self.recorder.frame(&self.working, line, depth, parent)
        };
        self.recorder.push(step);
    }

    fn merge(&mut self, window: MergeWindow) {
        let MergeWindow { left, right, .. } = window;

        let left_buffer = self.working[left.indices()].to_vec();
        let right_buffer = self.working[right.indices()].to_vec();
        let backdrop = self.working.clone();
        let mut placed: Vec<Placement> = Vec::with_capacity(window.range().len());

        let step = self.merge_frame(&backdrop, LINE_MERGE_SETUP, window);
        self.recorder.push(step);

        let (mut i, mut j) = (0, 0);
        let mut k = left.low;

        while i < left_buffer.len() && j < right_buffer.len() {
            let step = Step {
                comparing: vec![left.low + i, right.low + j],
                placed: placed.clone(),
                ..self.merge_frame(&backdrop, LINE_MERGE_COMPARE, window)
            };
            self.recorder.push(step);

            let (placement, line) = if left_buffer[i].value <= right_buffer[j].value {
                let placement = Placement {
                    element: left_buffer[i],
                    from: left.low + i,
                    to: k,
                };
                i += 1;
                (placement, LINE_TAKE_LEFT)
            } else {
                let placement = Placement {
                    element: right_buffer[j],
                    from: right.low + j,
                    to: k,
                };
                j += 1;
                (placement, LINE_TAKE_RIGHT)
            };
            self.place(&backdrop, &mut placed, placement, line, window);
            k += 1;
        }

        while i < left_buffer.len() {
            let placement = Placement {
                element: left_buffer[i],
                from: left.low + i,
                to: k,
            };
            self.place(&backdrop, &mut placed, placement, LINE_DRAIN_LEFT, window);
            i += 1;
            k += 1;
        }

        while j < right_buffer.len() {
            let placement = Placement {
                element: right_buffer[j],
                from: right.low + j,
                to: k,
            };
            self.place(&backdrop, &mut placed, placement, LINE_DRAIN_RIGHT, window);
            j += 1;
            k += 1;
        }
    }

    /// Write one element into the working array and record it as an overlay
    /// on the frozen backdrop
    fn place(
        &mut self,
        backdrop: &[Element],
        placed: &mut Vec<Placement>,
        placement: Placement,
        line: usize,
        window: MergeWindow,
    ) {
        self.working[placement.to] = placement.element;
        if window.depth == 0 {
            self.recorder.finalize(placement.to);
        }
        placed.push(placement);

        let step = Step {
            swapped: vec![placement.to],
            placing: Some(placement),
            placed: placed.clone(),
            ..self.merge_frame(backdrop, line, window)
        };
        self.recorder.push(step);
    }

    fn merge_frame(&self, backdrop: &[Element], line: usize, window: MergeWindow) -> Step {
        Step {
            merge_left: Some(window.left),
            merge_right: Some(window.right),
            ..self.recorder.frame(backdrop, line, window.depth, window.range())
        }
    }
}

/// Generate the full merge sort trace for `elements`
pub fn generate_steps(elements: &[Element]) -> Vec<Step> {
    let n = elements.len();
    if n <= 1 {
        return super::trivial_steps(elements, Finalized::all(n), LINE_BASE_CASE);
    }

    let whole = IndexRange::new(0, n - 1);
    let mut run = MergeSort {
        working: elements.to_vec(),
        recorder: Recorder::new(),
    };

    run.split(0, n - 1, 0);

    run.recorder.finalize_all(n);
    let last = Step {
        code_line: None,
        ..run.recorder.frame(&run.working, LINE_ENTRY, 0, whole)
    };
    run.recorder.push(last);

    tracing::debug!(
        elements = n,
        steps = run.recorder.len(),
        "merge sort trace generated"
    );
    run.recorder.finish()
}
