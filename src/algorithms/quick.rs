//! Quick sort step generator
//!
//! Lomuto partitioning with the last element of each range as pivot (no
//! randomization, no median-of-three):
//!
//! ```text
//! i = low - 1
//! for j in low..high:
//!     if data[j] < pivot: i += 1; swap(i, j)
//! swap(i + 1, high)          // pivot is now final at i + 1
//! recurse [low, i] and [i + 2, high] one level deeper
//! ```
//!
//! Every step carries the recursion depth and the active range so parent
//! levels can stay on screen while children are drawn. The finalized set is
//! shared by the whole run and only grows.
//!
//! The `i` cursor starts one slot left of the range; when the range begins at
//! 0 that slot does not exist and the marker is reported as `None`.

use super::recorder::Recorder;
use crate::model::{Element, Finalized, IndexRange, Step};

pub const PSEUDOCODE: &[&str] = &[
    "def quick_sort(arr, low, high):",
    "    if low < high:",
    "        # Partition the array",
    "        pivot_index = partition(arr, low, high)",
    "",
    "        # Recursively sort the two halves",
    "        quick_sort(arr, low, pivot_index - 1)",
    "        quick_sort(arr, pivot_index + 1, high)",
    "",
    "def partition(arr, low, high):",
    "    pivot = arr[high]",
    "    i = low - 1",
    "",
    "    for j in range(low, high):",
    "        if arr[j] < pivot:",
    "            i += 1",
    "            arr[i], arr[j] = arr[j], arr[i]",
    "",
    "    arr[i+1], arr[high] = arr[high], arr[i+1]",
    "    return i + 1",
];

const LINE_START: usize = 0;
const LINE_RANGE_CHECK: usize = 1;
const LINE_PIVOT: usize = 10;
const LINE_BOUNDARY: usize = 11;
const LINE_COMPARE: usize = 14;
const LINE_SWAP: usize = 16;
const LINE_SEAT_PIVOT: usize = 18;
const LINE_RETURN: usize = 19;

/// Indices touched by an exchange; a self-exchange touches one slot
fn exchanged(a: usize, b: usize) -> Vec<usize> {
    if a == b {
        vec![a]
    } else {
        vec![a, b]
    }
}

struct QuickSort {
    data: Vec<Element>,
    recorder: Recorder,
}

impl QuickSort {
    /// Sort the non-empty inclusive range `[low, high]`
    fn sort(&mut self, low: usize, high: usize, depth: usize) {
        let range = IndexRange::new(low, high);

        if low == high {
            self.recorder.finalize(low);
            let step = self.recorder.frame(&self.data, LINE_RANGE_CHECK, depth, range);
            self.recorder.push(step);
            return;
        }

        let step = self.recorder.frame(&self.data, LINE_RANGE_CHECK, depth, range);
        self.recorder.push(step);

        let pivot = self.partition(low, high, depth);

        if pivot > low {
            self.sort(low, pivot - 1, depth + 1);
        }
        if pivot < high {
            self.sort(pivot + 1, high, depth + 1);
        }
    }

    /// Partition `[low, high]` around `data[high]` and return the pivot's
    /// final index
    fn partition(&mut self, low: usize, high: usize, depth: usize) -> usize {
        let range = IndexRange::new(low, high);
        let pivot_value = self.data[high].value;
        let pivot = Some(high);

        let step = Step {
            pivot,
            ..self.recorder.frame(&self.data, LINE_PIVOT, depth, range)
        };
        self.recorder.push(step);

        // `store` is the slot right after the "less than pivot" region, i.e. i + 1
        let mut store = low;
        let step = Step {
            pivot,
            i_marker: store.checked_sub(1),
            ..self.recorder.frame(&self.data, LINE_BOUNDARY, depth, range)
        };
        self.recorder.push(step);

        for j in low..high {
            let step = Step {
                comparing: vec![j, high],
                pivot,
                i_marker: store.checked_sub(1),
                j_marker: Some(j),
                ..self.recorder.frame(&self.data, LINE_COMPARE, depth, range)
            };
            self.recorder.push(step);

            if self.data[j].value < pivot_value {
                let i = store;
                store += 1;

                let step = Step {
                    comparing: vec![j, high],
                    swapped: exchanged(i, j),
                    pivot,
                    i_marker: Some(i),
                    j_marker: Some(j),
                    ..self.recorder.frame(&self.data, LINE_SWAP, depth, range)
                };
                self.recorder.push(step);

                self.data.swap(i, j);

                let step = Step {
                    swapped: exchanged(i, j),
                    pivot,
                    i_marker: Some(i),
                    j_marker: Some(j),
                    ..self.recorder.frame(&self.data, LINE_SWAP, depth, range)
                };
                self.recorder.push(step);
            }
        }

        let seat = store;
        let step = Step {
            swapped: exchanged(seat, high),
            pivot,
            i_marker: seat.checked_sub(1),
            j_marker: Some(high),
            ..self.recorder.frame(&self.data, LINE_SEAT_PIVOT, depth, range)
        };
        self.recorder.push(step);

        self.data.swap(seat, high);
        self.recorder.finalize(seat);

        let step = Step {
            i_marker: seat.checked_sub(1),
            ..self.recorder.frame(&self.data, LINE_RETURN, depth, range)
        };
        self.recorder.push(step);

        seat
    }
}

/// Generate the full quick sort trace for `elements`
pub fn generate_steps(elements: &[Element]) -> Vec<Step> {
    let n = elements.len();
    if n <= 1 {
        return super::trivial_steps(elements, Finalized::all(n), LINE_RANGE_CHECK);
    }

    let whole = IndexRange::new(0, n - 1);
    let mut run = QuickSort {
        data: elements.to_vec(),
        recorder: Recorder::new(),
    };

    let initial = run.recorder.frame(&run.data, LINE_START, 0, whole);
    run.recorder.push(initial);

    run.sort(0, n - 1, 0);

    run.recorder.finalize_all(n);
    let last = Step {
        code_line: None,
        ..run.recorder.frame(&run.data, LINE_START, 0, whole)
    };
    run.recorder.push(last);

    tracing::debug!(elements = n, steps = run.recorder.len(), "quick sort trace generated");
    run.recorder.finish()
}
