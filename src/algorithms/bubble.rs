//! Bubble sort step generator
//!
//! Repeated passes over a shrinking unsorted prefix. Each pass compares
//! adjacent pairs left to right and exchanges them only when the left value is
//! strictly greater, which keeps equal values in input order. A pass with no
//! exchanges ends the run early.
//!
//! Finality is a single boundary: after a pass, the last slot of the prefix
//! holds its final value, so [`Finalized::Boundary`] moves one step left.

use crate::model::{Element, Finalized, IndexRange, Step};

pub const PSEUDOCODE: &[&str] = &[
    "def bubble_sort(arr):",
    "    n = len(arr)",
    "",
    "    for i in range(n - 1, 0, -1):",
    "        swapped = False",
    "",
    "        for j in range(i):",
    "            if arr[j] > arr[j+1]:",
    "                # Swap elements",
    "                arr[j], arr[j+1] = arr[j+1], arr[j]",
    "                swapped = True",
    "",
    "        if not swapped:",
    "            break",
];

const LINE_START: usize = 0;
const LINE_INNER_LOOP: usize = 6;
const LINE_PASS: usize = 4;
const LINE_COMPARE: usize = 7;
const LINE_SWAP: usize = 9;
const LINE_PASS_END: usize = 12;
const LINE_DONE: usize = 13;

fn frame(data: &[Element], line: usize, boundary: usize, active: IndexRange) -> Step {
    Step {
        data: data.to_vec(),
        code_line: Some(line),
        finalized: Finalized::Boundary(boundary),
        active_range: Some(active),
        ..Step::default()
    }
}

/// Generate the full bubble sort trace for `elements`
pub fn generate_steps(elements: &[Element]) -> Vec<Step> {
    let mut data = elements.to_vec();
    let n = data.len();
    if n <= 1 {
        return super::trivial_steps(&data, Finalized::Boundary(0), LINE_DONE);
    }

    let whole = IndexRange::new(0, n - 1);
    let mut steps = vec![frame(&data, LINE_START, n, whole)];

    // Everything after `bound` is already in place
    let mut bound = n - 1;
    let mut passes = 0;
    loop {
        passes += 1;
        let mut swapped = false;
        let active = IndexRange::new(0, bound);
        steps.push(frame(&data, LINE_PASS, bound + 1, active));

        for i in 0..bound {
            steps.push(Step {
                comparing: vec![i, i + 1],
                ..frame(&data, LINE_COMPARE, bound + 1, active)
            });

            if data[i].value > data[i + 1].value {
                steps.push(Step {
                    swapped: vec![i, i + 1],
                    airborne: vec![i, i + 1],
                    ..frame(&data, LINE_SWAP, bound + 1, active)
                });

                data.swap(i, i + 1);
                swapped = true;

                steps.push(frame(&data, LINE_INNER_LOOP, bound + 1, active));
            }
        }

        steps.push(frame(&data, LINE_PASS_END, bound, active));

        if !swapped || bound == 1 {
            break;
        }
        bound -= 1;
    }

    steps.push(frame(&data, LINE_DONE, 0, whole));

    tracing::debug!(elements = n, passes, steps = steps.len(), "bubble sort trace generated");
    steps
}
