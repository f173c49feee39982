// Completed step traces and the checks that hold over them

mod reducers;

pub use reducers::{recursion_path, visible_snapshots};

use crate::algorithms::Algorithm;
use crate::errors::{Result, SortError};
use crate::model::{is_sorted, Element, Finalized, IndexRange, RangeSnapshot, Step};
use rustc_hash::{FxHashMap, FxHashSet};

/// An immutable, fully generated step sequence together with the input it
/// was generated from
#[derive(Debug, Clone)]
pub struct StepTrace {
    algorithm: Algorithm,
    input: Vec<Element>,
    steps: Vec<Step>,
}

impl StepTrace {
    pub fn new(algorithm: Algorithm, input: Vec<Element>, steps: Vec<Step>) -> Self {
        StepTrace {
            algorithm,
            input,
            steps,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn input(&self) -> &[Element] {
        &self.input
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Estimated memory held by the steps, in bytes
    pub fn memory_usage(&self) -> usize {
        self.steps.iter().map(Step::estimated_size).sum()
    }

    /// Snapshots still on display at step `position`
    pub fn visible_snapshots(&self, position: usize) -> Vec<&RangeSnapshot> {
        visible_snapshots(self.history(position))
    }

    /// Active range at each recursion depth from the root down to the depth
    /// of step `position`
    pub fn recursion_path(&self, position: usize) -> Vec<IndexRange> {
        recursion_path(self.history(position))
    }

    fn history(&self, position: usize) -> &[Step] {
        let end = (position + 1).min(self.steps.len());
        &self.steps[..end]
    }

    /// Check the trace against every invariant a renderer relies on.
    ///
    /// Returns the first violation found, tagged with its step index.
    pub fn verify(&self) -> Result<()> {
        let n = self.input.len();
        let last = self
            .steps
            .last()
            .ok_or_else(|| SortError::violation(0, "trace has no steps"))?;
        let last_index = self.steps.len() - 1;

        if n == 0 && self.steps.len() != 1 {
            return Err(SortError::violation(
                last_index,
                format!("empty input produced {} steps", self.steps.len()),
            ));
        }

        let input_ids: FxHashSet<usize> = self.input.iter().map(|e| e.id).collect();
        let mut previous: Option<&Finalized> = None;
        let mut snapshot_ranges: Vec<IndexRange> = Vec::new();

        for (index, step) in self.steps.iter().enumerate() {
            if step.data.len() != n {
                return Err(SortError::violation(
                    index,
                    format!("data has {} elements, input has {}", step.data.len(), n),
                ));
            }

            let ids: FxHashSet<usize> = step.data.iter().map(|e| e.id).collect();
            if ids != input_ids {
                return Err(SortError::violation(
                    index,
                    "data does not hold every input id exactly once",
                ));
            }

            if let Some(bad) = step.referenced_indices().into_iter().find(|&i| i >= n) {
                return Err(SortError::violation(
                    index,
                    format!("index {} is out of bounds for {} elements", bad, n),
                ));
            }
            if let Finalized::Boundary(boundary) = step.finalized {
                if boundary > n {
                    return Err(SortError::violation(
                        index,
                        format!("sorted boundary {} exceeds length {}", boundary, n),
                    ));
                }
            }

            if let Some(earlier) = previous {
                if !step.finalized.covers(earlier, n) {
                    return Err(SortError::violation(index, "finalized indices shrank"));
                }
            }
            previous = Some(&step.finalized);

            if let Some(snapshot) = &step.snapshot {
                if snapshot.data.len() != snapshot.range.len() || !is_sorted(&snapshot.data) {
                    return Err(SortError::violation(
                        index,
                        format!(
                            "snapshot of {} is not a sorted copy of its range",
                            snapshot.range
                        ),
                    ));
                }
                let clash = snapshot_ranges
                    .iter()
                    .find(|r| partially_overlap(r, &snapshot.range));
                if let Some(other) = clash {
                    return Err(SortError::violation(
                        index,
                        format!("snapshot {} partially overlaps {}", snapshot.range, other),
                    ));
                }
                snapshot_ranges.push(snapshot.range);
            }
        }

        if !is_sorted(&last.data) {
            return Err(SortError::violation(last_index, "final data is not sorted"));
        }
        if !last.finalized.is_complete(n) {
            return Err(SortError::violation(
                last_index,
                "final step does not finalize every index",
            ));
        }

        let mut expected: Vec<i64> = self.input.iter().map(|e| e.value).collect();
        let mut actual: Vec<i64> = last.data.iter().map(|e| e.value).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        if expected != actual {
            return Err(SortError::violation(
                last_index,
                "final values are not a permutation of the input",
            ));
        }

        if self.algorithm.is_stable() {
            let input_order: FxHashMap<usize, usize> = self
                .input
                .iter()
                .enumerate()
                .map(|(position, e)| (e.id, position))
                .collect();
            let unstable = last.data.windows(2).any(|pair| {
                pair[0].value == pair[1].value
                    && input_order[&pair[0].id] > input_order[&pair[1].id]
            });
            if unstable {
                return Err(SortError::violation(
                    last_index,
                    "equal values changed their relative order",
                ));
            }
        }

        Ok(())
    }
}

fn partially_overlap(a: &IndexRange, b: &IndexRange) -> bool {
    a.overlaps(b) && !a.contains_range(b) && !b.contains_range(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(algorithm: Algorithm, values: &[i64]) -> StepTrace {
        algorithm.generate(&Element::from_values(values)).unwrap()
    }

    #[test]
    fn test_generated_traces_verify() {
        let cases: [&[i64]; 5] = [&[], &[1], &[2, 1], &[5, 3, 4, 1, 2], &[3, 3, 1, 3, 2, 2]];
        for algorithm in Algorithm::ALL {
            for values in cases {
                let result = trace(algorithm, values).verify();
                assert!(result.is_ok(), "{} on {:?}: {:?}", algorithm, values, result);
            }
        }
    }

    #[test]
    fn test_verify_rejects_unsorted_final_step() {
        let input = Element::from_values(&[2, 1]);
        let steps = vec![Step {
            data: input.clone(),
            finalized: Finalized::all(2),
            ..Step::default()
        }];
        let trace = StepTrace::new(Algorithm::Bubble, input, steps);

        match trace.verify() {
            Err(SortError::TraceViolation { step, message }) => {
                assert_eq!(step, 0);
                assert!(message.contains("not sorted"));
            }
            other => panic!("Expected TraceViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_rejects_shrinking_finalized() {
        let input = Element::from_values(&[1, 2]);
        let steps = vec![
            Step {
                data: input.clone(),
                finalized: Finalized::Boundary(1),
                ..Step::default()
            },
            Step {
                data: input.clone(),
                finalized: Finalized::Boundary(2),
                ..Step::default()
            },
            Step {
                data: input.clone(),
                finalized: Finalized::Boundary(0),
                ..Step::default()
            },
        ];
        let trace = StepTrace::new(Algorithm::Bubble, input, steps);

        match trace.verify() {
            Err(SortError::TraceViolation { step, .. }) => assert_eq!(step, 1),
            other => panic!("Expected TraceViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_rejects_out_of_bounds_marker() {
        let input = Element::from_values(&[1, 2]);
        let steps = vec![Step {
            data: input.clone(),
            finalized: Finalized::all(2),
            pivot: Some(2),
            ..Step::default()
        }];
        let trace = StepTrace::new(Algorithm::Quick, input, steps);
        assert!(trace.verify().is_err());
    }

    #[test]
    fn test_verify_rejects_unstable_result_for_stable_algorithm() {
        let input = Element::from_values(&[7, 7]);
        let swapped = vec![input[1], input[0]];
        let steps = vec![Step {
            data: swapped,
            finalized: Finalized::all(2),
            ..Step::default()
        }];

        let trace = StepTrace::new(Algorithm::Merge, input.clone(), steps.clone());
        assert!(trace.verify().is_err());

        // Quick sort makes no stability promise
        let trace = StepTrace::new(Algorithm::Quick, input, steps);
        assert!(trace.verify().is_ok());
    }

    #[test]
    fn test_memory_usage_grows_with_steps() {
        let small = trace(Algorithm::Bubble, &[2, 1]);
        let large = trace(Algorithm::Bubble, &[9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(small.memory_usage() > 0);
        assert!(large.memory_usage() > small.memory_usage());
    }
}
