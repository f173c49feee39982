//! Step generators
//!
//! Each submodule pairs a generator with the pseudocode listing its
//! `code_line` values index into:
//!
//! - [`bubble`]: iterative passes with early exit
//! - [`quick`]: Lomuto partitioning, last element as pivot
//! - [`merge`]: top-down split and merge with sorted-branch snapshots
//!
//! Generators are pure: each works on its own copy of the input and returns
//! the complete step sequence. [`Algorithm`] resolves a selection key to one
//! generator plus its listing.

pub mod bubble;
pub mod merge;
pub mod quick;
mod recorder;

use crate::errors::{Result, SortError};
use crate::model::{Element, Finalized, IndexRange, Step};
use crate::trace::StepTrace;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// The sorting algorithms a trace can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Quick,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Quick, Algorithm::Merge];

    /// The selection key accepted by [`FromStr`]
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    pub fn pseudocode(self) -> &'static [&'static str] {
        match self {
            Algorithm::Bubble => bubble::PSEUDOCODE,
            Algorithm::Quick => quick::PSEUDOCODE,
            Algorithm::Merge => merge::PSEUDOCODE,
        }
    }

    /// Whether equal values keep their input order
    pub fn is_stable(self) -> bool {
        !matches!(self, Algorithm::Quick)
    }

    /// Run the generator without validating the input
    pub fn generate_steps(self, elements: &[Element]) -> Vec<Step> {
        match self {
            Algorithm::Bubble => bubble::generate_steps(elements),
            Algorithm::Quick => quick::generate_steps(elements),
            Algorithm::Merge => merge::generate_steps(elements),
        }
    }

    /// Validate the input and build the complete trace
    pub fn generate(self, elements: &[Element]) -> Result<StepTrace> {
        validate_ids(elements)?;
        let steps = self.generate_steps(elements);
        let trace = StepTrace::new(self, elements.to_vec(), steps);
        tracing::info!(
            algorithm = self.key(),
            elements = elements.len(),
            steps = trace.len(),
            bytes = trace.memory_usage(),
            "trace generated"
        );
        Ok(trace)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(key: &str) -> Result<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubble-sort" | "bubblesort" => Ok(Algorithm::Bubble),
            "quick" | "quick-sort" | "quicksort" => Ok(Algorithm::Quick),
            "merge" | "merge-sort" | "mergesort" => Ok(Algorithm::Merge),
            _ => Err(SortError::UnknownAlgorithm {
                key: key.to_string(),
            }),
        }
    }
}

/// Reject inputs where two elements share an id
fn validate_ids(elements: &[Element]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for element in elements {
        if !seen.insert(element.id) {
            return Err(SortError::DuplicateId { id: element.id });
        }
    }
    Ok(())
}

/// The whole trace for an input with fewer than two elements: one step,
/// already sorted and fully finalized
fn trivial_steps(elements: &[Element], finalized: Finalized, line: usize) -> Vec<Step> {
    vec![Step {
        data: elements.to_vec(),
        code_line: Some(line),
        finalized,
        active_range: (!elements.is_empty()).then(|| IndexRange::new(0, elements.len() - 1)),
        ..Step::default()
    }]
}
