//! Step records: one immutable frame of an algorithm's execution.
//!
//! A [`Step`] is self-contained. A renderer can draw any step without looking
//! at the steps before it (apart from the optional reducers in
//! [`crate::trace`], which fold history into collapsed snapshots and the
//! recursion path).

use super::element::Element;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

/// Inclusive `[low, high]` index bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    pub low: usize,
    pub high: usize,
}

impl IndexRange {
    pub fn new(low: usize, high: usize) -> Self {
        debug_assert!(low <= high, "inverted range [{}, {}]", low, high);
        IndexRange { low, high }
    }

    pub fn single(index: usize) -> Self {
        IndexRange::new(index, index)
    }

    pub fn len(&self) -> usize {
        self.high - self.low + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.low <= index && index <= self.high
    }

    /// True when `other` lies entirely inside this range
    pub fn contains_range(&self, other: &IndexRange) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    pub fn overlaps(&self, other: &IndexRange) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.low..=self.high
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.low, self.high)
    }
}

/// Which positions are known to hold their final value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finalized {
    /// Every index `>= boundary` is final. `Boundary(len)` means nothing is.
    Boundary(usize),
    /// An explicit, possibly non-contiguous set of final indices.
    Indices(BTreeSet<usize>),
}

impl Default for Finalized {
    fn default() -> Self {
        Finalized::Indices(BTreeSet::new())
    }
}

impl Finalized {
    /// Every index in `0..len`
    pub fn all(len: usize) -> Self {
        Finalized::Indices((0..len).collect())
    }

    pub fn contains(&self, index: usize) -> bool {
        match self {
            Finalized::Boundary(boundary) => index >= *boundary,
            Finalized::Indices(set) => set.contains(&index),
        }
    }

    pub fn count(&self, len: usize) -> usize {
        (0..len).filter(|&i| self.contains(i)).count()
    }

    pub fn is_complete(&self, len: usize) -> bool {
        (0..len).all(|i| self.contains(i))
    }

    /// True when every index final in `earlier` is still final here
    pub fn covers(&self, earlier: &Finalized, len: usize) -> bool {
        match (self, earlier) {
            (Finalized::Boundary(now), Finalized::Boundary(before)) => now <= before,
            (Finalized::Indices(now), Finalized::Indices(before)) => now.is_superset(before),
            _ => (0..len).all(|i| !earlier.contains(i) || self.contains(i)),
        }
    }
}

/// An element moving from a source slot to a destination slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub element: Element,
    pub from: usize,
    pub to: usize,
}

/// A frozen copy of a fully-sorted sub-range, kept so completed recursive
/// branches stay visible while their siblings are still running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSnapshot {
    pub data: Vec<Element>,
    pub range: IndexRange,
    pub depth: usize,
}

/// One visualization frame.
///
/// Fields an algorithm does not use stay at their defaults (empty vectors,
/// `None`, depth 0).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Step {
    /// The full array at this instant. During a merge this is the frozen
    /// pre-merge backdrop; the placements so far live in `placed`.
    pub data: Vec<Element>,
    pub code_line: Option<usize>,
    pub comparing: Vec<usize>,
    pub swapped: Vec<usize>,
    pub airborne: Vec<usize>,
    pub finalized: Finalized,
    pub pivot: Option<usize>,
    pub i_marker: Option<usize>,
    pub j_marker: Option<usize>,
    pub depth: usize,
    pub active_range: Option<IndexRange>,
    pub split_left: Option<IndexRange>,
    pub split_right: Option<IndexRange>,
    pub merge_left: Option<IndexRange>,
    pub merge_right: Option<IndexRange>,
    pub placing: Option<Placement>,
    pub placed: Vec<Placement>,
    pub snapshot: Option<RangeSnapshot>,
}

impl Step {
    /// Every index any field of this step points at
    pub fn referenced_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        indices.extend(&self.comparing);
        indices.extend(&self.swapped);
        indices.extend(&self.airborne);
        indices.extend(self.pivot);
        indices.extend(self.i_marker);
        indices.extend(self.j_marker);

        let ranges = [
            self.active_range,
            self.split_left,
            self.split_right,
            self.merge_left,
            self.merge_right,
            self.snapshot.as_ref().map(|s| s.range),
        ];
        for range in ranges.into_iter().flatten() {
            indices.push(range.low);
            indices.push(range.high);
        }

        for placement in self.placing.iter().chain(&self.placed) {
            indices.push(placement.from);
            indices.push(placement.to);
        }

        if let Finalized::Indices(set) = &self.finalized {
            indices.extend(set);
        }
        indices
    }

    /// The element the merge overlay shows at `index`, if one was placed there
    pub fn placed_at(&self, index: usize) -> Option<&Placement> {
        self.placed.iter().rev().find(|p| p.to == index)
    }

    /// Rough memory footprint of this step in bytes
    pub fn estimated_size(&self) -> usize {
        let element = std::mem::size_of::<Element>();
        let index = std::mem::size_of::<usize>();

        let data_size = self.data.len() * element;
        let index_size =
            (self.comparing.len() + self.swapped.len() + self.airborne.len()) * index;
        let finalized_size = match &self.finalized {
            Finalized::Boundary(_) => index,
            // BTreeSet nodes carry overhead; assume 4 words per entry
            Finalized::Indices(set) => set.len() * index * 4,
        };
        let overlay_size = self.placed.len() * std::mem::size_of::<Placement>();
        let snapshot_size = self
            .snapshot
            .as_ref()
            .map_or(0, |s| s.data.len() * element);

        std::mem::size_of::<Step>()
            + data_size
            + index_size
            + finalized_size
            + overlay_size
            + snapshot_size
    }

    /// Short human-readable summary of what happens in this step
    pub fn describe(&self) -> String {
        let value_at = |index: usize| {
            self.data
                .get(index)
                .map_or_else(|| "?".to_string(), |e| e.value.to_string())
        };

        if let Some(placement) = &self.placing {
            return format!(
                "place {} from slot {} into slot {}",
                placement.element.value, placement.from, placement.to
            );
        }
        if let Some(snapshot) = &self.snapshot {
            return format!("branch {} is sorted", snapshot.range);
        }
        if let (Some(left), Some(right)) = (self.split_left, self.split_right) {
            return format!("split into {} and {}", left, right);
        }
        match (self.comparing.as_slice(), self.swapped.as_slice()) {
            (_, &[a, b]) => {
                return format!("swap {} and {}", value_at(a), value_at(b));
            }
            (_, &[a]) => return format!("{} stays in place", value_at(a)),
            (&[a, b], []) => {
                return format!("compare {} and {}", value_at(a), value_at(b));
            }
            _ => {}
        }
        if let (Some(left), Some(right)) = (self.merge_left, self.merge_right) {
            return format!("merge {} with {}", left, right);
        }
        if let Some(pivot) = self.pivot {
            return format!("pivot is {}", value_at(pivot));
        }
        if let Some(range) = self.active_range {
            if self.finalized.is_complete(self.data.len()) {
                return "sorted".to_string();
            }
            return format!("working on {} at depth {}", range, self.depth);
        }
        String::new()
    }
}
