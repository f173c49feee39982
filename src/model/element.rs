//! The value wrapper carried through every algorithm.

use std::fmt;

/// A single sortable item.
///
/// `id` is the stable identity the renderer uses to follow an item across
/// positional moves; `value` is the sort key. Elements are never mutated once
/// created: a swap rearranges copies of the same two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    pub id: usize,
    pub value: i64,
}

impl Element {
    pub fn new(id: usize, value: i64) -> Self {
        Element { id, value }
    }

    /// Wrap raw values, assigning ids `0..values.len()` in input order
    pub fn from_values(values: &[i64]) -> Vec<Element> {
        values
            .iter()
            .enumerate()
            .map(|(id, &value)| Element::new(id, value))
            .collect()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Check that `data` is non-decreasing by value
pub fn is_sorted(data: &[Element]) -> bool {
    data.windows(2).all(|pair| pair[0].value <= pair[1].value)
}

/// Extract the sort keys, in order
pub fn values_of(data: &[Element]) -> Vec<i64> {
    data.iter().map(|e| e.value).collect()
}
