//! Folds over step history used at render time
//!
//! Neither reducer mutates history: both walk the steps up to the current
//! position and return what should be on screen there.

use crate::model::{IndexRange, RangeSnapshot, Step};

/// Snapshots still displayed after `history`.
///
/// Snapshots are taken in order. Whenever a new snapshot's range fully
/// contains an earlier one, the earlier one is dropped: the wider sorted
/// branch supersedes the pieces it was merged from.
pub fn visible_snapshots(history: &[Step]) -> Vec<&RangeSnapshot> {
    history
        .iter()
        .filter_map(|step| step.snapshot.as_ref())
        .fold(Vec::new(), |mut active, snapshot| {
            active.retain(|kept: &&RangeSnapshot| !snapshot.range.contains_range(&kept.range));
            active.push(snapshot);
            active
        })
}

/// The active range at every depth from 0 to the depth of the last step in
/// `history`.
///
/// Entering depth `d` discards anything recorded deeper than `d`, so the
/// result is the chain of ranges from the root call down to the current one.
pub fn recursion_path(history: &[Step]) -> Vec<IndexRange> {
    let mut path: Vec<IndexRange> = Vec::new();
    for step in history {
        let Some(range) = step.active_range else {
            continue;
        };
        path.truncate(step.depth);
        if path.len() == step.depth {
            path.push(range);
        }
    }
    path
}
