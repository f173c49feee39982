//! # Introduction
//!
//! SORTTY generates the complete execution trace of a sorting algorithm up
//! front, one self-contained [`model::Step`] per visible event, and then plays
//! the trace forward and backward in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Generator → Steps → StepTrace → Player → TUI
//! ```
//!
//! 1. [`data`] builds the input: random values or a user-supplied list of
//!    [`model::Element`]s, each with a stable id.
//! 2. [`algorithms`] holds one generator per algorithm (bubble, quick, merge)
//!    plus the pseudocode listing its steps point into.
//! 3. [`trace`] wraps the steps in a [`trace::StepTrace`], folds history into
//!    collapsed snapshots and the recursion path, and verifies invariants.
//! 4. [`player`] is the playback cursor with autoplay.
//! 5. [`ui`] renders the current step; not part of the stable library API.
//!
//! Generation is pure. Stepping backward or jumping never re-runs an
//! algorithm.

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod data;
pub mod errors;
pub mod logging;
pub mod model;
pub mod player;
pub mod trace;
pub mod ui;
