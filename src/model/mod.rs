//! Data model shared by every generator
//!
//! - [`element`]: [`Element`], the `{ id, value }` item being sorted
//! - [`step`]: [`Step`], one frame of a trace, plus the small index types it
//!   is built from ([`IndexRange`], [`Finalized`], [`Placement`],
//!   [`RangeSnapshot`])

pub mod element;
pub mod step;

pub use element::{is_sorted, values_of, Element};
pub use step::{Finalized, IndexRange, Placement, RangeSnapshot, Step};
