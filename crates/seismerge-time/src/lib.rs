//! seismerge Time - leap-second normalization
//!
//! Bidirectional conversion between nominal (civil/database) time and true
//! (UTC epoch) time, driven by an ordered, immutable leap-second table.
//! Takes the place of the `TrueTime.getEpoch` / `TrueTime.putEpoch` stored
//! procedures installed in production parametric databases.

mod convert;
mod table;

pub use table::{LeapEpoch, LeapTable};
