//! seismerge Assoc - cross-catalog association
//!
//! Windowed spatiotemporal matching between independently produced catalogs:
//! duplicate-event detection (two producers describing the same physical
//! event) and pick-to-origin association. Matching ranks, the merge layer
//! decides, the caller persists.

mod matcher;
mod merge;

pub use matcher::{find_candidates, MatchCandidate, Tolerance};
pub use merge::{decide, MergeDecision};
