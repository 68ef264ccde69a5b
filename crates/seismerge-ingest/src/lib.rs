//! seismerge Ingest - batch transfer machinery
//!
//! Drives ingestion of unbounded record streams in fixed-size pages ordered
//! by a monotonic key, tolerating sparse key spaces, so a multi-million-row
//! transfer can be interrupted and restarted without reprocessing. Also
//! carries the row-sanitation rules applied before persistence.

mod cursor;
mod pipeline;
pub mod sanitize;

pub use cursor::{next_page, BatchCursor, PageSource};
pub use pipeline::{transfer, PageSink, TransferReport};
