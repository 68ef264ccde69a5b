//! Page-aligned transfer loop
//!
//! Commits are aligned one-to-one with page boundaries: a crash between
//! pages loses at most one uncommitted page, never partial rows within a
//! committed page. A failed page write rolls the cursor back to the last
//! committed position and aborts the loop instead of retrying blindly.

use seismerge_core::CatalogResult;

use crate::{next_page, BatchCursor, PageSource};

/// Destination for whole pages of `(key, record)` rows
///
/// `write_page` must be all-or-nothing: either every row in the page is
/// persisted or none are. Backed by a transactional insert in practice.
pub trait PageSink<R> {
    fn write_page(&mut self, records: &[(i64, R)]) -> CatalogResult<()>;
}

/// Counters for one completed transfer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransferReport {
    pub rows: u64,
    pub pages: u64,
}

/// Drive `source` to exhaustion, committing one page at a time.
///
/// On any failure the cursor is left at the last committed key, so calling
/// `transfer` again with the same cursor resumes without reprocessing or
/// skipping rows.
pub fn transfer<S, K>(
    source: &mut S,
    sink: &mut K,
    cursor: &mut BatchCursor,
) -> CatalogResult<TransferReport>
where
    S: PageSource,
    K: PageSink<S::Record>,
{
    let mut report = TransferReport::default();

    while !cursor.is_exhausted() {
        let committed = cursor.last_seen_key();
        let page = next_page(source, cursor)?;
        if page.is_empty() {
            continue;
        }

        if let Err(e) = sink.write_page(&page) {
            tracing::warn!(
                "page write failed after key {}, rolling back: {}",
                committed,
                e
            );
            cursor.rewind(committed);
            return Err(e);
        }

        report.rows += page.len() as u64;
        report.pages += 1;
        tracing::debug!(
            "committed page of {} rows through key {}",
            page.len(),
            cursor.last_seen_key()
        );
    }

    Ok(report)
}
