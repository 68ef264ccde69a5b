//! Resumable batch cursor
//!
//! Pages through an externally supplied ordered source with
//! `key > last_seen ORDER BY key ASC LIMIT page_size` semantics.
//! Producer-assigned keys are not contiguous, so an empty page below the
//! known upper bound advances by the smallest representable increment
//! instead of looping on a gap.

use seismerge_core::{CatalogError, CatalogResult};

/// An ordered source of `(key, record)` rows
///
/// Implementations must return rows with keys strictly above `key`, in
/// ascending key order, at most `limit` of them. Typically backed by a SQL
/// query; the in-memory implementations in the tests model the same
/// contract.
pub trait PageSource {
    type Record;

    fn fetch_after(&mut self, key: i64, limit: usize) -> CatalogResult<Vec<(i64, Self::Record)>>;
}

/// Cursor over a keyed source; one owner, mutated only by [`next_page`]
///
/// Resuming an interrupted transfer only requires reconstructing the cursor
/// from the last committed key: already-committed rows are never revisited
/// and none are skipped, provided commits align with page boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchCursor {
    last_seen_key: i64,
    upper_bound: i64,
    page_size: usize,
    exhausted: bool,
}

impl BatchCursor {
    /// Start (or resume) a cursor.
    ///
    /// `last_seen_key` is the last key already committed; a fresh transfer
    /// passes one below the source's minimum key. `upper_bound` is the
    /// source's known maximum key, read once up front.
    pub fn new(last_seen_key: i64, upper_bound: i64, page_size: usize) -> Self {
        BatchCursor {
            last_seen_key,
            upper_bound,
            page_size: page_size.max(1),
            exhausted: false,
        }
    }

    #[inline]
    pub fn last_seen_key(&self) -> i64 {
        self.last_seen_key
    }

    #[inline]
    pub fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Roll back to a previously committed key after a failed page write
    pub(crate) fn rewind(&mut self, key: i64) {
        self.last_seen_key = key;
        self.exhausted = false;
    }
}

/// Fetch the next page and advance the cursor.
///
/// Non-empty page: the cursor moves to the page's maximum key. Empty page
/// below the upper bound: the cursor steps forward by one key (sparse gap).
/// Empty page at or beyond the upper bound: the cursor becomes exhausted.
///
/// Keys must come back strictly ascending and above the cursor; a violation
/// returns `BrokenOrdering` with the cursor untouched, as does a source
/// failure, so the last committed position stays valid for resumption.
pub fn next_page<S: PageSource>(
    source: &mut S,
    cursor: &mut BatchCursor,
) -> CatalogResult<Vec<(i64, S::Record)>> {
    if cursor.exhausted {
        return Ok(Vec::new());
    }

    let page = source.fetch_after(cursor.last_seen_key, cursor.page_size)?;

    let mut prev = cursor.last_seen_key;
    for (key, _) in &page {
        if *key <= prev {
            return Err(CatalogError::BrokenOrdering {
                key: *key,
                cursor: prev,
            });
        }
        prev = *key;
    }

    match page.last() {
        Some((max_key, _)) => {
            cursor.last_seen_key = *max_key;
        }
        None if cursor.last_seen_key < cursor.upper_bound => {
            // Gap in the key space; step over it one key at a time
            cursor.last_seen_key += 1;
        }
        None => {
            cursor.exhausted = true;
        }
    }

    Ok(page)
}
