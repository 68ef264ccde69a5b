//! Merge decisions over ranked match candidates
//!
//! When a producer's record matches an existing one, the existing event is
//! updated (new preferred origin) instead of inserting a duplicate; when
//! nothing matches, a fresh event is created. This layer only decides; the
//! caller owns persistence.

use crate::MatchCandidate;

/// Outcome of reconciling one incoming record against the existing catalog
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MergeDecision<P> {
    /// Attach to the best-ranked existing record's payload
    AttachTo(P),
    /// No existing record within tolerance; the incoming record is new
    CreateNew,
}

/// Decide from a ranked candidate list.
///
/// `find_candidates` already sorted ascending by score, so the first entry
/// is the best match. Empty input means the record is new.
pub fn decide<P: Copy>(candidates: &[MatchCandidate<'_, P>]) -> MergeDecision<P> {
    match candidates.first() {
        Some(best) => MergeDecision::AttachTo(best.record.payload),
        None => MergeDecision::CreateNew,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find_candidates, Tolerance};
    use seismerge_core::{SpatioRecord, TrueTime};

    fn rec(t: f64, lat: f64, lon: f64, tag: u32) -> SpatioRecord<u32> {
        SpatioRecord::new(TrueTime::from_secs(t), lat, lon, tag)
    }

    #[test]
    fn test_attach_to_best_candidate() {
        let query = rec(100.0, 45.0, -122.0, 0);
        let pool = vec![
            rec(103.0, 45.0, -122.0, 11),
            rec(101.0, 45.0, -122.0, 22), // closest
        ];
        let hits = find_candidates(&query, &pool, Tolerance::default());
        assert_eq!(decide(&hits), MergeDecision::AttachTo(22));
    }

    #[test]
    fn test_no_candidates_means_new() {
        let query = rec(100.0, 45.0, -122.0, 0);
        let pool = vec![rec(500.0, 45.0, -122.0, 11)];
        let hits = find_candidates(&query, &pool, Tolerance::default());
        assert_eq!(decide(&hits), MergeDecision::CreateNew);
    }
}
