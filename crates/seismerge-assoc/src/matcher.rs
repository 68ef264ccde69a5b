//! Windowed spatiotemporal matcher

use seismerge_core::SpatioRecord;

/// Tolerance box for candidate filtering
///
/// Each axis is filtered independently (a box, not a great-circle radius).
/// The reference reconciliation used 5 seconds and 0.1 degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Maximum |Δt| in seconds on the true-time axis
    pub time_s: f64,
    /// Maximum |Δlat| and |Δlon| in decimal degrees
    pub space_deg: f64,
}

impl Tolerance {
    pub fn new(time_s: f64, space_deg: f64) -> Self {
        Tolerance { time_s, space_deg }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        // Defaults used for duplicate-origin detection in the reference data
        Tolerance {
            time_s: 5.0,
            space_deg: 0.1,
        }
    }
}

/// A pool record that survived the tolerance filter, with its combined error
///
/// Ephemeral: borrows from the pool and is consumed within one matching call.
#[derive(Clone, Copy, Debug)]
pub struct MatchCandidate<'a, P> {
    /// Position of the record in the pool it was drawn from
    pub index: usize,
    /// The surviving record
    pub record: &'a SpatioRecord<P>,
    /// `|Δlat| + |Δlon| + |Δt|`; lower is better
    pub score: f64,
}

/// Find pool records within the tolerance box of `query`, ranked ascending
/// by combined time+distance error.
///
/// The score sums seconds and degrees directly (unit-mixed L1) - a deliberate
/// simplification that only holds because tolerances are tight. Ties keep
/// pool order; the sort is stable and comparisons never see NaN because every
/// score is a sum of absolute differences that already passed the filter.
///
/// An empty result is the normal "this record is new" outcome, not an error.
/// Neither the query nor the pool is mutated; merge decisions belong to the
/// caller.
pub fn find_candidates<'a, P>(
    query: &SpatioRecord<P>,
    pool: &'a [SpatioRecord<P>],
    tolerance: Tolerance,
) -> Vec<MatchCandidate<'a, P>> {
    let mut candidates: Vec<MatchCandidate<'a, P>> = pool
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let dt = (query.time - record.time).abs();
            let dlat = (query.lat - record.lat).abs();
            let dlon = (query.lon - record.lon).abs();
            if dt <= tolerance.time_s && dlat <= tolerance.space_deg && dlon <= tolerance.space_deg
            {
                Some(MatchCandidate {
                    index,
                    record,
                    score: dlat + dlon + dt,
                })
            } else {
                None
            }
        })
        .collect();
    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use seismerge_core::TrueTime;

    fn rec(t: f64, lat: f64, lon: f64, tag: u32) -> SpatioRecord<u32> {
        SpatioRecord::new(TrueTime::from_secs(t), lat, lon, tag)
    }

    #[test]
    fn test_reference_scenario() {
        let query = rec(100.0, 45.0, -122.0, 0);
        let pool = vec![rec(100.4, 45.05, -121.95, 1)];
        let hits = find_candidates(&query, &pool, Tolerance::new(1.0, 0.1));

        // |Δlat| + |Δlon| + |Δt| = 0.05 + 0.05 + 0.4
        assert_eq!(hits.len(), 1);
        assert!((hits[0].score - 0.5).abs() < 1e-9);
        assert_eq!(hits[0].record.payload, 1);
    }

    #[test]
    fn test_empty_pool_is_no_match() {
        let query = rec(100.0, 45.0, -122.0, 0);
        let hits = find_candidates(&query, &[], Tolerance::default());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_box_filter_is_per_axis() {
        let query = rec(0.0, 45.0, -122.0, 0);
        let pool = vec![
            rec(0.0, 45.0, -122.0, 1),     // exact
            rec(6.0, 45.0, -122.0, 2),     // time outside
            rec(0.0, 45.5, -122.0, 3),     // lat outside
            rec(0.0, 45.0, -121.5, 4),     // lon outside
            rec(5.0, 45.25, -121.75, 5),   // all on the boundary, inclusive
        ];
        let hits = find_candidates(&query, &pool, Tolerance::new(5.0, 0.25));
        let tags: Vec<u32> = hits.iter().map(|c| c.record.payload).collect();
        assert_eq!(tags, vec![1, 5]);
    }

    #[test]
    fn test_ranking_ascending_by_score() {
        let query = rec(0.0, 45.0, -122.0, 0);
        let pool = vec![
            rec(3.0, 45.0, -122.0, 1),
            rec(1.0, 45.0, -122.0, 2),
            rec(2.0, 45.0, -122.0, 3),
        ];
        let hits = find_candidates(&query, &pool, Tolerance::default());
        let tags: Vec<u32> = hits.iter().map(|c| c.record.payload).collect();
        assert_eq!(tags, vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let query = rec(0.0, 45.0, -122.0, 0);
        // Same score from different axes; deltas chosen exactly representable
        let pool = vec![
            rec(1.0, 45.0, -122.0, 1),
            rec(0.0, 45.25, -121.75, 2), // score 0.5
            rec(0.5, 45.0, -122.0, 3),   // score 0.5
        ];
        let hits = find_candidates(&query, &pool, Tolerance::new(5.0, 0.5));
        let tags: Vec<u32> = hits.iter().map(|c| c.record.payload).collect();
        assert_eq!(tags, vec![2, 3, 1]);
    }

    #[test]
    fn test_index_points_into_pool() {
        let query = rec(0.0, 45.0, -122.0, 0);
        let pool = vec![rec(50.0, 45.0, -122.0, 1), rec(0.5, 45.0, -122.0, 2)];
        let hits = find_candidates(&query, &pool, Tolerance::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 1);
    }
}
