//! Leap-second table
//!
//! An ordered, non-overlapping partition of the nominal axis into epochs,
//! each tagged with the integer leap-second offset in force over that span.
//! Pure data; the conversions live in `convert`.

use serde::{Deserialize, Serialize};

use seismerge_core::{CatalogError, CatalogResult};

/// Reference leap-second data, current as of 2025-10-29.
/// `(offset, first nominal second, last nominal second)` per row.
const BUILTIN: [(i64, i64, i64); 28] = [
    (0, -62135596800, 78796799),
    (1, 78796800, 94694399),
    (2, 94694400, 126230399),
    (3, 126230400, 157766399),
    (4, 157766400, 189302399),
    (5, 189302400, 220924799),
    (6, 220924800, 252460799),
    (7, 252460800, 283996799),
    (8, 283996800, 315532799),
    (9, 315532800, 362793599),
    (10, 362793600, 394329599),
    (11, 394329600, 425865599),
    (12, 425865600, 489023999),
    (13, 489024000, 567993599),
    (14, 567993600, 631151999),
    (15, 631152000, 662687999),
    (16, 662688000, 709948799),
    (17, 709948800, 741484799),
    (18, 741484800, 773020799),
    (19, 773020800, 820454399),
    (20, 820454400, 867715199),
    (21, 867715200, 915148799),
    (22, 915148800, 1136073599),
    (23, 1136073600, 1230767999),
    (24, 1230768000, 1341100799),
    (25, 1341100800, 1435708799),
    (26, 1435708800, 1483228799),
    (27, 1483228800, 32503680000),
];

/// A contiguous span of nominal time over which one leap-second offset applies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeapEpoch {
    /// Leap seconds accumulated over this span
    pub offset: i64,
    /// First nominal second this offset applies to
    pub nominal_start: i64,
    /// Last nominal second this offset applies to
    pub nominal_end: i64,
}

impl LeapEpoch {
    pub fn new(offset: i64, nominal_start: i64, nominal_end: i64) -> Self {
        LeapEpoch {
            offset,
            nominal_start,
            nominal_end,
        }
    }

    /// Whether a nominal value belongs to this epoch. The span covers
    /// fractional values up to (but excluding) the next epoch's first second.
    #[inline]
    pub(crate) fn covers_nominal(&self, secs: f64) -> bool {
        secs >= self.nominal_start as f64 && secs < (self.nominal_end as f64) + 1.0
    }
}

/// Ordered, immutable leap-second table
///
/// Extending the table to the future only requires appending an epoch with
/// the new offset; the final epoch's `nominal_end` acts as the ceiling of
/// the representable range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeapTable {
    epochs: Vec<LeapEpoch>,
}

impl LeapTable {
    /// Build a table from ordered epochs, validating the invariants the
    /// inverse conversion depends on: non-empty, contiguous and gapless on
    /// the nominal axis, offsets non-decreasing.
    pub fn new(epochs: Vec<LeapEpoch>) -> CatalogResult<Self> {
        if epochs.is_empty() {
            return Err(CatalogError::InvalidLeapTable("empty table".into()));
        }
        for epoch in &epochs {
            if epoch.nominal_start > epoch.nominal_end {
                return Err(CatalogError::InvalidLeapTable(format!(
                    "epoch with offset {} has start {} after end {}",
                    epoch.offset, epoch.nominal_start, epoch.nominal_end
                )));
            }
        }
        for pair in epochs.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.nominal_start != prev.nominal_end + 1 {
                return Err(CatalogError::InvalidLeapTable(format!(
                    "gap or overlap between nominal {} and {}",
                    prev.nominal_end, next.nominal_start
                )));
            }
            if next.offset < prev.offset {
                return Err(CatalogError::InvalidLeapTable(format!(
                    "offset decreases from {} to {}",
                    prev.offset, next.offset
                )));
            }
        }
        Ok(LeapTable { epochs })
    }

    /// The reference table shipped with the crate
    pub fn builtin() -> Self {
        LeapTable {
            epochs: BUILTIN
                .iter()
                .map(|&(offset, start, end)| LeapEpoch::new(offset, start, end))
                .collect(),
        }
    }

    pub fn epochs(&self) -> &[LeapEpoch] {
        &self.epochs
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// Oldest representable nominal second
    pub fn nominal_floor(&self) -> i64 {
        self.epochs[0].nominal_start
    }

    /// Newest representable nominal second
    pub fn nominal_ceiling(&self) -> i64 {
        self.epochs[self.epochs.len() - 1].nominal_end
    }

    pub(crate) fn first(&self) -> &LeapEpoch {
        &self.epochs[0]
    }

    pub(crate) fn last(&self) -> &LeapEpoch {
        &self.epochs[self.epochs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        let table = LeapTable::builtin();
        let revalidated = LeapTable::new(table.epochs().to_vec()).unwrap();
        assert_eq!(revalidated, table);
        assert_eq!(table.len(), 28);
        assert_eq!(table.nominal_floor(), -62135596800);
        assert_eq!(table.nominal_ceiling(), 32503680000);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            LeapTable::new(vec![]),
            Err(CatalogError::InvalidLeapTable(_))
        ));
    }

    #[test]
    fn test_rejects_gap() {
        let epochs = vec![
            LeapEpoch::new(0, 0, 999),
            LeapEpoch::new(1, 1001, 1999), // gap at 1000
        ];
        assert!(LeapTable::new(epochs).is_err());
    }

    #[test]
    fn test_rejects_overlap() {
        let epochs = vec![LeapEpoch::new(0, 0, 999), LeapEpoch::new(1, 999, 1999)];
        assert!(LeapTable::new(epochs).is_err());
    }

    #[test]
    fn test_rejects_decreasing_offset() {
        let epochs = vec![LeapEpoch::new(1, 0, 999), LeapEpoch::new(0, 1000, 1999)];
        assert!(LeapTable::new(epochs).is_err());
    }

    #[test]
    fn test_rejects_inverted_epoch() {
        let epochs = vec![LeapEpoch::new(0, 1000, 999)];
        assert!(LeapTable::new(epochs).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let table = LeapTable::builtin();
        let json = serde_json::to_string(&table).unwrap();
        let back: LeapTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
