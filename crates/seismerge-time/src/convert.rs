//! Nominal/true conversions over a leap-second table

use seismerge_core::{CatalogError, CatalogResult, NominalTime, TrueTime};

use crate::LeapTable;

impl LeapTable {
    /// Convert a nominal (database) time to true UTC epoch time by adding the
    /// offset of the epoch containing it.
    ///
    /// Fails with `OutOfRangeTime` when the value falls before the table's
    /// historical floor or after its future ceiling. Never coerces.
    pub fn to_true(&self, nominal: NominalTime) -> CatalogResult<TrueTime> {
        let secs = nominal.as_secs();
        if secs >= self.first().nominal_start as f64 {
            for epoch in self.epochs() {
                if epoch.covers_nominal(secs) {
                    return Ok(nominal.with_offset(epoch.offset));
                }
            }
        }
        Err(CatalogError::OutOfRangeTime(secs))
    }

    /// Convert a true UTC epoch time back to nominal (database) time.
    ///
    /// Epoch boundaries are defined on the nominal axis, so the search tests
    /// offsets in table order and accepts the first whose subtraction lands
    /// inside that epoch's own bounds. Leap insertions leave one-second holes
    /// on the true axis; a value inside such a hole is the inserted leap
    /// second itself and resolves to the later epoch's first nominal second
    /// (later epoch wins).
    pub fn to_nominal(&self, true_time: TrueTime) -> CatalogResult<NominalTime> {
        let secs = true_time.as_secs();
        let floor = (self.first().nominal_start + self.first().offset) as f64;
        if secs >= floor {
            for epoch in self.epochs() {
                let candidate = true_time.without_offset(epoch.offset);
                let c = candidate.as_secs();
                if c < (epoch.nominal_end as f64) + 1.0 {
                    if c >= epoch.nominal_start as f64 {
                        return Ok(candidate);
                    }
                    // Inside the hole left by the leap insertion preceding
                    // this epoch: the instant has no exact nominal preimage.
                    return Ok(NominalTime::from_secs(epoch.nominal_start as f64));
                }
            }
        }
        Err(CatalogError::OutOfRangeTime(secs))
    }
}
