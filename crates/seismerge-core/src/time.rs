//! Time primitives for catalog reconciliation
//!
//! Catalog sources use two incompatible time axes:
//! - Nominal time: civil/database timestamps, leap seconds excluded
//! - True time: UTC epoch seconds, leap seconds included
//!
//! Both are seconds since 1970-01-01T00:00:00Z, fractional seconds allowed.
//! The two newtypes exist so the axes can never be mixed silently; crossing
//! between them always goes through the leap-second normalizer.

use std::fmt;
use std::ops::Sub;

/// Nominal time - civil/database timestamp, leap seconds excluded
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct NominalTime(pub f64);

impl NominalTime {
    pub const ZERO: NominalTime = NominalTime(0.0);

    #[inline]
    pub fn from_secs(secs: f64) -> Self {
        NominalTime(secs)
    }

    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// Apply a leap-second offset, landing on the true-time axis.
    /// Only the normalizer should call this; the offset must come from the
    /// epoch containing `self`.
    #[inline]
    pub fn with_offset(self, offset: i64) -> TrueTime {
        TrueTime(self.0 + offset as f64)
    }
}

impl Sub<NominalTime> for NominalTime {
    type Output = f64;

    #[inline]
    fn sub(self, rhs: NominalTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Debug for NominalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nominal({:.6}s)", self.0)
    }
}

/// True time - UTC epoch seconds including historical leap seconds.
/// This is the axis external waveform archives use.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct TrueTime(pub f64);

impl TrueTime {
    pub const ZERO: TrueTime = TrueTime(0.0);

    #[inline]
    pub fn from_secs(secs: f64) -> Self {
        TrueTime(secs)
    }

    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// Remove a leap-second offset, landing back on the nominal axis.
    /// Only the normalizer should call this.
    #[inline]
    pub fn without_offset(self, offset: i64) -> NominalTime {
        NominalTime(self.0 - offset as f64)
    }
}

impl Sub<TrueTime> for TrueTime {
    type Output = f64;

    #[inline]
    fn sub(self, rhs: TrueTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Debug for TrueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "True({:.6}s)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_crossing() {
        let n = NominalTime::from_secs(1000.0);
        let t = n.with_offset(1);
        assert_eq!(t.as_secs(), 1001.0);
        assert_eq!(t.without_offset(1), n);
    }

    #[test]
    fn test_same_axis_difference() {
        let a = TrueTime::from_secs(100.5);
        let b = TrueTime::from_secs(99.0);
        assert!((a - b - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_seconds_preserved() {
        let n = NominalTime::from_secs(1234.567);
        assert_eq!(n.with_offset(27).as_secs(), 1234.567 + 27.0);
    }
}
