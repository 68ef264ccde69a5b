//! Row sanitation applied before persistence
//!
//! The parametric schema constrains a few columns more tightly than the
//! producing pipelines do; these adjustments are applied uniformly at
//! ingestion time.

/// Floor for origin depths, km below sea level.
/// Relocation occasionally produces origins with unrealistically large
/// elevations (air-quakes); those are hard set to this floor.
pub const DEPTH_FLOOR_KM: f64 = -10.0;

/// Clamp an origin depth to the schema floor
#[inline]
pub fn clamp_depth(depth_km: f64) -> f64 {
    if depth_km < DEPTH_FLOOR_KM {
        DEPTH_FLOOR_KM
    } else {
        depth_km
    }
}

/// Scale a detection value in `[0, 2]` into the schema's `[0, 1]` quality
/// range
#[inline]
pub fn scale_detection(value: f64) -> f64 {
    (value / 2.0).clamp(0.0, 1.0)
}

/// Quality for a phase pick from its maximum probability.
/// Missing probabilities get a uniform floor value; infinite ones are
/// produced by a known upstream defect and map to zero.
#[inline]
pub fn pick_quality(max_prob: Option<f64>) -> f64 {
    match max_prob {
        None => 0.01,
        Some(p) if p.is_infinite() => 0.0,
        Some(p) => p.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_depth() {
        assert_eq!(clamp_depth(-25.0), -10.0);
        assert_eq!(clamp_depth(-10.0), -10.0);
        assert_eq!(clamp_depth(5.3), 5.3);
        assert_eq!(clamp_depth(40.0), 40.0);
    }

    #[test]
    fn test_scale_detection() {
        assert_eq!(scale_detection(0.0), 0.0);
        assert_eq!(scale_detection(1.0), 0.5);
        assert_eq!(scale_detection(2.0), 1.0);
        assert_eq!(scale_detection(2.4), 1.0);
    }

    #[test]
    fn test_pick_quality() {
        assert_eq!(pick_quality(None), 0.01);
        assert_eq!(pick_quality(Some(f64::INFINITY)), 0.0);
        assert_eq!(pick_quality(Some(0.87)), 0.87);
        assert_eq!(pick_quality(Some(1.5)), 1.0);
    }
}
