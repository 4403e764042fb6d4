//! Division-sensitive range adjustment
//!
//! Lower divisions get systematically weaker players and poorer clubs by
//! narrowing or shifting the base attribute ranges with a single table
//! lookup keyed by division level, not per-entity branching.

use crate::config::AttributeRange;
use crate::error::{Result, WorldGenError};

/// How a base range reacts to division level.
#[derive(Debug, Clone, Copy)]
pub enum AdjustPolicy<'a> {
    /// Multiply both bounds by the per-division factor. Used for financial
    /// ranges; factors are non-increasing with division level, so the result
    /// is nested within the base range (the scaled lower bound clamps back
    /// to the base minimum).
    Scale(&'a [f64]),
    /// Subtract the per-division amount from both bounds, clamping at
    /// `floor`. Used for skill ranges.
    Shift { amounts: &'a [u32], floor: u32 },
}

pub fn adjust_range(
    range: AttributeRange,
    division_level: u32,
    policy: AdjustPolicy<'_>,
) -> Result<AttributeRange> {
    match policy {
        AdjustPolicy::Scale(factors) => {
            let factor = *factors.get(division_level as usize).ok_or_else(|| {
                WorldGenError::InvalidConfiguration(format!(
                    "division {division_level} beyond scale table of {} entries",
                    factors.len()
                ))
            })?;
            let min = ((range.min as f64 * factor).round() as u32).max(range.min);
            let max = (range.max as f64 * factor).round() as u32;
            if min >= max {
                return Err(WorldGenError::InvalidConfiguration(format!(
                    "scale factor {factor} collapses range [{}, {}]",
                    range.min, range.max
                )));
            }
            Ok(AttributeRange { min, max })
        }
        AdjustPolicy::Shift { amounts, floor } => {
            let amount = *amounts.get(division_level as usize).ok_or_else(|| {
                WorldGenError::InvalidConfiguration(format!(
                    "division {division_level} beyond shift table of {} entries",
                    amounts.len()
                ))
            })?;
            let min = range.min.saturating_sub(amount).max(floor);
            let mut max = range.max.saturating_sub(amount).max(floor);
            if max <= min {
                // The whole range collapsed onto the floor; keep one step of
                // headroom so the range stays non-degenerate.
                max = min + 1;
            }
            Ok(AttributeRange { min, max })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: &[f64] = &[1.0, 0.75, 0.5, 0.25, 0.1];
    const SHIFT: &[u32] = &[0, 8, 16, 24, 32];

    #[test]
    fn test_scale_bottom_division_stays_nested() {
        let base = AttributeRange { min: 1_000_000, max: 30_000_000 };
        let adjusted = adjust_range(base, 4, AdjustPolicy::Scale(SCALE)).unwrap();
        assert!(adjusted.min >= base.min);
        assert!(adjusted.max <= 3_000_000);
        assert!(adjusted.min < adjusted.max);
    }

    #[test]
    fn test_scale_monotonic_nesting() {
        let base = AttributeRange { min: 1_000_000, max: 30_000_000 };
        let mut previous = base;
        for division in 0..SCALE.len() as u32 {
            let adjusted = adjust_range(base, division, AdjustPolicy::Scale(SCALE)).unwrap();
            assert!(adjusted.min >= previous.min || division == 0);
            assert!(adjusted.max <= previous.max);
            previous = adjusted;
        }
    }

    #[test]
    fn test_scale_top_flight_identity() {
        let base = AttributeRange { min: 200_000, max: 5_000_000 };
        let adjusted = adjust_range(base, 0, AdjustPolicy::Scale(SCALE)).unwrap();
        assert_eq!(adjusted, base);
    }

    #[test]
    fn test_shift_applies_amount() {
        let base = AttributeRange { min: 40, max: 95 };
        let adjusted =
            adjust_range(base, 2, AdjustPolicy::Shift { amounts: SHIFT, floor: 1 }).unwrap();
        assert_eq!(adjusted, AttributeRange { min: 24, max: 79 });
    }

    #[test]
    fn test_shift_clamps_at_floor() {
        let base = AttributeRange { min: 20, max: 60 };
        let adjusted =
            adjust_range(base, 4, AdjustPolicy::Shift { amounts: SHIFT, floor: 1 }).unwrap();
        assert_eq!(adjusted.min, 1);
        assert_eq!(adjusted.max, 28);
    }

    #[test]
    fn test_shift_never_degenerate() {
        let base = AttributeRange { min: 2, max: 5 };
        let adjusted = adjust_range(
            base,
            4,
            AdjustPolicy::Shift { amounts: &[0, 0, 0, 0, 100], floor: 1 },
        )
        .unwrap();
        assert!(adjusted.min < adjusted.max);
        assert_eq!(adjusted.min, 1);
    }

    #[test]
    fn test_division_beyond_table_is_config_error() {
        let base = AttributeRange { min: 1, max: 100 };
        assert!(adjust_range(base, 5, AdjustPolicy::Scale(SCALE)).is_err());
        assert!(adjust_range(base, 9, AdjustPolicy::Shift { amounts: SHIFT, floor: 1 }).is_err());
    }
}
