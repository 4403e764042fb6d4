//! Proptest strategies for world configs and ranges (test aid).

use crate::config::{AttributeRange, HierarchyConfig, PositionGroup};
use proptest::prelude::*;

pub fn arb_attribute_range() -> impl Strategy<Value = AttributeRange> {
    (1u32..=100, 1u32..=100)
        .prop_map(|(a, b)| AttributeRange { min: a.min(b), max: a.max(b) })
}

/// Small but fully valid hierarchy configs: composition always sums to the
/// squad size and both division tables cover every division.
pub fn arb_config() -> impl Strategy<Value = HierarchyConfig> {
    (1u32..=4, 1u32..=5, 1u32..=8, (1u32..=6, 1u32..=6, 1u32..=6, 1u32..=6)).prop_map(
        |(countries, leagues, clubs, (gk, df, mf, at))| {
            let squad_size = gk + df + mf + at;
            HierarchyConfig {
                countries,
                leagues_per_country: leagues,
                clubs_per_league: clubs,
                squad_size,
                composition: vec![
                    (PositionGroup::Goalkeeper, gk),
                    (PositionGroup::Defender, df),
                    (PositionGroup::Midfielder, mf),
                    (PositionGroup::Attacker, at),
                ],
                scale_table: vec![1.0, 0.8, 0.6, 0.4, 0.2],
                shift_table: vec![0, 5, 10, 15, 20],
                skill_floor: 1,
            }
        },
    )
}
