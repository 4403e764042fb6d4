//! World population constants and attribute range tables
//!
//! Everything here is plain immutable data passed explicitly into the codec
//! and the generation pipeline. Nothing reads ambient globals: the same
//! config value is shared read-only by every worker thread.

use crate::error::{Result, WorldGenError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Squad position group, in composition order. The ordinal of a group in
/// this declaration order is the number rendered into player identifiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

impl PositionGroup {
    pub const ALL: [PositionGroup; 4] = [
        PositionGroup::Goalkeeper,
        PositionGroup::Defender,
        PositionGroup::Midfielder,
        PositionGroup::Attacker,
    ];

    /// Position ordinal as rendered in player IDs (0 = GK).
    pub fn ordinal(&self) -> u32 {
        *self as u32
    }

    pub fn from_ordinal(ordinal: u32) -> Option<PositionGroup> {
        Self::ALL.get(ordinal as usize).copied()
    }

    pub fn code(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeeper => "GK",
            PositionGroup::Defender => "DF",
            PositionGroup::Midfielder => "MF",
            PositionGroup::Attacker => "AT",
        }
    }
}

/// The attribute kinds the generator can assign.
///
/// Skill kinds use the Shift adjustment policy per division; financial kinds
/// use the Scale policy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AttributeKind {
    // Player skills
    Tackling,
    Passing,
    Shooting,
    Pace,
    Stamina,
    Handling,
    // Club finances
    TransferBudget,
    WageBudget,
}

impl AttributeKind {
    pub fn is_financial(&self) -> bool {
        matches!(self, AttributeKind::TransferBudget | AttributeKind::WageBudget)
    }
}

/// Inclusive value range `[min, max]`.
///
/// The closed-interval convention is shared by the division adjuster and the
/// modular generator: a generated value `v` satisfies `min <= v <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRange {
    pub min: u32,
    pub max: u32,
}

impl AttributeRange {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(WorldGenError::InvalidConfiguration(format!(
                "degenerate attribute range [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    /// Number of representable values minus one.
    pub fn width(&self) -> u32 {
        self.max - self.min
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Population constants describing the whole world hierarchy
/// (countries → domestic leagues → clubs → squad slots).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyConfig {
    pub countries: u32,
    pub leagues_per_country: u32,
    pub clubs_per_league: u32,
    pub squad_size: u32,
    /// Ordered (group, slot count) pairs; slot counts must sum to `squad_size`.
    /// The order here decides which slots belong to which group.
    pub composition: Vec<(PositionGroup, u32)>,
    /// Scale factors per division level (financial ranges). Division 0 is
    /// the top flight; factors must be in (0, 1] and non-increasing.
    pub scale_table: Vec<f64>,
    /// Shift amounts per division level (skill ranges).
    pub shift_table: Vec<u32>,
    /// Lower clamp for shifted skill ranges.
    pub skill_floor: u32,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            countries: 5,
            leagues_per_country: 4,
            clubs_per_league: 20,
            squad_size: 25,
            composition: vec![
                (PositionGroup::Goalkeeper, 4),
                (PositionGroup::Defender, 7),
                (PositionGroup::Midfielder, 7),
                (PositionGroup::Attacker, 7),
            ],
            scale_table: vec![1.0, 0.75, 0.5, 0.25, 0.1],
            shift_table: vec![0, 8, 16, 24, 32],
            skill_floor: 1,
        }
    }
}

impl HierarchyConfig {
    pub fn clubs_per_country(&self) -> u64 {
        self.leagues_per_country as u64 * self.clubs_per_league as u64
    }

    pub fn total_clubs(&self) -> u64 {
        self.countries as u64 * self.clubs_per_country()
    }

    pub fn players_per_league(&self) -> u64 {
        self.clubs_per_league as u64 * self.squad_size as u64
    }

    pub fn players_per_country(&self) -> u64 {
        self.leagues_per_country as u64 * self.players_per_league()
    }

    pub fn total_players(&self) -> u64 {
        self.total_clubs() * self.squad_size as u64
    }

    /// Checked once before any entity is produced (fail fast); every other
    /// function may assume a validated config.
    pub fn validate(&self) -> Result<()> {
        if self.countries == 0
            || self.leagues_per_country == 0
            || self.clubs_per_league == 0
            || self.squad_size == 0
        {
            return Err(WorldGenError::InvalidConfiguration(
                "all population counts must be positive".into(),
            ));
        }

        let slot_sum: u32 = self.composition.iter().map(|(_, count)| count).sum();
        if slot_sum != self.squad_size {
            return Err(WorldGenError::InvalidConfiguration(format!(
                "composition slots sum to {slot_sum}, squad size is {}",
                self.squad_size
            )));
        }
        if self.composition.iter().any(|(_, count)| *count == 0) {
            return Err(WorldGenError::InvalidConfiguration(
                "composition contains an empty position group".into(),
            ));
        }

        if self.scale_table.len() < self.leagues_per_country as usize {
            return Err(WorldGenError::InvalidConfiguration(format!(
                "scale table covers {} divisions, need {}",
                self.scale_table.len(),
                self.leagues_per_country
            )));
        }
        if self.shift_table.len() < self.leagues_per_country as usize {
            return Err(WorldGenError::InvalidConfiguration(format!(
                "shift table covers {} divisions, need {}",
                self.shift_table.len(),
                self.leagues_per_country
            )));
        }

        if self.scale_table.iter().any(|f| !(*f > 0.0 && *f <= 1.0)) {
            return Err(WorldGenError::InvalidConfiguration(
                "scale factors must lie in (0, 1]".into(),
            ));
        }
        if self.scale_table.windows(2).any(|w| w[1] > w[0]) {
            return Err(WorldGenError::InvalidConfiguration(
                "scale factors must not increase with division level".into(),
            ));
        }

        Ok(())
    }
}

/// Base attribute ranges before any division adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeTable {
    skills: BTreeMap<(PositionGroup, AttributeKind), AttributeRange>,
    finances: Vec<(AttributeKind, AttributeRange)>,
}

/// Which skill kinds each position group carries, in record order.
pub fn skill_kinds(group: PositionGroup) -> &'static [AttributeKind] {
    use AttributeKind::*;
    match group {
        PositionGroup::Goalkeeper => &[Handling, Passing, Pace, Stamina],
        PositionGroup::Defender => &[Tackling, Passing, Pace, Stamina],
        PositionGroup::Midfielder => &[Passing, Shooting, Tackling, Pace, Stamina],
        PositionGroup::Attacker => &[Shooting, Passing, Pace, Stamina],
    }
}

impl AttributeTable {
    /// Production base ranges for a top-flight population. Lower divisions
    /// derive their ranges from these via the division adjuster.
    pub fn default_tables() -> Self {
        use AttributeKind::*;
        use PositionGroup::*;

        let mut skills = BTreeMap::new();
        let mut put = |group, kind, min, max| {
            skills.insert((group, kind), AttributeRange { min, max });
        };

        put(Goalkeeper, Handling, 40, 95);
        put(Goalkeeper, Passing, 25, 70);
        put(Goalkeeper, Pace, 20, 60);
        put(Goalkeeper, Stamina, 35, 80);

        put(Defender, Tackling, 40, 95);
        put(Defender, Passing, 30, 80);
        put(Defender, Pace, 35, 85);
        put(Defender, Stamina, 40, 90);

        put(Midfielder, Passing, 40, 95);
        put(Midfielder, Shooting, 30, 80);
        put(Midfielder, Tackling, 30, 80);
        put(Midfielder, Pace, 35, 85);
        put(Midfielder, Stamina, 45, 95);

        put(Attacker, Shooting, 40, 95);
        put(Attacker, Passing, 30, 80);
        put(Attacker, Pace, 40, 95);
        put(Attacker, Stamina, 40, 85);

        let finances = vec![
            (TransferBudget, AttributeRange { min: 1_000_000, max: 30_000_000 }),
            (WageBudget, AttributeRange { min: 200_000, max: 5_000_000 }),
        ];

        Self { skills, finances }
    }

    pub fn skill_range(&self, group: PositionGroup, kind: AttributeKind) -> Result<AttributeRange> {
        self.skills.get(&(group, kind)).copied().ok_or_else(|| {
            WorldGenError::InvalidConfiguration(format!(
                "no base range for {:?} {:?}",
                group, kind
            ))
        })
    }

    /// Financial kinds every club record carries, in record order.
    pub fn finance_entries(&self) -> &[(AttributeKind, AttributeRange)] {
        &self.finances
    }

    /// All skill entries for one position group, in `skill_kinds` order.
    pub fn skill_entries(&self, group: PositionGroup) -> Result<Vec<(AttributeKind, AttributeRange)>> {
        skill_kinds(group)
            .iter()
            .map(|kind| self.skill_range(group, *kind).map(|range| (*kind, range)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = HierarchyConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.total_clubs(), 400);
        assert_eq!(cfg.total_players(), 10_000);
    }

    #[test]
    fn test_composition_sum_enforced() {
        let mut cfg = HierarchyConfig::default();
        cfg.composition[0].1 = 5; // 26 slots for a 25-player squad
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, WorldGenError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_short_division_table_rejected() {
        let mut cfg = HierarchyConfig::default();
        cfg.scale_table.truncate(2);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_increasing_scale_factors_rejected() {
        let mut cfg = HierarchyConfig::default();
        cfg.scale_table = vec![1.0, 0.5, 0.75, 0.25, 0.1];
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_count_rejected() {
        let cfg = HierarchyConfig { clubs_per_league: 0, ..HierarchyConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_position_ordinal_round_trip() {
        for group in PositionGroup::ALL {
            assert_eq!(PositionGroup::from_ordinal(group.ordinal()), Some(group));
        }
        assert_eq!(PositionGroup::from_ordinal(4), None);
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(AttributeRange::new(10, 5).is_err());
        assert!(AttributeRange::new(5, 5).is_ok());
    }

    #[test]
    fn test_default_tables_cover_all_groups() {
        let tables = AttributeTable::default_tables();
        for group in PositionGroup::ALL {
            let entries = tables.skill_entries(group).unwrap();
            assert_eq!(entries.len(), skill_kinds(group).len());
        }
        assert_eq!(tables.finance_entries().len(), 2);
    }
}
