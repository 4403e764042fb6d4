//! Entity generation pipeline
//!
//! Composes codec → range adjustment → modular generation into keyed entity
//! records. Each record depends only on its flat index, the immutable config
//! and the world seed, so any slice of the population can be generated on
//! any thread, in any order, with no coordination (the rayon batch variants
//! lean on exactly that).

use crate::adjust::{adjust_range, AdjustPolicy};
use crate::codec;
use crate::config::{AttributeKind, AttributeTable, HierarchyConfig, PositionGroup};
use crate::error::{EntityKind, Result, WorldGenError};
use crate::modular;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One generated entity, keyed by its identifier string.
///
/// Produced once per flat index and never mutated; regenerating the same
/// index with the same config and seed reproduces an identical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    pub attributes: Vec<(AttributeKind, u32)>,
}

impl EntityRecord {
    pub fn attribute(&self, kind: AttributeKind) -> Option<u32> {
        self.attributes.iter().find(|(k, _)| *k == kind).map(|(_, v)| *v)
    }
}

/// Generates the full club and player populations for one season.
#[derive(Debug, Clone)]
pub struct WorldGenerator {
    season: u32,
    config: HierarchyConfig,
    tables: AttributeTable,
    seed: u64,
    skill_jitter: u32,
}

/// Default jitter bound for player skills; finances stay un-jittered so the
/// scale tables keep their exact proportions.
const DEFAULT_SKILL_JITTER: u32 = 3;

impl WorldGenerator {
    /// Validates the configuration once, up front. No entity is ever
    /// produced from a config that failed here, and no per-division table
    /// lookup can fail later for a config that passed.
    pub fn new(
        season: u32,
        config: HierarchyConfig,
        tables: AttributeTable,
        seed: u64,
    ) -> Result<Self> {
        config.validate()?;

        // Exercise every (division, range) adjustment the pipeline will
        // perform, so degenerate combinations surface now rather than
        // mid-enumeration across thousands of entities.
        for division in 0..config.leagues_per_country {
            for (_, range) in tables.finance_entries() {
                adjust_range(*range, division, AdjustPolicy::Scale(&config.scale_table))?;
            }
            for group in PositionGroup::ALL {
                if config.composition.iter().any(|(g, _)| *g == group) {
                    for (_, range) in tables.skill_entries(group)? {
                        adjust_range(
                            range,
                            division,
                            AdjustPolicy::Shift {
                                amounts: &config.shift_table,
                                floor: config.skill_floor,
                            },
                        )?;
                    }
                }
            }
        }

        info!(
            countries = config.countries,
            clubs = config.total_clubs(),
            players = config.total_players(),
            season,
            "world generator ready"
        );

        Ok(Self { season, config, tables, seed, skill_jitter: DEFAULT_SKILL_JITTER })
    }

    pub fn with_skill_jitter(mut self, jitter_bound: u32) -> Self {
        self.skill_jitter = jitter_bound;
        self
    }

    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    pub fn season(&self) -> u32 {
        self.season
    }

    /// Generate the club at one flat index. Pure and O(1).
    pub fn club_at(&self, club_global_index: u64) -> Result<EntityRecord> {
        let cfg = &self.config;
        let addr = codec::club_address(self.season, club_global_index, cfg)
            .map_err(|e| e.for_entity(EntityKind::Club, club_global_index))?;

        // Division-sensitive attributes step through the sub-population that
        // shares the adjusted range: every club at this division, world-wide.
        let division_population = cfg.countries as u64 * cfg.clubs_per_league as u64;
        let division_ordinal =
            addr.country_index * cfg.clubs_per_league as u64 + addr.club_in_league as u64;

        let build = || -> Result<EntityRecord> {
            let entries = self.tables.finance_entries();
            let mut kinds = Vec::with_capacity(entries.len());
            let mut ranges = Vec::with_capacity(entries.len());
            for (kind, base) in entries {
                kinds.push(*kind);
                ranges.push(adjust_range(
                    *base,
                    addr.division_level,
                    AdjustPolicy::Scale(&cfg.scale_table),
                )?);
            }

            if ranges.is_empty() {
                return Err(WorldGenError::InvalidConfiguration(
                    "attribute table has no financial entries".into(),
                ));
            }
            // Budgets of one club move in lockstep: a rich club is rich on
            // every financial axis.
            let reference = ranges[0];
            let values = modular::same_step_values(
                reference,
                &ranges,
                division_population,
                division_ordinal,
                0,
                self.seed,
            )?;

            Ok(EntityRecord {
                id: codec::encode_club_id(self.season, club_global_index, cfg)?,
                attributes: kinds.into_iter().zip(values).collect(),
            })
        };

        build().map_err(|e| e.for_entity(EntityKind::Club, club_global_index))
    }

    /// Generate the player at one flat index. Pure and O(1).
    pub fn player_at(&self, player_global_index: u64) -> Result<EntityRecord> {
        let cfg = &self.config;
        let addr = codec::player_address(self.season, player_global_index, cfg)
            .map_err(|e| e.for_entity(EntityKind::Player, player_global_index))?;

        let division_population = cfg.countries as u64 * cfg.players_per_league();
        let within_league =
            addr.club_in_league as u64 * cfg.squad_size as u64 + addr.slot_in_club as u64;
        let division_ordinal = addr.country_index * cfg.players_per_league() + within_league;

        let build = || -> Result<EntityRecord> {
            let entries = self.tables.skill_entries(addr.position_group)?;
            let mut kinds = Vec::with_capacity(entries.len());
            let mut ranges = Vec::with_capacity(entries.len());
            for (kind, base) in entries {
                kinds.push(kind);
                ranges.push(adjust_range(
                    base,
                    addr.division_level,
                    AdjustPolicy::Shift {
                        amounts: &cfg.shift_table,
                        floor: cfg.skill_floor,
                    },
                )?);
            }

            // Independent step per skill: tackling and passing must not
            // covary perfectly across the population.
            let values = modular::per_range_step_values(
                &ranges,
                division_population,
                division_ordinal,
                self.skill_jitter,
                self.seed,
            )?;

            Ok(EntityRecord {
                id: codec::encode_player_id(self.season, player_global_index, cfg)?,
                attributes: kinds.into_iter().zip(values).collect(),
            })
        };

        build().map_err(|e| e.for_entity(EntityKind::Player, player_global_index))
    }

    /// Pure lookup for the match-simulation collaborator: attribute vector
    /// of the player behind an identifier string.
    pub fn player_by_id(&self, id: &str) -> Result<EntityRecord> {
        let addr = codec::decode_player_id(id, &self.config)?;
        self.player_at(addr.player_global_index)
    }

    pub fn club_by_id(&self, id: &str) -> Result<EntityRecord> {
        let addr = codec::decode_club_id(id, &self.config)?;
        self.club_at(addr.club_global_index)
    }

    /// Restartable lazy sequence over the whole club population. A failure
    /// at one index is yielded as `Err` for that index only; the sequence
    /// continues with the next index.
    pub fn clubs(&self) -> impl Iterator<Item = Result<EntityRecord>> + '_ {
        (0..self.config.total_clubs()).map(move |i| self.club_at(i))
    }

    /// Restartable lazy sequence over the whole player population.
    pub fn players(&self) -> impl Iterator<Item = Result<EntityRecord>> + '_ {
        (0..self.config.total_players()).map(move |i| self.player_at(i))
    }

    /// Batch-generate every club in parallel. Ordering of the result still
    /// follows the flat index; generation order is rayon's business.
    pub fn clubs_par(&self) -> Result<Vec<EntityRecord>> {
        let records: Result<Vec<_>> =
            (0..self.config.total_clubs()).into_par_iter().map(|i| self.club_at(i)).collect();
        debug!(count = self.config.total_clubs(), "club batch generated");
        records
    }

    /// Batch-generate every player in parallel.
    pub fn players_par(&self) -> Result<Vec<EntityRecord>> {
        let records: Result<Vec<_>> =
            (0..self.config.total_players()).into_par_iter().map(|i| self.player_at(i)).collect();
        debug!(count = self.config.total_players(), "player batch generated");
        records
    }
}
