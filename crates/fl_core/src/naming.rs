//! Name-table navigation for UI collaborators
//!
//! Thin read-only accessors over a caller-supplied name table: "name at
//! index" and "children of index" over countries, leagues and clubs. This
//! navigates the hierarchy by index, never by generated identifier strings;
//! presentation layers own the table's contents.

use crate::config::HierarchyConfig;
use crate::error::{EntityKind, Result, WorldGenError};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Caller-supplied display names. League labels are per-division
/// ("Premier Division", "First Division", ...) and shared across countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTable {
    pub countries: Vec<String>,
    pub league_labels: Vec<String>,
    pub club_names: Vec<String>,
}

/// Index navigation over names for one configured world.
#[derive(Debug, Clone, Copy)]
pub struct NameDirectory<'a> {
    config: &'a HierarchyConfig,
    names: &'a NameTable,
}

impl<'a> NameDirectory<'a> {
    pub fn new(config: &'a HierarchyConfig, names: &'a NameTable) -> Result<Self> {
        config.validate()?;
        if names.countries.len() != config.countries as usize {
            return Err(WorldGenError::InvalidConfiguration(format!(
                "name table has {} countries, config has {}",
                names.countries.len(),
                config.countries
            )));
        }
        if names.league_labels.len() < config.leagues_per_country as usize {
            return Err(WorldGenError::InvalidConfiguration(format!(
                "name table has {} league labels, need {}",
                names.league_labels.len(),
                config.leagues_per_country
            )));
        }
        if names.club_names.len() as u64 != config.total_clubs() {
            return Err(WorldGenError::InvalidConfiguration(format!(
                "name table has {} club names, world has {} clubs",
                names.club_names.len(),
                config.total_clubs()
            )));
        }
        Ok(Self { config, names })
    }

    pub fn country_name(&self, country_index: u64) -> Result<&'a str> {
        self.names
            .countries
            .get(country_index as usize)
            .map(String::as_str)
            .ok_or(WorldGenError::IndexOutOfRange {
                kind: EntityKind::Country,
                index: country_index,
                population: self.config.countries as u64,
            })
    }

    /// Display name of a league by global index, rendered as
    /// "{country} {division label}".
    pub fn league_name(&self, league_global_index: u64) -> Result<String> {
        let leagues = self.config.leagues_per_country as u64;
        let total = self.config.countries as u64 * leagues;
        if league_global_index >= total {
            return Err(WorldGenError::IndexOutOfRange {
                kind: EntityKind::League,
                index: league_global_index,
                population: total,
            });
        }
        let country = self.country_name(league_global_index / leagues)?;
        let label = &self.names.league_labels[(league_global_index % leagues) as usize];
        Ok(format!("{country} {label}"))
    }

    pub fn club_name(&self, club_global_index: u64) -> Result<&'a str> {
        self.names
            .club_names
            .get(club_global_index as usize)
            .map(String::as_str)
            .ok_or(WorldGenError::IndexOutOfRange {
                kind: EntityKind::Club,
                index: club_global_index,
                population: self.config.total_clubs(),
            })
    }

    /// Global league indices belonging to one country.
    pub fn leagues_of(&self, country_index: u64) -> Result<Range<u64>> {
        if country_index >= self.config.countries as u64 {
            return Err(WorldGenError::IndexOutOfRange {
                kind: EntityKind::Country,
                index: country_index,
                population: self.config.countries as u64,
            });
        }
        let leagues = self.config.leagues_per_country as u64;
        Ok(country_index * leagues..(country_index + 1) * leagues)
    }

    /// Global club indices belonging to one league.
    pub fn clubs_of(&self, league_global_index: u64) -> Result<Range<u64>> {
        let leagues = self.config.leagues_per_country as u64;
        let total = self.config.countries as u64 * leagues;
        if league_global_index >= total {
            return Err(WorldGenError::IndexOutOfRange {
                kind: EntityKind::League,
                index: league_global_index,
                population: total,
            });
        }
        let clubs = self.config.clubs_per_league as u64;
        Ok(league_global_index * clubs..(league_global_index + 1) * clubs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cfg: &HierarchyConfig) -> NameTable {
        NameTable {
            countries: (0..cfg.countries).map(|i| format!("Country {i}")).collect(),
            league_labels: (0..cfg.leagues_per_country)
                .map(|i| format!("Division {i}"))
                .collect(),
            club_names: (0..cfg.total_clubs()).map(|i| format!("Club {i}")).collect(),
        }
    }

    #[test]
    fn test_navigation_chain() {
        let cfg = HierarchyConfig::default();
        let names = table(&cfg);
        let dir = NameDirectory::new(&cfg, &names).unwrap();

        let leagues = dir.leagues_of(1).unwrap();
        assert_eq!(leagues, 4..8);
        assert_eq!(dir.league_name(4).unwrap(), "Country 1 Division 0");

        let clubs = dir.clubs_of(4).unwrap();
        assert_eq!(clubs, 80..100);
        assert_eq!(dir.club_name(80).unwrap(), "Club 80");
    }

    #[test]
    fn test_out_of_range_indices() {
        let cfg = HierarchyConfig::default();
        let names = table(&cfg);
        let dir = NameDirectory::new(&cfg, &names).unwrap();
        assert!(dir.country_name(5).is_err());
        assert!(dir.league_name(20).is_err());
        assert!(dir.club_name(400).is_err());
        assert!(dir.leagues_of(5).is_err());
        assert!(dir.clubs_of(20).is_err());
    }

    #[test]
    fn test_table_size_mismatch_rejected() {
        let cfg = HierarchyConfig::default();
        let mut names = table(&cfg);
        names.club_names.pop();
        assert!(NameDirectory::new(&cfg, &names).is_err());
    }

    #[test]
    fn test_league_children_align_with_codec() {
        // A club inside `clubs_of(league)` decodes back to that league.
        let cfg = HierarchyConfig::default();
        let names = table(&cfg);
        let dir = NameDirectory::new(&cfg, &names).unwrap();
        for league in 0..(cfg.countries * cfg.leagues_per_country) as u64 {
            for club in dir.clubs_of(league).unwrap() {
                let addr = crate::codec::club_address(2024, club, &cfg).unwrap();
                assert_eq!(addr.league_global_index, league);
            }
        }
    }
}
