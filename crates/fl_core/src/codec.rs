//! Entity-address codec
//!
//! A flat population index is all that identifies a club or a player; this
//! module recovers the full ancestry (country → league → club → squad slot)
//! from that index alone by mixed-radix decomposition, and renders/parses
//! the underscore-delimited identifier strings used as storage keys.
//!
//! ID schemas (fixed, shared by encode and decode):
//! - club   (6 fields): `season_country_leagueGlobal_division_clubInLeague_clubGlobal`
//! - player (7 fields): `season_country_leagueGlobal_division_positionOrdinal_playerGlobal_clubGlobal`
//!
//! The two schemas have different field counts on purpose, so a club ID can
//! never be mis-parsed as a player ID or vice versa.

use crate::config::{HierarchyConfig, PositionGroup};
use crate::error::{EntityKind, Result, WorldGenError};
use crate::partition;
use serde::{Deserialize, Serialize};

const DELIMITER: char = '_';
const CLUB_FIELD_COUNT: usize = 6;
const PLAYER_FIELD_COUNT: usize = 7;

/// Full ancestry of one club, recovered from its flat index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubAddress {
    pub season: u32,
    pub country_index: u64,
    /// League index across the whole world (country * leagues_per_country + division).
    pub league_global_index: u64,
    /// 0 = top flight.
    pub division_level: u32,
    pub club_in_league: u32,
    pub club_global_index: u64,
}

/// Full ancestry of one player: the owning club's address plus the squad slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAddress {
    pub season: u32,
    pub country_index: u64,
    pub league_global_index: u64,
    pub division_level: u32,
    pub club_in_league: u32,
    pub club_global_index: u64,
    pub position_group: PositionGroup,
    pub slot_in_club: u32,
    pub player_global_index: u64,
}

/// Decompose a flat club index into hierarchical coordinates.
pub fn club_address(season: u32, club_global_index: u64, cfg: &HierarchyConfig) -> Result<ClubAddress> {
    let total = cfg.total_clubs();
    if club_global_index >= total {
        return Err(WorldGenError::IndexOutOfRange {
            kind: EntityKind::Club,
            index: club_global_index,
            population: total,
        });
    }

    let clubs_per_country = cfg.clubs_per_country();
    let country_index = club_global_index / clubs_per_country;
    let within_country = club_global_index % clubs_per_country;
    let division_level = (within_country / cfg.clubs_per_league as u64) as u32;
    let club_in_league = (within_country % cfg.clubs_per_league as u64) as u32;
    let league_global_index =
        country_index * cfg.leagues_per_country as u64 + division_level as u64;

    Ok(ClubAddress {
        season,
        country_index,
        league_global_index,
        division_level,
        club_in_league,
        club_global_index,
    })
}

/// Decompose a flat player index, the same shape as [`club_address`] at a
/// finer radix plus the squad-slot split.
pub fn player_address(
    season: u32,
    player_global_index: u64,
    cfg: &HierarchyConfig,
) -> Result<PlayerAddress> {
    let total = cfg.total_players();
    if player_global_index >= total {
        return Err(WorldGenError::IndexOutOfRange {
            kind: EntityKind::Player,
            index: player_global_index,
            population: total,
        });
    }

    let players_per_country = cfg.players_per_country();
    let country_index = player_global_index / players_per_country;
    let within_country = player_global_index % players_per_country;
    let players_per_league = cfg.players_per_league();
    let division_level = (within_country / players_per_league) as u32;
    let within_league = within_country % players_per_league;
    let club_in_league = (within_league / cfg.squad_size as u64) as u32;
    let slot_in_club = (within_league % cfg.squad_size as u64) as u32;

    let position_group = partition::group_for_slot(slot_in_club, &cfg.composition)?;
    let league_global_index =
        country_index * cfg.leagues_per_country as u64 + division_level as u64;
    let club_global_index = country_index * cfg.clubs_per_country()
        + division_level as u64 * cfg.clubs_per_league as u64
        + club_in_league as u64;

    Ok(PlayerAddress {
        season,
        country_index,
        league_global_index,
        division_level,
        club_in_league,
        club_global_index,
        position_group,
        slot_in_club,
        player_global_index,
    })
}

pub fn encode_club_id(season: u32, club_global_index: u64, cfg: &HierarchyConfig) -> Result<String> {
    let addr = club_address(season, club_global_index, cfg)?;
    Ok(format!(
        "{}_{}_{}_{}_{}_{}",
        addr.season,
        addr.country_index,
        addr.league_global_index,
        addr.division_level,
        addr.club_in_league,
        addr.club_global_index,
    ))
}

pub fn encode_player_id(
    season: u32,
    player_global_index: u64,
    cfg: &HierarchyConfig,
) -> Result<String> {
    let addr = player_address(season, player_global_index, cfg)?;
    Ok(format!(
        "{}_{}_{}_{}_{}_{}_{}",
        addr.season,
        addr.country_index,
        addr.league_global_index,
        addr.division_level,
        addr.position_group.ordinal(),
        addr.player_global_index,
        addr.club_global_index,
    ))
}

/// Split an ID into exactly `expected` integer fields.
fn split_fields(id: &str, expected: usize) -> Result<Vec<u64>> {
    let parts: Vec<&str> = id.split(DELIMITER).collect();
    if parts.len() != expected {
        return Err(WorldGenError::malformed(
            id,
            format!("expected {expected} fields, found {}", parts.len()),
        ));
    }
    parts
        .iter()
        .map(|part| {
            part.parse::<u64>().map_err(|_| {
                WorldGenError::malformed(id, format!("field `{part}` is not an integer"))
            })
        })
        .collect()
}

fn narrow_u32(id: &str, value: u64, what: &str) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| WorldGenError::malformed(id, format!("{what} {value} exceeds u32")))
}

pub fn decode_club_id(id: &str, cfg: &HierarchyConfig) -> Result<ClubAddress> {
    let fields = split_fields(id, CLUB_FIELD_COUNT)?;
    let season = narrow_u32(id, fields[0], "season")?;

    // The global index is authoritative; every other field is redundant and
    // must agree with the recomputed decomposition.
    let addr = club_address(season, fields[5], cfg)?;
    let expected = [
        addr.country_index,
        addr.league_global_index,
        addr.division_level as u64,
        addr.club_in_league as u64,
    ];
    if fields[1..5] != expected {
        return Err(WorldGenError::malformed(
            id,
            "hierarchy fields disagree with the club global index",
        ));
    }
    Ok(addr)
}

pub fn decode_player_id(id: &str, cfg: &HierarchyConfig) -> Result<PlayerAddress> {
    let fields = split_fields(id, PLAYER_FIELD_COUNT)?;
    let season = narrow_u32(id, fields[0], "season")?;

    let addr = player_address(season, fields[5], cfg)?;
    let expected = [
        addr.country_index,
        addr.league_global_index,
        addr.division_level as u64,
        addr.position_group.ordinal() as u64,
    ];
    if fields[1..5] != expected || fields[6] != addr.club_global_index {
        return Err(WorldGenError::malformed(
            id,
            "hierarchy fields disagree with the player global index",
        ));
    }
    Ok(addr)
}
