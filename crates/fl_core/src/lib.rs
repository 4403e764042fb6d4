//! # fl_core - Deterministic League World Generation
//!
//! This library builds a complete synthetic league hierarchy
//! (countries → domestic leagues → clubs → players) and recovers any
//! entity's full ancestry from nothing but a compact identifier and the
//! population constants providing it — no relational store, no foreign keys,
//! no persisted parent pointers.
//!
//! ## Features
//! - Mixed-radix entity-address codec (flat index ⇄ hierarchy ⇄ ID string)
//! - Division-sensitive attribute range adjustment (Scale / Shift)
//! - Modular, history-free attribute generation with seeded bounded jitter
//! - Embarrassingly parallel pipeline: same index + config + seed, same record

pub mod adjust;
pub mod codec;
pub mod config;
pub mod error;
pub mod modular;
pub mod naming;
pub mod partition;
pub mod pipeline;

#[cfg(feature = "proptest")]
pub mod gen;

// Re-export the main world-building surface
pub use codec::{
    club_address, decode_club_id, decode_player_id, encode_club_id, encode_player_id,
    player_address, ClubAddress, PlayerAddress,
};
pub use config::{
    skill_kinds, AttributeKind, AttributeRange, AttributeTable, HierarchyConfig, PositionGroup,
};
pub use error::{EntityKind, Result, WorldGenError};
pub use naming::{NameDirectory, NameTable};
pub use pipeline::{EntityRecord, WorldGenerator};
