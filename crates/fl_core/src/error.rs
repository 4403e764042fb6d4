use thiserror::Error;

/// Entity kind tag used in index errors, so a caller can tell which
/// population an out-of-range index belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Country,
    League,
    Club,
    Player,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Country => "country",
            EntityKind::League => "league",
            EntityKind::Club => "club",
            EntityKind::Player => "player",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldGenError {
    /// Rejected before any entity is produced; never raised mid-enumeration
    /// for a config that already passed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Index {index} out of range for {kind} population of {population}")]
    IndexOutOfRange {
        kind: EntityKind,
        index: u64,
        population: u64,
    },

    #[error("Slot {slot} out of range for squad size {squad_size}")]
    SlotOutOfRange { slot: u32, squad_size: u32 },

    #[error("Malformed id `{id}`: {reason}")]
    MalformedId { id: String, reason: String },

    /// Per-entity failure wrapper: tags the failing flat index so sibling
    /// entities can still be generated (generation is independent per index).
    #[error("Generation failed for {kind} {index}: {source}")]
    Entity {
        kind: EntityKind,
        index: u64,
        #[source]
        source: Box<WorldGenError>,
    },
}

impl WorldGenError {
    pub fn malformed(id: &str, reason: impl Into<String>) -> Self {
        WorldGenError::MalformedId { id: id.to_string(), reason: reason.into() }
    }

    /// Tag an error with the flat index it occurred at.
    pub fn for_entity(self, kind: EntityKind, index: u64) -> Self {
        WorldGenError::Entity { kind, index, source: Box::new(self) }
    }
}

pub type Result<T> = std::result::Result<T, WorldGenError>;
