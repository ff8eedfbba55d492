//! Core data model.
//!
//! A tournament has two identities: an internal sequence id (assigned by the
//! store, used for ordering) and a public id (generated at creation, the only
//! identifier callers ever see). Both are set exactly once, under the write
//! lock, never by the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Tournament
// ---------------------------------------------------------------------------

/// A tournament entity as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    /// Internal monotonically increasing sequence id.
    pub id: u64,

    /// Externally addressable identifier. Assigned once at creation,
    /// never mutated.
    pub public_id: TournamentId,

    pub name: String,
    pub description: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Newtype for public tournament identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TournamentId(pub Uuid);

impl TournamentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TournamentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for TournamentId {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Input for creating a tournament. The dispatcher's public API for the
/// create operation; identity and timestamps are filled in by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTournament {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: String,
}

impl NewTournament {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
