//! In-memory tournament store.
//!
//! The store is the only shared mutable resource in this crate. It is not
//! concurrency-safe on its own; all access goes through
//! [`StoreProvider`](crate::provider::StoreProvider), which serializes writes
//! and shares reads.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{NewTournament, Tournament, TournamentId};

/// Storage contract consumed by the worker pool.
///
/// Implementations need no internal locking: the provider guarantees at most
/// one `&mut self` caller at a time and only shared `&self` callers
/// otherwise. The seam exists so the pool and dispatcher work against any
/// backing store.
pub trait TournamentStore: Send + Sync + 'static {
    /// Create a tournament, assigning its sequence id, public id, and
    /// timestamps.
    fn create(&mut self, input: NewTournament) -> Result<Tournament>;

    /// Fetch a tournament by public id.
    fn find(&self, id: TournamentId) -> Result<Tournament>;

    /// All tournaments, ordered by sequence id.
    fn list(&self) -> Result<Vec<Tournament>>;
}

/// In-memory store backed by a `HashMap`. Stands in for a real database.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tournaments: HashMap<TournamentId, Tournament>,
    next_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TournamentStore for InMemoryStore {
    fn create(&mut self, input: NewTournament) -> Result<Tournament> {
        self.next_id += 1;
        let now = chrono::Utc::now();

        let tournament = Tournament {
            id: self.next_id,
            public_id: TournamentId::new(),
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        };

        self.tournaments
            .insert(tournament.public_id, tournament.clone());

        Ok(tournament)
    }

    fn find(&self, id: TournamentId) -> Result<Tournament> {
        self.tournaments
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    fn list(&self) -> Result<Vec<Tournament>> {
        let mut tournaments: Vec<Tournament> = self.tournaments.values().cloned().collect();
        tournaments.sort_by_key(|t| t.id);
        Ok(tournaments)
    }
}
