//! Typed task/result protocol between the dispatcher and the worker pool.
//!
//! The operation kind and its payload are one closed enum, so a task can
//! never carry a payload that does not match its kind: the mismatch class
//! of errors is unrepresentable.

use std::sync::Arc;

use tokio::sync::oneshot;
use uuid::Uuid;

use crate::error::Result;
use crate::model::{NewTournament, Tournament, TournamentId};
use crate::provider::StoreProvider;

/// Correlation identifier for a submitted task. For logging/tracing only,
/// never for sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short display: first 8 chars of UUID
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

/// The operation a task performs, payload included.
#[derive(Debug, Clone)]
pub enum TaskKind {
    Create { input: NewTournament },
    Find { id: TournamentId },
    List,
}

impl TaskKind {
    /// Stable name used in spans and log fields.
    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::Create { .. } => "create_tournament",
            TaskKind::Find { .. } => "find_tournament",
            TaskKind::List => "list_tournaments",
        }
    }
}

/// Successful task output, one variant per [`TaskKind`].
#[derive(Debug, Clone)]
pub enum TaskOutput {
    Created(Tournament),
    Found(Tournament),
    Listing(Vec<Tournament>),
}

/// What a worker delivers back, exactly once per accepted task.
pub type TaskResult = Result<TaskOutput>;

/// A unit of work submitted to the pool. Single-use: the result channel is
/// consumed by the one result send.
pub struct Task<S> {
    pub id: TaskId,
    pub kind: TaskKind,
    pub provider: Arc<StoreProvider<S>>,
    pub result_tx: oneshot::Sender<TaskResult>,
}

impl<S> Task<S> {
    pub fn new(
        kind: TaskKind,
        provider: Arc<StoreProvider<S>>,
        result_tx: oneshot::Sender<TaskResult>,
    ) -> Self {
        Self {
            id: TaskId::new(),
            kind,
            provider,
            result_tx,
        }
    }
}
