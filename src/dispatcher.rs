//! Caller-facing dispatcher.
//!
//! Translates create/find/list into typed tasks, submits them to the pool,
//! and waits for either the result or the caller's cancellation, whichever
//! comes first. Cancellation abandons the task; work that already started
//! runs to completion invisibly (no in-flight cancellation).

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{NewTournament, Tournament, TournamentId};
use crate::pool::WorkerPool;
use crate::provider::StoreProvider;
use crate::store::TournamentStore;
use crate::task::{Task, TaskKind, TaskOutput};

/// High-level tournament operations backed by the worker pool.
pub struct TournamentService<S> {
    pool: Arc<WorkerPool<S>>,
    provider: Arc<StoreProvider<S>>,
}

impl<S> Clone for TournamentService<S> {
    fn clone(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<S: TournamentStore> TournamentService<S> {
    pub fn new(pool: Arc<WorkerPool<S>>, provider: Arc<StoreProvider<S>>) -> Self {
        Self { pool, provider }
    }

    /// Create a tournament. The store assigns identity and timestamps.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        input: NewTournament,
    ) -> Result<Tournament> {
        match self
            .round_trip(cancel, TaskKind::Create { input })
            .await?
        {
            TaskOutput::Created(tournament) => Ok(tournament),
            other => Err(unexpected_output("create", &other)),
        }
    }

    /// Fetch a tournament by public id.
    pub async fn find(
        &self,
        cancel: &CancellationToken,
        id: TournamentId,
    ) -> Result<Tournament> {
        match self.round_trip(cancel, TaskKind::Find { id }).await? {
            TaskOutput::Found(tournament) => Ok(tournament),
            other => Err(unexpected_output("find", &other)),
        }
    }

    /// List all tournaments, ordered by sequence id.
    pub async fn list(&self, cancel: &CancellationToken) -> Result<Vec<Tournament>> {
        match self.round_trip(cancel, TaskKind::List).await? {
            TaskOutput::Listing(tournaments) => Ok(tournaments),
            other => Err(unexpected_output("list", &other)),
        }
    }

    /// Build a task, submit it, and wait for its result or the caller's
    /// cancellation.
    async fn round_trip(
        &self,
        cancel: &CancellationToken,
        kind: TaskKind,
    ) -> Result<TaskOutput> {
        let (result_tx, result_rx) = oneshot::channel();
        let task = Task::new(kind, Arc::clone(&self.provider), result_tx);
        let task_id = task.id;

        self.pool.submit(task)?;

        tokio::select! {
            result = result_rx => match result {
                Ok(task_result) => task_result,
                Err(_) => Err(Error::ResultDropped(task_id)),
            },
            _ = cancel.cancelled() => {
                debug!(task = %task_id, "caller canceled while awaiting result");
                Err(Error::Canceled)
            }
        }
    }
}

fn unexpected_output(operation: &str, output: &TaskOutput) -> Error {
    Error::Other(format!(
        "unexpected output for {operation}: {output:?}"
    ))
}
