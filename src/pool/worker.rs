//! Worker loop: pull one task at a time, execute it against the provider,
//! deliver the single result.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, trace, warn};

use crate::provider::StoreProvider;
use crate::store::TournamentStore;
use crate::task::{Task, TaskKind, TaskOutput, TaskResult};
use crate::telemetry::start_task_span;

/// One long-lived worker loop.
///
/// Workers share a single receiver behind a mutex; the lock is held only
/// while waiting for the next task, never while executing one, so siblings
/// keep pulling while this worker is busy. The loop exits only on pool
/// shutdown; a failing task is delivered as an error result and the loop
/// continues.
pub(crate) async fn worker_loop<S: TournamentStore>(
    worker_id: usize,
    task_rx: Arc<Mutex<mpsc::Receiver<Task<S>>>>,
    shutdown: CancellationToken,
) {
    trace!(worker_id, "worker started");

    loop {
        let task = {
            let mut rx = task_rx.lock().await;
            tokio::select! {
                _ = shutdown.cancelled() => break,
                task = rx.recv() => match task {
                    Some(task) => task,
                    None => break,
                },
            }
        };

        execute(worker_id, task).await;
    }

    trace!(worker_id, "worker stopped");
}

/// Execute one task and send its result. Exactly one send per task; a
/// receiver dropped by an abandoning caller is logged and ignored (oneshot
/// sends never block, so nothing leaks).
async fn execute<S: TournamentStore>(worker_id: usize, task: Task<S>) {
    let Task {
        id,
        kind,
        provider,
        result_tx,
    } = task;

    let span = start_task_span(worker_id, kind.name(), &id);
    let result = run_task(&provider, kind).instrument(span).await;

    if let Err(ref e) = result {
        warn!(task = %id, worker_id, error = %e, "task failed");
    }

    if result_tx.send(result).is_err() {
        debug!(task = %id, worker_id, "caller gone before result delivery");
    }
}

/// Dispatch on the task kind. Creates run under the exclusive write scope;
/// finds and lists under the shared read scope.
async fn run_task<S: TournamentStore>(provider: &StoreProvider<S>, kind: TaskKind) -> TaskResult {
    match kind {
        TaskKind::Create { input } => provider
            .write_tx(|store| store.create(input))
            .await
            .map(TaskOutput::Created),
        TaskKind::Find { id } => provider
            .read_tx(|store| store.find(id))
            .await
            .map(TaskOutput::Found),
        TaskKind::List => provider
            .read_tx(|store| store.list())
            .await
            .map(TaskOutput::Listing),
    }
}
