//! Pool lifecycle and admission control.
//!
//! The pool owns one shared bounded channel that all workers consume from.
//! Admission is fail-fast: a submission that finds the queue at its declared
//! depth is rejected immediately, never queued unboundedly and never blocked.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, trace, warn};

use super::worker::worker_loop;
use crate::error::{Error, Result};
use crate::store::TournamentStore;
use crate::task::Task;

/// Pool lifecycle. `Stopped` is terminal; a stopped pool is never restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PoolState {
    Created,
    Started,
    Stopped,
}

/// A fixed set of long-lived worker loops consuming tasks from one shared
/// bounded channel.
///
/// Constructed once at startup and shared behind an `Arc` for the process
/// lifetime. [`start`](WorkerPool::start) and [`stop`](WorkerPool::stop) are
/// both idempotent; `stop` is safe even if `start` was never called.
pub struct WorkerPool<S> {
    workers: usize,
    task_tx: mpsc::Sender<Task<S>>,
    task_rx: Arc<Mutex<mpsc::Receiver<Task<S>>>>,
    shutdown: CancellationToken,
    state: Mutex<PoolState>,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl<S: TournamentStore> WorkerPool<S> {
    /// Build a pool with `workers` loops and an admission queue of
    /// `queue_depth` tasks.
    ///
    /// The queue depth is the whole backpressure policy: submissions beyond
    /// it are rejected with [`Error::QueueFull`] rather than waiting for a
    /// worker.
    pub fn new(workers: usize, queue_depth: usize) -> Self {
        let (task_tx, task_rx) = mpsc::channel(queue_depth.max(1));

        Self {
            workers: workers.max(1),
            task_tx,
            task_rx: Arc::new(Mutex::new(task_rx)),
            shutdown: CancellationToken::new(),
            state: Mutex::new(PoolState::Created),
            handles: Mutex::new(Vec::new()),
        }
    }

    /// Spawn the worker loops. A second call is a no-op, as is a call after
    /// [`stop`](WorkerPool::stop).
    pub async fn start(&self) {
        let mut state = self.state.lock().await;
        if *state != PoolState::Created {
            return;
        }

        let mut handles = Vec::with_capacity(self.workers);
        for worker_id in 0..self.workers {
            handles.push(tokio::spawn(worker_loop(
                worker_id,
                Arc::clone(&self.task_rx),
                self.shutdown.clone(),
            )));
        }

        *self.handles.lock().await = handles;
        *state = PoolState::Started;
        info!(workers = self.workers, "worker pool started");
    }

    /// Submit a task for execution.
    ///
    /// Outcomes, decided without blocking:
    /// - queue has room → accepted, the worker will deliver exactly one
    ///   result on the task's channel;
    /// - shutdown already signalled → [`Error::ShuttingDown`];
    /// - queue at capacity → [`Error::QueueFull`] (load-shed, caller may
    ///   retry later).
    pub fn submit(&self, task: Task<S>) -> Result<()> {
        if self.shutdown.is_cancelled() {
            warn!(task = %task.id, kind = task.kind.name(), "task rejected: pool shutting down");
            return Err(Error::ShuttingDown);
        }

        let task_id = task.id;
        let kind = task.kind.name();
        match self.task_tx.try_send(task) {
            Ok(()) => {
                trace!(task = %task_id, kind, "task accepted");
                Ok(())
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(task = %task_id, kind, "task rejected: queue full");
                Err(Error::QueueFull)
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!(task = %task_id, kind, "task rejected: queue closed");
                Err(Error::ShuttingDown)
            }
        }
    }

    /// Shut the pool down and wait for every worker loop to exit.
    ///
    /// Idempotent. Workers finish the task they are executing; tasks still
    /// queued afterwards are not run; each is completed with
    /// [`Error::ShuttingDown`] so that every accepted task still sees
    /// exactly one result.
    pub async fn stop(&self) {
        let handles = {
            let mut state = self.state.lock().await;
            if *state == PoolState::Stopped {
                return;
            }
            *state = PoolState::Stopped;
            self.shutdown.cancel();
            std::mem::take(&mut *self.handles.lock().await)
        };

        for handle in handles {
            if handle.await.is_err() {
                warn!("worker exited by panic");
            }
        }

        // Best-effort drain: answer whatever was accepted but never run.
        let mut rx = self.task_rx.lock().await;
        rx.close();
        while let Ok(task) = rx.try_recv() {
            trace!(task = %task.id, "completing queued task with shutdown error");
            let _ = task.result_tx.send(Err(Error::ShuttingDown));
        }

        info!("worker pool stopped");
    }

    /// Token observed by callers that want to react to pool shutdown.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }
}
