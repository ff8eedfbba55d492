//! Tracing initialization and task span helpers.
//!
//! Logging here is fire-and-forget: nothing in the task path blocks or
//! fails because of it.

use tracing::Span;

use crate::error::{Error, Result};
use crate::task::TaskId;

/// Initialize the tracing subscriber (EnvFilter + fmt layer).
///
/// `default_filter` applies when RUST_LOG is unset.
///
/// # Errors
///
/// Returns an error if a subscriber was already installed.
pub fn init_telemetry(default_filter: &str) -> Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter.to_string()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| Error::Other(format!("failed to init tracing subscriber: {e}")))
}

/// Span wrapping one task execution on a worker.
pub fn start_task_span(worker_id: usize, kind: &'static str, task_id: &TaskId) -> Span {
    tracing::info_span!(
        "task.execute",
        "task.worker" = worker_id,
        "task.kind" = kind,
        "task.id" = %task_id,
    )
}
