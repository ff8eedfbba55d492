//! Error types for tourney-core.

use crate::model::TournamentId;
use crate::task::TaskId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No worker capacity at admission. Load-shed, not queued; the caller
    /// may retry later.
    #[error("worker pool at capacity")]
    QueueFull,

    /// Submission during or after pool shutdown. Terminal for that call.
    #[error("worker pool shutting down")]
    ShuttingDown,

    #[error("tournament not found: {0}")]
    NotFound(TournamentId),

    /// The caller abandoned its wait. The underlying task may still
    /// complete invisibly.
    #[error("operation canceled by caller")]
    Canceled,

    /// The worker side vanished before delivering a result.
    #[error("task {0}: result channel closed before delivery")]
    ResultDropped(TaskId),

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
