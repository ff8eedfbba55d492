//! Fixed-size worker pool: admission control, worker loops, shutdown.

pub mod manager;
pub mod worker;

pub use manager::WorkerPool;
