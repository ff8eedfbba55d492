//! # tourney-core
//!
//! Task-dispatch concurrency core for the tournament service.
//!
//! Decouples request-serving logic from mutation of the shared in-memory
//! store: a fixed-size worker pool consumes typed tasks from a bounded
//! channel and executes them against a lock-guarded store provider, sending
//! exactly one result back per accepted task. HTTP routing, validation, and
//! real persistence live outside this crate.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod model;
pub mod pool;
pub mod provider;
pub mod store;
pub mod task;
pub mod telemetry;
