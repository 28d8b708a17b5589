//! Observability module for monitoring and metrics.
//!
//! This module provides reply counters, cache statistics and operation
//! timing, reported through `tracing`.

pub mod metrics;

pub use metrics::{MetricsSnapshot, MetricsTracker, Timer};
