//! Chat metrics tracking.
//!
//! Counters for replies per pipeline stage, reply cache efficiency and admin
//! activity. All counters are atomics shared between clones.

use crate::models::ReplySource;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker for the chat service.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    replies_by_source: Arc<[AtomicU64; ReplySource::COUNT]>,
    calendar_messages_total: Arc<AtomicU64>,
    rejected_messages_total: Arc<AtomicU64>,
    cache_hits_total: Arc<AtomicU64>,
    cache_misses_total: Arc<AtomicU64>,
    pairs_added_total: Arc<AtomicU64>,
}

/// Point-in-time copy of all counters.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsSnapshot {
    pub messages_total: u64,
    pub replies_by_source: BTreeMap<&'static str, u64>,
    pub calendar_messages_total: u64,
    pub rejected_messages_total: u64,
    pub cache_hits_total: u64,
    pub cache_misses_total: u64,
    pub cache_hit_rate: f64,
    pub pairs_added_total: u64,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            replies_by_source: Arc::new(std::array::from_fn(|_| AtomicU64::new(0))),
            calendar_messages_total: Arc::new(AtomicU64::new(0)),
            rejected_messages_total: Arc::new(AtomicU64::new(0)),
            cache_hits_total: Arc::new(AtomicU64::new(0)),
            cache_misses_total: Arc::new(AtomicU64::new(0)),
            pairs_added_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a college chatbot reply.
    pub fn track_reply(&self, source: ReplySource, confidence: f64, duration_us: u128) {
        self.replies_by_source[source_slot(source)].fetch_add(1, Ordering::Relaxed);

        tracing::info!(
            source = source.as_str(),
            confidence = confidence,
            duration_us = duration_us,
            "Chat reply sent"
        );
    }

    /// Track a calendar bot message.
    pub fn track_calendar_message(&self) {
        self.calendar_messages_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a message rejected before matching.
    pub fn track_rejected_message(&self) {
        self.rejected_messages_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a reply cache access.
    pub fn track_cache_access(&self, hit: bool) {
        if hit {
            self.cache_hits_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Reply cache hit");
        } else {
            self.cache_misses_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Reply cache miss");
        }
    }

    /// Track a Q&A pair appended by an admin.
    pub fn track_pair_added(&self) {
        self.pairs_added_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Replies produced by one pipeline stage.
    pub fn replies_from(&self, source: ReplySource) -> u64 {
        self.replies_by_source[source_slot(source)].load(Ordering::Relaxed)
    }

    /// Total college chatbot replies.
    pub fn messages_total(&self) -> u64 {
        self.replies_by_source
            .iter()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    pub fn cache_hits_total(&self) -> u64 {
        self.cache_hits_total.load(Ordering::Relaxed)
    }

    pub fn cache_misses_total(&self) -> u64 {
        self.cache_misses_total.load(Ordering::Relaxed)
    }

    /// Get the cache hit rate (0.0 to 1.0).
    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits_total() as f64;
        let total = (self.cache_hits_total() + self.cache_misses_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }

    /// Copy all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            messages_total: self.messages_total(),
            replies_by_source: ReplySource::ALL
                .iter()
                .map(|s| (s.as_str(), self.replies_from(*s)))
                .collect(),
            calendar_messages_total: self.calendar_messages_total.load(Ordering::Relaxed),
            rejected_messages_total: self.rejected_messages_total.load(Ordering::Relaxed),
            cache_hits_total: self.cache_hits_total(),
            cache_misses_total: self.cache_misses_total(),
            cache_hit_rate: self.cache_hit_rate(),
            pairs_added_total: self.pairs_added_total.load(Ordering::Relaxed),
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        let snapshot = self.snapshot();
        let by_source = snapshot
            .replies_by_source
            .iter()
            .map(|(source, count)| format!("{}={}", source, count))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Metrics Summary:\n\
             Messages: {} ({})\n\
             Calendar Messages: {}\n\
             Rejected Messages: {}\n\
             Cache Hit Rate: {:.2}%\n\
             Pairs Added: {}",
            snapshot.messages_total,
            by_source,
            snapshot.calendar_messages_total,
            snapshot.rejected_messages_total,
            snapshot.cache_hit_rate * 100.0,
            snapshot.pairs_added_total,
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn source_slot(source: ReplySource) -> usize {
    ReplySource::ALL
        .iter()
        .position(|s| *s == source)
        .unwrap_or(0)
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer and return the elapsed time in microseconds.
    pub fn finish(self) -> u128 {
        let duration_us = self.start.elapsed().as_micros();

        tracing::debug!(
            operation = self.operation,
            duration_us = duration_us,
            "Operation completed"
        );

        duration_us
    }
}
