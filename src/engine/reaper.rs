//! Pending Registry Reaper
//!
//! A single background loop that periodically promotes finished executions
//! into the cache. This bounds how long a completed-but-unpolled execution
//! lingers in the registry: results become visible and task handles are
//! reclaimed even for queries no client ever asks about again.

use super::processor::Processor;

use std::sync::Arc;
use std::time::Duration;

/// Default sweep interval.
pub const REAP_INTERVAL: Duration = Duration::from_millis(100);

/// Drives periodic collection of finished executions.
pub struct Reaper {
    processor: Arc<Processor>,
    interval: Duration,
}

impl Reaper {
    /// Creates a new Reaper sweeping at the given interval.
    pub fn new(processor: Arc<Processor>, interval: Duration) -> Self {
        Self {
            processor,
            interval,
        }
    }

    /// Spawns the sweep loop and returns immediately.
    ///
    /// The loop runs for the lifetime of the process. It only ever polls and
    /// settles; it never starts new executions.
    pub fn start(self) {
        tracing::info!("Starting reaper (interval: {:?})", self.interval);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                ticker.tick().await;
                self.processor.sweep().await;
            }
        });
    }
}
