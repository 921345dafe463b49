//! Pending Execution Registry
//!
//! Tracks the single in-flight background execution per query key. The atomic
//! check-and-insert on start and the take-once semantics on poll are what give
//! the engine its coalescing guarantee.

use super::types::{Outcome, PendingExecution, PollResult, StartResult, now_ms};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::future::Future;

/// Registry of in-flight executions, keyed by the raw query string.
pub struct PendingRegistry {
    executions: DashMap<String, PendingExecution>,
}

impl PendingRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            executions: DashMap::new(),
        }
    }

    /// Atomically checks for a live execution and starts `work` if there is
    /// none.
    ///
    /// The lookup and the insert happen under a single entry lock, so two
    /// callers racing on the same key can never both start an execution. An
    /// existing execution is left untouched.
    pub fn try_start<F>(&self, key: &str, work: F) -> StartResult
    where
        F: Future<Output = Outcome> + Send + 'static,
    {
        match self.executions.entry(key.to_string()) {
            Entry::Occupied(_) => StartResult::AlreadyPending,
            Entry::Vacant(slot) => {
                let handle = tokio::spawn(work);
                slot.insert(PendingExecution {
                    handle,
                    started_at: now_ms(),
                });
                StartResult::Started
            }
        }
    }

    /// Checks the execution for `key`, removing it if it has finished.
    ///
    /// A finished entry is taken out under the entry lock, so exactly one
    /// caller observes `Finished`; anyone racing sees `StillRunning` or
    /// `Absent`. The handle is awaited only after the lock is released, which
    /// resolves immediately because the task had already finished.
    pub async fn poll(&self, key: &str) -> PollResult {
        let execution = match self.executions.entry(key.to_string()) {
            Entry::Vacant(_) => return PollResult::Absent,
            Entry::Occupied(entry) if !entry.get().handle.is_finished() => {
                return PollResult::StillRunning;
            }
            Entry::Occupied(entry) => entry.remove(),
        };

        tracing::debug!(
            "Execution for '{}' finished after {} ms",
            key,
            now_ms().saturating_sub(execution.started_at)
        );

        match execution.handle.await {
            Ok(outcome) => PollResult::Finished(outcome),
            // The execution task panicked before producing an Outcome.
            Err(err) => PollResult::Finished(Outcome::Error(format!(
                "execution task failed: {}",
                err
            ))),
        }
    }

    /// Snapshot of the keys with an execution currently registered.
    ///
    /// Used by the reaper to enumerate work without holding a lock across the
    /// iteration.
    pub fn keys(&self) -> Vec<String> {
        self.executions
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Number of executions currently registered, finished or not.
    pub fn len(&self) -> usize {
        self.executions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executions.is_empty()
    }
}

impl Default for PendingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
