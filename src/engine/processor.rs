//! Lookup Processor
//!
//! The engine's control center. Decides, for each incoming query, whether to
//! answer from cache, report an in-flight execution, start a new one, or fail.
//! The only blocking it performs is the brief exclusive section protecting the
//! cache and registry tables; remote work always happens in background tasks.

use super::cache::ResultCache;
use super::executors::QueryExecutors;
use super::pending::PendingRegistry;
use super::types::{Outcome, PollResult, StartResult};

use std::sync::Arc;
use std::time::Duration;

/// Orchestrates the cache, the pending registry and the executor registry.
///
/// All state is dependency-passed at construction; there are no globals.
pub struct Processor {
    cache: Arc<ResultCache>,
    pending: Arc<PendingRegistry>,
    executors: Arc<QueryExecutors>,
    /// Time-to-live applied to every successfully cached payload.
    ttl: Duration,
}

impl Processor {
    /// Creates a new Processor over the given engine state.
    pub fn new(
        cache: Arc<ResultCache>,
        pending: Arc<PendingRegistry>,
        executors: Arc<QueryExecutors>,
        ttl: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            cache,
            pending,
            executors,
            ttl,
        })
    }

    /// Resolves a query to an `Outcome` without blocking on remote work.
    ///
    /// 1. Cache hit: `Ready`, the pending registry is never consulted.
    /// 2. Live execution: `Pending`. Finished execution: its outcome, cached
    ///    only on success.
    /// 3. Otherwise validate, dispatch a new execution and report `Pending`.
    ///    Malformed queries fail synchronously and never touch the registry.
    pub async fn process(&self, query: &str) -> Outcome {
        if let Some(payload) = self.cache.get(query) {
            tracing::debug!("Cache hit for '{}'", query);
            return Outcome::Ready(payload);
        }

        match self.pending.poll(query).await {
            PollResult::StillRunning => {
                tracing::debug!("Execution for '{}' still in flight", query);
                return Outcome::Pending;
            }
            PollResult::Finished(outcome) => return self.settle(query, outcome),
            PollResult::Absent => {}
        }

        let Some((query_type, params)) = query.split_once(':') else {
            return Outcome::Error(format!(
                "malformed query '{}': expected type:params",
                query
            ));
        };

        match self.executors.prepare(query_type, params) {
            Ok(work) => {
                match self.pending.try_start(query, work) {
                    StartResult::Started => {
                        tracing::info!("Started execution for '{}'", query);
                    }
                    // Another caller won the race; its execution serves us too.
                    StartResult::AlreadyPending => {
                        tracing::debug!("Execution for '{}' already started", query);
                    }
                }
                Outcome::Pending
            }
            Err(message) => Outcome::Error(message),
        }
    }

    /// Single finalization point for a finished execution.
    ///
    /// Successful payloads enter the cache with the fixed TTL. Errors are
    /// returned as-is and cached nowhere, so the key reverts to absent and the
    /// next identical query retries from scratch.
    fn settle(&self, query: &str, outcome: Outcome) -> Outcome {
        match &outcome {
            Outcome::Ready(payload) => {
                self.cache.set(query, payload.clone(), self.ttl);
                tracing::info!("Cached result for '{}'", query);
            }
            Outcome::Error(message) => {
                tracing::warn!("Execution for '{}' failed: {}", query, message);
            }
            Outcome::Pending => {}
        }
        outcome
    }

    /// Drains every finished execution into the cache, discarding failures.
    ///
    /// Called by the reaper. Uses the same observe-once `poll` as client calls,
    /// so the two paths cannot double-cache or double-consume a result.
    pub async fn sweep(&self) {
        for key in self.pending.keys() {
            if let PollResult::Finished(outcome) = self.pending.poll(&key).await {
                tracing::debug!("Reaped finished execution for '{}'", key);
                self.settle(&key, outcome);
            }
        }
    }
}
