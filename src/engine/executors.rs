//! Query Executor Registry
//!
//! A dynamic registry that maps query-type names (e.g. "repo") to a parameter
//! validation pattern and an executable async closure. This keeps the engine
//! generic: the processor only knows how to validate and dispatch, never what
//! a lookup actually does.

use super::types::Outcome;

use anyhow::Result;
use dashmap::DashMap;
use regex::Regex;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A dispatched unit of remote work, resolving to the final `Outcome`.
pub type ExecutionFuture = Pin<Box<dyn Future<Output = Outcome> + Send>>;

/// Type alias for a thread-safe, asynchronous executor function.
/// It takes the raw parameter string and returns the work future to spawn.
pub type ExecutorFn = Arc<dyn Fn(String) -> ExecutionFuture + Send + Sync>;

/// A registered query type: how to validate its parameters and how to run it.
struct RegisteredExecutor {
    /// Pattern the full parameter string must match before dispatch.
    params: Regex,
    /// Human-readable parameter shape, quoted in validation errors.
    usage: String,
    run: ExecutorFn,
}

/// Registry holding the mapping between query types and their executors.
pub struct QueryExecutors {
    executors: DashMap<String, RegisteredExecutor>,
}

impl QueryExecutors {
    /// Creates a new, empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            executors: DashMap::new(),
        })
    }

    /// Registers an executor under a query-type name.
    ///
    /// # Arguments
    /// * `query_type` - The leading token of the queries this executor serves.
    /// * `params` - Pattern the parameter string must match for dispatch.
    /// * `usage` - Parameter shape shown in validation errors (e.g. "owner/name").
    /// * `handler` - The closure/function that performs the remote lookup.
    ///
    /// The handler returns `anyhow::Result<String>`; `Ok` payloads become
    /// `Outcome::Ready` and errors become `Outcome::Error`, so a failing remote
    /// lookup can never tear down the background task running it.
    pub fn register<F, Fut>(&self, query_type: &str, params: Regex, usage: &str, handler: F)
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String>> + Send + 'static,
    {
        // Wrap the handler in a Box::pin to type-erase the specific Future
        // type, and convert its Result into an Outcome at the task boundary.
        let run: ExecutorFn = Arc::new(move |params: String| {
            let work = handler(params);
            Box::pin(async move {
                match work.await {
                    Ok(payload) => Outcome::Ready(payload),
                    Err(err) => Outcome::Error(err.to_string()),
                }
            }) as ExecutionFuture
        });

        self.executors.insert(
            query_type.to_string(),
            RegisteredExecutor {
                params,
                usage: usage.to_string(),
                run,
            },
        );

        tracing::info!("Registered query executor: {}", query_type);
    }

    /// Validates a query and hands back its work future, ready to be spawned.
    ///
    /// # Returns
    /// * `Ok(work)` if the type is known and the parameters match its pattern.
    /// * `Err(message)` for an unknown type or malformed parameters; callers
    ///   surface this synchronously without starting anything.
    pub fn prepare(&self, query_type: &str, params: &str) -> Result<ExecutionFuture, String> {
        let Some(executor) = self.executors.get(query_type) else {
            return Err(format!("unknown query type: {}", query_type));
        };

        if !executor.params.is_match(params) {
            return Err(format!(
                "invalid parameters for '{}': expected {}",
                query_type, executor.usage
            ));
        }

        let run = executor.run.clone();
        drop(executor);

        Ok(run(params.to_string()))
    }

    /// Returns a list of all registered query types.
    pub fn list_types(&self) -> Vec<String> {
        self.executors
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Checks if a query type is registered.
    pub fn has_type(&self, query_type: &str) -> bool {
        self.executors.contains_key(query_type)
    }
}
