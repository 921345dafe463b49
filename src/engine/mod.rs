//! Lookup Engine Module
//!
//! This module implements the request-coalescing, TTL-cached, non-blocking
//! execution engine that fronts the slow remote lookups. Clients poll it; it
//! never makes them wait for the network.
//!
//! ## Architecture Overview
//! The engine follows a **Poll-based** model with background settlement:
//! 1. **Lookup**: `Processor::process` answers from the `ResultCache` when it
//!    can, otherwise consults the `PendingRegistry` for an in-flight execution.
//! 2. **Dispatch**: For a query nobody is working on, the matching executor is
//!    resolved from the `QueryExecutors` registry, validated, and started as a
//!    background task. The caller is told `Pending` and comes back later.
//! 3. **Coalescing**: The registry's atomic check-and-insert guarantees at most
//!    one concurrent execution per query key, no matter how many connections
//!    race to request it.
//! 4. **Settlement**: A finished execution is consumed exactly once, either by
//!    a client poll or by the `Reaper` sweep, and its result enters the cache
//!    (successes) or is discarded (failures).
//!
//! ## Submodules
//! - **`cache`**: Thread-safe TTL cache for finished lookup payloads.
//! - **`pending`**: Registry of in-flight executions keyed by query string.
//! - **`executors`**: Maps query-type names (e.g. "repo") to validation rules
//!   and executable async closures.
//! - **`processor`**: Orchestrates the above; the engine's single entry point.
//! - **`reaper`**: Background loop promoting finished executions into the cache.
//! - **`types`**: The `Outcome` type and other shared definitions.

pub mod cache;
pub mod executors;
pub mod pending;
pub mod processor;
pub mod reaper;
pub mod types;
