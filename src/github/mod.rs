//! GitHub Lookup Module
//!
//! The remote side of the daemon: executes GraphQL queries against the GitHub
//! API and shapes the responses into the multi-line payloads clients receive.
//!
//! ## Workflow
//! 1. **Dispatch**: The engine validates a query's parameters and spawns the
//!    matching executor registered by this module.
//! 2. **Fetch**: The executor POSTs a GraphQL document to the API with the
//!    configured bearer token.
//! 3. **Shape**: The typed response is rendered into payload lines; missing
//!    entities and API-reported errors become execution errors.
//!
//! ## Submodules
//! - **`client`**: Thin reqwest transport for the GraphQL endpoint.
//! - **`queries`**: The `repo:` and `issue:` executors and their rendering.
//! - **`types`**: DTOs for the GraphQL envelope and selected schema slices.

pub mod client;
pub mod queries;
pub mod types;
