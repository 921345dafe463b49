//! GitHub Lookup Daemon Library
//!
//! This library crate defines the core modules of the daemon. It serves as the
//! foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The daemon is composed of three loosely coupled subsystems:
//!
//! - **`engine`**: The request-coalescing, TTL-cached execution engine. Decides
//!   for every incoming query whether to answer from cache, report an in-flight
//!   execution, start a new one in the background, or fail fast. Guarantees at
//!   most one concurrent remote execution per distinct query key.
//! - **`github`**: The remote lookup layer. Executes GraphQL queries against the
//!   GitHub API and shapes the responses into the multi-line payloads clients
//!   receive.
//! - **`server`**: The local protocol boundary. Accepts one-shot TCP
//!   connections, reads a single query line and writes back a framed outcome.

pub mod engine;
pub mod github;
pub mod server;
