//! Protocol Server Module
//!
//! The concurrency boundary between polling clients and the engine. Each
//! accepted connection is handled by an independent task: one query line in,
//! one framed response out, connection closed. `Processor::process` returns
//! promptly, so a burst of connections cannot starve each other.
//!
//! ## Submodules
//! - **`listener`**: TCP accept loop and per-connection handling.
//! - **`protocol`**: Response framing for the line-oriented wire format.

pub mod listener;
pub mod protocol;
