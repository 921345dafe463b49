//! Wire Protocol
//!
//! Line-oriented request/response framing spoken over a local TCP connection.
//! One request per connection: a single newline-terminated query line in, one
//! framed response out, then the server closes the connection.

use crate::engine::types::Outcome;

// --- Response status lines ---

/// First line of a successful response; the payload lines follow.
pub const STATUS_OK: &str = "OK";
/// Entire response while the execution is still in flight.
pub const STATUS_PENDING: &str = "PENDING";
/// First line of a failure response; the message follows.
pub const STATUS_ERROR: &str = "ERROR";

/// Renders the framed response for an outcome.
///
/// Payloads may contain embedded newlines; each one is a result row for the
/// client.
pub fn render_response(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Pending => format!("{}\n", STATUS_PENDING),
        Outcome::Ready(payload) => format!("{}\n{}\n", STATUS_OK, payload),
        Outcome::Error(message) => format!("{}\n{}\n", STATUS_ERROR, message),
    }
}
