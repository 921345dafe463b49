use tokio::task::JoinHandle;

/// The engine's answer for a single query.
///
/// This is what a connection handler frames and writes back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An execution is in flight; no value yet. Poll again.
    Pending,
    /// The exact (possibly multi-line) text to return to the client.
    Ready(String),
    /// Human-readable failure description. Never cached.
    Error(String),
}

/// An in-flight background execution tracked by the `PendingRegistry`.
///
/// For any given query key, at most one of these exists at a time across the
/// whole process. The handle resolves to the final `Outcome`; executor failures
/// are converted to `Outcome::Error` before the task finishes, so the handle
/// itself only errors if the task panicked.
pub struct PendingExecution {
    /// Handle of the spawned execution task.
    pub handle: JoinHandle<Outcome>,
    /// Timestamp (ms) when the execution was started.
    pub started_at: u64,
}

/// Result of `PendingRegistry::try_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartResult {
    /// No execution existed for the key; a new one was spawned and recorded.
    Started,
    /// A live execution already exists; it was left untouched.
    AlreadyPending,
}

/// Result of `PendingRegistry::poll`.
#[derive(Debug, PartialEq, Eq)]
pub enum PollResult {
    /// No execution is registered for the key.
    Absent,
    /// The execution has not completed yet.
    StillRunning,
    /// The execution completed and was removed from the registry.
    /// Exactly one caller ever observes this for a given execution.
    Finished(Outcome),
}

/// Helper to get the current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
