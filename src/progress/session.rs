use std::sync::atomic::{AtomicU32, Ordering};

/// Counts completed debug sessions for the lifetime of the process.
///
/// The counter lives here, not in a global: handlers share the tracker
/// behind an `Arc` and every increment goes through the single
/// exclusive-access path in [`run_session`](Self::run_session).
pub struct SessionTracker {
    sessions: AtomicU32,
}

impl SessionTracker {
    pub fn new() -> Self { Self { sessions: AtomicU32::new(0) } }

    /// Records one completed session and returns its summary line.
    ///
    /// The increment happens unconditionally, whatever `errors_fixed`
    /// says; the returned string embeds the post-increment number.
    pub fn run_session(&self, errors_fixed: u32) -> String {
        let session = self.sessions.fetch_add(1, Ordering::SeqCst) + 1;
        format!("Debug Session #{session} complete! Fixed {errors_fixed} errors.")
    }

    pub fn total_sessions(&self) -> u32 { self.sessions.load(Ordering::SeqCst) }
}

impl Default for SessionTracker {
    fn default() -> Self { Self::new() }
}
