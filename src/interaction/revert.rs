use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Guards the pending timed revert of the latest activation.
///
/// Re-arming cancels whatever revert is still outstanding and hands the
/// caller a token for the new one, so a repeated trigger extends the
/// visual state instead of letting a stale timer revert it early.
pub struct PendingRevert {
    token: Mutex<CancellationToken>,
}

impl PendingRevert {
    pub fn new() -> Self { Self { token: Mutex::new(CancellationToken::new()) } }

    /// Cancels the outstanding revert, if any, and returns the token
    /// guarding the new one.
    pub async fn rearm(&self) -> CancellationToken {
        let mut token = self.token.lock().await;
        token.cancel();
        *token = CancellationToken::new();
        token.clone()
    }
}
