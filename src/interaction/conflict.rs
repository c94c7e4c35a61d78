use super::handler::ClickHandler;
use super::revert::PendingRevert;
use crate::board::{Board, ElementHandle};
use crate::progress::SessionTracker;
use crate::{event, log};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Drives the merge-conflict card: Idle → Shaking → Idle.
///
/// Each click puts the shake class on the card, logs a debug-session
/// summary and schedules the revert that clears the class again and
/// rewrites the button label.
pub struct ConflictHandler {
    board: Arc<Board>,
    button: ElementHandle,
    tracker: Arc<SessionTracker>,
    pending: PendingRevert,
}

impl ConflictHandler {
    pub const BUTTON_ID: &'static str = "resolve-conflict-btn";
    pub const CARD_ID: &'static str = "merge-conflicts";
    /// Class the styling layer turns into the shake keyframes.
    pub const SHAKE_CLASS: &'static str = "conflict-active";
    pub const RESOLVED_TEXT: &'static str = "Conflict Resolved! 🎉";
    /// How long the shake class stays on the card.
    const SHAKE_DURATION: Duration = Duration::from_millis(700);

    pub fn new(board: Arc<Board>, button: ElementHandle, tracker: Arc<SessionTracker>) -> Self {
        Self { board, button, tracker, pending: PendingRevert::new() }
    }
}

#[async_trait]
impl ClickHandler for ConflictHandler {
    fn button_id(&self) -> &str { Self::BUTTON_ID }

    async fn on_click(&self) {
        self.board.set_class(Self::CARD_ID, Self::SHAKE_CLASS, true).await;

        let token = self.pending.rearm().await;
        let board = Arc::clone(&self.board);
        let button = Arc::clone(&self.button);
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(Self::SHAKE_DURATION) => {
                    board.set_class(Self::CARD_ID, Self::SHAKE_CLASS, false).await;
                    button.write().await.set_text(Self::RESOLVED_TEXT);
                    event!("Merge conflict card back to idle");
                }
            }
        });

        log!("{}", self.tracker.run_session(1));
    }
}
