use super::handler::ClickHandler;
use super::revert::PendingRevert;
use crate::board::Board;
use crate::progress::progress_score;
use crate::{event, log};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Drives the error box: Hidden → Visible → Hidden.
///
/// Unhiding is done by dropping the `hidden` class so the styling layer
/// can fade the box in; the scheduled revert re-adds the class.
pub struct ErrorDisplayHandler {
    board: Arc<Board>,
    pending: PendingRevert,
}

impl ErrorDisplayHandler {
    pub const BUTTON_ID: &'static str = "trigger-error-btn";
    pub const BOX_ID: &'static str = "error-box";
    /// Class that keeps the error box faded out.
    pub const HIDDEN_CLASS: &'static str = "hidden";
    /// How long the box stays visible.
    const AUTO_HIDE_DELAY: Duration = Duration::from_millis(4000);
    /// Fixed inputs of the score logged with every triggered error.
    const SCORE_HOURS: f64 = 2.0;
    const SCORE_COMPLEXITY: f64 = 1.2;

    pub fn new(board: Arc<Board>) -> Self {
        Self { board, pending: PendingRevert::new() }
    }
}

#[async_trait]
impl ClickHandler for ErrorDisplayHandler {
    fn button_id(&self) -> &str { Self::BUTTON_ID }

    async fn on_click(&self) {
        self.board.set_class(Self::BOX_ID, Self::HIDDEN_CLASS, false).await;

        let token = self.pending.rearm().await;
        let board = Arc::clone(&self.board);
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(Self::AUTO_HIDE_DELAY) => {
                    board.set_class(Self::BOX_ID, Self::HIDDEN_CLASS, true).await;
                    event!("Error box hidden again");
                }
            }
        });

        let score = progress_score(Self::SCORE_HOURS, Self::SCORE_COMPLEXITY);
        log!("Encountering that bug increased your Progress Score to: {score}!");
    }
}
