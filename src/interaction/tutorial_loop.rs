use super::handler::ClickHandler;
use crate::board::{Board, ElementHandle, InlineStyle};
use crate::{event, log};
use async_trait::async_trait;
use strum_macros::Display;
use tokio::sync::Mutex;

/// Whether the tutorial-hell spinner animation is currently running.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
}

/// Toggles the tutorial-hell card between Running and Paused.
///
/// The owned [`LoopState`] is the source of truth; the pause class on
/// the spinner is kept in sync with it, never read back.
pub struct TutorialLoopHandler {
    button: ElementHandle,
    spinner: ElementHandle,
    card: ElementHandle,
    state: Mutex<LoopState>,
}

impl TutorialLoopHandler {
    pub const BUTTON_ID: &'static str = "break-tutorial-btn";
    pub const SPINNER_ID: &'static str = "tutorial-spinner";
    pub const CARD_ID: &'static str = "tutorial-hell";
    /// Class that halts the spinner animation while present.
    pub const PAUSE_CLASS: &'static str = "paused-animation";
    pub const BROKEN_TEXT: &'static str = "Loop Broken! 🎉 (Resume Coding)";
    pub const LOOPING_TEXT: &'static str = "Stuck again! (Start Loop)";
    pub const SUCCESS_BACKGROUND: &'static str = "#d1f7d1";

    /// Resolves the three required elements.
    ///
    /// Returns `None` when any of them is missing; the caller skips
    /// registration and reports that once at startup.
    pub fn try_new(board: &Board) -> Option<Self> {
        let button = board.lookup(Self::BUTTON_ID)?;
        let spinner = board.lookup(Self::SPINNER_ID)?;
        let card = board.lookup(Self::CARD_ID)?;
        Some(Self { button, spinner, card, state: Mutex::new(LoopState::Running) })
    }

    pub async fn state(&self) -> LoopState { *self.state.lock().await }
}

#[async_trait]
impl ClickHandler for TutorialLoopHandler {
    fn button_id(&self) -> &str { Self::BUTTON_ID }

    async fn on_click(&self) {
        let mut state = self.state.lock().await;
        match *state {
            LoopState::Running => {
                *state = LoopState::Paused;
                self.spinner.write().await.add_class(Self::PAUSE_CLASS);
                self.button.write().await.set_text(Self::BROKEN_TEXT);
                self.card
                    .write()
                    .await
                    .style_mut()
                    .set_background_color(Self::SUCCESS_BACKGROUND);
                log!("Broke free from Tutorial Hell!");
            }
            LoopState::Paused => {
                *state = LoopState::Running;
                self.spinner.write().await.remove_class(Self::PAUSE_CLASS);
                self.button.write().await.set_text(Self::LOOPING_TEXT);
                self.card
                    .write()
                    .await
                    .style_mut()
                    .set_background_color(InlineStyle::DEFAULT_BACKGROUND);
                log!("Tutorial Hell loop resumed.");
            }
        }
        event!("Tutorial loop now {}", *state);
    }
}
