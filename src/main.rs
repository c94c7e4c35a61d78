#![allow(dead_code)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod board;
mod console;
mod interaction;
mod logger;
mod progress;

use crate::board::{Board, Element};
use crate::console::{ConsoleCommand, ConsoleEndpoint};
use crate::interaction::{
    ConflictHandler, ErrorDisplayHandler, HandlerRegistry, ReliefHandler, TutorialLoopHandler,
};
use crate::progress::SessionTracker;
use std::sync::Arc;

/// Diagnostic emitted once when the tutorial card is wired incompletely.
const TUTORIAL_ELEMENTS_MISSING: &str =
    "Tutorial Hell elements (button or spinner) not found. Check board ids.";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let board = Arc::new(build_board());
    let tracker = Arc::new(SessionTracker::new());
    let registry = wire_handlers(&board, &tracker).await;

    info!("Developer morale board ready, {} handlers registered", registry.len());
    let mut commands = ConsoleEndpoint::start();
    while let Some(command) = commands.recv().await {
        match command {
            ConsoleCommand::Click(target) => {
                event!("Click on {target}");
                if !registry.dispatch(&target).await {
                    warn!("No handler registered for {target:?}");
                }
            }
            ConsoleCommand::State => log!("Board state:\n{}", board.snapshot().await),
            ConsoleCommand::Quit => break,
        }
    }
    info!("Shutting down after {} debug sessions", tracker.total_sessions());
}

/// Builds the cards, buttons and spinner the board ships with.
fn build_board() -> Board {
    let mut board = Board::new();
    board.insert(Element::new(ConflictHandler::CARD_ID, ""));
    board.insert(Element::new(ConflictHandler::BUTTON_ID, "Resolve Conflict"));
    board.insert(
        Element::new(ErrorDisplayHandler::BOX_ID, "").with_class(ErrorDisplayHandler::HIDDEN_CLASS),
    );
    board.insert(Element::new(ErrorDisplayHandler::BUTTON_ID, "Trigger Error"));
    board.insert(Element::new(ReliefHandler::CARD_ID, ""));
    board.insert(
        Element::new("relief-button", ReliefHandler::IDLE_TEXT)
            .with_parent(ReliefHandler::CARD_ID)
            .with_class(ReliefHandler::BUTTON_CLASS),
    );
    board.insert(Element::new(TutorialLoopHandler::CARD_ID, ""));
    board.insert(Element::new(TutorialLoopHandler::BUTTON_ID, "Break the Loop"));
    board.insert(Element::new(TutorialLoopHandler::SPINNER_ID, ""));
    board
}

/// Wires each handler whose elements resolve; a partially built board
/// loses the affected card only.
async fn wire_handlers(board: &Arc<Board>, tracker: &Arc<SessionTracker>) -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();

    match board.lookup(ConflictHandler::BUTTON_ID) {
        Some(button) => registry.register(Box::new(ConflictHandler::new(
            Arc::clone(board),
            button,
            Arc::clone(tracker),
        ))),
        None => warn!("Merge conflict button missing, card stays unwired"),
    }

    if board.lookup(ErrorDisplayHandler::BUTTON_ID).is_some() {
        registry.register(Box::new(ErrorDisplayHandler::new(Arc::clone(board))));
    } else {
        warn!("Error trigger button missing, error box stays unwired");
    }

    let relief_card = board.lookup(ReliefHandler::CARD_ID);
    let relief_button =
        board.lookup_within(ReliefHandler::CARD_ID, ReliefHandler::BUTTON_CLASS).await;
    match (relief_card, relief_button) {
        (Some(card), Some(button)) => {
            let button_id = button.read().await.id().to_owned();
            registry.register(Box::new(ReliefHandler::new(card, button, button_id)));
        }
        _ => warn!("Imposter syndrome card or relief button missing, validation stays unwired"),
    }

    match TutorialLoopHandler::try_new(board) {
        Some(handler) => registry.register(Box::new(handler)),
        None => error!("{TUTORIAL_ELEMENTS_MISSING}"),
    }

    registry
}
