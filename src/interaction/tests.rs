use super::{
    ClickHandler, ConflictHandler, ErrorDisplayHandler, HandlerRegistry, LoopState, ReliefHandler,
    TutorialLoopHandler,
};
use crate::board::{Board, Element};
use crate::progress::SessionTracker;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

async fn fixture() -> (Arc<Board>, HandlerRegistry, Arc<SessionTracker>) {
    let board = Arc::new(crate::build_board());
    let tracker = Arc::new(SessionTracker::new());
    let registry = crate::wire_handlers(&board, &tracker).await;
    (board, registry, tracker)
}

async fn text_of(board: &Board, id: &str) -> String {
    board.lookup(id).unwrap().read().await.text().to_owned()
}

#[tokio::test(start_paused = true)]
async fn test_conflict_click_shakes_then_reverts() {
    let (board, registry, tracker) = fixture().await;
    assert!(registry.dispatch(ConflictHandler::BUTTON_ID).await);
    assert!(board.has_class(ConflictHandler::CARD_ID, ConflictHandler::SHAKE_CLASS).await);
    assert_eq!(tracker.total_sessions(), 1);

    sleep(Duration::from_millis(750)).await;
    assert!(!board.has_class(ConflictHandler::CARD_ID, ConflictHandler::SHAKE_CLASS).await);
    assert_eq!(text_of(&board, ConflictHandler::BUTTON_ID).await, ConflictHandler::RESOLVED_TEXT);
}

#[tokio::test(start_paused = true)]
async fn test_conflict_rapid_clicks_extend_the_shake() {
    let (board, registry, tracker) = fixture().await;
    registry.dispatch(ConflictHandler::BUTTON_ID).await;
    sleep(Duration::from_millis(500)).await;
    registry.dispatch(ConflictHandler::BUTTON_ID).await;

    // past the first deadline, before the second: the stale revert must
    // have been cancelled
    sleep(Duration::from_millis(250)).await;
    assert!(board.has_class(ConflictHandler::CARD_ID, ConflictHandler::SHAKE_CLASS).await);

    sleep(Duration::from_millis(500)).await;
    assert!(!board.has_class(ConflictHandler::CARD_ID, ConflictHandler::SHAKE_CLASS).await);
    assert_eq!(tracker.total_sessions(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_error_box_auto_hides() {
    let (board, registry, _tracker) = fixture().await;
    assert!(board.has_class(ErrorDisplayHandler::BOX_ID, ErrorDisplayHandler::HIDDEN_CLASS).await);

    registry.dispatch(ErrorDisplayHandler::BUTTON_ID).await;
    assert!(!board.has_class(ErrorDisplayHandler::BOX_ID, ErrorDisplayHandler::HIDDEN_CLASS).await);

    sleep(Duration::from_millis(4100)).await;
    assert!(board.has_class(ErrorDisplayHandler::BOX_ID, ErrorDisplayHandler::HIDDEN_CLASS).await);
}

#[tokio::test(start_paused = true)]
async fn test_relief_disables_button_until_revert() {
    let (board, registry, _tracker) = fixture().await;
    registry.dispatch("relief-button").await;

    let button = board.lookup("relief-button").unwrap();
    let card = board.lookup(ReliefHandler::CARD_ID).unwrap();
    {
        let button = button.read().await;
        assert!(button.disabled());
        assert_eq!(button.text(), ReliefHandler::VALIDATED_TEXT);
    }
    {
        let card = card.read().await;
        assert_eq!(card.style().background_color(), ReliefHandler::VALIDATED_BACKGROUND);
        assert_eq!(card.style().transform(), ReliefHandler::VALIDATED_TRANSFORM);
        assert_eq!(card.style().box_shadow(), ReliefHandler::VALIDATED_BOX_SHADOW);
    }

    // a second click is swallowed by the disabled guard and must not
    // reschedule the revert
    sleep(Duration::from_millis(1000)).await;
    registry.dispatch("relief-button").await;
    assert!(button.read().await.disabled());

    sleep(Duration::from_millis(4100)).await;
    {
        let button = button.read().await;
        assert!(!button.disabled());
        assert_eq!(button.text(), ReliefHandler::IDLE_TEXT);
    }
    assert!(card.read().await.style().is_default());
}

#[tokio::test]
async fn test_tutorial_two_clicks_round_trip() {
    let (board, registry, _tracker) = fixture().await;
    let spinner = board.lookup(TutorialLoopHandler::SPINNER_ID).unwrap();
    let card = board.lookup(TutorialLoopHandler::CARD_ID).unwrap();
    assert!(!spinner.read().await.has_class(TutorialLoopHandler::PAUSE_CLASS));

    registry.dispatch(TutorialLoopHandler::BUTTON_ID).await;
    assert!(spinner.read().await.has_class(TutorialLoopHandler::PAUSE_CLASS));
    assert_eq!(
        card.read().await.style().background_color(),
        TutorialLoopHandler::SUCCESS_BACKGROUND
    );
    assert_eq!(
        text_of(&board, TutorialLoopHandler::BUTTON_ID).await,
        TutorialLoopHandler::BROKEN_TEXT
    );

    registry.dispatch(TutorialLoopHandler::BUTTON_ID).await;
    assert!(!spinner.read().await.has_class(TutorialLoopHandler::PAUSE_CLASS));
    assert!(card.read().await.style().is_default());
    assert_eq!(
        text_of(&board, TutorialLoopHandler::BUTTON_ID).await,
        TutorialLoopHandler::LOOPING_TEXT
    );
}

#[tokio::test]
async fn test_tutorial_state_enum_is_source_of_truth() {
    let board = crate::build_board();
    let handler = TutorialLoopHandler::try_new(&board).unwrap();
    assert_eq!(handler.state().await, LoopState::Running);
    handler.on_click().await;
    assert_eq!(handler.state().await, LoopState::Paused);
    handler.on_click().await;
    assert_eq!(handler.state().await, LoopState::Running);
}

#[tokio::test]
async fn test_tutorial_requires_all_elements() {
    let mut board = Board::new();
    board.insert(Element::new(TutorialLoopHandler::BUTTON_ID, "Break the Loop"));
    board.insert(Element::new(TutorialLoopHandler::CARD_ID, ""));
    // spinner missing
    assert!(TutorialLoopHandler::try_new(&board).is_none());
}

#[tokio::test]
async fn test_dispatch_unknown_id_returns_false() {
    let (_board, registry, _tracker) = fixture().await;
    assert!(!registry.dispatch("ghost-btn").await);
}
