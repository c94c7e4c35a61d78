use super::{Board, Element};

fn small_board() -> Board {
    let mut board = Board::new();
    board.insert(Element::new("card", ""));
    board.insert(Element::new("btn", "Push me").with_parent("card").with_class("push-button"));
    board
}

#[tokio::test]
async fn test_set_class_add_is_idempotent() {
    let board = small_board();
    board.set_class("card", "glow", true).await;
    board.set_class("card", "glow", true).await;
    let card = board.lookup("card").unwrap();
    let card = card.read().await;
    assert!(card.has_class("glow"));
    assert_eq!(card.classes().len(), 1);
}

#[tokio::test]
async fn test_set_class_unknown_id_is_noop() {
    let board = small_board();
    board.set_class("ghost", "glow", true).await;
    assert!(!board.has_class("ghost", "glow").await);
    assert_eq!(board.len(), 2);
}

#[tokio::test]
async fn test_remove_absent_class_is_noop() {
    let board = small_board();
    board.set_class("card", "glow", false).await;
    assert!(!board.has_class("card", "glow").await);
}

#[tokio::test]
async fn test_lookup_within_scopes_to_parent() {
    let board = small_board();
    let button = board.lookup_within("card", "push-button").await;
    assert!(button.is_some());
    assert_eq!(button.unwrap().read().await.id(), "btn");
    assert!(board.lookup_within("other", "push-button").await.is_none());
    assert!(board.lookup_within("card", "no-such-class").await.is_none());
}

#[tokio::test]
async fn test_snapshot_lists_every_element() {
    let board = small_board();
    let snapshot = board.snapshot().await;
    println!("{snapshot}");
    assert!(snapshot.contains("card:"));
    assert!(snapshot.contains("btn:"));
    assert!(snapshot.contains("push-button"));
}
