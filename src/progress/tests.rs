use super::{SessionTracker, progress_score};
use rand::Rng;

#[test]
fn test_progress_score_reference_inputs() {
    let score = progress_score(2.0, 1.2);
    println!("Progress score for (2.0, 1.2): {score}");
    assert_eq!(score, 17);
}

#[test]
fn test_progress_score_rounding() {
    assert_eq!(progress_score(0.0, 2.5), 0);
    assert_eq!(progress_score(4.0, 2.5), 16);
    assert_eq!(progress_score(3.0, 9.0), 3);
    // round() goes away from zero on exact halves
    assert_eq!(progress_score(1.0, 4.0), 3);
}

#[test]
fn test_session_counter_increments_once_per_call() {
    let tracker = SessionTracker::new();
    let mut rng = rand::rng();
    let calls: u32 = rng.random_range(5..50);
    for _ in 0..calls {
        tracker.run_session(rng.random_range(0..100));
    }
    assert_eq!(tracker.total_sessions(), calls);
}

#[test]
fn test_session_summary_embeds_post_increment_count() {
    let tracker = SessionTracker::new();
    assert_eq!(tracker.run_session(1), "Debug Session #1 complete! Fixed 1 errors.");
    let second = tracker.run_session(7);
    println!("{second}");
    assert!(second.contains("#2"));
    assert!(second.contains("Fixed 7 errors"));
}
