/// Maps raw effort and a difficulty multiplier to a progress score.
///
/// `complexity` acts as a divisor (1.0 = easy, 2.5 = hard), so the score
/// is `round(hours * 10 / complexity)`. Inputs are not validated: a
/// non-positive `complexity` follows plain IEEE division semantics and
/// is only flagged in debug builds.
#[allow(clippy::cast_possible_truncation)]
pub fn progress_score(hours: f64, complexity: f64) -> i64 {
    debug_assert!(complexity > 0.0, "complexity must be positive");
    let base_score = hours * 10.0;
    (base_score / complexity).round() as i64
}
