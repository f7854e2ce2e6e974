/// Cubic ease-out: fast start, smooth settle. Converges to exactly 1.0 at
/// `t = 1`, which is what lets count-up animations land on their target.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
