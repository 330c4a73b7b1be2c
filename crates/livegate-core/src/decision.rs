//! Score normalization and thresholding.
//!
//! The classifier emits raw two-class logits. Decisions are always taken on
//! the post-softmax probability, never on the raw values.

/// Default minimum live-class probability for a positive decision.
pub const DEFAULT_LIVE_THRESHOLD: f32 = 0.6;

/// Default index of the live class in the score vector.
///
/// The deployed model orders its output with the live class at index 0.
/// Label order is a property of the trained model — override through
/// [`crate::config::PipelineConfig`] when swapping models.
pub const DEFAULT_LIVE_CLASS_INDEX: usize = 0;

/// Normalize a raw two-class score vector into a probability distribution.
///
/// Standard softmax, computed with the usual max subtraction; the result is
/// identical to `exp(x_i) / Σ exp(x_j)` and sums to 1.
pub fn softmax(scores: [f32; 2]) -> [f32; 2] {
    let max = scores[0].max(scores[1]);
    let exp = [(scores[0] - max).exp(), (scores[1] - max).exp()];
    let sum = exp[0] + exp[1];
    [exp[0] / sum, exp[1] / sum]
}

/// Decide liveness from raw classifier scores.
///
/// The post-softmax probability of the live class must strictly exceed
/// `threshold`.
pub fn threshold_decision(scores: [f32; 2], live_class_index: usize, threshold: f32) -> bool {
    let probabilities = softmax(scores);
    let live_probability = probabilities[live_class_index];
    tracing::debug!(
        ?scores,
        ?probabilities,
        live_probability,
        threshold,
        "liveness decision"
    );
    live_probability > threshold
}
