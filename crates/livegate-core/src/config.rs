use crate::decision::{DEFAULT_LIVE_CLASS_INDEX, DEFAULT_LIVE_THRESHOLD};
use crate::geometry::DEFAULT_POSE_TOLERANCE_DEG;
use crate::sampler::DEFAULT_SAMPLE_INTERVAL;

/// Pipeline tuning parameters, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Process one frame out of every `sample_interval` delivered (default: 30).
    pub sample_interval: u32,
    /// Maximum absolute head-pose angle in degrees, per axis, inclusive.
    pub pose_tolerance_deg: f32,
    /// Minimum post-softmax live-class probability for a positive decision.
    pub live_threshold: f32,
    /// Index of the live class in the classifier's two-score output.
    /// Must be 0 or 1; the label order is a property of the trained model.
    pub live_class_index: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            pose_tolerance_deg: DEFAULT_POSE_TOLERANCE_DEG,
            live_threshold: DEFAULT_LIVE_THRESHOLD,
            live_class_index: DEFAULT_LIVE_CLASS_INDEX,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from `LIVEGATE_*` environment variables with defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            sample_interval: env_u32("LIVEGATE_SAMPLE_INTERVAL", defaults.sample_interval),
            pose_tolerance_deg: env_f32("LIVEGATE_POSE_TOLERANCE_DEG", defaults.pose_tolerance_deg),
            live_threshold: env_f32("LIVEGATE_LIVE_THRESHOLD", defaults.live_threshold),
            live_class_index: env_usize("LIVEGATE_LIVE_CLASS_INDEX", defaults.live_class_index),
        }
    }
}

fn env_f32(key: &str, default: f32) -> f32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployed_model() {
        let config = PipelineConfig::default();
        assert_eq!(config.sample_interval, 30);
        assert_eq!(config.pose_tolerance_deg, 20.0);
        assert_eq!(config.live_threshold, 0.6);
        assert_eq!(config.live_class_index, 0);
    }
}
