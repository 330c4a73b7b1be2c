//! livegate-core — real-time face liveness gating.
//!
//! Decides, per sampled camera frame, whether exactly one properly oriented
//! face is present and whether that face belongs to a live human (as opposed
//! to a photo, screen replay or mask), using a small ONNX classifier. Built
//! as the gating step in front of biometric authentication: frame-rate
//! throttling, single-face/head-pose validation, deterministic
//! image-to-tensor preprocessing, inference and score thresholding.
//!
//! Camera capture and the face-geometry detector are external collaborators;
//! the detector is reached through the [`detector::FaceDetector`] port.

pub mod classifier;
pub mod config;
pub mod decision;
pub mod detector;
pub mod geometry;
pub mod pipeline;
pub mod preprocess;
pub mod sampler;
pub mod types;

pub use classifier::{ClassifierError, LivenessClassifier, LivenessScorer};
pub use config::PipelineConfig;
pub use detector::{DetectionResult, DetectorError, FaceDetector};
pub use pipeline::{AnalysisOutcome, FrameDecision, LivenessPipeline, PipelineState};
pub use types::{BoundingBox, DetectedFace, Frame, HeadPose, Rotation};
