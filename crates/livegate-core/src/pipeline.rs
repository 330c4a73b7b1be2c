//! Per-frame liveness gating coordinator.
//!
//! Drives one frame at a time through sampling, asynchronous face detection,
//! geometric validation and liveness classification. Detection is the only
//! suspending stage; everything after the detector resolves runs
//! synchronously within the same call. Detector errors are absorbed here and
//! never propagate past the pipeline boundary — a bad frame yields negative
//! outcomes and the stream continues.

use crate::classifier::LivenessScorer;
use crate::config::PipelineConfig;
use crate::decision::threshold_decision;
use crate::detector::{DetectorError, FaceDetector};
use crate::geometry::evaluate_face_geometry;
use crate::preprocess::frame_to_tensor;
use crate::sampler::FrameSampler;
use crate::types::{DetectedFace, Frame};

/// Processing state for the frame currently (or last) in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// No frame has been selected yet.
    Idle,
    /// Waiting on the external detector's completion.
    AwaitingDetection,
    /// Last selected frame finished; both outcomes were emitted.
    Completed,
    /// Last selected frame hit a detector error; both outcomes were false.
    Failed,
}

/// Outcomes emitted for one processed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDecision {
    /// Exactly one face, properly oriented.
    pub face_valid: bool,
    /// Live-human decision. Only computed when `face_valid` is true;
    /// otherwise always false.
    pub is_live: bool,
}

/// What happened to a frame handed to [`LivenessPipeline::analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Not selected by the sampler; released without detection.
    Dropped,
    /// Selected and fully evaluated.
    Evaluated(FrameDecision),
}

type OutcomeCallback = Box<dyn Fn(bool) + Send>;

/// Liveness gating pipeline for one sequential frame source.
///
/// Owns the sampler counter, the detector client and the scorer for its
/// whole lifetime. For every selected frame the two outcome callbacks fire
/// in a fixed order — face validity first, then liveness — and the frame's
/// backing resource is released exactly once on every path, before the
/// callbacks run.
pub struct LivenessPipeline<D, S> {
    config: PipelineConfig,
    sampler: FrameSampler,
    detector: D,
    scorer: S,
    state: PipelineState,
    on_face_analysis: OutcomeCallback,
    on_liveness_analysis: OutcomeCallback,
}

impl<D: FaceDetector, S: LivenessScorer> LivenessPipeline<D, S> {
    pub fn new(
        config: PipelineConfig,
        detector: D,
        scorer: S,
        on_face_analysis: impl Fn(bool) + Send + 'static,
        on_liveness_analysis: impl Fn(bool) + Send + 'static,
    ) -> Self {
        let sampler = FrameSampler::new(config.sample_interval);
        Self {
            config,
            sampler,
            detector,
            scorer,
            state: PipelineState::Idle,
            on_face_analysis: Box::new(on_face_analysis),
            on_liveness_analysis: Box::new(on_liveness_analysis),
        }
    }

    /// Current coordinator state: `AwaitingDetection` while a frame is in
    /// flight, otherwise the terminal state of the last selected frame.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Feed the next frame in arrival order.
    ///
    /// Unselected frames are released immediately and emit nothing. For a
    /// selected frame both callbacks fire exactly once, even when detection
    /// fails.
    pub async fn analyze(&mut self, frame: Frame) -> AnalysisOutcome {
        if !self.sampler.admit() {
            // Dropping the frame here releases it without detector work.
            return AnalysisOutcome::Dropped;
        }

        self.state = PipelineState::AwaitingDetection;
        let completion = self.detector.detect(frame.pixels(), frame.rotation());

        let decision = match completion.await.unwrap_or(Err(DetectorError::Cancelled)) {
            Ok(faces) => {
                let decision = self.evaluate(&frame, &faces);
                self.state = PipelineState::Completed;
                decision
            }
            Err(error) => {
                tracing::warn!(%error, "face detection failed — emitting negative outcomes");
                self.state = PipelineState::Failed;
                FrameDecision {
                    face_valid: false,
                    is_live: false,
                }
            }
        };

        tracing::debug!(
            face_valid = decision.face_valid,
            is_live = decision.is_live,
            frame_age_ms = frame.captured_at().elapsed().as_millis() as u64,
            "frame evaluated"
        );

        // Release before emission so a slow callback cannot hold the capture
        // source's buffer.
        drop(frame);

        (self.on_face_analysis)(decision.face_valid);
        (self.on_liveness_analysis)(decision.is_live);

        AnalysisOutcome::Evaluated(decision)
    }

    /// Synchronous stages for a successfully detected frame: geometry gate
    /// first, then preprocessing, classification and thresholding only when
    /// the gate passes.
    fn evaluate(&mut self, frame: &Frame, faces: &[DetectedFace]) -> FrameDecision {
        let geometry = evaluate_face_geometry(faces, Some(self.config.pose_tolerance_deg));
        if !geometry.accepted {
            return FrameDecision {
                face_valid: false,
                is_live: false,
            };
        }

        let input = frame_to_tensor(frame);
        let is_live = match self.scorer.score(&input) {
            Ok(scores) => threshold_decision(
                scores,
                self.config.live_class_index,
                self.config.live_threshold,
            ),
            Err(error) => {
                // Inference is expected to be reliable once constructed; if a
                // call still fails, the stream must keep moving.
                tracing::error!(%error, "liveness inference failed on a validated frame");
                false
            }
        };

        FrameDecision {
            face_valid: true,
            is_live,
        }
    }
}
