//! Liveness classifier via ONNX Runtime.
//!
//! Wraps one inference call: a fixed-shape `[1, 3, 80, 80]` input tensor in,
//! a `[1, 2]` raw score vector out. The session is loaded once at startup and
//! treated as read-only afterwards.

use ndarray::Array4;
use ort::session::Session;
use ort::value::TensorRef;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;

/// Length of the model's output head: two raw class logits.
pub const SCORE_VECTOR_LEN: usize = 2;

const INTRA_THREADS: usize = 2;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("model file not found: {0} — run `livegate setup` to download it")]
    ModelNotFound(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
    #[error("ort: {0}")]
    Ort(#[from] ort::Error),
}

/// Scoring seam between the pipeline and the inference engine: fixed-shape
/// tensor in, raw class logits out.
pub trait LivenessScorer: Send {
    fn score(&mut self, input: &Array4<f32>) -> Result<[f32; SCORE_VECTOR_LEN], ClassifierError>;
}

/// ONNX-backed liveness classifier.
pub struct LivenessClassifier {
    session: Session,
}

impl LivenessClassifier {
    /// Load the liveness ONNX model from the given path.
    ///
    /// Fails fast: a missing file or an unloadable model is a configuration
    /// error, and the pipeline must not be constructed around it.
    pub fn load(model_path: &str) -> Result<Self, ClassifierError> {
        if !Path::new(model_path).exists() {
            return Err(ClassifierError::ModelNotFound(model_path.to_string()));
        }

        let session = Session::builder()?
            .with_intra_threads(INTRA_THREADS)?
            .commit_from_file(model_path)?;

        tracing::info!(
            path = model_path,
            inputs = ?session.inputs().iter().map(|i| (i.name(), i.dtype())).collect::<Vec<_>>(),
            outputs = ?session.outputs().iter().map(|o| o.name()).collect::<Vec<_>>(),
            "loaded liveness model"
        );

        Ok(Self { session })
    }

    /// Run one synchronous inference over a preprocessed input tensor,
    /// returning the raw (un-normalized) scores.
    ///
    /// Once the session is loaded, a per-frame call is expected to always
    /// produce a result; errors here indicate a model whose output head does
    /// not match this pipeline.
    pub fn classify(
        &mut self,
        input: &Array4<f32>,
    ) -> Result<[f32; SCORE_VECTOR_LEN], ClassifierError> {
        let started = Instant::now();

        let outputs = self
            .session
            .run(ort::inputs![TensorRef::from_array_view(input.view())?])?;

        let (_, raw) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::InferenceFailed(format!("score extraction: {e}")))?;

        if raw.len() != SCORE_VECTOR_LEN {
            return Err(ClassifierError::InferenceFailed(format!(
                "expected {SCORE_VECTOR_LEN} output scores, got {}",
                raw.len()
            )));
        }

        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "liveness inference complete"
        );

        Ok([raw[0], raw[1]])
    }
}

impl LivenessScorer for LivenessClassifier {
    fn score(&mut self, input: &Array4<f32>) -> Result<[f32; SCORE_VECTOR_LEN], ClassifierError> {
        self.classify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_fails_at_construction() {
        let err = LivenessClassifier::load("/nonexistent/liveness.onnx").unwrap_err();
        assert!(matches!(err, ClassifierError::ModelNotFound(_)));
    }
}
