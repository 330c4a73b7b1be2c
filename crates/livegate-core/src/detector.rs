//! Port for the external face-geometry detector.

use crate::types::{DetectedFace, Rotation};
use image::RgbImage;
use thiserror::Error;
use tokio::sync::oneshot;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("face detection failed: {0}")]
    Failed(String),
    #[error("detector dropped the request without responding")]
    Cancelled,
}

/// Outcome of one detection request.
pub type DetectionResult = Result<Vec<DetectedFace>, DetectorError>;

/// External face-geometry detector.
///
/// Detection is asynchronous with no latency guarantee. The returned channel
/// resolves exactly once, with either the detected faces or an error; a
/// sender dropped without a value counts as an error resolution. The
/// detector client is a process-lifetime singleton owned by the pipeline and
/// is never invoked concurrently — frames are strictly sequential.
pub trait FaceDetector: Send {
    /// Begin detection on one frame's pixel buffer.
    fn detect(&mut self, pixels: &RgbImage, rotation: Rotation)
        -> oneshot::Receiver<DetectionResult>;
}
