use image::RgbImage;
use std::time::Instant;

/// Rotation hint attached to a captured frame, in degrees clockwise.
///
/// Capture sources report orientation in right-angle steps only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Parse a capture-source rotation hint. Returns `None` for anything
    /// that is not a right-angle rotation.
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

type ReleaseHook = Box<dyn FnOnce() + Send>;

/// One captured frame, owned by the pipeline for a single processing cycle.
///
/// The capture source will not deliver the next frame's buffer until this
/// one is released, so release must happen exactly once on every exit path.
/// Release is tied to `Drop`: when the frame goes out of scope its optional
/// release hook fires, handing the buffer back to the source.
pub struct Frame {
    pixels: RgbImage,
    rotation: Rotation,
    captured_at: Instant,
    release: Option<ReleaseHook>,
}

impl Frame {
    pub fn new(pixels: RgbImage, rotation: Rotation) -> Self {
        Self {
            pixels,
            rotation,
            captured_at: Instant::now(),
            release: None,
        }
    }

    /// Attach a hook that fires exactly once when the frame is released.
    pub fn with_release_hook(
        pixels: RgbImage,
        rotation: Rotation,
        release: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            pixels,
            rotation,
            captured_at: Instant::now(),
            release: Some(Box::new(release)),
        }
    }

    /// Packed-RGB pixel buffer.
    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn captured_at(&self) -> Instant {
        self.captured_at
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Face bounding box in frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Head orientation relative to the camera, in signed degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadPose {
    /// Rotation about the vertical axis (head turned left/right).
    pub yaw: f32,
    /// Rotation about the horizontal axis (head tilted up/down).
    pub pitch: f32,
    /// Rotation about the camera axis (head tilted sideways).
    pub roll: f32,
}

/// One face reported by the external detector for a single frame.
#[derive(Debug, Clone)]
pub struct DetectedFace {
    pub bounding_box: BoundingBox,
    pub pose: HeadPose,
    /// Five-point landmarks (eyes, nose, mouth corners), when the detector
    /// is configured to produce them.
    pub landmarks: Option<[(f32, f32); 5]>,
}
