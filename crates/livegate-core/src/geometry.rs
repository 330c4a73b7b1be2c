//! Single-face and head-pose validation.
//!
//! A frame is only worth classifying when the detector reports exactly one
//! face and that face is looking at the camera. Zero faces, multiple faces,
//! and strongly turned or tilted heads all gate the frame out before any
//! inference runs.

use crate::types::DetectedFace;

/// Default head-pose tolerance window in degrees, inclusive on both ends.
pub const DEFAULT_POSE_TOLERANCE_DEG: f32 = 20.0;

/// Head-pose axis that caused a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseAxis {
    Yaw,
    Pitch,
    Roll,
}

/// Result of validating one frame's detection list.
#[derive(Debug, Clone)]
pub struct GeometryResult {
    /// Whether the frame passed validation (exactly one well-oriented face).
    pub accepted: bool,
    /// Number of faces the detector reported.
    pub face_count: usize,
    /// First axis whose angle fell outside the tolerance window, with the
    /// offending value in degrees.
    pub rejected_axis: Option<(PoseAxis, f32)>,
}

/// Validate that exactly one face is present and properly oriented.
///
/// Both an empty detection list and a multi-face list fail. For a single
/// face, each of yaw, pitch and roll must lie within
/// `[-tolerance, +tolerance]`; the bounds themselves are valid and only
/// values strictly beyond them are rejected. If `tolerance_deg` is `None`,
/// [`DEFAULT_POSE_TOLERANCE_DEG`] is used.
pub fn evaluate_face_geometry(
    faces: &[DetectedFace],
    tolerance_deg: Option<f32>,
) -> GeometryResult {
    let tolerance = tolerance_deg.unwrap_or(DEFAULT_POSE_TOLERANCE_DEG);

    if faces.len() != 1 {
        tracing::debug!(count = faces.len(), "face count is not exactly one");
        return GeometryResult {
            accepted: false,
            face_count: faces.len(),
            rejected_axis: None,
        };
    }

    let pose = &faces[0].pose;
    let axes = [
        (PoseAxis::Yaw, pose.yaw),
        (PoseAxis::Pitch, pose.pitch),
        (PoseAxis::Roll, pose.roll),
    ];

    for (axis, angle) in axes {
        if angle < -tolerance || angle > tolerance {
            tracing::debug!(?axis, angle, tolerance, "head angle outside tolerance");
            return GeometryResult {
                accepted: false,
                face_count: 1,
                rejected_axis: Some((axis, angle)),
            };
        }
    }

    GeometryResult {
        accepted: true,
        face_count: 1,
        rejected_axis: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoundingBox, HeadPose};

    fn face_with_pose(yaw: f32, pitch: f32, roll: f32) -> DetectedFace {
        DetectedFace {
            bounding_box: BoundingBox {
                x: 100.0,
                y: 80.0,
                width: 200.0,
                height: 240.0,
            },
            pose: HeadPose { yaw, pitch, roll },
            landmarks: None,
        }
    }

    #[test]
    fn empty_list_rejected() {
        let result = evaluate_face_geometry(&[], None);
        assert!(!result.accepted);
        assert_eq!(result.face_count, 0);
    }

    #[test]
    fn multiple_faces_rejected() {
        let faces = vec![face_with_pose(0.0, 0.0, 0.0), face_with_pose(1.0, 1.0, 1.0)];
        let result = evaluate_face_geometry(&faces, None);
        assert!(!result.accepted);
        assert_eq!(result.face_count, 2);
        assert!(result.rejected_axis.is_none());
    }

    #[test]
    fn frontal_face_accepted() {
        let faces = vec![face_with_pose(5.0, -3.0, 0.0)];
        let result = evaluate_face_geometry(&faces, None);
        assert!(result.accepted);
        assert_eq!(result.face_count, 1);
    }

    #[test]
    fn boundary_angles_are_valid() {
        for face in [
            face_with_pose(20.0, 0.0, 0.0),
            face_with_pose(-20.0, 0.0, 0.0),
            face_with_pose(0.0, 20.0, -20.0),
        ] {
            let result = evaluate_face_geometry(&[face], None);
            assert!(result.accepted, "inclusive bounds must pass");
        }
    }

    #[test]
    fn just_beyond_boundary_rejected() {
        let result = evaluate_face_geometry(&[face_with_pose(20.01, 0.0, 0.0)], None);
        assert!(!result.accepted);
        assert_eq!(result.rejected_axis, Some((PoseAxis::Yaw, 20.01)));

        let result = evaluate_face_geometry(&[face_with_pose(0.0, -20.01, 0.0)], None);
        assert!(!result.accepted);
        assert_eq!(result.rejected_axis, Some((PoseAxis::Pitch, -20.01)));
    }

    #[test]
    fn each_axis_is_checked() {
        for (face, axis) in [
            (face_with_pose(45.0, 0.0, 0.0), PoseAxis::Yaw),
            (face_with_pose(0.0, 45.0, 0.0), PoseAxis::Pitch),
            (face_with_pose(0.0, 0.0, -45.0), PoseAxis::Roll),
        ] {
            let result = evaluate_face_geometry(&[face], None);
            assert!(!result.accepted);
            assert_eq!(result.rejected_axis.map(|(a, _)| a), Some(axis));
        }
    }

    #[test]
    fn custom_tolerance() {
        let faces = vec![face_with_pose(8.0, 0.0, 0.0)];
        assert!(!evaluate_face_geometry(&faces, Some(5.0)).accepted);
        assert!(evaluate_face_geometry(&faces, Some(10.0)).accepted);
    }
}
