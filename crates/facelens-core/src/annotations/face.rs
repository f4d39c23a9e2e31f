//! Face detection results.

use crate::geometry::{BoundingPoly, Vertex};
use serde::{Deserialize, Serialize};

/// Named facial feature reported by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandmarkType {
    LeftEye,
    RightEye,
    LeftOfLeftEyebrow,
    RightOfLeftEyebrow,
    LeftOfRightEyebrow,
    RightOfRightEyebrow,
    MidpointBetweenEyes,
    NoseTip,
    UpperLip,
    LowerLip,
    MouthLeft,
    MouthRight,
    MouthCenter,
    NoseBottomRight,
    NoseBottomLeft,
    NoseBottomCenter,
    LeftEyeTopBoundary,
    LeftEyeRightCorner,
    LeftEyeBottomBoundary,
    LeftEyeLeftCorner,
    RightEyeTopBoundary,
    RightEyeRightCorner,
    RightEyeBottomBoundary,
    RightEyeLeftCorner,
    LeftEyebrowUpperMidpoint,
    RightEyebrowUpperMidpoint,
    LeftEarTragion,
    RightEarTragion,
    LeftEyePupil,
    RightEyePupil,
    ForeheadGlabella,
    ChinGnathion,
    ChinLeftGonion,
    ChinRightGonion,
    LeftCheekCenter,
    RightCheekCenter,
    /// Also used for names this build does not know about.
    #[default]
    #[serde(other)]
    UnknownLandmark,
}

/// A single named point of interest within a face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    #[serde(rename = "type", default)]
    pub kind: LandmarkType,
    /// Missing positions are all-NaN and are never drawn.
    #[serde(default = "Vertex::missing")]
    pub position: Vertex,
}

impl Landmark {
    pub fn new(kind: LandmarkType, position: Vertex) -> Self {
        Self { kind, position }
    }
}

/// Likelihood rating for face attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Likelihood {
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Likelihood {
    /// Rank from 1 (very unlikely) to 5 (very likely), or `None` if unknown.
    pub fn rank(self) -> Option<u8> {
        match self {
            Likelihood::VeryUnlikely => Some(1),
            Likelihood::Unlikely => Some(2),
            Likelihood::Possible => Some(3),
            Likelihood::Likely => Some(4),
            Likelihood::VeryLikely => Some(5),
            Likelihood::Unknown => None,
        }
    }
}

/// One detected face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceAnnotation {
    /// Box around the whole head.
    #[serde(default)]
    pub bounding_poly: BoundingPoly,
    /// Tighter box enclosing only the skin part of the face.
    #[serde(default)]
    pub fd_bounding_poly: BoundingPoly,
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
    /// Roll angle in degrees, [-180, 180].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_angle: Option<f64>,
    /// Yaw angle in degrees, [-180, 180].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_angle: Option<f64>,
    /// Pitch angle in degrees, [-180, 180].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tilt_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmarking_confidence: Option<f64>,
    #[serde(default)]
    pub joy_likelihood: Likelihood,
    #[serde(default)]
    pub sorrow_likelihood: Likelihood,
    #[serde(default)]
    pub anger_likelihood: Likelihood,
    #[serde(default)]
    pub surprise_likelihood: Likelihood,
    #[serde(default)]
    pub under_exposed_likelihood: Likelihood,
    #[serde(default)]
    pub blurred_likelihood: Likelihood,
    #[serde(default)]
    pub headwear_likelihood: Likelihood,
}

impl FaceAnnotation {
    /// Create a face with the given boxes and landmarks and no metadata.
    pub fn new(bounding_poly: BoundingPoly, fd_bounding_poly: BoundingPoly, landmarks: Vec<Landmark>) -> Self {
        Self {
            bounding_poly,
            fd_bounding_poly,
            landmarks,
            ..Default::default()
        }
    }

    /// Find the first landmark of the given kind.
    pub fn landmark(&self, kind: LandmarkType) -> Option<&Landmark> {
        self.landmarks.iter().find(|l| l.kind == kind)
    }
}
