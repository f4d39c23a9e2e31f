//! Detection response model.
//!
//! The detector returns one response per requested image. Each response
//! may carry several kinds of results; only the kinds listed in
//! [`Annotation`] are recognized, everything else in the JSON is ignored.

mod face;

pub use face::{FaceAnnotation, Landmark, LandmarkType, Likelihood};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response parsing errors.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid detection response JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A group of results of one kind within a response.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Annotation {
    /// Detected faces. Never empty.
    Faces(Vec<FaceAnnotation>),
}

impl Annotation {
    /// Short name used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Annotation::Faces(_) => "faces",
        }
    }
}

/// Error status attached to a single response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// One element of the detector's response batch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawResponse")]
pub struct DetectionResponse {
    pub annotations: Vec<Annotation>,
    pub error: Option<ResponseStatus>,
}

impl DetectionResponse {
    /// A response carrying only the given faces.
    pub fn with_faces(faces: Vec<FaceAnnotation>) -> Self {
        let mut response = Self::default();
        if !faces.is_empty() {
            response.annotations.push(Annotation::Faces(faces));
        }
        response
    }

    /// All faces in this response.
    pub fn faces(&self) -> impl Iterator<Item = &FaceAnnotation> {
        self.annotations.iter().flat_map(|annotation| match annotation {
            Annotation::Faces(faces) => faces.iter(),
        })
    }

    /// Whether the response carries any recognized result kind.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Wire shape of a response, keyed by result kind.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResponse {
    #[serde(default)]
    face_annotations: Option<Vec<FaceAnnotation>>,
    #[serde(default)]
    error: Option<ResponseStatus>,
}

impl From<RawResponse> for DetectionResponse {
    fn from(raw: RawResponse) -> Self {
        let mut response = DetectionResponse::with_faces(raw.face_annotations.unwrap_or_default());
        response.error = raw.error;
        response
    }
}

/// The batch as received: a bare array, or the detector's full envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseBatch {
    Bare(Vec<DetectionResponse>),
    Envelope {
        #[serde(default)]
        responses: Vec<DetectionResponse>,
    },
}

/// Parse a detection response batch.
///
/// Accepts either `[{...}, ...]` or `{"responses": [{...}, ...]}`.
pub fn parse_responses(json: &str) -> Result<Vec<DetectionResponse>, ParseError> {
    // Parse to a value first so a malformed document reports the real
    // syntax error instead of the untagged enum's generic message.
    let value: serde_json::Value = serde_json::from_str(json)?;
    let batch = serde_json::from_value(value)?;
    let responses = match batch {
        ResponseBatch::Bare(responses) => responses,
        ResponseBatch::Envelope { responses } => responses,
    };
    log::debug!("Parsed {} detection responses", responses.len());
    Ok(responses)
}
