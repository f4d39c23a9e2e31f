//! FaceLens Core Library
//!
//! Platform-agnostic data structures and geometry for overlaying
//! face-detection results on the image they were computed for.

pub mod annotations;
pub mod geometry;
pub mod transform;

pub use annotations::{
    Annotation, DetectionResponse, FaceAnnotation, Landmark, LandmarkType, Likelihood,
    ParseError, ResponseStatus, parse_responses,
};
pub use geometry::{BoundingPoly, Extent, Vertex, compute_extent};
pub use transform::{RenderContext, TransformError, compute_fit_transform};
