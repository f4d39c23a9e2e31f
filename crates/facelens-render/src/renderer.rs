//! Drawing surface trait abstraction.

use facelens_core::{ParseError, TransformError};
use image::RgbaImage;
use kurbo::{Circle, Rect, Size, Stroke};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidDimension(#[from] TransformError),
    #[error("Failed to load image {url}: {reason}")]
    ImageLoad { url: String, reason: String },
    #[error("Encoding failed: {0}")]
    Encode(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// A 2-D drawing target of known pixel size.
///
/// Coordinates are canvas-space pixels. The surface holds no transform
/// state; callers map image-space geometry before drawing.
pub trait Surface {
    /// Size of the surface in pixels.
    fn size(&self) -> Size;

    /// Draw `image` scaled into `dest`.
    fn draw_image(&mut self, image: &RgbaImage, dest: Rect);

    /// Stroke the outline of an axis-aligned rectangle.
    fn stroke_rect(&mut self, stroke: &Stroke, color: Color, rect: Rect);

    /// Stroke the outline of a circle.
    fn stroke_circle(&mut self, stroke: &Stroke, color: Color, circle: Circle);
}
