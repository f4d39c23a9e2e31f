//! Annotation overlay: dispatch by result kind and primitive drawing.

use crate::renderer::Surface;
use crate::style::OverlayStyle;
use facelens_core::{Annotation, DetectionResponse, FaceAnnotation, Landmark, RenderContext, Vertex, compute_extent};
use kurbo::{Circle, Rect};

/// Counts from one overlay pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlaySummary {
    /// Responses in the batch.
    pub responses: usize,
    /// Responses without any recognized result kind.
    pub skipped: usize,
    /// Faces drawn.
    pub faces: usize,
}

/// Draw every recognized annotation in `responses`, in order.
///
/// Responses without a recognized result kind are skipped. A response
/// that reports an error still has whatever results it carries drawn.
pub fn render_annotations<S: Surface + ?Sized>(
    surface: &mut S,
    responses: &[DetectionResponse],
    ctx: &RenderContext,
    style: &OverlayStyle,
) -> OverlaySummary {
    let mut summary = OverlaySummary {
        responses: responses.len(),
        ..Default::default()
    };

    for (index, response) in responses.iter().enumerate() {
        if let Some(error) = &response.error {
            log::warn!("Response {} reported error {}: {}", index, error.code, error.message);
        }
        if response.is_empty() {
            log::debug!("Response {} has no recognized annotations, skipping", index);
            summary.skipped += 1;
            continue;
        }

        for annotation in &response.annotations {
            match annotation {
                Annotation::Faces(faces) => {
                    for face in faces {
                        draw_face(surface, face, ctx, style);
                    }
                    summary.faces += faces.len();
                }
                other => {
                    log::debug!("No drawer for {} annotations in response {}", other.kind_name(), index);
                }
            }
        }
    }

    summary
}

/// Draw the head box, then the skin box on top of it, then the landmarks.
pub fn draw_face<S: Surface + ?Sized>(surface: &mut S, face: &FaceAnnotation, ctx: &RenderContext, style: &OverlayStyle) {
    draw_bounding_box(surface, &face.bounding_poly.vertices, ctx, style);
    draw_bounding_box(surface, &face.fd_bounding_poly.vertices, ctx, style);
    draw_landmarks(surface, &face.landmarks, ctx, style);
}

/// Stroke the extent of `vertices` as an axis-aligned rectangle.
///
/// The rectangle runs from the mapped minimum corner to the mapped maximum
/// corner as-is; non-finite corners are left for the surface to reject.
pub fn draw_bounding_box<S: Surface + ?Sized>(
    surface: &mut S,
    vertices: &[Vertex],
    ctx: &RenderContext,
    style: &OverlayStyle,
) {
    let Some(extent) = compute_extent(vertices) else {
        log::debug!("Bounding poly has no vertices, nothing to draw");
        return;
    };

    let top_left = ctx.map_point(extent.min);
    let bottom_right = ctx.map_point(extent.max);
    let rect = Rect::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y);

    surface.stroke_rect(&style.box_stroke(), style.highlight(), rect);
}

/// Stroke a circle marker at each landmark position.
pub fn draw_landmarks<S: Surface + ?Sized>(
    surface: &mut S,
    landmarks: &[Landmark],
    ctx: &RenderContext,
    style: &OverlayStyle,
) {
    let stroke = style.landmark_stroke();
    let color = style.highlight();
    for landmark in landmarks {
        let center = ctx.map_point(landmark.position);
        surface.stroke_circle(&stroke, color, Circle::new(center, style.landmark_radius));
    }
}
