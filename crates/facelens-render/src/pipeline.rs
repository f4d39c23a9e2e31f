//! The single render pass: parse, load, fit, draw.

use crate::loader::load_image;
use crate::overlay::{OverlaySummary, render_annotations};
use crate::renderer::{RenderResult, Surface};
use crate::style::OverlayStyle;
use facelens_core::{DetectionResponse, compute_fit_transform, parse_responses};
use image::RgbaImage;
use kurbo::Size;

/// Render `image_url` letterboxed onto `surface` with the detection
/// results in `raw_json` drawn over it.
///
/// The JSON is parsed before anything is loaded or drawn, so malformed
/// input leaves the surface untouched.
pub fn render<S: Surface + ?Sized>(
    image_url: &str,
    surface: &mut S,
    raw_json: &str,
    style: &OverlayStyle,
) -> RenderResult<OverlaySummary> {
    let responses = parse_responses(raw_json)?;
    let image = load_image(image_url)?;
    render_decoded(&image, surface, &responses, style)
}

/// Render an already decoded image and parsed responses onto `surface`.
pub fn render_decoded<S: Surface + ?Sized>(
    image: &RgbaImage,
    surface: &mut S,
    responses: &[DetectionResponse],
    style: &OverlayStyle,
) -> RenderResult<OverlaySummary> {
    let image_size = Size::new(image.width() as f64, image.height() as f64);
    let ctx = compute_fit_transform(surface.size(), image_size)?;
    log::debug!(
        "Fit {}x{} image at scale {:.3}, shift ({:.1}, {:.1})",
        image.width(),
        image.height(),
        ctx.scale(),
        ctx.shift_x(),
        ctx.shift_y()
    );

    surface.draw_image(image, ctx.image_rect());
    let summary = render_annotations(surface, responses, &ctx, style);

    log::info!(
        "Rendered {} faces from {} responses ({} skipped)",
        summary.faces,
        summary.responses,
        summary.skipped
    );
    Ok(summary)
}
