//! Letterbox fit transform from image space to canvas space.

use crate::geometry::Vertex;
use kurbo::{Point, Rect, Size};
use thiserror::Error;

/// Transform errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransformError {
    #[error("Invalid dimensions {width}x{height}: both must be positive and finite")]
    InvalidDimension { width: f64, height: f64 },
}

/// Scale and centering offset that inscribes an image in a canvas.
///
/// Created once per render pass by [`compute_fit_transform`] and passed by
/// reference to every mapping and drawing call. It has no setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    scale: f64,
    shift_x: f64,
    shift_y: f64,
    scaled_width: f64,
    scaled_height: f64,
}

/// Compute the fit (never crop) transform of `image` inside `canvas`.
///
/// The uniform scale is the smaller of the two axis ratios, and the scaled
/// image is centered on both axes.
pub fn compute_fit_transform(canvas: Size, image: Size) -> Result<RenderContext, TransformError> {
    // Written so NaN fails the check as well.
    if !(image.width > 0.0 && image.height > 0.0) || !image.is_finite() {
        return Err(TransformError::InvalidDimension {
            width: image.width,
            height: image.height,
        });
    }
    if !canvas.is_finite() || canvas.width < 0.0 || canvas.height < 0.0 {
        return Err(TransformError::InvalidDimension {
            width: canvas.width,
            height: canvas.height,
        });
    }

    let scale = (canvas.width / image.width).min(canvas.height / image.height);
    let scaled_width = image.width * scale;
    let scaled_height = image.height * scale;

    Ok(RenderContext {
        scale,
        shift_x: (canvas.width - scaled_width) / 2.0,
        shift_y: (canvas.height - scaled_height) / 2.0,
        scaled_width,
        scaled_height,
    })
}

impl RenderContext {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn shift_x(&self) -> f64 {
        self.shift_x
    }

    pub fn shift_y(&self) -> f64 {
        self.shift_y
    }

    pub fn scaled_width(&self) -> f64 {
        self.scaled_width
    }

    pub fn scaled_height(&self) -> f64 {
        self.scaled_height
    }

    /// Convert an image-space vertex to canvas coordinates.
    ///
    /// Each axis is mapped on its own, so a NaN component stays NaN without
    /// affecting the other axis.
    pub fn map_point(&self, vertex: Vertex) -> Point {
        Point::new(
            vertex.x * self.scale + self.shift_x,
            vertex.y * self.scale + self.shift_y,
        )
    }

    /// The canvas-space rectangle covered by the scaled image.
    pub fn image_rect(&self) -> Rect {
        Rect::new(
            self.shift_x,
            self.shift_y,
            self.shift_x + self.scaled_width,
            self.shift_y + self.scaled_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(cw: f64, ch: f64, iw: f64, ih: f64) -> RenderContext {
        compute_fit_transform(Size::new(cw, ch), Size::new(iw, ih)).unwrap()
    }

    #[test]
    fn test_wide_image_in_square_canvas() {
        let ctx = fit(400.0, 400.0, 200.0, 100.0);
        assert!((ctx.scale() - 2.0).abs() < f64::EPSILON);
        assert!(ctx.shift_x().abs() < f64::EPSILON);
        assert!((ctx.shift_y() - 100.0).abs() < f64::EPSILON);
        assert!((ctx.scaled_width() - 400.0).abs() < f64::EPSILON);
        assert!((ctx.scaled_height() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tall_image_shrinks_to_fit() {
        let ctx = fit(300.0, 200.0, 100.0, 400.0);
        assert!((ctx.scale() - 0.5).abs() < f64::EPSILON);
        assert!((ctx.shift_x() - 125.0).abs() < f64::EPSILON);
        assert!(ctx.shift_y().abs() < f64::EPSILON);
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let cases = [
            (400.0, 400.0, 200.0, 100.0),
            (640.0, 480.0, 1920.0, 1080.0),
            (123.0, 457.0, 31.0, 17.0),
            (1.0, 1000.0, 5000.0, 3.0),
            (800.0, 600.0, 800.0, 600.0),
        ];
        for (cw, ch, iw, ih) in cases {
            let ctx = fit(cw, ch, iw, ih);
            let scaled_ratio = ctx.scaled_width() / ctx.scaled_height();
            assert!((scaled_ratio - iw / ih).abs() < 1e-9, "case {cw}x{ch} / {iw}x{ih}");
            // Fit, never crop.
            assert!(ctx.scaled_width() <= cw + 1e-9);
            assert!(ctx.scaled_height() <= ch + 1e-9);
        }
    }

    #[test]
    fn test_origin_maps_to_shift() {
        let ctx = fit(400.0, 400.0, 200.0, 100.0);
        let origin = ctx.map_point(Vertex::new(0.0, 0.0));
        assert!((origin.x - ctx.shift_x()).abs() < f64::EPSILON);
        assert!((origin.y - ctx.shift_y()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mapping_is_increasing_affine() {
        let ctx = fit(640.0, 480.0, 1000.0, 500.0);
        let a = ctx.map_point(Vertex::new(10.0, 20.0));
        let b = ctx.map_point(Vertex::new(11.0, 21.0));
        let c = ctx.map_point(Vertex::new(12.0, 22.0));
        assert!(b.x > a.x && b.y > a.y);
        // Equal steps in image space give equal steps on the canvas.
        assert!(((b.x - a.x) - (c.x - b.x)).abs() < 1e-9);
        assert!(((b.x - a.x) - ctx.scale()).abs() < 1e-9);
        assert!(((b.y - a.y) - ctx.scale()).abs() < 1e-9);
    }

    #[test]
    fn test_image_corner_maps_to_rect_corner() {
        let ctx = fit(400.0, 400.0, 200.0, 100.0);
        let corner = ctx.map_point(Vertex::new(200.0, 100.0));
        let rect = ctx.image_rect();
        assert!((corner.x - rect.x1).abs() < 1e-9);
        assert!((corner.y - rect.y1).abs() < 1e-9);
        assert_eq!(rect, Rect::new(0.0, 100.0, 400.0, 300.0));
    }

    #[test]
    fn test_nan_propagates_per_axis() {
        let ctx = fit(400.0, 400.0, 200.0, 100.0);
        let mapped = ctx.map_point(Vertex::new(f64::NAN, 10.0));
        assert!(mapped.x.is_nan());
        assert!((mapped.y - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_canvas_rejected() {
        for (cw, ch) in [(f64::NAN, 400.0), (400.0, f64::NAN), (f64::INFINITY, 400.0), (-1.0, 400.0)] {
            let result = compute_fit_transform(Size::new(cw, ch), Size::new(200.0, 100.0));
            assert!(
                matches!(result, Err(TransformError::InvalidDimension { .. })),
                "canvas {cw}x{ch} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        for (iw, ih) in [(0.0, 100.0), (100.0, 0.0), (-5.0, 10.0), (f64::NAN, 10.0), (f64::INFINITY, 10.0)] {
            let result = compute_fit_transform(Size::new(400.0, 400.0), Size::new(iw, ih));
            assert!(
                matches!(result, Err(TransformError::InvalidDimension { .. })),
                "{iw}x{ih} should be rejected"
            );
        }
    }
}
