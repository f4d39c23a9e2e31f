//! CPU raster surface backed by an RGBA pixel buffer.

use crate::renderer::{RenderError, RenderResult, Surface};
use crate::style::SerializableColor;
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, Pixel, Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_hollow_rect_mut};
use kurbo::{Circle, Point, Rect, Size, Stroke};
use peniko::Color;

/// Primitives are clamped to this many pixels outside the surface so huge
/// coordinates never turn into huge line walks.
const CLIP_MARGIN: f64 = 16.0;

/// Circles with a larger radius are not drawn.
const MAX_RADIUS: f64 = 65_536.0;

const MASK_ON: Luma<u8> = Luma([255]);

/// Surface that rasterizes into an in-memory RGBA image.
pub struct RasterSurface {
    pixels: RgbaImage,
}

impl RasterSurface {
    /// Create a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: SerializableColor) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba(background.to_rgba8())),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Encode the current contents as PNG.
    pub fn to_png(&self) -> RenderResult<Vec<u8>> {
        encode_png(self.pixels.as_raw(), self.pixels.width(), self.pixels.height())
    }

    fn clamp_x(&self, x: f64) -> i32 {
        x.clamp(-CLIP_MARGIN, self.pixels.width() as f64 + CLIP_MARGIN).round() as i32
    }

    fn clamp_y(&self, y: f64) -> i32 {
        y.clamp(-CLIP_MARGIN, self.pixels.height() as f64 + CLIP_MARGIN).round() as i32
    }

    /// Blend `pixel` exactly once onto every pixel that `draw` marks.
    ///
    /// `draw` paints into a mask covering `[x0, y0]..=[x1, y1]` clipped to the
    /// surface and receives the mask origin in surface coordinates. Strokes
    /// that touch a pixel more than once still blend it a single time.
    fn composite(
        &mut self,
        [x0, y0, x1, y1]: [i32; 4],
        pixel: Rgba<u8>,
        draw: impl FnOnce(&mut GrayImage, (i32, i32)),
    ) {
        let (x0, y0) = (x0.max(0), y0.max(0));
        let x1 = x1.min(self.pixels.width() as i32 - 1);
        let y1 = y1.min(self.pixels.height() as i32 - 1);
        if x1 < x0 || y1 < y0 {
            return;
        }

        let mut mask = GrayImage::new((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
        draw(&mut mask, (x0, y0));
        for (mx, my, coverage) in mask.enumerate_pixels() {
            if coverage[0] > 0 {
                self.pixels
                    .get_pixel_mut(x0 as u32 + mx, y0 as u32 + my)
                    .blend(&pixel);
            }
        }
    }
}

/// One-pixel ring offsets and per-ring color for a stroke width.
///
/// Widths below one pixel are drawn as a single ring with proportionally
/// reduced alpha; wider strokes as adjacent rings centered on the path.
fn stroke_rings(stroke: &Stroke, color: Color) -> Option<(Vec<i32>, Rgba<u8>)> {
    if !stroke.width.is_finite() || stroke.width <= 0.0 {
        return None;
    }
    let rings = stroke.width.round().max(1.0) as i32;
    let offsets = (0..rings).map(|k| k - (rings - 1) / 2).collect();

    let [r, g, b, a] = SerializableColor::from(color).to_rgba8();
    let coverage = stroke.width.min(1.0);
    let alpha = (a as f64 * coverage).round() as u8;
    Some((offsets, Rgba([r, g, b, alpha])))
}

impl Surface for RasterSurface {
    fn size(&self) -> Size {
        Size::new(self.pixels.width() as f64, self.pixels.height() as f64)
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: Rect) {
        let dest = dest.abs();
        if !dest.is_finite() || image.width() == 0 || image.height() == 0 {
            log::debug!("Skipping image draw into {:?}", dest);
            return;
        }
        let width = dest.width().round().max(1.0) as u32;
        let height = dest.height().round().max(1.0) as u32;
        let scaled = if (width, height) == image.dimensions() {
            image.clone()
        } else {
            imageops::resize(image, width, height, FilterType::Triangle)
        };
        imageops::overlay(&mut self.pixels, &scaled, dest.x0.round() as i64, dest.y0.round() as i64);
    }

    fn stroke_rect(&mut self, stroke: &Stroke, color: Color, rect: Rect) {
        if !rect.is_finite() {
            log::debug!("Skipping rectangle with non-finite corners {:?}", rect);
            return;
        }
        let Some((offsets, pixel)) = stroke_rings(stroke, color) else {
            return;
        };
        let rect = rect.abs();
        let (left, top) = (self.clamp_x(rect.x0), self.clamp_y(rect.y0));
        let (right, bottom) = (self.clamp_x(rect.x1), self.clamp_y(rect.y1));
        let outer = offsets.iter().copied().max().unwrap_or(0);
        let bounds = [left - outer, top - outer, right + outer, bottom + outer];

        self.composite(bounds, pixel, |mask, (ox, oy)| {
            for offset in offsets {
                let (x0, y0) = (left - offset, top - offset);
                let (x1, y1) = (right + offset, bottom + offset);
                if x1 < x0 || y1 < y0 {
                    continue;
                }
                let ring = imageproc::rect::Rect::at(x0 - ox, y0 - oy).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
                draw_hollow_rect_mut(mask, ring, MASK_ON);
            }
        });
    }

    fn stroke_circle(&mut self, stroke: &Stroke, color: Color, circle: Circle) {
        if !circle.center.is_finite() || !circle.radius.is_finite() || circle.radius <= 0.0 {
            log::debug!("Skipping circle {:?}", circle);
            return;
        }
        let Some((offsets, pixel)) = stroke_rings(stroke, color) else {
            return;
        };
        let outer = offsets.iter().copied().max().unwrap_or(0);
        let reach = circle.radius + outer as f64 + CLIP_MARGIN;
        let (width, height) = (self.pixels.width() as f64, self.pixels.height() as f64);
        let Point { x, y } = circle.center;
        if x + reach < 0.0 || y + reach < 0.0 || x - reach > width || y - reach > height {
            return;
        }
        if circle.radius > MAX_RADIUS {
            log::debug!("Skipping circle with radius {}", circle.radius);
            return;
        }

        let (cx, cy) = (x.round() as i32, y.round() as i32);
        let radius = circle.radius.round() as i32;
        let extent = radius + outer;
        let bounds = [cx - extent, cy - extent, cx + extent, cy + extent];

        self.composite(bounds, pixel, |mask, (ox, oy)| {
            for offset in offsets {
                let ring_radius = radius + offset;
                if ring_radius > 0 {
                    draw_hollow_circle_mut(mask, (cx - ox, cy - oy), ring_radius, MASK_ON);
                }
            }
        });
    }
}

/// Encode RGBA pixel data to PNG bytes.
pub fn encode_png(rgba_data: &[u8], width: u32, height: u32) -> RenderResult<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::Encode(format!("Failed to write PNG header: {}", e)))?;
        writer
            .write_image_data(rgba_data)
            .map_err(|e| RenderError::Encode(format!("Failed to write PNG data: {}", e)))?;
    }
    Ok(png_data)
}
