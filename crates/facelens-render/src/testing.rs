//! Recording surface for tests.

use crate::renderer::Surface;
use image::RgbaImage;
use kurbo::{Circle, Rect, Size, Stroke};
use peniko::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Image { width: u32, height: u32, dest: Rect },
    Rect { width: f64, rect: Rect },
    Circle { width: f64, circle: Circle },
}

/// Surface that records every call instead of drawing.
pub struct RecordingSurface {
    size: Size,
    pub commands: Vec<DrawCommand>,
    pub colors: Vec<Color>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            commands: Vec::new(),
            colors: Vec::new(),
        }
    }

    pub fn rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<Circle> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { circle, .. } => Some(*circle),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: Rect) {
        self.commands.push(DrawCommand::Image {
            width: image.width(),
            height: image.height(),
            dest,
        });
    }

    fn stroke_rect(&mut self, stroke: &Stroke, color: Color, rect: Rect) {
        self.commands.push(DrawCommand::Rect { width: stroke.width, rect });
        self.colors.push(color);
    }

    fn stroke_circle(&mut self, stroke: &Stroke, color: Color, circle: Circle) {
        self.commands.push(DrawCommand::Circle { width: stroke.width, circle });
        self.colors.push(color);
    }
}

/// Axis-aligned four-corner poly.
pub fn rect_poly(x0: f64, y0: f64, x1: f64, y1: f64) -> facelens_core::BoundingPoly {
    use facelens_core::Vertex;
    facelens_core::BoundingPoly::new(vec![
        Vertex::new(x0, y0),
        Vertex::new(x1, y0),
        Vertex::new(x1, y1),
        Vertex::new(x0, y1),
    ])
}
