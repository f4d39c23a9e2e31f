//! Overlay styling.

use kurbo::Stroke;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Parse a CSS color string like "#f00", "#ff0000", "#ff000080" or "rgb(255, 0, 0)".
pub fn parse_color(s: &str) -> Option<SerializableColor> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        return match hex.len() {
            3 => {
                let nibble = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Some(SerializableColor::new(nibble(0)?, nibble(1)?, nibble(2)?, 255))
            }
            6 => Some(SerializableColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
            8 => Some(SerializableColor::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        };
    }
    if let Some(inner) = s.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
        let parts: Vec<u8> = inner
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .ok()?;
        if let [r, g, b] = parts[..] {
            return Some(SerializableColor::new(r, g, b, 255));
        }
    }
    None
}

/// Colors and stroke geometry for annotation overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Stroke color for boxes and landmark markers.
    pub highlight_color: SerializableColor,
    /// Line width of bounding boxes.
    pub box_line_width: f64,
    /// Radius of landmark markers.
    pub landmark_radius: f64,
    /// Line width of landmark markers.
    pub landmark_line_width: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            highlight_color: SerializableColor::red(),
            box_line_width: 1.0,
            landmark_radius: 3.0,
            landmark_line_width: 0.5,
        }
    }
}

impl OverlayStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the highlight color.
    pub fn with_highlight(mut self, color: SerializableColor) -> Self {
        self.highlight_color = color;
        self
    }

    /// Set the bounding box line width.
    pub fn with_box_line_width(mut self, width: f64) -> Self {
        self.box_line_width = width;
        self
    }

    /// Set landmark marker radius and line width.
    pub fn with_landmark_marker(mut self, radius: f64, line_width: f64) -> Self {
        self.landmark_radius = radius;
        self.landmark_line_width = line_width;
        self
    }

    pub fn highlight(&self) -> Color {
        self.highlight_color.into()
    }

    pub fn box_stroke(&self) -> Stroke {
        Stroke::new(self.box_line_width)
    }

    pub fn landmark_stroke(&self) -> Stroke {
        Stroke::new(self.landmark_line_width)
    }
}
