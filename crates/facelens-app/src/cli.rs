//! Command-line arguments.

use crate::app::{AppConfig, AppError, RenderJob};
use clap::Parser;
use facelens_render::parse_color;
use std::path::PathBuf;

/// Draw face detection results over the image they were computed for.
#[derive(Debug, Parser)]
#[command(name = "facelens", version, about)]
pub struct Cli {
    /// Image to annotate: a file path, file:// URL or base64 data: URL.
    pub image_url: String,

    /// Detection response JSON file, or `-` to read stdin.
    pub response: PathBuf,

    /// Output PNG path.
    #[arg(short, long, default_value = "annotated.png")]
    pub output: PathBuf,

    /// JSON config file with surface size, background and overlay style.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Surface width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Overlay color, e.g. "#ff0000" or "rgb(255, 0, 0)".
    #[arg(long)]
    pub color: Option<String>,

    /// Letterbox background color.
    #[arg(long)]
    pub background: Option<String>,
}

impl Cli {
    /// Build the job and the effective config: file values first, then flags.
    pub fn resolve(self) -> Result<(RenderJob, AppConfig), AppError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(color) = &self.color {
            config.style.highlight_color = parse_color(color).ok_or_else(|| AppError::Color(color.clone()))?;
        }
        if let Some(background) = &self.background {
            config.background_color =
                parse_color(background).ok_or_else(|| AppError::Color(background.clone()))?;
        }

        let job = RenderJob {
            image_url: self.image_url,
            response: self.response,
            output: self.output,
        };
        Ok((job, config))
    }
}
