//! Application configuration and the render-to-file run.

use facelens_render::{OverlayStyle, OverlaySummary, RasterSurface, RenderError, SerializableColor, render};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid color '{0}'")]
    Color(String),
    #[error("Surface size must be non-zero, got {width}x{height}")]
    SurfaceSize { width: u32, height: u32 },
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Settings for a render run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output surface width in pixels.
    pub width: u32,
    /// Output surface height in pixels.
    pub height: u32,
    /// Letterbox background.
    pub background_color: SerializableColor,
    /// Overlay colors and stroke sizes.
    pub style: OverlayStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background_color: SerializableColor::white(),
            style: OverlayStyle::default(),
        }
    }
}

impl AppConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// What to render and where to put it.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub image_url: String,
    /// Path to the response JSON, or `-` for stdin.
    pub response: PathBuf,
    pub output: PathBuf,
}

/// Read the response, render it over the image and write a PNG.
pub fn run(job: &RenderJob, config: &AppConfig) -> Result<OverlaySummary, AppError> {
    if config.width == 0 || config.height == 0 {
        return Err(AppError::SurfaceSize {
            width: config.width,
            height: config.height,
        });
    }

    let raw_json = read_response(&job.response)?;
    let mut surface = RasterSurface::new(config.width, config.height, config.background_color);
    let summary = render(&job.image_url, &mut surface, &raw_json, &config.style)?;

    let png = surface.to_png()?;
    std::fs::write(&job.output, png).map_err(|source| AppError::Write {
        path: job.output.clone(),
        source,
    })?;
    log::info!("Wrote {}", job.output.display());

    Ok(summary)
}

fn read_response(path: &Path) -> Result<String, AppError> {
    let read_error = |source| AppError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map_err(read_error)?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).map_err(read_error)
}
