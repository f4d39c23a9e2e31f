//! FaceLens Application
//!
//! Command-line shell that renders detection overlays onto a PNG.

mod app;
mod cli;

pub use app::{AppConfig, AppError, RenderJob, run};
pub use cli::Cli;
