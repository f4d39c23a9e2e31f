//! FaceLens Render Library
//!
//! Surface abstraction and the annotation overlay renderer.
//! The default surface rasterizes on the CPU into an RGBA buffer.

mod loader;
mod overlay;
mod pipeline;
mod raster;
mod renderer;
mod style;

pub use loader::load_image;
pub use overlay::{OverlaySummary, draw_bounding_box, draw_face, draw_landmarks, render_annotations};
pub use pipeline::{render, render_decoded};
pub use raster::{RasterSurface, encode_png};
pub use renderer::{RenderError, RenderResult, Surface};
pub use style::{OverlayStyle, SerializableColor, parse_color};

#[cfg(test)]
pub(crate) mod testing;
