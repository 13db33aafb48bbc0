//! Vector canvas, its raster and SVG backends, and the per-frame pipeline

/// Display-list canvas with device transform and stroke style
pub mod canvas;
/// Frame pipeline and render configuration
pub mod pipeline;
/// Rasterization backend
pub mod raster;
/// SVG backend
pub mod vector;

pub use pipeline::{FrameRenderer, RenderConfig, RenderedFrame};
