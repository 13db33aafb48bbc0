//! Single-frame pipeline: schedule, generate, normalize, sample, render
//!
//! Every frame is rendered from scratch. Nothing computed for one frame is
//! reused for another, so frames may be rendered in any order or in parallel.

use crate::io::configuration::{
    CANVAS_HEIGHT, CANVAS_WIDTH, LUMINANCE_THRESHOLD, STROKE_COLOR, STROKE_WIDTH_RATIO,
};
use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::render::canvas::{Canvas, LineJoin};
use crate::render::raster::rasterize;
use crate::render::vector::to_svg;
use crate::sampling::luminance::{BoundsPolicy, LuminanceFrame};
use crate::sampling::normalizer::{Extent, PixelMapping};
use crate::sampling::sampler::{Fill, Sampler};
use crate::tiling::pairing::RhombusMode;
use crate::tiling::schedule::IterationSchedule;
use crate::tiling::substitution::generate;
use crate::tiling::triangle::Triangle;
use image::RgbaImage;
use std::path::Path;

/// Immutable settings shared by every frame of a run
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Output width in pixels
    pub canvas_width: u32,
    /// Output height in pixels
    pub canvas_height: u32,
    /// Frame index to depth table
    pub schedule: IterationSchedule,
    /// Fixed depth for every frame, bypassing the schedule
    pub depth_override: Option<usize>,
    /// Whether co-rhombus triangles are drawn once or twice
    pub rhombus_mode: RhombusMode,
    /// Handling of samples mapped outside the source frame
    pub bounds_policy: BoundsPolicy,
    /// Mean luminance above which a tile is white
    pub luminance_threshold: f64,
    /// Outline colour
    pub stroke_color: [u8; 4],
    /// Stroke width relative to the first triangle's A–B edge
    pub stroke_width_ratio: f64,
    /// Whether to keep an SVG copy of the vector canvas
    pub emit_vector: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            schedule: IterationSchedule::default(),
            depth_override: None,
            rhombus_mode: RhombusMode::default(),
            bounds_policy: BoundsPolicy::default(),
            luminance_threshold: LUMINANCE_THRESHOLD,
            stroke_color: STROKE_COLOR,
            stroke_width_ratio: STROKE_WIDTH_RATIO,
            emit_vector: false,
        }
    }
}

/// Output of one frame
pub struct RenderedFrame {
    /// Frame index
    pub index: usize,
    /// Subdivision depth used
    pub depth: usize,
    /// Triangles in the generated tiling
    pub triangle_count: usize,
    /// Half-side of the tiling's bounding square
    pub max_dim: f64,
    /// Fill chosen for each drawn rhombus, in drawing order
    pub fills: Vec<Fill>,
    /// Rasterized canvas
    pub raster: RgbaImage,
    /// Vector canvas, when requested
    pub vector: Option<svg::Document>,
}

impl RenderedFrame {
    /// Number of rhombi drawn
    pub fn rhombus_count(&self) -> usize {
        self.fills.len()
    }

    /// Number of rhombi with the given fill
    pub fn count(&self, fill: Fill) -> usize {
        self.fills.iter().filter(|&&f| f == fill).count()
    }
}

/// Renders frames according to a fixed configuration
pub struct FrameRenderer {
    config: RenderConfig,
}

impl FrameRenderer {
    /// Create a renderer
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A canvas dimension is zero
    /// - The luminance threshold or stroke ratio is not a finite number
    pub fn new(config: RenderConfig) -> Result<Self> {
        if config.canvas_width == 0 || config.canvas_height == 0 {
            return Err(invalid_parameter(
                "canvas",
                &format!("{}x{}", config.canvas_width, config.canvas_height),
                &"dimensions must be non-zero",
            ));
        }
        if !config.luminance_threshold.is_finite() {
            return Err(invalid_parameter(
                "luminance_threshold",
                &config.luminance_threshold,
                &"must be finite",
            ));
        }
        if !config.stroke_width_ratio.is_finite() || config.stroke_width_ratio < 0.0 {
            return Err(invalid_parameter(
                "stroke_width_ratio",
                &config.stroke_width_ratio,
                &"must be finite and non-negative",
            ));
        }
        Ok(Self { config })
    }

    /// Active configuration
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Subdivision depth for a frame
    pub fn depth_for(&self, index: usize) -> usize {
        self.config
            .depth_override
            .unwrap_or_else(|| self.config.schedule.depth_for(index))
    }

    /// Render one frame from an in-memory source
    ///
    /// # Errors
    ///
    /// Returns an error, tagged with the frame index, if:
    /// - The scheduled depth exceeds the subdivision limit
    /// - The tiling extent is degenerate
    /// - A sample cannot be read under the bounds policy
    pub fn render_frame(&self, index: usize, source: &LuminanceFrame) -> Result<RenderedFrame> {
        let depth = self.depth_for(index);
        let triangles = generate(depth).for_frame(index)?;
        self.render_tiling(index, depth, &triangles, source)
            .for_frame(index)
    }

    /// Load a source frame from disk and render it
    ///
    /// # Errors
    ///
    /// Returns an error, tagged with the frame index, if the source cannot be
    /// loaded or the frame cannot be rendered
    pub fn render_frame_from_path(&self, index: usize, path: &Path) -> Result<RenderedFrame> {
        let source = LuminanceFrame::from_png_path(path).for_frame(index)?;
        self.render_frame(index, &source)
    }

    /// Render an already generated tiling against a source frame
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tiling is empty or its extent is degenerate
    /// - A sample cannot be read under the bounds policy
    pub fn render_tiling(
        &self,
        index: usize,
        depth: usize,
        triangles: &[Triangle],
        source: &LuminanceFrame,
    ) -> Result<RenderedFrame> {
        let extent = Extent::of(triangles)?;
        let mapping = PixelMapping::new(extent, source.width(), source.height());
        let sampler = Sampler::new(
            source,
            mapping,
            self.config.bounds_policy,
            self.config.luminance_threshold,
        );

        let mut canvas = Canvas::centered(self.config.canvas_width, self.config.canvas_height)?;
        if let Some(first) = triangles.first() {
            canvas.set_line_width(first.edge_length() * self.config.stroke_width_ratio);
        }
        canvas.set_line_join(LineJoin::Round);

        let rhombi = self.config.rhombus_mode.rhombi(triangles);
        let mut fills = Vec::with_capacity(rhombi.len());
        for rhombus in &rhombi {
            let fill = sampler.decide(rhombus)?;
            canvas.fill_and_stroke(&rhombus.corners(), fill.rgba(), self.config.stroke_color);
            fills.push(fill);
        }

        log::debug!(
            "frame {index}: depth {depth}, {} triangles, {} rhombi, max_dim {:.4}",
            triangles.len(),
            rhombi.len(),
            extent.max_dim()
        );

        Ok(RenderedFrame {
            index,
            depth,
            triangle_count: triangles.len(),
            max_dim: extent.max_dim(),
            fills,
            raster: rasterize(&canvas),
            vector: self.config.emit_vector.then(|| to_svg(&canvas)),
        })
    }
}
