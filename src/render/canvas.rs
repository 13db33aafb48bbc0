//! Vector drawing surface recorded as a display list
//!
//! The canvas fixes its device transform when it is created, then records
//! filled and stroked closed paths in tiling coordinates. Nothing touches
//! pixels until the display list is handed to a backend, so the same
//! recording can be rasterized and exported as SVG.

use crate::io::error::{Result, invalid_parameter};
use crate::math::affine::Affine;
use crate::math::geometry::Vec2;

/// How stroke segments meet at path corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Corner cut straight across the outer edge
    #[default]
    Bevel,
    /// Corner rounded with a disc of the stroke width
    Round,
}

impl LineJoin {
    /// SVG `stroke-linejoin` keyword
    pub const fn svg_keyword(self) -> &'static str {
        match self {
            Self::Bevel => "bevel",
            Self::Round => "round",
        }
    }
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Closed polygon filled then stroked
    Polygon {
        /// Vertices in tiling coordinates, implicitly closed
        points: Vec<Vec2>,
        /// Fill colour
        fill: [u8; 4],
        /// Stroke colour
        stroke: [u8; 4],
        /// Stroke width in tiling units at the time of recording
        line_width: f64,
        /// Join style at the time of recording
        line_join: LineJoin,
    },
}

/// Vector canvas with a device transform and stroke style
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    transform: Affine,
    line_width: f64,
    line_join: LineJoin,
    commands: Vec<DrawCommand>,
}

impl Canvas {
    /// Create a canvas whose tiling origin sits at the centre
    ///
    /// The plane is scaled by `0.5 · √(w² + h²)/√2`, so the unit wheel spans
    /// half the canvas along each axis of a square canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn centered(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "canvas",
                &format!("{width}x{height}"),
                &"dimensions must be non-zero",
            ));
        }

        let (w, h) = (f64::from(width), f64::from(height));
        let wheel_radius = w.hypot(h) / std::f64::consts::SQRT_2;
        let transform = Affine::IDENTITY
            .translate(w / 2.0, h / 2.0)
            .scale_by(0.5 * wheel_radius);

        Ok(Self {
            width,
            height,
            transform,
            line_width: 1.0 / transform.scale,
            line_join: LineJoin::default(),
            commands: Vec::new(),
        })
    }

    /// Set the stroke width in tiling units
    pub const fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    /// Set the stroke join style
    pub const fn set_line_join(&mut self, join: LineJoin) {
        self.line_join = join;
    }

    /// Record a closed polygon, filled first and then outlined with the current stroke style
    pub fn fill_and_stroke(&mut self, points: &[Vec2], fill: [u8; 4], stroke: [u8; 4]) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
            stroke,
            line_width: self.line_width,
            line_join: self.line_join,
        });
    }

    /// Canvas width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Tiling-to-device transform
    pub const fn transform(&self) -> Affine {
        self.transform
    }

    /// Stroke width in tiling units
    pub const fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Stroke join style
    pub const fn line_join(&self) -> LineJoin {
        self.line_join
    }

    /// Recorded operations in drawing order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}
