//! Command-line interface for rendering ranges of frames

use crate::io::configuration::{DEFAULT_FRAME_PREFIX, DEFAULT_INDEX_DIGITS};
use crate::io::error::{RenderError, Result, WithContext, computation_error, invalid_parameter};
use crate::io::frames::FrameNaming;
use crate::io::image::export_frame;
use crate::io::progress::ProgressManager;
use crate::render::{FrameRenderer, RenderConfig};
use crate::sampling::luminance::BoundsPolicy;
use crate::tiling::pairing::RhombusMode;
use crate::tiling::substitution::checked_depth;
use clap::Parser;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "penrose-frames")]
#[command(
    author,
    version,
    about = "Render Penrose P3 tilings shaded by the luminance of video frames"
)]
/// Command-line arguments for the frame renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory holding the extracted source frames
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Directory receiving the rendered frames
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// First frame index to render
    #[arg(short, long, default_value_t = 0)]
    pub start: usize,

    /// Last frame index to render, inclusive (defaults to the first)
    #[arg(short, long)]
    pub end: Option<usize>,

    /// Subdivision depth for every frame, overriding the schedule
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// File name prefix of source and output frames
    #[arg(long, default_value = DEFAULT_FRAME_PREFIX)]
    pub prefix: String,

    /// Zero-padded width of the frame index in file names
    #[arg(long, default_value_t = DEFAULT_INDEX_DIGITS)]
    pub digits: usize,

    /// Also write the vector canvas as SVG
    #[arg(long)]
    pub svg: bool,

    /// Draw each rhombus once instead of once per triangle
    #[arg(short, long)]
    pub merge_pairs: bool,

    /// Fail a frame when a sample maps outside its source image
    #[arg(long)]
    pub strict_bounds: bool,

    /// Worker threads (defaults to one per core)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render frames even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Last frame of the requested range
    pub fn end_index(&self) -> usize {
        self.end.unwrap_or(self.start)
    }

    /// Rendering configuration selected by the flags
    ///
    /// # Errors
    ///
    /// Returns an error if the depth override is negative or too large
    pub fn render_config(&self) -> Result<RenderConfig> {
        let depth_override = self.depth.map(checked_depth).transpose()?;

        Ok(RenderConfig {
            depth_override,
            rhombus_mode: if self.merge_pairs {
                RhombusMode::MergePairs
            } else {
                RhombusMode::PerTriangle
            },
            bounds_policy: if self.strict_bounds {
                BoundsPolicy::Strict
            } else {
                BoundsPolicy::Clamp
            },
            emit_vector: self.svg,
            ..RenderConfig::default()
        })
    }
}

/// Renders a range of frames with per-frame failure isolation
pub struct FrameProcessor {
    cli: Cli,
    naming: FrameNaming,
    progress_manager: Option<ProgressManager>,
}

impl FrameProcessor {
    /// Create a new frame processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let naming = FrameNaming::new(cli.prefix.clone(), cli.digits);

        Self {
            cli,
            naming,
            progress_manager,
        }
    }

    /// Render every requested frame
    ///
    /// A failing frame is logged and skipped; the remaining frames are still
    /// rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The arguments are invalid (range, depth, source directory)
    /// - The worker pool cannot be created
    /// - Any frame failed, listing the failed indices
    pub fn process(&mut self) -> Result<()> {
        if !self.cli.source_dir.is_dir() {
            return Err(crate::io::error::path_error(
                "Source must be a directory of frames",
            ));
        }

        let renderer = FrameRenderer::new(self.cli.render_config()?)?;
        let frames = self.collect_frames()?;

        if frames.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(frames.len());
        }

        let pool = self
            .cli
            .jobs
            .map(|jobs| {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build()
                    .map_err(|e| computation_error("worker pool", &e))
            })
            .transpose()?;

        let run = || -> Vec<usize> {
            frames
                .par_iter()
                .filter_map(|&index| self.process_frame(&renderer, index).err().map(|e| (index, e)))
                .map(|(index, error)| {
                    log::error!("{error}");
                    index
                })
                .collect()
        };
        let failed = pool.map_or_else(run, |pool| pool.install(run));

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        log::info!(
            "Rendered {} of {} frames into {}",
            frames.len() - failed.len(),
            frames.len(),
            self.cli.output_dir.display()
        );

        if failed.is_empty() {
            Ok(())
        } else {
            Err(RenderError::FramesFailed {
                failed,
                total: frames.len(),
            })
        }
    }

    /// Frame indices in the requested range that still need rendering
    ///
    /// # Errors
    ///
    /// Returns an error if the range ends before it starts
    pub fn collect_frames(&self) -> Result<Vec<usize>> {
        let (start, end) = (self.cli.start, self.cli.end_index());
        if end < start {
            return Err(invalid_parameter(
                "end",
                &end,
                &format!("must not precede start frame {start}"),
            ));
        }

        Ok((start..=end)
            .filter(|&index| self.should_process_frame(index))
            .collect())
    }

    fn should_process_frame(&self, index: usize) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.naming.raster_path(&self.cli.output_dir, index);
        if output_path.exists() {
            log::info!("Skipping frame {index}: {} exists", output_path.display());
            false
        } else {
            true
        }
    }

    fn process_frame(&self, renderer: &FrameRenderer, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let source_path = self.naming.source_path(&self.cli.source_dir, index);

        let result = renderer
            .render_frame_from_path(index, &source_path)
            .and_then(|rendered| {
                export_frame(
                    &rendered,
                    &self.naming.raster_path(&self.cli.output_dir, index),
                    &self.naming.vector_path(&self.cli.output_dir, index),
                )
                .for_frame(index)
            });

        if let Some(ref pm) = self.progress_manager {
            match &result {
                Ok(()) => pm.complete_frame(index, start_time.elapsed()),
                Err(_) => pm.fail_frame(index),
            }
        }

        result
    }
}
