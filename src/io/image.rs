//! PNG and SVG export with all-or-nothing file replacement
//!
//! Each artifact is written under a temporary name and renamed into place
//! once complete, so an interrupted export never leaves a file that looks
//! like a finished frame.

use crate::io::error::{RenderError, Result};
use crate::render::RenderedFrame;
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

fn commit(partial: &Path, path: &Path) -> Result<()> {
    std::fs::rename(partial, path).map_err(|e| {
        let _ = std::fs::remove_file(partial);
        RenderError::FileSystem {
            path: path.to_path_buf(),
            operation: "rename",
            source: e,
        }
    })
}

/// Save a raster image as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
/// - The finished file cannot be moved into place
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;
    let partial = partial_path(output_path);

    img.save_with_format(&partial, ImageFormat::Png)
        .map_err(|e| {
            let _ = std::fs::remove_file(&partial);
            RenderError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            }
        })?;

    commit(&partial, output_path)
}

/// Save an SVG document
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The document cannot be written
/// - The finished file cannot be moved into place
pub fn export_svg(document: &svg::Document, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;
    let partial = partial_path(output_path);

    svg::save(&partial, document).map_err(|e| {
        let _ = std::fs::remove_file(&partial);
        RenderError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "write svg",
            source: e,
        }
    })?;

    commit(&partial, output_path)
}

/// Write every artifact of a rendered frame
///
/// The vector copy, when present, is written before the raster so that an
/// existing raster always marks a completed frame.
///
/// # Errors
///
/// Returns an error if any artifact cannot be written
pub fn export_frame(frame: &RenderedFrame, raster_path: &Path, vector_path: &Path) -> Result<()> {
    if let Some(document) = &frame.vector {
        export_svg(document, vector_path)?;
    }
    export_png(&frame.raster, raster_path)
}
