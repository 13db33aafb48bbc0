//! Zero-padded frame naming for source and output sequences

use crate::io::configuration::{
    DEFAULT_FRAME_PREFIX, DEFAULT_INDEX_DIGITS, RASTER_EXTENSION, SOURCE_EXTENSION,
    VECTOR_EXTENSION,
};
use std::path::{Path, PathBuf};

/// Maps frame indices to file stems such as `a_000123`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameNaming {
    prefix: String,
    digits: usize,
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_PREFIX, DEFAULT_INDEX_DIGITS)
    }
}

impl FrameNaming {
    /// Naming with a prefix and a minimum number of index digits
    pub fn new(prefix: impl Into<String>, digits: usize) -> Self {
        Self {
            prefix: prefix.into(),
            digits,
        }
    }

    /// File stem for a frame; indices wider than the padding are kept whole
    pub fn stem(&self, index: usize) -> String {
        format!("{}{index:0>width$}", self.prefix, width = self.digits)
    }

    /// Source image path for a frame inside `dir`
    pub fn source_path(&self, dir: &Path, index: usize) -> PathBuf {
        dir.join(format!("{}.{SOURCE_EXTENSION}", self.stem(index)))
    }

    /// Raster output path for a frame inside `dir`
    pub fn raster_path(&self, dir: &Path, index: usize) -> PathBuf {
        dir.join(format!("{}.{RASTER_EXTENSION}", self.stem(index)))
    }

    /// Vector output path for a frame inside `dir`
    pub fn vector_path(&self, dir: &Path, index: usize) -> PathBuf {
        dir.join(format!("{}.{VECTOR_EXTENSION}", self.stem(index)))
    }

    /// Frame index encoded in a file name, if it follows this naming
    pub fn parse_index(&self, path: &Path) -> Option<usize> {
        path.file_stem()?
            .to_str()?
            .strip_prefix(self.prefix.as_str())?
            .parse()
            .ok()
    }
}
