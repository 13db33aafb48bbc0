//! Error types and frame context for rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling and rendering operations
#[derive(Debug)]
pub enum RenderError {
    /// Failed to load a source frame from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source data doesn't meet pipeline requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A luminance sample mapped outside the source frame
    ///
    /// Only raised under the strict bounds policy, or for coordinates that
    /// are not finite numbers.
    SampleOutOfBounds {
        /// Mapped horizontal pixel coordinate
        x: f64,
        /// Mapped vertical pixel coordinate
        y: f64,
        /// Source frame width in pixels
        width: usize,
        /// Source frame height in pixels
        height: usize,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// A single frame failed; wraps the underlying cause
    Frame {
        /// Index of the frame being rendered
        index: usize,
        /// Underlying failure
        source: Box<RenderError>,
    },

    /// A batch finished with some frames not produced
    FramesFailed {
        /// Indices of frames that failed, in ascending order
        failed: Vec<usize>,
        /// Number of frames attempted
        total: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SampleOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Sample at ({x:.3}, {y:.3}) lies outside the {width}x{height} source frame"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Frame { index, source } => {
                write!(f, "Frame {index}: {source}")
            }
            Self::FramesFailed { failed, total } => {
                let listed = failed
                    .iter()
                    .take(10)
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                let more = if failed.len() > 10 { ", ..." } else { "" };
                write!(
                    f,
                    "{} of {total} frames failed: [{listed}{more}]",
                    failed.len()
                )
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Frame { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl RenderError {
    /// Frame index this error is attributed to, if any
    pub const fn frame_index(&self) -> Option<usize> {
        match self {
            Self::Frame { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Innermost error, with any frame context removed
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Frame { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Convenience type alias for rendering results
pub type Result<T> = std::result::Result<T, RenderError>;

/// Attributes errors to the frame being rendered
pub trait WithContext<T> {
    /// Wrap any error in a [`RenderError::Frame`] for the given index
    ///
    /// An error that already carries frame context is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates the original error with the frame context applied
    fn for_frame(self, index: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<RenderError>,
{
    fn for_frame(self, index: usize) -> Result<T> {
        self.map_err(|e| match e.into() {
            framed @ RenderError::Frame { .. } => framed,
            other => RenderError::Frame {
                index,
                source: Box::new(other),
            },
        })
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RenderError {
    RenderError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> RenderError {
    RenderError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a path-related error
pub fn path_error(msg: &str) -> RenderError {
    RenderError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
