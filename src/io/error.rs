//! Error types and context management for stereogram synthesis

use std::fmt;
use std::path::PathBuf;

use crate::io::store::ColorMode;

/// Main error type for all synthesis operations
#[derive(Debug)]
pub enum StereogramError {
    /// A numeric parameter is out of range, or a required input is unusable
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An image has zero width or height
    InvalidDimensions {
        /// Which image was rejected (depth map, pattern, ...)
        subject: &'static str,
        /// Width of the rejected image
        width: usize,
        /// Height of the rejected image
        height: usize,
    },

    /// An image cannot be coerced to the requested channel layout
    UnsupportedColorMode {
        /// Layout that was asked for
        requested: ColorMode,
        /// Description of the layout that was found
        found: String,
    },

    /// The image source has no image under the given identifier
    ImageNotFound {
        /// Identifier that was looked up
        image_id: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a generated image to disk
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

    /// An internal invariant did not hold
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for StereogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidDimensions {
                subject,
                width,
                height,
            } => {
                write!(
                    f,
                    "Invalid {subject} dimensions {width}x{height}: width and height must be at least 1"
                )
            }
            Self::UnsupportedColorMode { requested, found } => {
                write!(f, "Cannot convert {found} image to {requested}")
            }
            Self::ImageNotFound { image_id } => {
                write!(f, "No image with id '{image_id}'")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
        }
    }
}

impl std::error::Error for StereogramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, StereogramError>;

/// Re-labels collaborator failures as an invalid input parameter
pub trait WithParameter<T> {
    /// Convert lookup and decode failures into `InvalidParameter` for the named input
    ///
    /// # Errors
    ///
    /// Propagates the original error as `InvalidParameter`, keeping its message as the reason.
    /// Parameter, dimension and color mode errors pass through unchanged.
    fn for_parameter(self, parameter: &'static str, value: &str) -> Result<T>;
}

impl<T, E> WithParameter<T> for std::result::Result<T, E>
where
    E: Into<StereogramError>,
{
    fn for_parameter(self, parameter: &'static str, value: &str) -> Result<T> {
        self.map_err(|e| {
            let error = e.into();
            match error {
                // Already names the offending input or a more specific kind
                StereogramError::InvalidParameter { .. }
                | StereogramError::InvalidDimensions { .. }
                | StereogramError::UnsupportedColorMode { .. } => error,
                other => invalid_parameter(parameter, &value, &other),
            }
        })
    }
}

impl From<image::ImageError> for StereogramError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for StereogramError {
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
) -> StereogramError {
    StereogramError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimensions error
pub const fn invalid_dimensions(
    subject: &'static str,
    width: usize,
    height: usize,
) -> StereogramError {
    StereogramError::InvalidDimensions {
        subject,
        width,
        height,
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> StereogramError {
    StereogramError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
