//! # Error Types
//!
//! Error types for silhouette loading and carving. Every failure here is a
//! configuration problem detected before any carving starts; degenerate
//! geometry (an empty silhouette) is not an error and yields an empty
//! point cloud instead.

use std::path::PathBuf;

use config::ConfigError;
use thiserror::Error;

use crate::angle::AngleKey;
use crate::silhouette::ImageSize;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while loading silhouettes or running the pipeline.
///
/// ## Example
///
/// ```rust
/// use visual_hull::{AngleKey, HullError};
///
/// let err = HullError::MissingAngle(AngleKey::TOP);
/// assert!(err.to_string().contains("-1"));
/// ```
#[derive(Error, Debug)]
pub enum HullError {
    /// Invalid carving configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A required acquisition angle has no silhouette.
    #[error("Missing silhouette for angle {0}")]
    MissingAngle(AngleKey),

    /// A silhouette does not share the size of the others.
    #[error("Silhouette for angle {angle} is {found}, expected {expected}")]
    MaskSizeMismatch {
        /// Angle of the offending mask
        angle: AngleKey,
        /// Size shared by the previously checked masks
        expected: ImageSize,
        /// Size of the offending mask
        found: ImageSize,
    },

    /// The input directory holds no usable silhouette images.
    #[error("No silhouette images found in {}", .0.display())]
    EmptyDirectory(PathBuf),

    /// Filesystem failure while reading or writing.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// An image file could not be decoded.
    #[error("Failed to decode image {}: {source}", .path.display())]
    Image {
        /// Path of the image
        path: PathBuf,
        /// Underlying decoder error
        #[source]
        source: image::ImageError,
    },
}

impl HullError {
    /// Creates an I/O error tagged with the path being accessed.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an image decoding error tagged with the image path.
    pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Image {
            path: path.into(),
            source,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for visual hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HullError::MissingAngle(AngleKey::LEFT);
        assert!(err.to_string().contains("270"));

        let err = HullError::MaskSizeMismatch {
            angle: AngleKey::BACK,
            expected: ImageSize::new(100, 100),
            found: ImageSize::new(80, 100),
        };
        let msg = err.to_string();
        assert!(msg.contains("180"));
        assert!(msg.contains("80x100"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: HullError = ConfigError::InvalidCubeSize(0).into();
        assert!(matches!(err, HullError::Config(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HullError>();
    }
}
