//! Validated runtime configuration for voxel carving.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_CUBE_SIZE;

/// Sampling configuration shared by the carving engine and the surface
/// extractor.
///
/// # Examples
/// ```
/// use config::CarveConfig;
/// let cfg = CarveConfig::new(5).expect("valid config");
/// assert_eq!(cfg.cube_size, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarveConfig {
    /// Lattice step in pixels between sampled voxels.
    pub cube_size: u32,
}

impl CarveConfig {
    /// Builds a configuration, rejecting a zero sampling step and steps that
    /// do not fit the signed voxel coordinate range.
    ///
    /// # Examples
    /// ```
    /// use config::{CarveConfig, ConfigError};
    /// assert_eq!(CarveConfig::new(0), Err(ConfigError::InvalidCubeSize(0)));
    /// ```
    pub fn new(cube_size: u32) -> Result<Self, ConfigError> {
        if cube_size == 0 {
            return Err(ConfigError::InvalidCubeSize(cube_size));
        }
        if i32::try_from(cube_size).is_err() {
            return Err(ConfigError::CubeSizeTooLarge(cube_size));
        }
        Ok(Self { cube_size })
    }

    /// Re-checks a configuration that may have been deserialized or built
    /// with struct literal syntax.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.cube_size).map(|_| ())
    }
}

impl Default for CarveConfig {
    fn default() -> Self {
        Self {
            cube_size: DEFAULT_CUBE_SIZE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Raised when the sampling step is zero.
    #[error("cube_size must be positive: {0}")]
    InvalidCubeSize(u32),

    /// Raised when the sampling step exceeds `i32::MAX`.
    #[error("cube_size {0} exceeds the voxel coordinate range")]
    CubeSizeTooLarge(u32),
}
