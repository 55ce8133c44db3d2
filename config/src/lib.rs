//! # Config Crate
//!
//! Centralized configuration for the silhouette carving pipeline.
//! All magic numbers and tunable parameters are defined here so the
//! engine crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CUBE_SIZE, REQUIRED_ANGLES};
//! use config::CarveConfig;
//!
//! let cfg = CarveConfig::default();
//! assert_eq!(cfg.cube_size, DEFAULT_CUBE_SIZE);
//! assert_eq!(REQUIRED_ANGLES.len(), 5);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: Runtime configuration is checked on construction

pub mod constants;

mod carve;

pub use carve::{CarveConfig, ConfigError};
