//! # Configuration Constants
//!
//! Centralized constants for the silhouette carving pipeline.
//!
//! ## Categories
//!
//! - **Sampling**: Voxel lattice density
//! - **Views**: Acquisition angles and frame reconciliation
//! - **Imaging**: Foreground threshold and accepted file types
//! - **Precision**: Floating-point comparison tolerances

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default lattice step, in pixels, between sampled voxels.
///
/// Smaller values give a denser carve at cubic cost in candidate count.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CUBE_SIZE;
/// assert_eq!(DEFAULT_CUBE_SIZE, 10);
/// ```
pub const DEFAULT_CUBE_SIZE: u32 = 10;

// =============================================================================
// VIEW CONSTANTS
// =============================================================================

/// Angle key of the top view.
pub const TOP_ANGLE: i32 = -1;

/// Angle key of the front view.
pub const FRONT_ANGLE: i32 = 0;

/// Angle key of the right view.
pub const RIGHT_ANGLE: i32 = 90;

/// Angle key of the back view.
pub const BACK_ANGLE: i32 = 180;

/// Angle key of the left view.
pub const LEFT_ANGLE: i32 = 270;

/// Every angle that must be present before projections can be assembled.
///
/// # Example
///
/// ```rust
/// use config::constants::{REQUIRED_ANGLES, TOP_ANGLE};
/// assert!(REQUIRED_ANGLES.contains(&TOP_ANGLE));
/// ```
pub const REQUIRED_ANGLES: [i32; 5] = [TOP_ANGLE, FRONT_ANGLE, RIGHT_ANGLE, BACK_ANGLE, LEFT_ANGLE];

/// Rotation about Y, in degrees, that brings front/top candidates into the
/// left projection's viewing frame.
pub const LEFT_VIEW_ROTATION_DEGREES: f32 = -90.0;

/// Rotation about X, in degrees, applied to the final surface so it renders
/// upright (image rows grow downward, world Y grows upward).
pub const DISPLAY_FLIP_DEGREES: f32 = 180.0;

// =============================================================================
// IMAGING CONSTANTS
// =============================================================================

/// Luma values strictly above this threshold are foreground.
///
/// # Example
///
/// ```rust
/// use config::constants::FOREGROUND_THRESHOLD;
/// let pixel: u8 = 1;
/// assert!(pixel > FOREGROUND_THRESHOLD);
/// ```
pub const FOREGROUND_THRESHOLD: u8 = 0;

/// Luma written for foreground pixels when a mask is materialized.
pub const FOREGROUND_VALUE: u8 = 255;

/// Lower-case file extensions the directory loader accepts.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for comparing transformed coordinates.
///
/// Grid/centered conversions and rotation inverses must agree within this
/// bound.
///
/// # Example
///
/// ```rust
/// use config::constants::ROUND_TRIP_TOLERANCE;
///
/// fn approximately_equal(a: f32, b: f32) -> bool {
///     (a - b).abs() < ROUND_TRIP_TOLERANCE
/// }
/// assert!(approximately_equal(1.0, 1.0 + 1e-5));
/// ```
pub const ROUND_TRIP_TOLERANCE: f32 = 1e-3;
