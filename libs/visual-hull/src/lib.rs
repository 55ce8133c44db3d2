//! # Visual Hull
//!
//! Shape-from-silhouette reconstruction from five fixed orthogonal views
//! (front, right, back, left, top).
//!
//! ## Architecture
//!
//! ```text
//! SilhouetteLoader → SilhouetteSet → OrthogonalProjection
//!     → carve (front ∩ top, then left) → OccupancyVolume
//!     → extract_surface (face exposure) → PointCloud
//! ```
//!
//! The whole pipeline is synchronous and single threaded. Its memory
//! ceiling is the dense occupancy volume of `width × height²` cells.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use config::CarveConfig;
//! use visual_hull::{reconstruct_with, DirectoryLoader};
//!
//! let result = reconstruct_with(&DirectoryLoader::new("./silhouettes"), &CarveConfig::default())?;
//! result.surface.save_xyz("surface.xyz")?;
//! # Ok::<(), visual_hull::HullError>(())
//! ```

pub mod angle;
pub mod carve;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod point_cloud;
pub mod projection;
pub mod silhouette;
pub mod surface;
pub mod transform;
pub mod volume;

pub use angle::AngleKey;
pub use error::{HullError, HullResult};
pub use pipeline::{reconstruct, reconstruct_with, Reconstruction};
pub use point_cloud::PointCloud;
pub use projection::OrthogonalProjection;
pub use silhouette::{DirectoryLoader, ImageSize, InMemoryLoader, Mask, SilhouetteLoader, SilhouetteSet};
pub use volume::{BoundaryBox, OccupancyVolume};
