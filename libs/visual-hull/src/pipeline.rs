//! # Reconstruction Pipeline
//!
//! Chains assembly, carving and surface extraction, then moves the surface
//! to centered coordinates and flips it upright for display.
//!
//! ```text
//! SilhouetteSet → OrthogonalProjection → carve → extract_surface
//!     → to_centered → rotate_about_x(180°)
//! ```

use config::constants::DISPLAY_FLIP_DEGREES;
use config::CarveConfig;
use tracing::info;

use crate::carve::carve;
use crate::error::HullResult;
use crate::point_cloud::PointCloud;
use crate::projection::OrthogonalProjection;
use crate::silhouette::{ImageSize, SilhouetteLoader, SilhouetteSet};
use crate::surface::extract_surface;
use crate::transform::{rotate_about_x, to_centered};

/// Output of one reconstruction run.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    /// Dense carved cloud, grid coordinates, left-view frame.
    pub carved: PointCloud,
    /// Boundary quads, centered coordinates, flipped for display.
    pub surface: PointCloud,
    /// Size shared by the input silhouettes.
    pub image_size: ImageSize,
}

/// Reconstructs a surface point cloud from a silhouette set.
///
/// The configuration and the angle set are validated before any carving.
/// An empty silhouette is not an error: it yields an empty surface.
///
/// # Examples
/// ```
/// use config::CarveConfig;
/// use visual_hull::{reconstruct, AngleKey, Mask, SilhouetteSet};
///
/// let square = Mask::from_fn(100, 100, |x, y| (40..=60).contains(&x) && (40..=60).contains(&y));
/// let set: SilhouetteSet = AngleKey::required().map(|a| (a, square.clone())).collect();
///
/// let result = reconstruct(&set, &CarveConfig::default()).unwrap();
/// assert_eq!(result.carved.len(), 27);
/// assert_eq!(result.surface.quads().count(), 24);
/// ```
pub fn reconstruct(set: &SilhouetteSet, config: &CarveConfig) -> HullResult<Reconstruction> {
    let span = tracing::info_span!("reconstruct", cube_size = config.cube_size);
    let _enter = span.enter();

    config.validate()?;
    let projection = OrthogonalProjection::assemble(set)?;
    let image_size = projection.size();

    let carved = carve(&projection, config)?;
    let grid_surface = extract_surface(&carved, config, image_size)?;
    let surface = rotate_about_x(&to_centered(&grid_surface, image_size), DISPLAY_FLIP_DEGREES);

    info!(
        size = %image_size,
        carved = carved.len(),
        surface_points = surface.len(),
        "Reconstruction complete"
    );
    Ok(Reconstruction {
        carved,
        surface,
        image_size,
    })
}

/// Loads silhouettes from `loader` and reconstructs them.
///
/// A bad configuration is reported before the loader is touched.
pub fn reconstruct_with<L: SilhouetteLoader + ?Sized>(
    loader: &L,
    config: &CarveConfig,
) -> HullResult<Reconstruction> {
    config.validate()?;
    let set = loader.load()?;
    reconstruct(&set, config)
}
