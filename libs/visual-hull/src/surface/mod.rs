//! # Surface Extraction
//!
//! Reduces a dense carved cloud to the faces of coarse voxel blocks that
//! sit on the object boundary.
//!
//! For each block (a cube whose corners are `cube_size` apart) and each of
//! its six faces:
//!
//! 1. All eight block corners must be occupied.
//! 2. The four voxels one step beyond the face (the outer layer) must match
//!    a boundary pattern: all empty, exactly one occupied, or exactly two
//!    occupied that share an edge of the face.
//!
//! A face passing both tests contributes its four corners to the output in
//! a fixed winding, so the result reads as a sequence of quads.

use config::{CarveConfig, ConfigError};
use glam::IVec3;
use tracing::{debug, info};

use crate::error::HullResult;
use crate::point_cloud::PointCloud;
use crate::silhouette::ImageSize;
use crate::volume::{BoundaryBox, OccupancyVolume};

// =============================================================================
// FACE DIRECTIONS
// =============================================================================

/// One of the six faces of a block, described in the grid frame.
///
/// Image rows grow downward, so "top" faces point along −Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceDirection {
    /// Human readable name, used in logs.
    pub label: &'static str,
    /// Outward unit normal.
    pub normal: IVec3,
    /// Unit corner offsets within the face plane, in cyclic order.
    ///
    /// Consecutive entries share an edge; the winding is counter-clockwise
    /// seen from outside.
    pub corners: [IVec3; 4],
}

/// The six block faces, evaluated independently.
pub const FACE_DIRECTIONS: [FaceDirection; 6] = [
    FaceDirection {
        label: "front",
        normal: IVec3::new(0, 0, 1),
        corners: [
            IVec3::new(0, 0, 0),
            IVec3::new(1, 0, 0),
            IVec3::new(1, 1, 0),
            IVec3::new(0, 1, 0),
        ],
    },
    FaceDirection {
        label: "back",
        normal: IVec3::new(0, 0, -1),
        corners: [
            IVec3::new(0, 0, 0),
            IVec3::new(0, 1, 0),
            IVec3::new(1, 1, 0),
            IVec3::new(1, 0, 0),
        ],
    },
    FaceDirection {
        label: "right",
        normal: IVec3::new(1, 0, 0),
        corners: [
            IVec3::new(0, 0, 0),
            IVec3::new(0, 1, 0),
            IVec3::new(0, 1, 1),
            IVec3::new(0, 0, 1),
        ],
    },
    FaceDirection {
        label: "left",
        normal: IVec3::new(-1, 0, 0),
        corners: [
            IVec3::new(0, 0, 0),
            IVec3::new(0, 0, 1),
            IVec3::new(0, 1, 1),
            IVec3::new(0, 1, 0),
        ],
    },
    FaceDirection {
        label: "bottom",
        normal: IVec3::new(0, 1, 0),
        corners: [
            IVec3::new(0, 0, 0),
            IVec3::new(0, 0, 1),
            IVec3::new(1, 0, 1),
            IVec3::new(1, 0, 0),
        ],
    },
    FaceDirection {
        label: "top",
        normal: IVec3::new(0, -1, 0),
        corners: [
            IVec3::new(0, 0, 0),
            IVec3::new(1, 0, 0),
            IVec3::new(1, 0, 1),
            IVec3::new(0, 0, 1),
        ],
    },
];

impl FaceDirection {
    /// Base points `(near, far)` of the two faces perpendicular to the
    /// normal, for the block whose minimum corner is `origin`.
    fn layer_bases(&self, origin: IVec3, cube_size: i32) -> (IVec3, IVec3) {
        // Component-wise max(normal, 0): the positive face sits one step up.
        let step_up = self.normal.max(IVec3::ZERO) * cube_size;
        let step_down = (-self.normal).max(IVec3::ZERO) * cube_size;
        (origin + step_down, origin + step_up)
    }

    fn layer(&self, base: IVec3, cube_size: i32) -> [IVec3; 4] {
        self.corners.map(|offset| base + offset * cube_size)
    }
}

// =============================================================================
// FACE EXPOSURE
// =============================================================================

/// Returns true when an outer-layer occupancy pattern marks a boundary.
///
/// `outer` follows the cyclic corner order of a [`FaceDirection`]. Nine of
/// the sixteen patterns qualify: all empty, any single corner, or any two
/// corners sharing an edge.
///
/// # Examples
/// ```
/// use visual_hull::surface::is_boundary_pattern;
///
/// assert!(is_boundary_pattern([false, false, false, false]));
/// assert!(is_boundary_pattern([true, true, false, false]));
/// assert!(is_boundary_pattern([true, false, false, true]));
/// assert!(!is_boundary_pattern([true, false, true, false]));
/// assert!(!is_boundary_pattern([true, true, true, false]));
/// ```
pub fn is_boundary_pattern(outer: [bool; 4]) -> bool {
    match outer.iter().filter(|&&o| o).count() {
        0 | 1 => true,
        2 => (0..4).any(|i| outer[i] && outer[(i + 1) % 4]),
        _ => false,
    }
}

/// Corners of the exposed face of a block, or `None` when the face is not
/// on the boundary.
///
/// `origin` is the block's minimum corner; corners are `cube_size` apart.
/// Lookups outside the volume read as empty.
pub fn exposed_face(
    volume: &OccupancyVolume,
    origin: IVec3,
    cube_size: i32,
    face: &FaceDirection,
) -> Option<[IVec3; 4]> {
    let (near_base, far_base) = face.layer_bases(origin, cube_size);
    let near = face.layer(near_base, cube_size);
    let far = face.layer(far_base, cube_size);

    if !near.iter().chain(far.iter()).all(|&v| volume.contains(v)) {
        return None;
    }

    let outer = face.layer(far_base + face.normal * cube_size, cube_size);
    is_boundary_pattern(outer.map(|v| volume.contains(v))).then_some(far)
}

// =============================================================================
// EXTRACTION
// =============================================================================

/// Extracts boundary quads from a dense grid-coordinate cloud.
///
/// Blocks are anchored on the cloud's boundary box minimum and stepped by
/// `cube_size` while the anchor stays below the maximum on every axis. The
/// output is in grid coordinates; an empty input yields an empty surface.
///
/// # Examples
/// ```
/// use config::CarveConfig;
/// use glam::Vec3;
/// use visual_hull::{surface::extract_surface, ImageSize, PointCloud};
///
/// // A single solid block exposes all six faces.
/// let mut block = PointCloud::new();
/// for x in [2.0, 4.0] {
///     for y in [2.0, 4.0] {
///         for z in [2.0, 4.0] {
///             block.push(Vec3::new(x, y, z));
///         }
///     }
/// }
/// let config = CarveConfig::new(2).unwrap();
/// let surface = extract_surface(&block, &config, ImageSize::new(8, 8)).unwrap();
/// assert_eq!(surface.quads().count(), 6);
/// ```
pub fn extract_surface(
    carved: &PointCloud,
    config: &CarveConfig,
    image_size: ImageSize,
) -> HullResult<PointCloud> {
    config.validate()?;

    let Some(bbox) = BoundaryBox::from_points(carved) else {
        debug!("Carved cloud is empty, no surface to extract");
        return Ok(PointCloud::new());
    };
    let volume = OccupancyVolume::from_points(carved, image_size);
    let cube_size =
        i32::try_from(config.cube_size).map_err(|_| ConfigError::CubeSizeTooLarge(config.cube_size))?;
    let step = config.cube_size as usize;

    let mut surface = PointCloud::new();
    let mut face_counts = [0usize; 6];
    for z in (bbox.min.z..bbox.max.z).step_by(step) {
        for y in (bbox.min.y..bbox.max.y).step_by(step) {
            for x in (bbox.min.x..bbox.max.x).step_by(step) {
                let origin = IVec3::new(x, y, z);
                for (count, face) in face_counts.iter_mut().zip(FACE_DIRECTIONS.iter()) {
                    if let Some(corners) = exposed_face(&volume, origin, cube_size, face) {
                        surface.extend(corners.map(|c| c.as_vec3()));
                        *count += 1;
                    }
                }
            }
        }
    }

    for (count, face) in face_counts.iter().zip(FACE_DIRECTIONS.iter()) {
        debug!(face = face.label, count, "Exposed faces");
    }
    info!(
        occupied = volume.occupied_count(),
        faces = surface.len() / 4,
        "Surface extraction complete"
    );
    Ok(surface)
}

#[cfg(test)]
mod tests;
