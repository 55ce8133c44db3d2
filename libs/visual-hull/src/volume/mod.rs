//! # Occupancy Volume
//!
//! Dense boolean voxel grid materialized from a grid-convention point cloud
//! for constant-time neighbor queries, plus the integer bounding box used
//! to limit the surface scan.
//!
//! The volume spans `width × height × height` voxels (the object is assumed
//! to have a square cross-section equal to the image height) and is stored
//! as one flat buffer with x varying fastest.

use glam::IVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::point_cloud::{grid_index, PointCloud};
use crate::silhouette::ImageSize;

// =============================================================================
// BOUNDS
// =============================================================================

/// Voxel dimensions `(width, height, height)` of the volume for `image_size`.
#[inline]
pub fn volume_dims(image_size: ImageSize) -> IVec3 {
    let width = image_size.width as i32;
    let height = image_size.height as i32;
    IVec3::new(width, height, height)
}

/// Returns true when `voxel` addresses a cell inside the volume.
#[inline]
pub fn voxel_in_bounds(voxel: IVec3, image_size: ImageSize) -> bool {
    let dims = volume_dims(image_size);
    voxel.cmpge(IVec3::ZERO).all() && voxel.cmplt(dims).all()
}

// =============================================================================
// OCCUPANCY VOLUME
// =============================================================================

/// Read-only occupancy grid.
///
/// # Examples
/// ```
/// use glam::{IVec3, Vec3};
/// use visual_hull::{ImageSize, OccupancyVolume, PointCloud};
///
/// let cloud = PointCloud::from(vec![Vec3::new(2.0, 3.0, 4.0)]);
/// let volume = OccupancyVolume::from_points(&cloud, ImageSize::new(8, 8));
/// assert!(volume.contains(IVec3::new(2, 3, 4)));
/// assert!(!volume.contains(IVec3::new(4, 3, 2)));
/// assert!(!volume.contains(IVec3::new(-1, 0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyVolume {
    dims: IVec3,
    cells: Vec<bool>,
}

impl OccupancyVolume {
    /// Marks every voxel addressed by `points` as occupied.
    ///
    /// Repeated points are harmless. Points outside the volume are skipped.
    pub fn from_points(points: &PointCloud, image_size: ImageSize) -> Self {
        let dims = volume_dims(image_size);
        let cell_count = dims.x.max(0) as usize * dims.y.max(0) as usize * dims.z.max(0) as usize;
        let mut volume = Self {
            dims,
            cells: vec![false; cell_count],
        };

        let mut skipped = 0usize;
        for &point in points {
            match volume.index(grid_index(point)) {
                Some(i) => volume.cells[i] = true,
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!(skipped, "Ignored points outside the occupancy volume");
        }
        volume
    }

    /// Voxel dimensions of the grid.
    #[inline]
    pub fn dims(&self) -> IVec3 {
        self.dims
    }

    /// Returns true when `voxel` is inside the grid and occupied.
    #[inline]
    pub fn contains(&self, voxel: IVec3) -> bool {
        self.index(voxel).is_some_and(|i| self.cells[i])
    }

    /// Number of occupied voxels.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn index(&self, voxel: IVec3) -> Option<usize> {
        if !(voxel.cmpge(IVec3::ZERO).all() && voxel.cmplt(self.dims).all()) {
            return None;
        }
        let (x, y, z) = (voxel.x as usize, voxel.y as usize, voxel.z as usize);
        let (w, h) = (self.dims.x as usize, self.dims.y as usize);
        Some(x + w * (y + h * z))
    }
}

// =============================================================================
// BOUNDARY BOX
// =============================================================================

/// Inclusive integer bounds of a grid-convention point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryBox {
    /// Smallest voxel coordinate on each axis
    pub min: IVec3,
    /// Largest voxel coordinate on each axis
    pub max: IVec3,
}

impl BoundaryBox {
    /// Computes the bounds of `points`, or `None` for an empty cloud.
    ///
    /// # Examples
    /// ```
    /// use glam::{IVec3, Vec3};
    /// use visual_hull::{BoundaryBox, PointCloud};
    ///
    /// let cloud = PointCloud::from(vec![Vec3::new(4.0, 9.0, 2.0), Vec3::new(1.0, 3.0, 7.0)]);
    /// let bbox = BoundaryBox::from_points(&cloud).unwrap();
    /// assert_eq!(bbox.min, IVec3::new(1, 3, 2));
    /// assert_eq!(bbox.max, IVec3::new(4, 9, 7));
    /// ```
    pub fn from_points(points: &PointCloud) -> Option<Self> {
        let mut voxels = points.iter().map(|&p| grid_index(p));
        let first = voxels.next()?;
        Some(voxels.fold(Self { min: first, max: first }, |bbox, v| Self {
            min: bbox.min.min(v),
            max: bbox.max.max(v),
        }))
    }

    /// Returns true when `voxel` lies within the bounds, inclusive.
    #[inline]
    pub fn contains(&self, voxel: IVec3) -> bool {
        voxel.cmpge(self.min).all() && voxel.cmple(self.max).all()
    }

    /// Size of the box on each axis (`max - min`).
    #[inline]
    pub fn extent(&self) -> IVec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests;
