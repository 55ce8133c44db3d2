//! # Point Cloud
//!
//! Ordered 3D points shared by every pipeline stage.
//!
//! Two coordinate conventions are in use and the type does not record which
//! one is current:
//!
//! - **grid**: origin at the volume corner, every coordinate `>= 0`, integer
//!   valued up to rotation noise
//! - **centered**: origin at the volume's geometric center
//!
//! [`crate::transform::to_centered`] and [`crate::transform::to_grid`] move
//! between the two.

use std::slice::ChunksExact;

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::volume::BoundaryBox;

/// Rounds a grid-convention point to the voxel it addresses.
///
/// # Examples
/// ```
/// use glam::{IVec3, Vec3};
/// use visual_hull::point_cloud::grid_index;
///
/// assert_eq!(grid_index(Vec3::new(59.99999, -0.0000001, 10.0)), IVec3::new(60, 0, 10));
/// ```
#[inline]
pub fn grid_index(point: Vec3) -> IVec3 {
    point.round().as_ivec3()
}

/// Sequence of 3D points in single precision.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use visual_hull::PointCloud;
///
/// let mut cloud = PointCloud::new();
/// cloud.push(Vec3::new(1.0, 2.0, 3.0));
/// cloud.merge(PointCloud::from(vec![Vec3::ZERO]));
/// assert_eq!(cloud.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    points: Vec<Vec3>,
}

impl PointCloud {
    /// Creates an empty cloud.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cloud with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the cloud holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends one point.
    #[inline]
    pub fn push(&mut self, point: Vec3) {
        self.points.push(point);
    }

    /// Appends every point of `other`, keeping order.
    pub fn merge(&mut self, other: PointCloud) {
        self.points.extend(other.points);
    }

    /// Returns the points as a slice.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec3> {
        self.points.iter()
    }

    /// Iterates over consecutive groups of four points.
    ///
    /// Surface extraction emits one group per exposed face; trailing points
    /// that do not fill a group are ignored.
    pub fn quads(&self) -> ChunksExact<'_, Vec3> {
        self.points.chunks_exact(4)
    }

    /// Applies `f` to every point, producing a new cloud.
    pub fn map(&self, f: impl Fn(Vec3) -> Vec3) -> Self {
        self.points.iter().copied().map(f).collect()
    }

    /// Axis-aligned integer bounds of a grid-convention cloud, or `None`
    /// when empty.
    pub fn boundary_box(&self) -> Option<BoundaryBox> {
        BoundaryBox::from_points(self)
    }

    /// Consumes the cloud, returning its points.
    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }
}

impl From<Vec<Vec3>> for PointCloud {
    fn from(points: Vec<Vec3>) -> Self {
        Self { points }
    }
}

impl FromIterator<Vec3> for PointCloud {
    fn from_iter<T: IntoIterator<Item = Vec3>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Vec3> for PointCloud {
    fn extend<T: IntoIterator<Item = Vec3>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Vec3;
    type IntoIter = std::slice::Iter<'a, Vec3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
