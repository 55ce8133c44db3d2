//! # Coordinate Transforms
//!
//! Rigid transforms over point clouds. Every function returns a new cloud;
//! inputs are never mutated.
//!
//! Rotations follow the right-handed convention: a positive angle about Y
//! turns +Z toward +X, a positive angle about X turns +Y toward +Z. Points
//! are lifted to homogeneous `(x, y, z, 1)` vectors and multiplied by 4×4
//! matrices in single precision.

use glam::{Mat4, Vec3};

use crate::point_cloud::PointCloud;
use crate::silhouette::ImageSize;

/// Applies a 4×4 affine matrix to every point of the cloud.
///
/// # Examples
/// ```
/// use glam::{Mat4, Vec3};
/// use visual_hull::{transform::apply_matrix, PointCloud};
///
/// let cloud = PointCloud::from(vec![Vec3::ONE]);
/// let scaled = apply_matrix(&cloud, &Mat4::from_scale(Vec3::splat(2.0)));
/// assert_eq!(scaled.points()[0], Vec3::splat(2.0));
/// ```
pub fn apply_matrix(points: &PointCloud, matrix: &Mat4) -> PointCloud {
    points.map(|p| (*matrix * p.extend(1.0)).truncate())
}

// =============================================================================
// TRANSLATE
// =============================================================================

/// Adds `distance` to every point.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use visual_hull::{transform::translate, PointCloud};
///
/// let cloud = PointCloud::from(vec![Vec3::new(1.0, 2.0, 3.0)]);
/// let moved = translate(&cloud, Vec3::new(10.0, -5.0, 0.0));
/// assert_eq!(moved.points(), &[Vec3::new(11.0, -3.0, 3.0)]);
/// ```
pub fn translate(points: &PointCloud, distance: Vec3) -> PointCloud {
    apply_matrix(points, &Mat4::from_translation(distance))
}

// =============================================================================
// ROTATE
// =============================================================================

/// Rotates every point about the vertical (Y) axis by `degrees`.
pub fn rotate_about_y(points: &PointCloud, degrees: f32) -> PointCloud {
    apply_matrix(points, &Mat4::from_rotation_y(degrees.to_radians()))
}

/// Rotates every point about the X axis by `degrees`.
pub fn rotate_about_x(points: &PointCloud, degrees: f32) -> PointCloud {
    apply_matrix(points, &Mat4::from_rotation_x(degrees.to_radians()))
}

// =============================================================================
// CONVENTION CHANGES
// =============================================================================

/// Offset from the grid origin to the volume center.
///
/// The volume has a square cross-section equal to the image height, so Y
/// and Z share the same half-extent.
pub fn center_offset(image_size: ImageSize) -> Vec3 {
    let half_width = image_size.width as f32 / 2.0;
    let half_height = image_size.height as f32 / 2.0;
    Vec3::new(half_width, half_height, half_height)
}

/// Rotation pivot on the integer lattice: `(width / 2, height / 2,
/// height / 2)` with whole-pixel division.
///
/// Rotating a quarter turn about this point maps integer voxels to integer
/// voxels for any image size, which [`center_offset`] cannot guarantee when
/// width and height differ by an odd amount.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use visual_hull::{transform::lattice_pivot, ImageSize};
///
/// assert_eq!(lattice_pivot(ImageSize::new(101, 100)), Vec3::new(50.0, 50.0, 50.0));
/// ```
pub fn lattice_pivot(image_size: ImageSize) -> Vec3 {
    let half_width = (image_size.width / 2) as f32;
    let half_height = (image_size.height / 2) as f32;
    Vec3::new(half_width, half_height, half_height)
}

/// Moves grid-convention points to the centered convention.
pub fn to_centered(points: &PointCloud, image_size: ImageSize) -> PointCloud {
    translate(points, -center_offset(image_size))
}

/// Moves centered-convention points back to the grid convention.
pub fn to_grid(points: &PointCloud, image_size: ImageSize) -> PointCloud {
    translate(points, center_offset(image_size))
}
