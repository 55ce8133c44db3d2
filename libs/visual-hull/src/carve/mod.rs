//! # Voxel Carving
//!
//! Approximate visual hull over a regular lattice.
//!
//! ## Algorithm
//!
//! 1. Sample `(x, y, z)` every `cube_size` pixels, with `x` over the image
//!    width and `y`, `z` over the image height.
//! 2. Keep samples inside both the front cone (`front[x, y]`) and the top
//!    cone (`top[x, z]`).
//! 3. Rotate the survivors −90° about Y around the lattice pivot so the
//!    left projection's horizontal axis lines up with grid X. The pivot
//!    uses whole-pixel half sizes, so rotated samples land back on integer
//!    voxels even when width and height differ by an odd amount.
//! 4. Keep rotated samples inside the left cone (`left[x, y]`).
//!
//! The result stays in the rotated frame, in grid coordinates. Every
//! retained voxel lies inside all three view cones: the carve may keep
//! voxels outside the true object but never drops one that belongs to it.

use config::constants::LEFT_VIEW_ROTATION_DEGREES;
use config::CarveConfig;
use glam::Vec3;
use tracing::{debug, info};

use crate::error::HullResult;
use crate::point_cloud::{grid_index, PointCloud};
use crate::projection::OrthogonalProjection;
use crate::transform::{lattice_pivot, rotate_about_y, translate};
use crate::volume::voxel_in_bounds;

/// Carves the three projections into a dense grid-coordinate point cloud.
///
/// # Examples
/// ```
/// use config::CarveConfig;
/// use visual_hull::{carve::carve, Mask, OrthogonalProjection};
///
/// let full = Mask::from_fn(20, 20, |_, _| true);
/// let projection = OrthogonalProjection::from_masks(full.clone(), full.clone(), full).unwrap();
/// let carved = carve(&projection, &CarveConfig::new(10).unwrap()).unwrap();
/// // Samples at z = 0 rotate to x = 20, just outside the volume.
/// assert_eq!(carved.len(), 2 * 2 * 1);
/// ```
pub fn carve(projection: &OrthogonalProjection, config: &CarveConfig) -> HullResult<PointCloud> {
    config.validate()?;

    let candidates = front_top_candidates(projection, config)?;
    debug!(candidates = candidates.len(), "Front/top intersection sampled");

    let carved = refine_with_left(&candidates, projection);
    info!(
        candidates = candidates.len(),
        carved = carved.len(),
        cube_size = config.cube_size,
        "Voxel carving complete"
    );
    Ok(carved)
}

/// Lattice samples lying in both the front and the top silhouette cones.
///
/// Samples are emitted with `x` outermost and `z` innermost. Fails on an
/// invalid sampling step.
pub fn front_top_candidates(
    projection: &OrthogonalProjection,
    config: &CarveConfig,
) -> HullResult<PointCloud> {
    config.validate()?;
    let size = projection.size();
    let step = config.cube_size as usize;
    let mut candidates = PointCloud::new();

    for x in (0..size.width).step_by(step) {
        for y in (0..size.height).step_by(step) {
            if !projection.front().is_foreground(i64::from(x), i64::from(y)) {
                continue;
            }
            for z in (0..size.height).step_by(step) {
                if projection.top().is_foreground(i64::from(x), i64::from(z)) {
                    candidates.push(Vec3::new(x as f32, y as f32, z as f32));
                }
            }
        }
    }
    Ok(candidates)
}

/// Rotates candidates into the left view's frame and keeps those inside the
/// left silhouette cone.
///
/// Survivors are snapped to their voxel. Rotated samples that leave the
/// `width × height × height` volume are dropped; wide images lose the
/// columns farther than `height / 2` from the center this way.
pub fn refine_with_left(candidates: &PointCloud, projection: &OrthogonalProjection) -> PointCloud {
    let size = projection.size();
    let pivot = lattice_pivot(size);
    let rotated = translate(
        &rotate_about_y(&translate(candidates, -pivot), LEFT_VIEW_ROTATION_DEGREES),
        pivot,
    );

    let mut out_of_volume = 0usize;
    let mut refined = PointCloud::with_capacity(rotated.len());
    for &p in &rotated {
        let voxel = grid_index(p);
        if !voxel_in_bounds(voxel, size) {
            out_of_volume += 1;
            continue;
        }
        if projection
            .left()
            .is_foreground(i64::from(voxel.x), i64::from(voxel.y))
        {
            refined.push(voxel.as_vec3());
        }
    }

    if out_of_volume > 0 {
        debug!(
            dropped = out_of_volume,
            size = %size,
            "Rotated candidates fell outside the volume"
        );
    }
    refined
}
