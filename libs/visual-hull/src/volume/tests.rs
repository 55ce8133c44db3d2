//! # Volume Tests

use glam::Vec3;

use super::*;

#[test]
fn volume_has_square_cross_section() {
    let volume = OccupancyVolume::from_points(&PointCloud::new(), ImageSize::new(30, 20));
    assert_eq!(volume.dims(), IVec3::new(30, 20, 20));
    assert_eq!(volume.occupied_count(), 0);
}

#[test]
fn duplicate_points_are_idempotent() {
    let cloud = PointCloud::from(vec![Vec3::new(1.0, 1.0, 1.0); 4]);
    let volume = OccupancyVolume::from_points(&cloud, ImageSize::new(4, 4));
    assert_eq!(volume.occupied_count(), 1);
    assert!(volume.contains(IVec3::ONE));
}

#[test]
fn near_integer_points_round_to_their_voxel() {
    let cloud = PointCloud::from(vec![Vec3::new(2.9999998, 0.0000001, 1.0)]);
    let volume = OccupancyVolume::from_points(&cloud, ImageSize::new(4, 4));
    assert!(volume.contains(IVec3::new(3, 0, 1)));
}

#[test]
fn out_of_range_points_are_skipped() {
    let cloud = PointCloud::from(vec![
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 4.0),
        Vec3::new(3.0, 3.0, 3.0),
    ]);
    let volume = OccupancyVolume::from_points(&cloud, ImageSize::new(4, 4));
    assert_eq!(volume.occupied_count(), 1);
}

#[test]
fn distinct_axes_address_distinct_cells() {
    let cloud = PointCloud::from(vec![Vec3::new(1.0, 2.0, 3.0)]);
    let volume = OccupancyVolume::from_points(&cloud, ImageSize::new(5, 4));
    assert!(volume.contains(IVec3::new(1, 2, 3)));
    assert!(!volume.contains(IVec3::new(3, 2, 1)));
    assert!(!volume.contains(IVec3::new(2, 1, 3)));
}

#[test]
fn bounds_check_uses_height_for_depth() {
    let size = ImageSize::new(10, 5);
    assert!(voxel_in_bounds(IVec3::new(9, 4, 4), size));
    assert!(!voxel_in_bounds(IVec3::new(9, 4, 5), size));
    assert!(!voxel_in_bounds(IVec3::new(10, 0, 0), size));
}

#[test]
fn boundary_box_of_empty_cloud_is_none() {
    assert!(BoundaryBox::from_points(&PointCloud::new()).is_none());
}

#[test]
fn boundary_box_contains_every_point() {
    let cloud = PointCloud::from(vec![
        Vec3::new(40.0, 50.0, 60.0),
        Vec3::new(60.0, 40.0, 40.0),
        Vec3::new(50.0, 60.0, 50.0),
    ]);
    let bbox = cloud.boundary_box().unwrap();
    assert_eq!(bbox.min, IVec3::splat(40));
    assert_eq!(bbox.max, IVec3::splat(60));
    assert_eq!(bbox.extent(), IVec3::splat(20));
    for &p in &cloud {
        assert!(bbox.contains(grid_index(p)));
    }
}
