//! # Surface Extraction Tests
//!
//! Synthetic volumes exercising the must-condition and every outer-layer
//! pattern for every face direction.

use glam::Vec3;

use super::*;

const CUBE: i32 = 10;
const ORIGIN: IVec3 = IVec3::new(10, 10, 10);

fn size() -> ImageSize {
    ImageSize::new(50, 50)
}

fn block_corners(origin: IVec3, cube_size: i32) -> Vec<IVec3> {
    let mut corners = Vec::with_capacity(8);
    for dz in [0, cube_size] {
        for dy in [0, cube_size] {
            for dx in [0, cube_size] {
                corners.push(origin + IVec3::new(dx, dy, dz));
            }
        }
    }
    corners
}

fn cloud_of(voxels: &[IVec3]) -> PointCloud {
    voxels.iter().map(|v| v.as_vec3()).collect()
}

fn outer_layer(face: &FaceDirection) -> [IVec3; 4] {
    let (_, far) = face.layer_bases(ORIGIN, CUBE);
    face.layer(far + face.normal * CUBE, CUBE)
}

fn pattern(bits: u8) -> [bool; 4] {
    [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0]
}

// =============================================================================
// PATTERN CLASSIFIER
// =============================================================================

#[test]
fn nine_of_sixteen_patterns_are_boundaries() {
    let accepted = (0u8..16).filter(|&bits| is_boundary_pattern(pattern(bits))).count();
    assert_eq!(accepted, 9);
}

#[test]
fn rejected_patterns_are_opposites_triples_and_full() {
    for bits in 0u8..16 {
        let outer = pattern(bits);
        let occupied = bits.count_ones();
        let opposite = outer == [true, false, true, false] || outer == [false, true, false, true];
        let expected = occupied <= 1 || (occupied == 2 && !opposite);
        assert_eq!(is_boundary_pattern(outer), expected, "pattern {outer:?}");
    }
}

// =============================================================================
// FACE EXPOSURE
// =============================================================================

#[test]
fn every_face_accepts_exactly_nine_outer_patterns() {
    for face in &FACE_DIRECTIONS {
        let outer = outer_layer(face);
        let mut emitted = 0;
        for bits in 0u8..16 {
            let mut voxels = block_corners(ORIGIN, CUBE);
            for (occupied, voxel) in pattern(bits).into_iter().zip(outer) {
                if occupied {
                    voxels.push(voxel);
                }
            }
            let volume = OccupancyVolume::from_points(&cloud_of(&voxels), size());
            if exposed_face(&volume, ORIGIN, CUBE, face).is_some() {
                emitted += 1;
            }
        }
        assert_eq!(emitted, 9, "face {}", face.label);
    }
}

#[test]
fn missing_any_corner_suppresses_every_face() {
    let corners = block_corners(ORIGIN, CUBE);
    for missing in 0..corners.len() {
        let voxels: Vec<_> = corners
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != missing)
            .map(|(_, &v)| v)
            .collect();
        let volume = OccupancyVolume::from_points(&cloud_of(&voxels), size());
        for face in &FACE_DIRECTIONS {
            assert!(
                exposed_face(&volume, ORIGIN, CUBE, face).is_none(),
                "face {} emitted without corner {missing}",
                face.label
            );
        }
    }
}

#[test]
fn exposed_face_returns_the_far_layer() {
    let volume = OccupancyVolume::from_points(&cloud_of(&block_corners(ORIGIN, CUBE)), size());
    for face in &FACE_DIRECTIONS {
        let corners = exposed_face(&volume, ORIGIN, CUBE, face).unwrap();
        let expected_plane = if face.normal.cmpgt(IVec3::ZERO).any() {
            ORIGIN + face.normal * CUBE
        } else {
            ORIGIN
        };
        for c in corners {
            let along = (c - expected_plane) * face.normal.abs();
            assert_eq!(along, IVec3::ZERO, "face {}", face.label);
        }
    }
}

#[test]
fn winding_faces_outward() {
    for face in &FACE_DIRECTIONS {
        let [a, b, c, _] = face.corners.map(|v| v.as_vec3());
        let normal = (b - a).cross(c - b);
        assert_eq!(normal.normalize(), face.normal.as_vec3(), "face {}", face.label);
    }
}

// =============================================================================
// EXTRACTION
// =============================================================================

#[test]
fn empty_cloud_has_no_surface() {
    let surface = extract_surface(&PointCloud::new(), &CarveConfig::default(), size()).unwrap();
    assert!(surface.is_empty());
}

#[test]
fn cube_size_beyond_voxel_range_is_rejected() {
    let cloud = PointCloud::from(vec![Vec3::ZERO]);
    let config = CarveConfig { cube_size: u32::MAX };
    let err = extract_surface(&cloud, &config, size()).unwrap_err();
    assert!(matches!(
        err,
        crate::error::HullError::Config(ConfigError::CubeSizeTooLarge(u32::MAX))
    ));
}

#[test]
fn shared_face_between_blocks_is_interior() {
    let mut voxels = block_corners(ORIGIN, CUBE);
    voxels.extend(block_corners(ORIGIN + IVec3::new(0, 0, CUBE), CUBE));
    let config = CarveConfig::new(CUBE as u32).unwrap();
    let surface = extract_surface(&cloud_of(&voxels), &config, size()).unwrap();

    // Each block keeps its four side faces and one cap; the shared face
    // is hidden from both sides.
    assert_eq!(surface.quads().count(), 10);
    assert_eq!(surface.len() % 4, 0);
}

#[test]
fn solid_two_by_two_block_exposes_outer_faces_only() {
    let mut cloud = PointCloud::new();
    for x in [40.0, 50.0, 60.0] {
        for y in [40.0, 50.0, 60.0] {
            for z in [40.0, 50.0, 60.0] {
                cloud.push(Vec3::new(x, y, z));
            }
        }
    }
    let surface = extract_surface(&cloud, &CarveConfig::default(), ImageSize::new(100, 100)).unwrap();
    assert_eq!(surface.quads().count(), 24);
    let bbox = surface.boundary_box().unwrap();
    assert_eq!(bbox.min, IVec3::splat(40));
    assert_eq!(bbox.max, IVec3::splat(60));
}

#[test]
fn partial_blocks_emit_nothing() {
    // A plane of voxels has no fully occupied block.
    let mut cloud = PointCloud::new();
    for x in [0.0, 10.0, 20.0] {
        for y in [0.0, 10.0, 20.0] {
            cloud.push(Vec3::new(x, y, 10.0));
        }
    }
    let surface = extract_surface(&cloud, &CarveConfig::default(), size()).unwrap();
    assert!(surface.is_empty());
}
