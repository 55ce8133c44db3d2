//! # Projection Assembly
//!
//! Folds the five acquisition silhouettes into three orthogonal projections.
//! Opposing views are OR-ed after mirroring one of them, so a region hidden
//! in one view is recovered from its opposite.

use tracing::debug;

use crate::angle::AngleKey;
use crate::error::{HullError, HullResult};
use crate::silhouette::{ImageSize, Mask, SilhouetteSet};

/// Front, left and top masks covering the object along two axes each.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthogonalProjection {
    front: Mask,
    left: Mask,
    top: Mask,
}

impl OrthogonalProjection {
    /// Combines a silhouette set into orthogonal projections.
    ///
    /// - `front` = `0°` ∪ mirror(`180°`)
    /// - `left`  = mirror(`90°`) ∪ `270°`
    /// - `top`   = `-1°`
    ///
    /// Fails when a required angle is missing or the masks differ in size.
    ///
    /// # Examples
    /// ```
    /// use visual_hull::{AngleKey, ImageSize, Mask, OrthogonalProjection, SilhouetteSet};
    ///
    /// let set: SilhouetteSet = AngleKey::required()
    ///     .map(|angle| (angle, Mask::from_fn(10, 10, |x, _| x < 3)))
    ///     .collect();
    /// let projection = OrthogonalProjection::assemble(&set).unwrap();
    /// // The mirrored back view fills the right edge of the front projection.
    /// assert!(projection.front().is_foreground(9, 0));
    /// assert!(projection.front().is_foreground(0, 0));
    /// ```
    pub fn assemble(set: &SilhouetteSet) -> HullResult<Self> {
        set.image_size()?;

        let front = set
            .require(AngleKey::FRONT)?
            .union(&set.require(AngleKey::BACK)?.mirror_horizontal());
        let left = set
            .require(AngleKey::RIGHT)?
            .mirror_horizontal()
            .union(set.require(AngleKey::LEFT)?);
        let top = set.require(AngleKey::TOP)?.clone();

        debug!(
            front = front.foreground_count(),
            left = left.foreground_count(),
            top = top.foreground_count(),
            "Assembled orthogonal projections"
        );
        Ok(Self { front, left, top })
    }

    /// Builds projections from already combined masks.
    pub fn from_masks(front: Mask, left: Mask, top: Mask) -> HullResult<Self> {
        let expected = front.size();
        for (angle, mask) in [(AngleKey::LEFT, &left), (AngleKey::TOP, &top)] {
            if mask.size() != expected {
                return Err(HullError::MaskSizeMismatch {
                    angle,
                    expected,
                    found: mask.size(),
                });
            }
        }
        Ok(Self { front, left, top })
    }

    /// Size shared by all three projections.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.front.size()
    }

    /// Front projection, indexed by `(x, y)`.
    #[inline]
    pub fn front(&self) -> &Mask {
        &self.front
    }

    /// Left projection, indexed by `(x, y)` in the rotated frame.
    #[inline]
    pub fn left(&self) -> &Mask {
        &self.left
    }

    /// Top projection, indexed by `(x, z)`.
    #[inline]
    pub fn top(&self) -> &Mask {
        &self.top
    }
}
