//! # Silhouettes
//!
//! Binary object masks keyed by acquisition angle.
//!
//! A [`Mask`] is backed by an 8-bit luma image holding only `0`
//! (background) and `255` (foreground). Lookups outside the image are
//! background, which lets carving probe transformed coordinates without
//! bounds bookkeeping at every call site.

mod loader;

pub use loader::{DirectoryLoader, InMemoryLoader, SilhouetteLoader};

use std::collections::BTreeMap;
use std::fmt;

use config::constants::{FOREGROUND_THRESHOLD, FOREGROUND_VALUE};
use image::{imageops, GrayImage, Luma};
use serde::{Deserialize, Serialize};

use crate::angle::AngleKey;
use crate::error::{HullError, HullResult};

// =============================================================================
// IMAGE SIZE
// =============================================================================

/// Pixel dimensions shared by every silhouette of one acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    /// Columns
    pub width: u32,
    /// Rows
    pub height: u32,
}

impl ImageSize {
    /// Creates a size from width and height in pixels.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// =============================================================================
// MASK
// =============================================================================

/// Binary foreground mask of one view.
///
/// # Examples
/// ```
/// use visual_hull::Mask;
///
/// let mask = Mask::from_fn(4, 3, |x, _| x == 0);
/// assert!(mask.is_foreground(0, 2));
/// assert!(!mask.is_foreground(1, 2));
/// assert!(!mask.is_foreground(-1, 0));
///
/// let mirrored = mask.mirror_horizontal();
/// assert!(mirrored.is_foreground(3, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    image: GrayImage,
}

impl Mask {
    /// Binarizes a grayscale image: non-zero pixels become foreground.
    pub fn from_gray(gray: &GrayImage) -> Self {
        let (width, height) = gray.dimensions();
        Self::from_fn(width, height, |x, y| gray.get_pixel(x, y)[0] > FOREGROUND_THRESHOLD)
    }

    /// Builds a mask by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> bool) -> Self {
        let image = GrayImage::from_fn(width, height, |x, y| {
            Luma([if f(x, y) { FOREGROUND_VALUE } else { 0 }])
        });
        Self { image }
    }

    /// Creates an all-background mask.
    pub fn empty(size: ImageSize) -> Self {
        Self {
            image: GrayImage::new(size.width, size.height),
        }
    }

    /// Returns the mask dimensions.
    #[inline]
    pub fn size(&self) -> ImageSize {
        let (width, height) = self.image.dimensions();
        ImageSize { width, height }
    }

    /// Returns the backing luma image.
    #[inline]
    pub fn as_gray(&self) -> &GrayImage {
        &self.image
    }

    /// Returns true when `(x, y)` lies inside the image and is foreground.
    #[inline]
    pub fn is_foreground(&self, x: i64, y: i64) -> bool {
        let (width, height) = self.image.dimensions();
        if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
            return false;
        }
        self.image.get_pixel(x as u32, y as u32)[0] > FOREGROUND_THRESHOLD
    }

    /// Returns the left-right mirror image of this mask.
    pub fn mirror_horizontal(&self) -> Self {
        Self {
            image: imageops::flip_horizontal(&self.image),
        }
    }

    /// Pixel-wise OR with `other`.
    ///
    /// The result keeps this mask's size; pixels of `self` that fall
    /// outside `other` only take this mask's value.
    pub fn union(&self, other: &Mask) -> Self {
        let (width, height) = self.image.dimensions();
        Self::from_fn(width, height, |x, y| {
            let (x, y) = (i64::from(x), i64::from(y));
            self.is_foreground(x, y) || other.is_foreground(x, y)
        })
    }

    /// Counts foreground pixels.
    pub fn foreground_count(&self) -> usize {
        self.image
            .pixels()
            .filter(|p| p[0] > FOREGROUND_THRESHOLD)
            .count()
    }

    /// Returns true when no pixel is foreground.
    pub fn is_empty(&self) -> bool {
        self.foreground_count() == 0
    }
}

// =============================================================================
// SILHOUETTE SET
// =============================================================================

/// Masks keyed by the angle they were captured from.
///
/// Built once (from a loader or an iterator) and read-only afterward.
///
/// # Examples
/// ```
/// use visual_hull::{AngleKey, ImageSize, Mask, SilhouetteSet};
///
/// let set: SilhouetteSet = AngleKey::required()
///     .map(|angle| (angle, Mask::empty(ImageSize::new(8, 8))))
///     .collect();
/// assert_eq!(set.len(), 5);
/// assert_eq!(set.image_size().unwrap(), ImageSize::new(8, 8));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SilhouetteSet {
    masks: BTreeMap<AngleKey, Mask>,
}

impl SilhouetteSet {
    /// Number of masks held.
    #[inline]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Returns true when no mask is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Looks up the mask for `angle`.
    pub fn get(&self, angle: AngleKey) -> Option<&Mask> {
        self.masks.get(&angle)
    }

    /// Looks up the mask for `angle`, failing when it is absent.
    pub fn require(&self, angle: AngleKey) -> HullResult<&Mask> {
        self.get(angle).ok_or(HullError::MissingAngle(angle))
    }

    /// Angles present, in ascending order.
    pub fn angles(&self) -> impl Iterator<Item = AngleKey> + '_ {
        self.masks.keys().copied()
    }

    /// Iterates `(angle, mask)` pairs in ascending angle order.
    pub fn iter(&self) -> impl Iterator<Item = (AngleKey, &Mask)> {
        self.masks.iter().map(|(angle, mask)| (*angle, mask))
    }

    /// Checks that every required angle is present with one shared size
    /// and returns that size.
    pub fn image_size(&self) -> HullResult<ImageSize> {
        let mut expected: Option<ImageSize> = None;
        for angle in AngleKey::required() {
            let found = self.require(angle)?.size();
            match expected {
                None => expected = Some(found),
                Some(expected) if expected != found => {
                    return Err(HullError::MaskSizeMismatch {
                        angle,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
        }
        expected.ok_or(HullError::MissingAngle(AngleKey::TOP))
    }
}

impl FromIterator<(AngleKey, Mask)> for SilhouetteSet {
    fn from_iter<T: IntoIterator<Item = (AngleKey, Mask)>>(iter: T) -> Self {
        Self {
            masks: iter.into_iter().collect(),
        }
    }
}
