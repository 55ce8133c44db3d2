//! Silhouette set sources.
//!
//! The directory loader only thresholds already-segmented masks; extracting
//! a silhouette from a raw photograph happens upstream.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::constants::SUPPORTED_IMAGE_EXTENSIONS;
use tracing::{debug, info, warn};

use super::{Mask, SilhouetteSet};
use crate::angle::AngleKey;
use crate::error::{HullError, HullResult};

/// Anything that can produce a [`SilhouetteSet`].
///
/// # Examples
/// ```
/// use visual_hull::{AngleKey, ImageSize, InMemoryLoader, Mask, SilhouetteLoader};
///
/// let mut loader = InMemoryLoader::default();
/// loader.insert(AngleKey::TOP, Mask::empty(ImageSize::new(2, 2)));
/// assert_eq!(loader.load().unwrap().len(), 1);
/// ```
pub trait SilhouetteLoader {
    /// Loads every available mask.
    fn load(&self) -> HullResult<SilhouetteSet>;
}

// =============================================================================
// DIRECTORY LOADER
// =============================================================================

/// Loads `<angle>.<ext>` mask images from one directory.
///
/// The file stem is parsed as a signed integer angle (`-1` for the top
/// view). Files with another extension or a non-numeric stem are skipped.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    dir: PathBuf,
}

impl DirectoryLoader {
    /// Creates a loader for `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory being read.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SilhouetteLoader for DirectoryLoader {
    fn load(&self) -> HullResult<SilhouetteSet> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| HullError::io(&self.dir, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| HullError::io(&self.dir, e))?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut masks = BTreeMap::new();
        for path in paths {
            let Some(angle) = angle_from_path(&path) else {
                warn!("Skipping {}: not an <angle>.png/.jpg silhouette", path.display());
                continue;
            };
            if masks.contains_key(&angle) {
                warn!("Skipping {}: angle {} already loaded", path.display(), angle);
                continue;
            }

            let gray = image::open(&path)
                .map_err(|e| HullError::image(&path, e))?
                .to_luma8();
            let mask = Mask::from_gray(&gray);
            debug!(
                angle = angle.degrees(),
                size = %mask.size(),
                foreground = mask.foreground_count(),
                "Loaded silhouette {}",
                path.display()
            );
            masks.insert(angle, mask);
        }

        if masks.is_empty() {
            return Err(HullError::EmptyDirectory(self.dir.clone()));
        }

        info!("{} silhouettes loaded from {}", masks.len(), self.dir.display());
        Ok(masks.into_iter().collect())
    }
}

/// Parses `<angle>.<ext>` into an angle key when the extension is accepted.
fn angle_from_path(path: &Path) -> Option<AngleKey> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    if !SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return None;
    }
    path.file_stem()?.to_str()?.parse().ok()
}

// =============================================================================
// IN-MEMORY LOADER
// =============================================================================

/// Loader serving masks built in memory, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoader {
    masks: BTreeMap<AngleKey, Mask>,
}

impl InMemoryLoader {
    /// Inserts or replaces the mask for `angle`.
    pub fn insert(&mut self, angle: AngleKey, mask: Mask) {
        self.masks.insert(angle, mask);
    }
}

impl SilhouetteLoader for InMemoryLoader {
    fn load(&self) -> HullResult<SilhouetteSet> {
        Ok(self.masks.clone().into_iter().collect())
    }
}
