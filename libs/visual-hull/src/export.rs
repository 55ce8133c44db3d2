//! Plain-text point export.
//!
//! One `x y z` line per point, readable by most point cloud viewers as
//! `.xyz`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{HullError, HullResult};
use crate::point_cloud::PointCloud;

impl PointCloud {
    /// Writes every point as an `x y z` line.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use visual_hull::PointCloud;
    ///
    /// let cloud = PointCloud::from(vec![Vec3::new(1.0, -2.5, 3.0)]);
    /// let mut out = Vec::new();
    /// cloud.write_xyz(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "1 -2.5 3\n");
    /// ```
    pub fn write_xyz<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for p in self.iter() {
            writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
        }
        writer.flush()
    }

    /// Renders the cloud as `.xyz` text, in the same format as
    /// [`write_xyz`](Self::write_xyz).
    pub fn to_xyz_string(&self) -> String {
        let mut out = Vec::with_capacity(self.len() * 16);
        // Writes into a Vec are infallible.
        let _ = self.write_xyz(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Saves the cloud to an `.xyz` file.
    pub fn save_xyz(&self, path: impl AsRef<Path>) -> HullResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| HullError::io(path, e))?;
        self.write_xyz(BufWriter::new(file))
            .map_err(|e| HullError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn xyz_has_one_line_per_point() {
        let cloud = PointCloud::from(vec![Vec3::ZERO, Vec3::new(10.0, 20.0, -30.0)]);
        assert_eq!(cloud.to_xyz_string(), "0 0 0\n10 20 -30\n");
    }

    #[test]
    fn xyz_string_matches_writer_output() {
        let cloud = PointCloud::from(vec![Vec3::new(-0.5, 1e-3, 7.25), Vec3::splat(100.0)]);
        let mut written = Vec::new();
        cloud.write_xyz(&mut written).unwrap();
        assert_eq!(cloud.to_xyz_string().into_bytes(), written);
        assert_eq!(PointCloud::new().to_xyz_string(), "");
    }

    #[test]
    fn save_xyz_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.xyz");
        let cloud = PointCloud::from(vec![Vec3::new(0.5, 1.0, 2.0)]);
        cloud.save_xyz(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), cloud.to_xyz_string());
    }

    #[test]
    fn save_xyz_reports_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("surface.xyz");
        let err = PointCloud::new().save_xyz(&path).unwrap_err();
        assert!(matches!(err, HullError::Io { .. }));
    }
}
