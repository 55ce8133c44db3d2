//! Acquisition angle keys.
//!
//! Azimuthal views are keyed by their rotation in degrees around the
//! vertical axis; the top view uses the reserved key `-1`.

use std::fmt;
use std::str::FromStr;

use config::constants::{BACK_ANGLE, FRONT_ANGLE, LEFT_ANGLE, REQUIRED_ANGLES, RIGHT_ANGLE, TOP_ANGLE};
use serde::{Deserialize, Serialize};

/// Integer degree value identifying the view a silhouette was taken from.
///
/// # Examples
/// ```
/// use visual_hull::AngleKey;
/// let key: AngleKey = "-1".parse().unwrap();
/// assert_eq!(key, AngleKey::TOP);
/// assert!(key.is_top());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngleKey(pub i32);

impl AngleKey {
    /// Top view.
    pub const TOP: Self = Self(TOP_ANGLE);
    /// Front view (0°).
    pub const FRONT: Self = Self(FRONT_ANGLE);
    /// Right view (90°).
    pub const RIGHT: Self = Self(RIGHT_ANGLE);
    /// Back view (180°).
    pub const BACK: Self = Self(BACK_ANGLE);
    /// Left view (270°).
    pub const LEFT: Self = Self(LEFT_ANGLE);

    /// Returns the raw degree value.
    #[inline]
    pub fn degrees(self) -> i32 {
        self.0
    }

    /// Returns true for the reserved top-view key.
    #[inline]
    pub fn is_top(self) -> bool {
        self == Self::TOP
    }

    /// Keys that must all be present to assemble projections.
    pub fn required() -> impl Iterator<Item = AngleKey> {
        REQUIRED_ANGLES.into_iter().map(AngleKey)
    }
}

impl fmt::Display for AngleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AngleKey {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(AngleKey)
    }
}

impl From<i32> for AngleKey {
    fn from(degrees: i32) -> Self {
        Self(degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_stems() {
        assert_eq!("270".parse::<AngleKey>().unwrap(), AngleKey::LEFT);
        assert_eq!("-1".parse::<AngleKey>().unwrap(), AngleKey::TOP);
        assert!("front".parse::<AngleKey>().is_err());
    }

    #[test]
    fn required_set_is_complete() {
        let keys: Vec<_> = AngleKey::required().collect();
        assert_eq!(keys.len(), 5);
        for key in [AngleKey::TOP, AngleKey::FRONT, AngleKey::RIGHT, AngleKey::BACK, AngleKey::LEFT] {
            assert!(keys.contains(&key));
        }
    }

    #[test]
    fn orders_top_first() {
        let mut keys = vec![AngleKey::LEFT, AngleKey::TOP, AngleKey::FRONT];
        keys.sort();
        assert_eq!(keys[0], AngleKey::TOP);
    }
}
