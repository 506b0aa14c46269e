use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertical {
    North,
    South,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizontal {
    East,
    West,
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Vertical::North => write!(f, "North"),
            Vertical::South => write!(f, "South"),
        }
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Horizontal::East => write!(f, "East"),
            Horizontal::West => write!(f, "West"),
        }
    }
}

/// Coarse compass direction. Both components empty means no direction known yet.
///
/// Renders as `""`, a single component (`"North"`, `"West"`) or
/// `"{vertical}-{horizontal}"` (`"North-East"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Direction {
    pub vertical: Option<Vertical>,
    pub horizontal: Option<Horizontal>,
}

impl Direction {
    pub fn new(vertical: Option<Vertical>, horizontal: Option<Horizontal>) -> Self {
        Direction { vertical, horizontal }
    }
    /// Classifies delta `past - current`.
    ///
    /// Positive `dx` means the object used to be to the right, so it moved West.
    /// Positive `dy` means the object used to be lower in the frame, so it moved North.
    /// Components with `|d| <= threshold` stay empty.
    ///
    /// ```
    /// use motion_trail::trajectory::Direction;
    /// assert_eq!(Direction::from_delta(40, 25, 20).to_string(), "North-West");
    /// assert_eq!(Direction::from_delta(-40, 5, 20).to_string(), "East");
    /// assert!(Direction::from_delta(20, -20, 20).is_empty());
    /// ```
    pub fn from_delta(dx: i32, dy: i32, threshold: i32) -> Self {
        let horizontal = if i64::from(dx).abs() > i64::from(threshold) {
            Some(if dx > 0 { Horizontal::West } else { Horizontal::East })
        } else {
            None
        };
        let vertical = if i64::from(dy).abs() > i64::from(threshold) {
            Some(if dy > 0 { Vertical::North } else { Vertical::South })
        } else {
            None
        };
        Direction { vertical, horizontal }
    }
    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.vertical, self.horizontal) {
            (Some(v), Some(h)) => write!(f, "{}-{}", v, h),
            (Some(v), None) => write!(f, "{}", v),
            (None, Some(h)) => write!(f, "{}", h),
            (None, None) => Ok(()),
        }
    }
}

/// Last computed direction and `(dx, dy)` delta. Values survive frames where nothing could be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectionState {
    pub direction: Direction,
    pub dx: i32,
    pub dy: i32,
}

impl DirectionState {
    pub fn delta(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Direction::default().to_string(), "");
        assert_eq!(Direction::new(Some(Vertical::North), None).to_string(), "North");
        assert_eq!(Direction::new(None, Some(Horizontal::East)).to_string(), "East");
        assert_eq!(
            Direction::new(Some(Vertical::South), Some(Horizontal::West)).to_string(),
            "South-West"
        );
    }

    #[test]
    fn test_from_delta_sign_convention() {
        let d = Direction::from_delta(21, 0, 20);
        assert_eq!(d.horizontal, Some(Horizontal::West));
        assert_eq!(d.vertical, None);
        let d = Direction::from_delta(-21, 0, 20);
        assert_eq!(d.horizontal, Some(Horizontal::East));
        let d = Direction::from_delta(0, 21, 20);
        assert_eq!(d.vertical, Some(Vertical::North));
        let d = Direction::from_delta(0, -21, 20);
        assert_eq!(d.vertical, Some(Vertical::South));
    }

    #[test]
    fn test_from_delta_threshold_is_strict() {
        assert!(Direction::from_delta(20, -20, 20).is_empty());
        assert!(Direction::from_delta(0, 0, 0).is_empty());
        assert_eq!(Direction::from_delta(1, 0, 0).to_string(), "West");
    }

    #[test]
    fn test_from_delta_extremes() {
        assert_eq!(Direction::from_delta(i32::MIN, i32::MAX, 20).to_string(), "North-East");
        // |i32::MIN| is one more than i32::MAX
        assert_eq!(Direction::from_delta(i32::MAX, i32::MIN, i32::MAX).to_string(), "South");
        assert_eq!(Direction::from_delta(i32::MIN, 0, i32::MAX).to_string(), "East");
    }
}
