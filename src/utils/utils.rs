use serde::{Deserialize, Serialize};

/// Pixel coordinates of a blob centroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
    /// Component-wise difference `self - other`, saturating at i32 bounds
    pub fn delta_to(&self, other: &Point) -> (i32, i32) {
        (self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from(xy: (i32, i32)) -> Self {
        Point::new(xy.0, xy.1)
    }
}

/// Detector report: centroid of the largest blob and radius of its minimum enclosing circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub center: Point,
    pub radius: f32,
}

impl Detection {
    pub fn new(center: Point, radius: f32) -> Self {
        Detection { center, radius }
    }
    /// Whether blob is big enough to be considered as the tracked object.
    /// Comparison is strict: radius equal to `min_radius` does not qualify.
    pub fn qualifies(&self, min_radius: f32) -> bool {
        self.radius > min_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_delta_to() {
        let past = Point::new(100, 40);
        let current = Point::new(55, 90);
        assert_eq!(past.delta_to(&current), (45, -50));
        assert_eq!(Point::from((3, 4)), Point::new(3, 4));
    }
    #[test]
    fn test_delta_to_extremes() {
        let low = Point::new(i32::MIN, i32::MIN);
        let high = Point::new(i32::MAX, i32::MAX);
        assert_eq!(high.delta_to(&low), (i32::MAX, i32::MAX));
        assert_eq!(low.delta_to(&high), (i32::MIN, i32::MIN));
    }
    #[test]
    fn test_detection_gate() {
        let center = Point::new(10, 10);
        assert!(Detection::new(center, 10.5).qualifies(10.0));
        assert!(!Detection::new(center, 10.0).qualifies(10.0));
        assert!(!Detection::new(center, 3.0).qualifies(10.0));
    }
}
