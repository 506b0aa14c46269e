use std::collections::VecDeque;

use crate::utils::Point;

/// Fixed-capacity history of centroids, newest first.
///
/// Index 0 is the most recent sample. `None` marks a frame without detection.
/// Once capacity is reached every push evicts the oldest sample.
#[derive(Debug, Clone)]
pub struct TrajectoryBuffer {
    points: VecDeque<Option<Point>>,
    capacity: usize,
}

impl TrajectoryBuffer {
    /// Creates empty buffer
    ///
    /// Basic usage:
    ///
    /// ```
    /// use motion_trail::trajectory::TrajectoryBuffer;
    /// use motion_trail::utils::Point;
    /// let mut buffer = TrajectoryBuffer::new(2);
    /// buffer.push(Some(Point::new(1, 1)));
    /// buffer.push(None);
    /// buffer.push(Some(Point::new(3, 3)));
    /// assert_eq!(buffer.len(), 2);
    /// assert_eq!(buffer.get(0), Some(Some(Point::new(3, 3))));
    /// ```
    pub fn new(capacity: usize) -> Self {
        TrajectoryBuffer {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
    pub fn push(&mut self, point: Option<Point>) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_back();
        }
        self.points.push_front(point);
    }
    /// Sample at `idx` (0 - newest). Outer None: index out of range, inner None: no detection
    pub fn get(&self, idx: usize) -> Option<Option<Point>> {
        self.points.get(idx).copied()
    }
    /// Detected point at `idx`, None both for out of range index and for no-detection marker
    pub fn detection_at(&self, idx: usize) -> Option<Point> {
        self.get(idx).flatten()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Option<Point>> + Clone + '_ {
        self.points.iter()
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_never_exceeds_capacity() {
        let mut buffer = TrajectoryBuffer::new(32);
        for i in 0..100 {
            let pt = if i % 7 == 0 { None } else { Some(Point::new(i, i)) };
            buffer.push(pt);
            assert!(buffer.len() <= buffer.capacity());
        }
        assert_eq!(buffer.len(), 32);
    }

    #[test]
    fn test_eviction_order() {
        let mut buffer = TrajectoryBuffer::new(32);
        for i in 0..33 {
            buffer.push(Some(Point::new(i, 0)));
        }
        assert_eq!(buffer.detection_at(0), Some(Point::new(32, 0)));
        assert_eq!(buffer.detection_at(31), Some(Point::new(1, 0)));
        assert!(buffer.iter().all(|p| *p != Some(Point::new(0, 0))));
    }

    #[test]
    fn test_markers() {
        let mut buffer = TrajectoryBuffer::new(4);
        buffer.push(Some(Point::new(5, 5)));
        buffer.push(None);
        assert_eq!(buffer.get(0), Some(None));
        assert_eq!(buffer.detection_at(0), None);
        assert_eq!(buffer.detection_at(1), Some(Point::new(5, 5)));
        assert_eq!(buffer.get(2), None);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_zero_capacity() {
        let mut buffer = TrajectoryBuffer::new(0);
        buffer.push(Some(Point::new(1, 1)));
        assert!(buffer.is_empty());
    }
}
