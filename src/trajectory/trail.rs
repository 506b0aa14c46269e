use itertools::Itertools;

use crate::trajectory::TrajectoryBuffer;
use crate::utils::Point;

/// Line between two consecutive trajectory points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    // Newer endpoint, trajectory index `index - 1`
    pub start: Point,
    // Older endpoint, trajectory index `index`
    pub end: Point,
    pub index: usize,
    pub thickness: u32,
}

/// Stroke thickness for segment ending at trajectory index `index` (>= 1).
/// Older segments get thinner strokes.
pub fn segment_thickness(capacity: usize, index: usize, thickness_scale: f32) -> u32 {
    let ratio = capacity as f32 / (index + 1) as f32;
    (ratio.sqrt() * thickness_scale).round() as u32
}

/// Adjacent pairs of `buffer` from newest to oldest. Pairs touching a no-detection marker are skipped.
pub fn trail_segments(
    buffer: &TrajectoryBuffer,
    thickness_scale: f32,
) -> impl Iterator<Item = TrailSegment> + '_ {
    let capacity = buffer.capacity();
    buffer
        .iter()
        .tuple_windows::<(_, _)>()
        .enumerate()
        .filter_map(move |(i, (newer, older))| {
            let (start, end) = ((*newer)?, (*older)?);
            let index = i + 1;
            Some(TrailSegment {
                start,
                end,
                index,
                thickness: segment_thickness(capacity, index, thickness_scale),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_thickness() {
        // sqrt(32 / 2) * 2.5 = 10
        assert_eq!(segment_thickness(32, 1, 2.5), 10);
        // sqrt(32 / 3) * 2.5 = 8.16
        assert_eq!(segment_thickness(32, 2, 2.5), 8);
        // sqrt(32 / 32) * 2.5 = 2.5, rounded half away from zero
        assert_eq!(segment_thickness(32, 31, 2.5), 3);
    }

    #[test]
    fn test_thickness_non_increasing() {
        let mut prev = u32::MAX;
        for index in 1..32 {
            let t = segment_thickness(32, index, 2.5);
            assert!(t <= prev);
            prev = t;
        }
    }

    #[test]
    fn test_skip_markers() {
        let mut buffer = TrajectoryBuffer::new(32);
        buffer.push(Some(Point::new(0, 0)));
        buffer.push(Some(Point::new(1, 1)));
        buffer.push(None);
        buffer.push(Some(Point::new(3, 3)));
        buffer.push(Some(Point::new(4, 4)));
        // newest first: (4,4) (3,3) None (1,1) (0,0)
        let segments: Vec<TrailSegment> = trail_segments(&buffer, 2.5).collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, Point::new(4, 4));
        assert_eq!(segments[0].end, Point::new(3, 3));
        assert_eq!(segments[0].index, 1);
        assert_eq!(segments[1].start, Point::new(1, 1));
        assert_eq!(segments[1].end, Point::new(0, 0));
        assert_eq!(segments[1].index, 4);
        assert!(segments[0].thickness >= segments[1].thickness);
    }

    #[test]
    fn test_restartable() {
        let mut buffer = TrajectoryBuffer::new(32);
        assert_eq!(trail_segments(&buffer, 2.5).count(), 0);
        buffer.push(Some(Point::new(0, 0)));
        assert_eq!(trail_segments(&buffer, 2.5).count(), 0);
        buffer.push(Some(Point::new(1, 0)));
        let first: Vec<TrailSegment> = trail_segments(&buffer, 2.5).collect();
        let second: Vec<TrailSegment> = trail_segments(&buffer, 2.5).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }
}
