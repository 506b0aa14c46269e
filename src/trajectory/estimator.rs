use tracing::{debug, trace};
use uuid::Uuid;

use crate::trajectory::trail::{trail_segments, TrailSegment};
use crate::trajectory::trajectory_errors::EstimatorError;
use crate::trajectory::{Direction, DirectionState, EstimatorConfig, TrajectoryBuffer};
use crate::utils::{Detection, Point};

/// Number of samples needed before direction could be estimated.
/// Also the distance from the tail of the buffer to the historical comparison point.
pub const LOOKBACK: usize = 10;

/// What happened on `update_direction()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionUpdate {
    /// Delta exceeded threshold on at least one axis and direction has been overwritten
    Moved,
    /// Delta has been recomputed but stays within threshold on both axes
    Stationary,
    /// Less than LOOKBACK samples or no detection at one of comparison indices. State is untouched
    InsufficientHistory,
}

/// Single object motion-direction estimator over a bounded trajectory
#[derive(Debug, Clone)]
pub struct DirectionEstimator {
    id: Uuid,
    config: EstimatorConfig,
    buffer: TrajectoryBuffer,
    state: DirectionState,
}

impl DirectionEstimator {
    /// Creates estimator with default config (capacity 32, threshold 20, thickness scale 2.5)
    ///
    /// Basic usage:
    ///
    /// ```
    /// use motion_trail::trajectory::DirectionEstimator;
    /// use motion_trail::utils::Point;
    /// let mut estimator = DirectionEstimator::new();
    /// // Object moves to the left by 10 px per frame
    /// for i in 0..16 {
    ///     estimator.observe(Some(Point::new(300 - 10 * i, 200)));
    /// }
    /// assert_eq!(estimator.current_direction().to_string(), "West");
    /// assert_eq!(estimator.current_delta(), (50, 0));
    /// ```
    pub fn new() -> Self {
        DirectionEstimator::build(EstimatorConfig::default())
    }
    /// Creates estimator with custom config
    ///
    /// Basic usage:
    ///
    /// ```
    /// use motion_trail::trajectory::{DirectionEstimator, EstimatorConfig};
    /// let cfg = EstimatorConfig::default().with_capacity(64).with_threshold(15);
    /// let estimator = DirectionEstimator::with_config(cfg).unwrap();
    /// assert_eq!(estimator.capacity(), 64);
    /// ```
    pub fn with_config(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(DirectionEstimator::build(config))
    }
    fn build(config: EstimatorConfig) -> Self {
        DirectionEstimator {
            id: Uuid::new_v4(),
            buffer: TrajectoryBuffer::new(config.capacity),
            config,
            state: DirectionState::default(),
        }
    }
    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
    pub fn len(&self) -> usize {
        self.buffer.len()
    }
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
    /// Trajectory samples, newest first
    pub fn points(&self) -> impl Iterator<Item = &Option<Point>> + '_ {
        self.buffer.iter()
    }
    pub fn state(&self) -> DirectionState {
        self.state
    }
    pub fn current_direction(&self) -> Direction {
        self.state.direction
    }
    /// Last computed `(dx, dy)`, `(0, 0)` until first successful computation
    pub fn current_delta(&self) -> (i32, i32) {
        self.state.delta()
    }
    /// Adds new sample to the front of trajectory. None means nothing has been detected on this frame
    pub fn push(&mut self, point: Option<Point>) {
        self.buffer.push(point);
    }
    /// Adds detector's report passing it through minimum radius gate
    pub fn push_detection(&mut self, detection: Option<Detection>) {
        let point = detection
            .filter(|d| d.qualifies(self.config.min_radius))
            .map(|d| d.center);
        self.push(point);
    }
    /// Recomputes direction from the trajectory.
    ///
    /// Compares sample `buffer[len - 10]` against `buffer[1]` (second most recent).
    /// Newest sample should be a detection too. Otherwise state stays as is.
    pub fn update_direction(&mut self) -> DirectionUpdate {
        let len = self.buffer.len();
        if len < LOOKBACK {
            trace!(estimator = %self.id, len, "not enough samples for direction");
            return DirectionUpdate::InsufficientHistory;
        }
        let (past, current) = match (
            self.buffer.detection_at(len - LOOKBACK),
            self.buffer.detection_at(1),
            self.buffer.detection_at(0),
        ) {
            (Some(past), Some(current), Some(_)) => (past, current),
            _ => {
                trace!(estimator = %self.id, "no detection at comparison index");
                return DirectionUpdate::InsufficientHistory;
            }
        };
        let (dx, dy) = past.delta_to(&current);
        self.state.dx = dx;
        self.state.dy = dy;
        let direction = Direction::from_delta(dx, dy, self.config.threshold);
        if direction.is_empty() {
            if !self.config.sticky {
                self.state.direction = direction;
            }
            trace!(estimator = %self.id, dx, dy, "movement below threshold");
            return DirectionUpdate::Stationary;
        }
        if direction != self.state.direction {
            debug!(estimator = %self.id, dx, dy, direction = %direction, "direction changed");
        }
        self.state.direction = direction;
        DirectionUpdate::Moved
    }
    /// Push + update_direction, i.e. one frame of processing
    pub fn observe(&mut self, point: Option<Point>) -> DirectionUpdate {
        self.push(point);
        self.update_direction()
    }
    /// Push detection + update_direction
    pub fn observe_detection(&mut self, detection: Option<Detection>) -> DirectionUpdate {
        self.push_detection(detection);
        self.update_direction()
    }
    /// Segments for trail drawing, newest first. Computed from current trajectory on every call
    pub fn trail_segments(&self) -> impl Iterator<Item = TrailSegment> + '_ {
        trail_segments(&self.buffer, self.config.thickness_scale)
    }
    /// Forgets trajectory and direction
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = DirectionState::default();
        debug!(estimator = %self.id, "trajectory cleared");
    }
}

impl Default for DirectionEstimator {
    fn default() -> Self {
        Self::new()
    }
}
