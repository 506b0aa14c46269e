use tracing::{info, warn};

use crate::replay::{parse_frame, ReplayFrame};
use crate::trajectory::{
    Direction, DirectionEstimator, DirectionUpdate, EstimatorConfig, EstimatorError, TrailSegment,
};

/// What renderer would have drawn for a single frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame: usize,
    pub direction: Direction,
    pub delta: (i32, i32),
    pub outcome: DirectionUpdate,
    pub segments: Vec<TrailSegment>,
}

/// Feeds recorded frames through estimator one by one
pub struct Replay {
    estimator: DirectionEstimator,
    // Skip unparsable lines instead of failing. Default is false
    lenient: bool,
    frames: usize,
    skipped: usize,
}

impl Replay {
    /// Creates replay over fresh estimator
    ///
    /// Basic usage:
    ///
    /// ```
    /// use motion_trail::replay::Replay;
    /// use motion_trail::trajectory::EstimatorConfig;
    /// let mut replay = Replay::new(EstimatorConfig::default()).unwrap();
    /// let report = replay.process_line(r#"{"x": 5, "y": 5}"#).unwrap().unwrap();
    /// assert_eq!(report.frame, 1);
    /// assert_eq!(report.delta, (0, 0));
    /// ```
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        let estimator = DirectionEstimator::with_config(config)?;
        info!(estimator = %estimator.id(), capacity = estimator.capacity(), "replay started");
        Ok(Replay {
            estimator,
            lenient: false,
            frames: 0,
            skipped: 0,
        })
    }
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }
    pub fn estimator(&self) -> &DirectionEstimator {
        &self.estimator
    }
    pub fn frames(&self) -> usize {
        self.frames
    }
    pub fn skipped(&self) -> usize {
        self.skipped
    }
    pub fn step(&mut self, frame: ReplayFrame) -> FrameReport {
        let outcome = match frame {
            ReplayFrame::Missing => self.estimator.observe(None),
            ReplayFrame::Detected { center, radius: None } => self.estimator.observe(Some(center)),
            ReplayFrame::Detected { .. } => self.estimator.observe_detection(frame.detection()),
        };
        self.frames += 1;
        FrameReport {
            frame: self.frames,
            direction: self.estimator.current_direction(),
            delta: self.estimator.current_delta(),
            outcome,
            segments: self.estimator.trail_segments().collect(),
        }
    }
    /// Parses and processes one input line. `Ok(None)` for blank, comment and (in lenient mode) bad lines
    pub fn process_line(&mut self, line: &str) -> Result<Option<FrameReport>, EstimatorError> {
        match parse_frame(line) {
            Ok(Some(frame)) => Ok(Some(self.step(frame))),
            Ok(None) => Ok(None),
            Err(err) if self.lenient => {
                warn!(error = %err, "skipping replay line");
                self.skipped += 1;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
