use serde::{Deserialize, Serialize};

use crate::trajectory::trajectory_errors::EstimatorError;
use crate::trajectory::LOOKBACK;

/// Tunables of [`DirectionEstimator`](crate::trajectory::DirectionEstimator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    // Max number of points in trajectory. Default is 32
    pub capacity: usize,
    // Noise-rejection margin (pixels) per axis. Default is 20
    pub threshold: i32,
    // Trail stroke scale. Default is 2.5
    pub thickness_scale: f32,
    // Blobs with enclosing radius not greater than this are treated as no detection. Default is 10.0
    pub min_radius: f32,
    // Keep last direction when movement is below threshold. Default is true
    pub sticky: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            capacity: 32,
            threshold: 20,
            thickness_scale: 2.5,
            min_radius: 10.0,
            sticky: true,
        }
    }
}

impl EstimatorConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }
    pub fn with_thickness_scale(mut self, thickness_scale: f32) -> Self {
        self.thickness_scale = thickness_scale;
        self
    }
    pub fn with_min_radius(mut self, min_radius: f32) -> Self {
        self.min_radius = min_radius;
        self
    }
    pub fn with_sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }
    /// Checks that estimator built from this config is able to produce directions and trails
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.capacity < LOOKBACK {
            return Err(EstimatorError::BadCapacity(self.capacity));
        }
        if self.threshold < 0 {
            return Err(EstimatorError::BadThreshold(self.threshold));
        }
        if !self.thickness_scale.is_finite() || self.thickness_scale <= 0.0 {
            return Err(EstimatorError::BadThicknessScale(self.thickness_scale));
        }
        if !self.min_radius.is_finite() || self.min_radius < 0.0 {
            return Err(EstimatorError::BadRadius(self.min_radius));
        }
        Ok(())
    }
}
