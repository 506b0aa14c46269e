use chrono::{DateTime, Utc};

/// Per-frame rate readout: stamp frame start, read rate once the frame is processed
#[derive(Debug, Clone, Copy)]
pub struct FpsMeter {
    started: DateTime<Utc>,
}

impl FpsMeter {
    /// Creates meter stamped with current time
    ///
    /// Basic usage:
    ///
    /// ```
    /// use motion_trail::utils::FpsMeter;
    /// let mut meter = FpsMeter::new();
    /// meter.start();
    /// // ... process frame ...
    /// let _fps = meter.fps();
    /// ```
    pub fn new() -> Self {
        FpsMeter { started: Utc::now() }
    }
    pub fn start(&mut self) {
        self.started = Utc::now();
    }
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started
    }
    /// Rounded frames per second since last `start()`
    pub fn fps(&self) -> Option<f64> {
        fps_between(self.started, Utc::now())
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounded frames per second for a single frame spanning `start..end`.
/// None when elapsed time is zero or negative (clock went backwards).
pub fn fps_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<f64> {
    let micros = (end - start).num_microseconds()?;
    if micros <= 0 {
        return None;
    }
    Some((1_000_000.0 / micros as f64).round())
}
