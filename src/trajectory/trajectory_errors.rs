use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("BadCapacity: trajectory capacity {0} is less than the comparison window of 10 samples")]
    BadCapacity(usize),
    #[error("BadThreshold: movement threshold should be non-negative, got {0}")]
    BadThreshold(i32),
    #[error("BadThicknessScale: thickness scale should be finite and positive, got {0}")]
    BadThicknessScale(f32),
    #[error("BadRadius: minimum detection radius should be finite and non-negative, got {0}")]
    BadRadius(f32),
    #[error("BadFrame: can't parse replay line {line:?}")]
    BadFrame {
        line: String,
        #[source]
        source: serde_json::Error,
    },
}
