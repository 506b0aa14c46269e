//! Motion direction and fading trail for a single tracked blob.
//!
//! Detector (external) reports a centroid per frame, [`trajectory::DirectionEstimator`]
//! keeps bounded history of them and derives coarse compass direction, pixel delta and
//! trail segments for drawing.
pub mod trajectory;
pub mod replay;
pub mod utils;
