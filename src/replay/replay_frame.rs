use serde::Deserialize;

use crate::trajectory::EstimatorError;
use crate::utils::{Detection, Point};

/// Single frame of recorded detector output
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplayFrame {
    /// Nothing has been detected on this frame
    Missing,
    /// Blob centroid. Radius is optional: without it centroid bypasses minimum radius gate
    Detected { center: Point, radius: Option<f32> },
}

#[derive(Debug, Deserialize)]
struct RawFrame {
    x: i32,
    y: i32,
    #[serde(default)]
    radius: Option<f32>,
}

impl ReplayFrame {
    pub fn detection(&self) -> Option<Detection> {
        match *self {
            ReplayFrame::Detected { center, radius: Some(r) } => Some(Detection::new(center, r)),
            _ => None,
        }
    }
}

/// Parses one line of replay input: `null` or `{"x": .., "y": .., "radius": ..}`.
///
/// Blank lines and `#` comments give `Ok(None)`.
///
/// ```
/// use motion_trail::replay::{parse_frame, ReplayFrame};
/// use motion_trail::utils::Point;
/// assert_eq!(parse_frame("null").unwrap(), Some(ReplayFrame::Missing));
/// assert_eq!(
///     parse_frame(r#"{"x": 10, "y": 20}"#).unwrap(),
///     Some(ReplayFrame::Detected { center: Point::new(10, 20), radius: None })
/// );
/// assert_eq!(parse_frame("# comment").unwrap(), None);
/// ```
pub fn parse_frame(line: &str) -> Result<Option<ReplayFrame>, EstimatorError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let raw: Option<RawFrame> =
        serde_json::from_str(trimmed).map_err(|source| EstimatorError::BadFrame {
            line: trimmed.to_string(),
            source,
        })?;
    let frame = match raw {
        None => ReplayFrame::Missing,
        Some(raw) => ReplayFrame::Detected {
            center: Point::new(raw.x, raw.y),
            radius: raw.radius,
        },
    };
    Ok(Some(frame))
}
