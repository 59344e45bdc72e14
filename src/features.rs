use crate::gesture::HandId;
use crate::landmarks::{Landmark, LandmarkSet, WRIST};
use std::f32::consts::PI;

/// Index of the reference landmark within the wrist-relative sequence
/// (landmark 9 of the full set, the middle finger MCP).
pub const REFERENCE_INDEX: usize = 8;

/// Minimum number of wrist-relative points a set must carry.
pub const MIN_RELATIVE_POINTS: usize = REFERENCE_INDEX + 1;

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureError {
    InvalidLandmarkSet { found: usize, required: usize },
}

impl std::fmt::Display for FeatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureError::InvalidLandmarkSet { found, required } => write!(
                f,
                "invalid landmark set: {found} points, at least {required} required"
            ),
        }
    }
}

impl std::error::Error for FeatureError {}

/// Length of the feature vector produced for a set of `points` landmarks.
pub fn feature_len(points: usize) -> usize {
    2 * points.saturating_sub(1)
}

/// Compute `(N-1)` wrist distances followed by `(N-1)` normalized angles.
pub fn normalize_hand(landmarks: &LandmarkSet) -> Result<Vec<f32>, FeatureError> {
    let points = landmarks.points();
    let required = MIN_RELATIVE_POINTS + 1;
    if points.len() < required {
        return Err(FeatureError::InvalidLandmarkSet {
            found: points.len(),
            required,
        });
    }

    let wrist = points[WRIST];
    let relative = &points[WRIST + 1..];
    let reference = wrist_vector(wrist, relative[REFERENCE_INDEX]);

    let mut features = Vec::with_capacity(feature_len(points.len()));
    features.extend(relative.iter().map(|point| distance(wrist, *point)));
    features.extend(relative.iter().enumerate().map(|(idx, point)| {
        if idx == REFERENCE_INDEX {
            0.0
        } else {
            normalized_angle(wrist_vector(wrist, *point), reference)
        }
    }));
    Ok(features)
}

/// Feature vector prefixed with the one-hot hand indicator, as consumed by
/// the gesture classifier.
pub fn classifier_input(hand: HandId, landmarks: &LandmarkSet) -> Result<Vec<f32>, FeatureError> {
    let features = normalize_hand(landmarks)?;
    let mut input = Vec::with_capacity(features.len() + 2);
    input.extend_from_slice(&hand.one_hot());
    input.extend(features);
    Ok(input)
}

fn wrist_vector(wrist: Landmark, point: Landmark) -> (f32, f32) {
    (wrist.x - point.x, wrist.y - point.y)
}

fn distance(a: Landmark, b: Landmark) -> f32 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Signed angle from `a` to `b` mapped from `[-π, π]` onto `[0, 1]`.
fn normalized_angle(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dot = a.0 * b.0 + a.1 * b.1;
    let cross = a.0 * b.1 - a.1 * b.0;
    (cross.atan2(dot) + PI) / (2.0 * PI)
}
