use serde::{Deserialize, Serialize};

pub const WRIST: usize = 0;
/// Landmark used both as the hand's screen anchor and as the reference
/// direction for feature angles.
pub const MIDDLE_FINGER_MCP: usize = 9;
/// Face mesh landmark used as the face anchor.
pub const NOSE_TIP: usize = 4;

pub const HAND_LANDMARK_COUNT: usize = 21;

/// A single detector keypoint in normalized image space (`[0,1]` per axis).
/// `z` is carried through but never used by the interaction core.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

impl From<(f32, f32)> for Landmark {
    fn from(value: (f32, f32)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Ordered keypoints for one tracked hand or face in one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.points.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Landmark>> for LandmarkSet {
    fn from(points: Vec<Landmark>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Landmark> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Everything the landmark detector produced for one frame. `None` means the
/// entity was not detected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameLandmarks {
    #[serde(default)]
    pub left_hand: Option<LandmarkSet>,
    #[serde(default)]
    pub right_hand: Option<LandmarkSet>,
    #[serde(default)]
    pub face: Option<LandmarkSet>,
}
