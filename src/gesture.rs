use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed vocabulary of hand poses the classifier can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    Closed,
    Palm,
    PointUp,
    Rock,
    Victory,
    VictoryInverted,
    #[default]
    NoGesture,
}

impl Gesture {
    /// Every label a trained model may emit, in training order.
    pub const VOCABULARY: [Gesture; 6] = [
        Gesture::Closed,
        Gesture::Palm,
        Gesture::PointUp,
        Gesture::Rock,
        Gesture::Victory,
        Gesture::VictoryInverted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Closed => "closed",
            Gesture::Palm => "palm",
            Gesture::PointUp => "point_up",
            Gesture::Rock => "rock",
            Gesture::Victory => "victory",
            Gesture::VictoryInverted => "victory_inverted",
            Gesture::NoGesture => "no_gesture",
        }
    }

    /// `closed` and `palm` drive locking, clicking and focus keep-alive.
    pub fn is_control(&self) -> bool {
        matches!(self, Gesture::Closed | Gesture::Palm)
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGesture(pub String);

impl std::fmt::Display for UnknownGesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown gesture label '{}'", self.0)
    }
}

impl std::error::Error for UnknownGesture {}

impl FromStr for Gesture {
    type Err = UnknownGesture;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "closed" => Ok(Gesture::Closed),
            "palm" => Ok(Gesture::Palm),
            "point_up" => Ok(Gesture::PointUp),
            "rock" => Ok(Gesture::Rock),
            "victory" => Ok(Gesture::Victory),
            "victory_inverted" => Ok(Gesture::VictoryInverted),
            "no_gesture" | "none" => Ok(Gesture::NoGesture),
            other => Err(UnknownGesture(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandId {
    LeftHand,
    RightHand,
}

impl HandId {
    pub const ALL: [HandId; 2] = [HandId::LeftHand, HandId::RightHand];

    pub fn as_str(&self) -> &'static str {
        match self {
            HandId::LeftHand => "left_hand",
            HandId::RightHand => "right_hand",
        }
    }

    /// Two-element indicator prepended to the classifier input.
    pub fn one_hot(&self) -> [f32; 2] {
        match self {
            HandId::LeftHand => [1.0, 0.0],
            HandId::RightHand => [0.0, 1.0],
        }
    }

}

impl std::fmt::Display for HandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entities whose position is projected every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedEntity {
    Face,
    LeftHand,
    RightHand,
}

impl From<HandId> for TrackedEntity {
    fn from(hand: HandId) -> Self {
        match hand {
            HandId::LeftHand => TrackedEntity::LeftHand,
            HandId::RightHand => TrackedEntity::RightHand,
        }
    }
}

/// One hand's classification for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureSample {
    pub gesture: Gesture,
    #[serde(default)]
    pub confidence: f32,
}

impl GestureSample {
    pub fn new(gesture: Gesture, confidence: f32) -> Self {
        Self {
            gesture,
            confidence,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

impl From<Gesture> for GestureSample {
    fn from(gesture: Gesture) -> Self {
        let confidence = if gesture == Gesture::NoGesture { 0.0 } else { 1.0 };
        Self::new(gesture, confidence)
    }
}
