use crate::coordinates::Pixel;
use crate::gesture::Gesture;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SwipeDirection {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "up")]
    Up,
    #[serde(rename = "down")]
    Down,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "up-left")]
    UpLeft,
    #[serde(rename = "up-right")]
    UpRight,
    #[serde(rename = "down-left")]
    DownLeft,
    #[serde(rename = "down-right")]
    DownRight,
}

impl SwipeDirection {
    pub const ALL: [SwipeDirection; 9] = [
        SwipeDirection::None,
        SwipeDirection::Up,
        SwipeDirection::Down,
        SwipeDirection::Left,
        SwipeDirection::Right,
        SwipeDirection::UpLeft,
        SwipeDirection::UpRight,
        SwipeDirection::DownLeft,
        SwipeDirection::DownRight,
    ];

    /// Lookup from `(vertical, horizontal)` signs, `+1` meaning up / right.
    pub fn from_signs(vertical: i8, horizontal: i8) -> Self {
        match (vertical.signum(), horizontal.signum()) {
            (1, 0) => SwipeDirection::Up,
            (-1, 0) => SwipeDirection::Down,
            (0, 1) => SwipeDirection::Right,
            (0, -1) => SwipeDirection::Left,
            (1, 1) => SwipeDirection::UpRight,
            (1, -1) => SwipeDirection::UpLeft,
            (-1, 1) => SwipeDirection::DownRight,
            (-1, -1) => SwipeDirection::DownLeft,
            _ => SwipeDirection::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::None => "none",
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
            SwipeDirection::UpLeft => "up-left",
            SwipeDirection::UpRight => "up-right",
            SwipeDirection::DownLeft => "down-left",
            SwipeDirection::DownRight => "down-right",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == SwipeDirection::None
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwipeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwipeDirection::ALL
            .into_iter()
            .find(|dir| dir.as_str() == s)
            .ok_or_else(|| format!("unknown swipe direction '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeConfig {
    /// Per-axis pixel thresholds a displacement must exceed.
    pub threshold_x: f32,
    pub threshold_y: f32,
    /// Camera view is mirrored: moving the hand toward negative x reads as
    /// a swipe to the right.
    pub mirror_horizontal: bool,
}

impl SwipeConfig {
    pub fn from_sensitivity(resolution: (u32, u32), sensitivity: (f32, f32), mirror_horizontal: bool) -> Self {
        Self {
            threshold_x: sensitivity.0 * resolution.0 as f32,
            threshold_y: sensitivity.1 * resolution.1 as f32,
            mirror_horizontal,
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::from_sensitivity((640, 480), (0.1, 0.1), true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockTransition {
    Locked,
    Unlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeUpdate {
    pub transition: Option<LockTransition>,
    pub current: SwipeDirection,
    pub last: SwipeDirection,
}

#[derive(Debug)]
pub struct SwipeTracker {
    config: SwipeConfig,
    locked: bool,
    start: Option<Pixel>,
    end: Option<Pixel>,
    current_swipe: SwipeDirection,
    last_swipe: SwipeDirection,
}

impl SwipeTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            locked: false,
            start: None,
            end: None,
            current_swipe: SwipeDirection::None,
            last_swipe: SwipeDirection::None,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// `(start, end)` stored coordinates.
    pub fn locked_coordinates(&self) -> (Option<Pixel>, Option<Pixel>) {
        (self.start, self.end)
    }

    pub fn current_swipe(&self) -> SwipeDirection {
        self.current_swipe
    }

    pub fn last_swipe(&self) -> SwipeDirection {
        self.last_swipe
    }

    /// `closed` locks, `palm` unlocks and clears both stored coordinates.
    pub fn handle_locking(&mut self, gesture: Gesture) -> Option<LockTransition> {
        match gesture {
            Gesture::Closed if !self.locked => {
                tracing::debug!(start = ?self.start, "swipe locked");
                self.locked = true;
                Some(LockTransition::Locked)
            }
            Gesture::Palm if self.locked => {
                tracing::debug!(swipe = %self.current_swipe, "swipe unlocked");
                self.locked = false;
                self.start = None;
                self.end = None;
                Some(LockTransition::Unlocked)
            }
            _ => None,
        }
    }

    /// Track the start point while unlocked, the end point while locked.
    pub fn update_coordinates(&mut self, position: Option<Pixel>) {
        let Some(position) = position else {
            return;
        };
        if self.locked {
            self.end = Some(position);
        } else {
            self.start = Some(position);
        }
    }

    /// `(dx, dy)` between the stored points, zero while either is unset.
    /// Saturates at the `i32` range.
    pub fn deltas(&self) -> (i32, i32) {
        match (self.start, self.end) {
            (Some(start), Some(end)) => (end.x.saturating_sub(start.x), end.y.saturating_sub(start.y)),
            _ => (0, 0),
        }
    }

    /// Classify the stored displacement. Pure: repeated calls agree.
    pub fn classify(&self) -> SwipeDirection {
        if self.start.is_none() || self.end.is_none() {
            return SwipeDirection::None;
        }
        let (dx, dy) = self.deltas();
        let (dx, dy) = (dx as f32, dy as f32);

        let vertical = axis_sign(-dy, self.config.threshold_y);
        let horizontal = if self.config.mirror_horizontal {
            axis_sign(-dx, self.config.threshold_x)
        } else {
            axis_sign(dx, self.config.threshold_x)
        };
        SwipeDirection::from_signs(vertical, horizontal)
    }

    /// Run one frame for the listening hand.
    pub fn update(&mut self, gesture: Gesture, position: Option<Pixel>) -> SwipeUpdate {
        let transition = self.handle_locking(gesture);
        self.update_coordinates(position);
        self.last_swipe = self.current_swipe;
        self.current_swipe = self.classify();
        SwipeUpdate {
            transition,
            current: self.current_swipe,
            last: self.last_swipe,
        }
    }

    pub fn reset(&mut self) {
        self.locked = false;
        self.start = None;
        self.end = None;
        self.current_swipe = SwipeDirection::None;
        self.last_swipe = SwipeDirection::None;
    }
}

fn axis_sign(delta: f32, threshold: f32) -> i8 {
    if delta > threshold {
        1
    } else if delta < -threshold {
        -1
    } else {
        0
    }
}
