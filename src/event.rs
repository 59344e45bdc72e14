use crate::coordinates::Coordinates;
use crate::gesture::{Gesture, HandId};
use crate::interaction::SwipeDirection;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

const HOVER_PREFIX: &str = "hover_";

/// What the UI should do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Action {
    Click,
    /// Live preview of the swipe being measured while the hand is closed.
    Hover(SwipeDirection),
    /// Swipe validated by opening the hand.
    Swipe(SwipeDirection),
    None,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Click => f.write_str("click"),
            Action::Hover(dir) => write!(f, "{HOVER_PREFIX}{dir}"),
            Action::Swipe(dir) => write!(f, "{dir}"),
            Action::None => f.write_str("none"),
        }
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "click" => Ok(Action::Click),
            "none" => Ok(Action::None),
            _ => match s.strip_prefix(HOVER_PREFIX) {
                Some(dir) => dir.parse().map(Action::Hover),
                None => s.parse().map(Action::Swipe),
            },
        }
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

impl TryFrom<String> for Action {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deltas {
    pub x: i32,
    pub y: i32,
}

impl From<(i32, i32)> for Deltas {
    fn from(value: (i32, i32)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

/// Payload emitted once per frame for the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub hand: Option<HandId>,
    pub coordinates: Coordinates,
    pub gesture: Gesture,
    pub deltas: Deltas,
    pub action: Option<Action>,
}

impl InteractionEvent {
    /// Event for a frame in which no hand has control.
    pub fn idle(coordinates: Coordinates) -> Self {
        Self {
            hand: None,
            coordinates,
            gesture: Gesture::NoGesture,
            deltas: Deltas::default(),
            action: None,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Consumer of per-frame events, usually a network transport.
pub trait EventSink {
    fn dispatch(&mut self, event: &InteractionEvent) -> anyhow::Result<()>;
}

/// Writes each event as one JSON line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn dispatch(&mut self, event: &InteractionEvent) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
