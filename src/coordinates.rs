use crate::gesture::{HandId, TrackedEntity};
use crate::landmarks::{FrameLandmarks, Landmark, LandmarkSet, MIDDLE_FINGER_MCP, NOSE_TIP};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pixel position in the processed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Pixel {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// The value absent entities carry on the wire.
pub const ABSENT_SENTINEL: (i32, i32) = (0, 0);

/// Map a normalized landmark to pixel space, rounding to the nearest pixel.
pub fn project(landmark: Option<Landmark>, resolution: (u32, u32)) -> Option<Pixel> {
    let landmark = landmark?;
    Some(Pixel {
        x: (landmark.x * resolution.0 as f32).round() as i32,
        y: (landmark.y * resolution.1 as f32).round() as i32,
    })
}

/// Wire form of an optional pixel: absent maps to `(0, 0)`.
pub fn to_wire(pixel: Option<Pixel>) -> (i32, i32) {
    pixel.map(|p| (p.x, p.y)).unwrap_or(ABSENT_SENTINEL)
}

fn anchor(set: Option<&LandmarkSet>, index: usize, resolution: (u32, u32)) -> Option<Pixel> {
    project(set.and_then(|set| set.get(index)), resolution)
}

/// Per-frame pixel positions of every tracked entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coordinates {
    pub face: Option<Pixel>,
    pub left_hand: Option<Pixel>,
    pub right_hand: Option<Pixel>,
}

impl Coordinates {
    /// Hands are anchored on the middle finger MCP, the face on the nose tip.
    pub fn from_landmarks(frame: &FrameLandmarks, resolution: (u32, u32)) -> Self {
        Self {
            face: anchor(frame.face.as_ref(), NOSE_TIP, resolution),
            left_hand: anchor(frame.left_hand.as_ref(), MIDDLE_FINGER_MCP, resolution),
            right_hand: anchor(frame.right_hand.as_ref(), MIDDLE_FINGER_MCP, resolution),
        }
    }

    pub fn get(&self, entity: TrackedEntity) -> Option<Pixel> {
        match entity {
            TrackedEntity::Face => self.face,
            TrackedEntity::LeftHand => self.left_hand,
            TrackedEntity::RightHand => self.right_hand,
        }
    }

    pub fn hand(&self, hand: HandId) -> Option<Pixel> {
        self.get(hand.into())
    }

    pub fn set(&mut self, entity: TrackedEntity, pixel: Option<Pixel>) {
        match entity {
            TrackedEntity::Face => self.face = pixel,
            TrackedEntity::LeftHand => self.left_hand = pixel,
            TrackedEntity::RightHand => self.right_hand = pixel,
        }
    }
}

impl Serialize for Coordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<TrackedEntity, (i32, i32)> = [
            (TrackedEntity::Face, to_wire(self.face)),
            (TrackedEntity::LeftHand, to_wire(self.left_hand)),
            (TrackedEntity::RightHand, to_wire(self.right_hand)),
        ]
        .into_iter()
        .collect();
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<TrackedEntity, Option<(i32, i32)>>::deserialize(deserializer)?;
        let mut coordinates = Coordinates::default();
        for (entity, value) in map {
            let pixel = value
                .filter(|value| *value != ABSENT_SENTINEL)
                .map(Pixel::from);
            coordinates.set(entity, pixel);
        }
        Ok(coordinates)
    }
}
