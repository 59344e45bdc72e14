use crate::coordinates::{Coordinates, Pixel};
use crate::gesture::{Gesture, HandId};
use crate::handler::HandGestures;
use std::time::{Duration, Instant};

/// Axis-aligned rectangle centred on the face anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationZone {
    pub center: Pixel,
    pub half_width: i32,
    pub half_height: i32,
}

impl ActivationZone {
    pub fn around(center: Pixel, half_extents: (i32, i32)) -> Self {
        Self {
            center,
            half_width: half_extents.0,
            half_height: half_extents.1,
        }
    }

    /// `(left, top, right, bottom)` in pixels.
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        (
            self.center.x.saturating_sub(self.half_width),
            self.center.y.saturating_sub(self.half_height),
            self.center.x.saturating_add(self.half_width),
            self.center.y.saturating_add(self.half_height),
        )
    }

    /// Strict containment; points on the border are outside.
    pub fn contains(&self, point: Pixel) -> bool {
        let (left, top, right, bottom) = self.bounds();
        left < point.x && point.x < right && top < point.y && point.y < bottom
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArbiterConfig {
    pub half_extents: (i32, i32),
    pub attention_gesture: Gesture,
    pub dwell: Duration,
    pub focus_timeout: Duration,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            half_extents: (320, 80),
            attention_gesture: Gesture::Palm,
            dwell: Duration::from_secs(1),
            focus_timeout: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArbiterState {
    #[default]
    Idle,
    Listening(HandId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArbiterTransition {
    Acquired(HandId),
    Released(HandId),
}

#[derive(Debug)]
pub struct ActivationArbiter {
    config: ArbiterConfig,
    state: ArbiterState,
    pending_since: [Option<Instant>; 2],
    no_interaction_since: Option<Instant>,
    zone: Option<ActivationZone>,
}

fn slot(hand: HandId) -> usize {
    match hand {
        HandId::LeftHand => 0,
        HandId::RightHand => 1,
    }
}

impl ActivationArbiter {
    pub fn new(config: ArbiterConfig) -> Self {
        Self {
            config,
            state: ArbiterState::Idle,
            pending_since: [None; 2],
            no_interaction_since: None,
            zone: None,
        }
    }

    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    pub fn state(&self) -> ArbiterState {
        self.state
    }

    pub fn listening(&self) -> Option<HandId> {
        match self.state {
            ArbiterState::Idle => None,
            ArbiterState::Listening(hand) => Some(hand),
        }
    }

    /// Zone computed on the last update; `None` when the face was absent.
    pub fn zone(&self) -> Option<ActivationZone> {
        self.zone
    }

    pub fn pending_since(&self, hand: HandId) -> Option<Instant> {
        self.pending_since[slot(hand)]
    }

    pub fn no_interaction_since(&self) -> Option<Instant> {
        self.no_interaction_since
    }

    pub fn reset(&mut self) {
        self.state = ArbiterState::Idle;
        self.pending_since = [None; 2];
        self.no_interaction_since = None;
    }

    pub fn update(
        &mut self,
        coordinates: &Coordinates,
        gestures: &HandGestures,
        now: Instant,
    ) -> Option<ArbiterTransition> {
        self.zone = coordinates
            .face
            .map(|face| ActivationZone::around(face, self.config.half_extents));

        match self.state {
            ArbiterState::Listening(hand) => self.track_focus(hand, coordinates, gestures, now),
            ArbiterState::Idle => self.track_dwell(coordinates, gestures, now),
        }
    }

    fn track_focus(
        &mut self,
        hand: HandId,
        coordinates: &Coordinates,
        gestures: &HandGestures,
        now: Instant,
    ) -> Option<ArbiterTransition> {
        let interacting = coordinates.hand(hand).is_some() && gestures.get(hand).gesture.is_control();
        if interacting {
            self.no_interaction_since = None;
            return None;
        }

        let since = *self.no_interaction_since.get_or_insert(now);
        if now.saturating_duration_since(since) > self.config.focus_timeout {
            tracing::info!(%hand, "focus lost, releasing hand");
            self.reset();
            return Some(ArbiterTransition::Released(hand));
        }
        None
    }

    fn track_dwell(
        &mut self,
        coordinates: &Coordinates,
        gestures: &HandGestures,
        now: Instant,
    ) -> Option<ArbiterTransition> {
        for hand in HandId::ALL {
            let in_zone = match (self.zone, coordinates.hand(hand)) {
                (Some(zone), Some(position)) => zone.contains(position),
                _ => false,
            };
            let attentive = gestures.get(hand).gesture == self.config.attention_gesture;
            let pending = &mut self.pending_since[slot(hand)];
            if in_zone && attentive {
                pending.get_or_insert(now);
            } else {
                *pending = None;
            }
        }

        // Earliest dwell start wins; an exact tie goes to the right hand.
        let winner = HandId::ALL
            .into_iter()
            .filter_map(|hand| self.pending_since(hand).map(|since| (hand, since)))
            .filter(|(_, since)| now.saturating_duration_since(*since) >= self.config.dwell)
            .min_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|(hand, _)| hand)?;

        tracing::info!(hand = %winner, "hand acquired control");
        self.state = ArbiterState::Listening(winner);
        self.pending_since = [None; 2];
        self.no_interaction_since = None;
        Some(ArbiterTransition::Acquired(winner))
    }
}
