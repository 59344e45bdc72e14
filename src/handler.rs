use crate::coordinates::Coordinates;
use crate::event::{Action, InteractionEvent};
use crate::gesture::{GestureSample, HandId};
use crate::interaction::{
    ActivationArbiter, ArbiterTransition, ClickDetector, ClickState, LockTransition, SwipeTracker,
};
use crate::settings::InteractionSettings;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Classification of both hands for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandGestures {
    #[serde(default)]
    pub left_hand: GestureSample,
    #[serde(default)]
    pub right_hand: GestureSample,
}

impl HandGestures {
    pub fn get(&self, hand: HandId) -> GestureSample {
        match hand {
            HandId::LeftHand => self.left_hand,
            HandId::RightHand => self.right_hand,
        }
    }
}

/// Everything the core consumes for one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameObservation {
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub gestures: HandGestures,
}

#[derive(Debug)]
pub struct GestureHandler {
    arbiter: ActivationArbiter,
    swipe: SwipeTracker,
    click: ClickDetector,
}

impl Default for GestureHandler {
    fn default() -> Self {
        Self::new(&InteractionSettings::default())
    }
}

impl GestureHandler {
    pub fn new(settings: &InteractionSettings) -> Self {
        Self {
            arbiter: ActivationArbiter::new(settings.arbiter_config()),
            swipe: SwipeTracker::new(settings.swipe_config()),
            click: ClickDetector::new(settings.click_max_hold()),
        }
    }

    pub fn listening_hand(&self) -> Option<HandId> {
        self.arbiter.listening()
    }

    pub fn arbiter(&self) -> &ActivationArbiter {
        &self.arbiter
    }

    pub fn swipe(&self) -> &SwipeTracker {
        &self.swipe
    }

    pub fn click(&self) -> &ClickDetector {
        &self.click
    }

    pub fn reset(&mut self) {
        self.arbiter.reset();
        self.swipe.reset();
        self.click.reset();
    }

    pub fn tick(&mut self, observation: &FrameObservation, now: Instant) -> InteractionEvent {
        let coordinates = observation.coordinates;
        let transition = self.arbiter.update(&coordinates, &observation.gestures, now);
        if let Some(ArbiterTransition::Released(_)) = transition {
            self.swipe.reset();
            self.click.reset();
        }

        let Some(hand) = self.arbiter.listening() else {
            return InteractionEvent::idle(coordinates);
        };

        let sample = observation.gestures.get(hand);
        let swipe = self.swipe.update(sample.gesture, coordinates.hand(hand));
        let click = self.click.handle_step(sample.gesture, now);

        let action = if click == ClickState::Click {
            Action::Click
        } else if swipe.transition == Some(LockTransition::Unlocked) && !swipe.last.is_none() {
            tracing::info!(%hand, direction = %swipe.last, "swipe validated");
            Action::Swipe(swipe.last)
        } else if self.swipe.is_locked() {
            Action::Hover(swipe.current)
        } else {
            Action::None
        };

        InteractionEvent {
            hand: Some(hand),
            coordinates,
            gesture: sample.gesture,
            deltas: self.swipe.deltas().into(),
            action: Some(action),
        }
    }
}
