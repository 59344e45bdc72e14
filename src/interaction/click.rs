use crate::gesture::Gesture;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickState {
    #[default]
    Pending,
    FirstOpen,
    FirstClosed,
    SecondOpen,
    SecondClosed,
    Click,
}

#[derive(Debug)]
pub struct ClickDetector {
    max_hold: Duration,
    state: ClickState,
    state_since: Option<Instant>,
    previous_gesture: Option<Gesture>,
    current_gesture: Option<Gesture>,
}

impl Default for ClickDetector {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl ClickDetector {
    pub fn new(max_hold: Duration) -> Self {
        Self {
            max_hold,
            state: ClickState::Pending,
            state_since: None,
            previous_gesture: None,
            current_gesture: None,
        }
    }

    pub fn state(&self) -> ClickState {
        self.state
    }

    pub fn state_since(&self) -> Option<Instant> {
        self.state_since
    }

    pub fn previous_gesture(&self) -> Option<Gesture> {
        self.previous_gesture
    }

    pub fn current_gesture(&self) -> Option<Gesture> {
        self.current_gesture
    }

    pub fn is_clicking(&self) -> bool {
        self.state == ClickState::Click
    }

    pub fn reset(&mut self) {
        self.state = ClickState::Pending;
        self.state_since = None;
        self.previous_gesture = None;
        self.current_gesture = None;
    }

    pub fn handle_step(&mut self, gesture: Gesture, now: Instant) -> ClickState {
        // Dropouts such as `no_gesture` keep the gesture history intact.
        if gesture.is_control() {
            self.previous_gesture = self.current_gesture;
            self.current_gesture = Some(gesture);
        }

        let since = *self.state_since.get_or_insert(now);
        let elapsed = now.saturating_duration_since(since);

        if self.state == ClickState::Click {
            self.enter(ClickState::Pending, now);
            return self.state;
        }

        let next = if gesture.is_control() {
            self.next_state(elapsed)
        } else {
            None
        };

        match next {
            Some(next) => {
                if next == ClickState::Click {
                    tracing::info!("click detected");
                }
                self.enter(next, now);
            }
            None if self.state != ClickState::Pending && elapsed > self.max_hold => {
                tracing::debug!(state = ?self.state, ?elapsed, "click sequence stalled");
                self.enter(ClickState::Pending, now);
            }
            None => {}
        }
        self.state
    }

    fn next_state(&self, elapsed: Duration) -> Option<ClickState> {
        let in_time = elapsed <= self.max_hold;
        let step = |from: Gesture, to: Gesture| {
            in_time && self.previous_gesture == Some(from) && self.current_gesture == Some(to)
        };
        match self.state {
            ClickState::Pending => {
                (self.current_gesture == Some(Gesture::Palm)).then_some(ClickState::FirstOpen)
            }
            ClickState::FirstOpen => {
                step(Gesture::Palm, Gesture::Closed).then_some(ClickState::FirstClosed)
            }
            ClickState::FirstClosed => {
                step(Gesture::Closed, Gesture::Palm).then_some(ClickState::SecondOpen)
            }
            ClickState::SecondOpen => {
                step(Gesture::Palm, Gesture::Closed).then_some(ClickState::SecondClosed)
            }
            ClickState::SecondClosed => {
                step(Gesture::Closed, Gesture::Palm).then_some(ClickState::Click)
            }
            ClickState::Click => Some(ClickState::Pending),
        }
    }

    fn enter(&mut self, state: ClickState, now: Instant) {
        self.state = state;
        self.state_since = Some(now);
    }
}
