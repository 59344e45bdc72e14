pub mod activation;
pub mod click;
pub mod swipe;

pub use activation::{ActivationArbiter, ActivationZone, ArbiterConfig, ArbiterState, ArbiterTransition};
pub use click::{ClickDetector, ClickState};
pub use swipe::{LockTransition, SwipeConfig, SwipeDirection, SwipeTracker, SwipeUpdate};
