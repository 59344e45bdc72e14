//! Gesture interaction core for a camera-driven remote pointer.
//!
//! Upstream collaborators deliver, once per frame, hand and face landmarks
//! and a gesture model. This crate projects the landmarks to pixels,
//! arbitrates which hand has control, tracks swipes and click sequences, and
//! emits one [`event::InteractionEvent`] per frame for the transport.

pub mod classifier;
pub mod coordinates;
pub mod event;
pub mod features;
pub mod gesture;
pub mod handler;
pub mod interaction;
pub mod landmarks;
pub mod logging;
pub mod settings;

pub use event::{Action, InteractionEvent};
pub use gesture::{Gesture, GestureSample, HandId};
pub use handler::{FrameObservation, GestureHandler};
pub use settings::InteractionSettings;
