use crate::gesture::Gesture;
use crate::interaction::{ArbiterConfig, SwipeConfig};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeSensitivity {
    pub x: f32,
    pub y: f32,
}

impl Default for SwipeSensitivity {
    fn default() -> Self {
        Self { x: 0.1, y: 0.1 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSettings {
    /// Width and height of the processed frame in pixels.
    #[serde(default = "default_frame_resolution")]
    pub frame_resolution: (u32, u32),
    /// Fraction of the frame a hand must travel on each axis to register a
    /// swipe.
    #[serde(default)]
    pub swipe_sensitivity: SwipeSensitivity,
    /// When true the camera image is mirrored, so moving toward negative x
    /// reads as a swipe to the right.
    #[serde(default = "default_true")]
    pub mirror_horizontal: bool,
    /// Seconds the attention gesture must be held in the activation zone.
    #[serde(default = "default_dwell_secs")]
    pub dwell_secs: f32,
    /// Seconds without a control gesture before the listening hand is
    /// released.
    #[serde(default = "default_focus_timeout_secs")]
    pub focus_timeout_secs: f32,
    /// Maximum seconds between two steps of a click sequence.
    #[serde(default = "default_click_max_hold_secs")]
    pub click_max_hold_secs: f32,
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,
    /// Half width and half height of the activation zone around the face.
    #[serde(default = "default_activation_half_extents")]
    pub activation_half_extents: (i32, i32),
    #[serde(default = "default_attention_gesture")]
    pub attention_gesture: Gesture,
    /// When enabled the logger is initialised at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_frame_resolution() -> (u32, u32) {
    (640, 480)
}

fn default_true() -> bool {
    true
}

fn default_dwell_secs() -> f32 {
    1.0
}

fn default_focus_timeout_secs() -> f32 {
    2.0
}

fn default_click_max_hold_secs() -> f32 {
    1.5
}

fn default_min_confidence() -> f32 {
    0.7
}

fn default_activation_half_extents() -> (i32, i32) {
    (320, 80)
}

fn default_attention_gesture() -> Gesture {
    Gesture::Palm
}

/// Negative or non-finite values collapse to zero; `validate` rejects them.
fn secs(value: f32) -> Duration {
    Duration::try_from_secs_f32(value).unwrap_or(Duration::ZERO)
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            frame_resolution: default_frame_resolution(),
            swipe_sensitivity: SwipeSensitivity::default(),
            mirror_horizontal: true,
            dwell_secs: default_dwell_secs(),
            focus_timeout_secs: default_focus_timeout_secs(),
            click_max_hold_secs: default_click_max_hold_secs(),
            min_confidence: default_min_confidence(),
            activation_half_extents: default_activation_half_extents(),
            attention_gesture: default_attention_gesture(),
            debug_logging: false,
        }
    }
}

impl InteractionSettings {
    /// Load settings from `path`. A missing or empty file yields defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("parsing settings file {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let (width, height) = self.frame_resolution;
        if width == 0 || height == 0 {
            bail!("frame_resolution must be non-zero, got {width}x{height}");
        }
        for (axis, value) in [("x", self.swipe_sensitivity.x), ("y", self.swipe_sensitivity.y)] {
            if !(value > 0.0 && value <= 1.0) {
                bail!("swipe_sensitivity.{axis} must be in (0, 1], got {value}");
            }
        }
        for (name, value) in [
            ("dwell_secs", self.dwell_secs),
            ("focus_timeout_secs", self.focus_timeout_secs),
            ("click_max_hold_secs", self.click_max_hold_secs),
        ] {
            if !(value.is_finite() && value > 0.0) {
                bail!("{name} must be a positive number of seconds, got {value}");
            }
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            bail!("min_confidence must be in [0, 1], got {}", self.min_confidence);
        }
        let (half_width, half_height) = self.activation_half_extents;
        if half_width <= 0 || half_height <= 0 {
            bail!("activation_half_extents must be positive, got ({half_width}, {half_height})");
        }
        if !self.attention_gesture.is_control() {
            tracing::warn!(
                gesture = %self.attention_gesture,
                "attention gesture is not a control gesture; a newly acquired hand may be released right away"
            );
        }
        Ok(())
    }

    pub fn dwell(&self) -> Duration {
        secs(self.dwell_secs)
    }

    pub fn focus_timeout(&self) -> Duration {
        secs(self.focus_timeout_secs)
    }

    pub fn click_max_hold(&self) -> Duration {
        secs(self.click_max_hold_secs)
    }

    pub fn arbiter_config(&self) -> ArbiterConfig {
        ArbiterConfig {
            half_extents: self.activation_half_extents,
            attention_gesture: self.attention_gesture,
            dwell: self.dwell(),
            focus_timeout: self.focus_timeout(),
        }
    }

    pub fn swipe_config(&self) -> SwipeConfig {
        SwipeConfig::from_sensitivity(
            self.frame_resolution,
            (self.swipe_sensitivity.x, self.swipe_sensitivity.y),
            self.mirror_horizontal,
        )
    }
}
