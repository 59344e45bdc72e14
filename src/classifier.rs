use crate::coordinates::Coordinates;
use crate::features::classifier_input;
use crate::gesture::{Gesture, GestureSample, HandId};
use crate::handler::{FrameObservation, HandGestures};
use crate::landmarks::{FrameLandmarks, LandmarkSet};
use crate::settings::InteractionSettings;

/// External gesture model.
pub trait GestureClassifier {
    fn scores(&mut self, input: &[f32]) -> anyhow::Result<Vec<f32>>;
}

impl<F> GestureClassifier for F
where
    F: FnMut(&[f32]) -> anyhow::Result<Vec<f32>>,
{
    fn scores(&mut self, input: &[f32]) -> anyhow::Result<Vec<f32>> {
        self(input)
    }
}

/// Resolve raw scores against an ordered vocabulary.
///
/// Flat score vectors carry no information and resolve to no gesture, as do
/// best scores under `min_confidence`.
pub fn resolve_scores(vocabulary: &[Gesture], scores: &[f32], min_confidence: f32) -> GestureSample {
    if scores.is_empty() || scores.len() != vocabulary.len() {
        return GestureSample::none();
    }
    if scores.iter().all(|score| *score == scores[0]) {
        return GestureSample::none();
    }
    let (best, confidence) = scores
        .iter()
        .copied()
        .enumerate()
        .fold((0, f32::NEG_INFINITY), |best, (idx, score)| {
            if score > best.1 {
                (idx, score)
            } else {
                best
            }
        });
    if confidence < min_confidence {
        return GestureSample::none();
    }
    GestureSample::new(vocabulary[best], confidence)
}

pub struct HandClassifier {
    vocabulary: Vec<Gesture>,
    min_confidence: f32,
    model: Box<dyn GestureClassifier>,
}

impl HandClassifier {
    pub fn new(
        vocabulary: Vec<Gesture>,
        min_confidence: f32,
        model: Box<dyn GestureClassifier>,
    ) -> Self {
        Self {
            vocabulary,
            min_confidence,
            model,
        }
    }

    /// Classifier using the standard six-label vocabulary.
    pub fn with_default_vocabulary(min_confidence: f32, model: Box<dyn GestureClassifier>) -> Self {
        Self::new(Gesture::VOCABULARY.to_vec(), min_confidence, model)
    }

    /// Default vocabulary gated by the configured `min_confidence`.
    pub fn from_settings(settings: &InteractionSettings, model: Box<dyn GestureClassifier>) -> Self {
        Self::with_default_vocabulary(settings.min_confidence, model)
    }

    pub fn min_confidence(&self) -> f32 {
        self.min_confidence
    }

    pub fn vocabulary(&self) -> &[Gesture] {
        &self.vocabulary
    }

    pub fn classify(&mut self, hand: HandId, landmarks: Option<&LandmarkSet>) -> GestureSample {
        let Some(landmarks) = landmarks else {
            return GestureSample::none();
        };
        let input = match classifier_input(hand, landmarks) {
            Ok(input) => input,
            Err(err) => {
                tracing::debug!(%hand, %err, "skipping classification");
                return GestureSample::none();
            }
        };
        match self.model.scores(&input) {
            Ok(scores) => {
                if scores.len() != self.vocabulary.len() {
                    tracing::warn!(
                        %hand,
                        expected = self.vocabulary.len(),
                        got = scores.len(),
                        "classifier returned unexpected score count"
                    );
                    return GestureSample::none();
                }
                resolve_scores(&self.vocabulary, &scores, self.min_confidence)
            }
            Err(err) => {
                tracing::warn!(%hand, ?err, "gesture classifier failed");
                GestureSample::none()
            }
        }
    }

    /// Project and classify one frame's detections.
    pub fn observe(&mut self, frame: &FrameLandmarks, resolution: (u32, u32)) -> FrameObservation {
        FrameObservation {
            coordinates: Coordinates::from_landmarks(frame, resolution),
            gestures: HandGestures {
                left_hand: self.classify(HandId::LeftHand, frame.left_hand.as_ref()),
                right_hand: self.classify(HandId::RightHand, frame.right_hand.as_ref()),
            },
        }
    }
}
