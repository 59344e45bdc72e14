use anyhow::anyhow;
use gesture_remote::classifier::{resolve_scores, HandClassifier};
use gesture_remote::coordinates::Pixel;
use gesture_remote::gesture::{Gesture, GestureSample, HandId};
use gesture_remote::landmarks::{FrameLandmarks, Landmark, LandmarkSet, HAND_LANDMARK_COUNT};
use gesture_remote::settings::InteractionSettings;
use std::cell::RefCell;
use std::rc::Rc;

const PALM_SCORES: [f32; 6] = [0.05, 0.9, 0.01, 0.02, 0.01, 0.01];

fn hand() -> LandmarkSet {
    (0..HAND_LANDMARK_COUNT)
        .map(|i| Landmark::new(0.5, 0.75 - i as f32 * 0.01))
        .collect()
}

fn fixed(scores: Vec<f32>) -> HandClassifier {
    HandClassifier::with_default_vocabulary(
        0.7,
        Box::new(move |_: &[f32]| -> anyhow::Result<Vec<f32>> { Ok(scores.clone()) }),
    )
}

#[test]
fn best_score_wins() {
    let sample = resolve_scores(&Gesture::VOCABULARY, &PALM_SCORES, 0.7);
    assert_eq!(sample.gesture, Gesture::Palm);
    assert!((sample.confidence - 0.9).abs() < 1e-6);
}

#[test]
fn weak_or_flat_scores_mean_no_gesture() {
    let weak = [0.1, 0.3, 0.1, 0.2, 0.2, 0.1];
    assert_eq!(resolve_scores(&Gesture::VOCABULARY, &weak, 0.7), GestureSample::none());
    assert_eq!(resolve_scores(&Gesture::VOCABULARY, &weak, 0.3).gesture, Gesture::Palm);

    let flat = [0.5; 6];
    assert_eq!(resolve_scores(&Gesture::VOCABULARY, &flat, 0.0), GestureSample::none());
    assert_eq!(resolve_scores(&Gesture::VOCABULARY, &[], 0.0), GestureSample::none());
    assert_eq!(
        resolve_scores(&Gesture::VOCABULARY, &[0.1, 0.9], 0.0),
        GestureSample::none()
    );
}

#[test]
fn model_sees_hand_prefixed_features() {
    let seen: Rc<RefCell<Vec<Vec<f32>>>> = Rc::default();
    let record = Rc::clone(&seen);
    let mut classifier = HandClassifier::with_default_vocabulary(
        0.7,
        Box::new(move |input: &[f32]| -> anyhow::Result<Vec<f32>> {
            record.borrow_mut().push(input.to_vec());
            Ok(PALM_SCORES.to_vec())
        }),
    );

    let hand = hand();
    let sample = classifier.classify(HandId::LeftHand, Some(&hand));
    assert_eq!(sample.gesture, Gesture::Palm);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].len(), 42);
    assert_eq!(&seen[0][..2], &[1.0, 0.0]);
}

#[test]
fn failures_degrade_to_no_gesture() {
    let hand = hand();

    let mut failing = HandClassifier::with_default_vocabulary(
        0.7,
        Box::new(|_: &[f32]| -> anyhow::Result<Vec<f32>> { Err(anyhow!("model not loaded")) }),
    );
    assert_eq!(failing.classify(HandId::RightHand, Some(&hand)), GestureSample::none());

    let mut short_output = fixed(vec![0.1, 0.9]);
    assert_eq!(short_output.classify(HandId::RightHand, Some(&hand)), GestureSample::none());

    let mut classifier = fixed(PALM_SCORES.to_vec());
    assert_eq!(classifier.classify(HandId::RightHand, None), GestureSample::none());
    let partial: LandmarkSet = hand.points()[..5].iter().copied().collect();
    assert_eq!(classifier.classify(HandId::RightHand, Some(&partial)), GestureSample::none());
}

#[test]
fn observe_projects_and_classifies_both_hands() {
    let mut classifier = fixed(PALM_SCORES.to_vec());
    let mut face = vec![Landmark::new(0.1, 0.1); 10];
    face[4] = Landmark::new(0.5, 0.5);
    let frame = FrameLandmarks {
        left_hand: None,
        right_hand: Some(hand()),
        face: Some(LandmarkSet::new(face)),
    };

    let observation = classifier.observe(&frame, (640, 480));
    assert_eq!(observation.coordinates.face, Some(Pixel::new(320, 240)));
    assert_eq!(observation.coordinates.right_hand, Some(Pixel::new(320, 317)));
    assert_eq!(observation.coordinates.left_hand, None);
    assert_eq!(observation.gestures.right_hand.gesture, Gesture::Palm);
    assert_eq!(observation.gestures.left_hand, GestureSample::none());
}

#[test]
fn custom_vocabulary() {
    let mut classifier = HandClassifier::new(
        vec![Gesture::Closed, Gesture::Palm],
        0.5,
        Box::new(|_: &[f32]| -> anyhow::Result<Vec<f32>> { Ok(vec![0.8, 0.2]) }),
    );
    assert_eq!(classifier.vocabulary(), &[Gesture::Closed, Gesture::Palm]);
    assert_eq!(classifier.classify(HandId::LeftHand, Some(&hand())).gesture, Gesture::Closed);
}

#[test]
fn settings_floor_gates_classification() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"min_confidence": 0.95}"#).unwrap();
    let settings = InteractionSettings::load(&path).unwrap();

    let model = || Box::new(|_: &[f32]| -> anyhow::Result<Vec<f32>> { Ok(PALM_SCORES.to_vec()) });
    let mut strict = HandClassifier::from_settings(&settings, model());
    assert_eq!(strict.min_confidence(), 0.95);
    assert_eq!(strict.classify(HandId::RightHand, Some(&hand())), GestureSample::none());

    let mut lenient = HandClassifier::from_settings(&InteractionSettings::default(), model());
    assert_eq!(lenient.classify(HandId::RightHand, Some(&hand())).gesture, Gesture::Palm);
}
