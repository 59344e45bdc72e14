use gesture_remote::gesture::Gesture;
use gesture_remote::interaction::{ClickDetector, ClickState};
use std::time::{Duration, Instant};

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

fn run(detector: &mut ClickDetector, base: Instant, steps: &[(u64, Gesture)]) -> Vec<ClickState> {
    steps
        .iter()
        .map(|(ms, gesture)| detector.handle_step(*gesture, at(base, *ms)))
        .collect()
}

#[test]
fn double_open_close_clicks_once() {
    let base = Instant::now();
    let mut detector = ClickDetector::default();
    let states = run(
        &mut detector,
        base,
        &[
            (0, Gesture::Palm),
            (100, Gesture::Closed),
            (200, Gesture::Palm),
            (300, Gesture::Closed),
            (400, Gesture::Palm),
            (500, Gesture::Palm),
        ],
    );
    assert_eq!(
        states,
        vec![
            ClickState::FirstOpen,
            ClickState::FirstClosed,
            ClickState::SecondOpen,
            ClickState::SecondClosed,
            ClickState::Click,
            ClickState::Pending,
        ]
    );
    assert_eq!(states.iter().filter(|s| **s == ClickState::Click).count(), 1);
    assert!(!detector.is_clicking());
}

#[test]
fn held_gesture_stalls_back_to_pending() {
    let base = Instant::now();
    let mut detector = ClickDetector::default();
    detector.handle_step(Gesture::Palm, at(base, 0));
    detector.handle_step(Gesture::Closed, at(base, 100));
    assert_eq!(detector.state(), ClickState::FirstClosed);

    for ms in (200..=1600).step_by(100) {
        assert_eq!(detector.handle_step(Gesture::Closed, at(base, ms)), ClickState::FirstClosed);
    }
    assert_eq!(detector.handle_step(Gesture::Closed, at(base, 1700)), ClickState::Pending);
    assert_eq!(detector.state_since(), Some(at(base, 1700)));
}

#[test]
fn slow_step_does_not_advance() {
    let base = Instant::now();
    let mut detector = ClickDetector::default();
    detector.handle_step(Gesture::Palm, at(base, 0));
    assert_eq!(detector.handle_step(Gesture::Closed, at(base, 1600)), ClickState::Pending);

    // The next open hand starts a fresh sequence.
    assert_eq!(detector.handle_step(Gesture::Palm, at(base, 1700)), ClickState::FirstOpen);
}

#[test]
fn dropouts_keep_gesture_history() {
    let base = Instant::now();
    let mut detector = ClickDetector::default();
    let states = run(
        &mut detector,
        base,
        &[
            (0, Gesture::Palm),
            (100, Gesture::NoGesture),
            (200, Gesture::Closed),
            (300, Gesture::Rock),
            (400, Gesture::Palm),
            (500, Gesture::Closed),
            (600, Gesture::NoGesture),
            (700, Gesture::Palm),
        ],
    );
    assert_eq!(
        states,
        vec![
            ClickState::FirstOpen,
            ClickState::FirstOpen,
            ClickState::FirstClosed,
            ClickState::FirstClosed,
            ClickState::SecondOpen,
            ClickState::SecondClosed,
            ClickState::SecondClosed,
            ClickState::Click,
        ]
    );
    assert_eq!(detector.previous_gesture(), Some(Gesture::Closed));
    assert_eq!(detector.current_gesture(), Some(Gesture::Palm));
}

#[test]
fn closed_hand_alone_never_starts_a_sequence() {
    let base = Instant::now();
    let mut detector = ClickDetector::new(Duration::from_millis(500));
    for ms in (0..3000).step_by(100) {
        assert_eq!(detector.handle_step(Gesture::Closed, at(base, ms)), ClickState::Pending);
    }
}

#[test]
fn reset_clears_progress() {
    let base = Instant::now();
    let mut detector = ClickDetector::default();
    run(&mut detector, base, &[(0, Gesture::Palm), (100, Gesture::Closed)]);
    detector.reset();
    assert_eq!(detector.state(), ClickState::Pending);
    assert_eq!(detector.current_gesture(), None);
    assert_eq!(detector.state_since(), None);
}
