use gesture_remote::coordinates::Pixel;
use gesture_remote::gesture::Gesture;
use gesture_remote::interaction::{LockTransition, SwipeConfig, SwipeDirection, SwipeTracker};

fn tracker(mirror_horizontal: bool) -> SwipeTracker {
    SwipeTracker::new(SwipeConfig {
        threshold_x: 20.0,
        threshold_y: 20.0,
        mirror_horizontal,
    })
}

/// Start at (100, 100) while open, then close the hand on the same spot.
fn locked_at_start(mirror_horizontal: bool) -> SwipeTracker {
    let mut tracker = tracker(mirror_horizontal);
    tracker.update(Gesture::NoGesture, Some(Pixel::new(100, 100)));
    let update = tracker.update(Gesture::Closed, Some(Pixel::new(100, 100)));
    assert_eq!(update.transition, Some(LockTransition::Locked));
    assert_eq!(update.current, SwipeDirection::None);
    tracker
}

#[test]
fn vertical_swipe_up() {
    let mut tracker = locked_at_start(true);
    let update = tracker.update(Gesture::Closed, Some(Pixel::new(100, 40)));

    assert_eq!(update.current, SwipeDirection::Up);
    assert_eq!(tracker.deltas(), (0, -60));
    assert_eq!(tracker.classify(), SwipeDirection::Up);
    assert_eq!(tracker.classify(), SwipeDirection::Up);
}

#[test]
fn horizontal_axis_follows_mirroring() {
    let mut mirrored = locked_at_start(true);
    mirrored.update(Gesture::Closed, Some(Pixel::new(160, 100)));
    assert_eq!(mirrored.current_swipe(), SwipeDirection::Left);

    let mut plain = locked_at_start(false);
    plain.update(Gesture::Closed, Some(Pixel::new(160, 100)));
    assert_eq!(plain.current_swipe(), SwipeDirection::Right);
}

#[test]
fn diagonal_swipe() {
    let mut tracker = locked_at_start(true);
    tracker.update(Gesture::Closed, Some(Pixel::new(40, 160)));
    assert_eq!(tracker.current_swipe(), SwipeDirection::DownRight);

    let mut tracker = locked_at_start(false);
    tracker.update(Gesture::Closed, Some(Pixel::new(40, 160)));
    assert_eq!(tracker.current_swipe(), SwipeDirection::DownLeft);
}

#[test]
fn displacement_on_the_threshold_is_not_a_swipe() {
    let mut tracker = locked_at_start(true);
    tracker.update(Gesture::Closed, Some(Pixel::new(80, 80)));
    assert_eq!(tracker.deltas(), (-20, -20));
    assert_eq!(tracker.current_swipe(), SwipeDirection::None);

    tracker.update(Gesture::Closed, Some(Pixel::new(79, 100)));
    assert_eq!(tracker.current_swipe(), SwipeDirection::Right);
}

#[test]
fn open_hand_unlocks_and_reports_last_swipe_once() {
    let mut tracker = locked_at_start(true);
    tracker.update(Gesture::Closed, Some(Pixel::new(100, 40)));

    let update = tracker.update(Gesture::Palm, Some(Pixel::new(100, 40)));
    assert_eq!(update.transition, Some(LockTransition::Unlocked));
    assert_eq!(update.last, SwipeDirection::Up);
    assert_eq!(update.current, SwipeDirection::None);
    assert!(!tracker.is_locked());
    assert_eq!(tracker.locked_coordinates(), (Some(Pixel::new(100, 40)), None));
    assert_eq!(tracker.deltas(), (0, 0));

    let update = tracker.update(Gesture::Palm, Some(Pixel::new(100, 40)));
    assert_eq!(update.transition, None);
    assert_eq!(update.last, SwipeDirection::None);
}

#[test]
fn lock_ignores_repeats_and_missing_positions() {
    let mut tracker = locked_at_start(true);
    assert_eq!(tracker.handle_locking(Gesture::Closed), None);
    assert!(tracker.is_locked());

    tracker.update(Gesture::Closed, Some(Pixel::new(100, 40)));
    tracker.update(Gesture::NoGesture, None);
    assert!(tracker.is_locked());
    assert_eq!(
        tracker.locked_coordinates(),
        (Some(Pixel::new(100, 100)), Some(Pixel::new(100, 40)))
    );
    assert_eq!(tracker.current_swipe(), SwipeDirection::Up);

    let mut open = SwipeTracker::new(SwipeConfig::default());
    assert_eq!(open.handle_locking(Gesture::Palm), None);
}

#[test]
fn direction_labels() {
    assert_eq!(SwipeDirection::UpRight.to_string(), "up-right");
    assert_eq!("down-left".parse(), Ok(SwipeDirection::DownLeft));
    assert!("sideways".parse::<SwipeDirection>().is_err());
    assert_eq!(SwipeDirection::from_signs(0, 0), SwipeDirection::None);
    assert_eq!(SwipeDirection::from_signs(1, -1), SwipeDirection::UpLeft);
}

#[test]
fn thresholds_scale_with_resolution() {
    let config = SwipeConfig::from_sensitivity((800, 600), (0.1, 0.2), true);
    assert!((config.threshold_x - 80.0).abs() < 1e-4);
    assert!((config.threshold_y - 120.0).abs() < 1e-4);
}
