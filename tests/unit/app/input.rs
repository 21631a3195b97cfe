use super::*;
use chrono::{NaiveDate, NaiveDateTime};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 4)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn rect_contains_is_half_open() {
    let area = Rect::new(2, 3, 4, 2);
    assert!(rect_contains(area, 2, 3));
    assert!(rect_contains(area, 5, 4));
    assert!(!rect_contains(area, 6, 3));
    assert!(!rect_contains(area, 2, 5));
}

#[test]
fn face_vector_normalizes_by_half_extents() {
    let face = Rect::new(0, 0, 40, 20);

    let center = face_vector(face, 20, 10);
    assert_close(center.dx, 0.025);
    assert_close(center.dy, 0.05);

    let right = face_vector(face, 30, 10);
    assert_close(right.dx, 0.525);
    assert_close(right.dy, 0.05);

    // The 2:1 cell aspect drops out: equal fractions of width and height
    // give equal components.
    let corner = face_vector(face, 39, 19);
    assert_close(corner.dx, 0.975);
    assert_close(corner.dy, 0.95);
}

#[test]
fn grab_prefers_the_second_hand_on_overlap() {
    let state = AppState::new(at(10, 15, 15));
    let hand = grab_hand(&state, FaceVector::new(1.0, 0.0));
    assert_eq!(hand, Some(Hand::Second));
}

#[test]
fn grab_picks_the_minute_hand_when_the_second_is_elsewhere() {
    let state = AppState::new(at(10, 15, 45));
    let hand = grab_hand(&state, FaceVector::new(1.0, 0.0));
    assert_eq!(hand, Some(Hand::Minute));
}

#[test]
fn grab_allows_a_sloppy_press_within_tolerance() {
    // Minute at 90 degrees; press at roughly 100 degrees.
    let state = AppState::new(at(10, 15, 45));
    let rad = 100.0_f64.to_radians();
    let hand = grab_hand(&state, FaceVector::new(rad.sin(), -rad.cos()));
    assert_eq!(hand, Some(Hand::Minute));
}

#[test]
fn press_near_the_center_grabs_nothing() {
    let state = AppState::new(at(10, 15, 15));
    assert_eq!(grab_hand(&state, FaceVector::new(0.02, 0.03)), None);
}

#[test]
fn press_outside_the_face_grabs_nothing() {
    let state = AppState::new(at(10, 15, 15));
    assert_eq!(grab_hand(&state, FaceVector::new(2.0, 0.0)), None);
}

#[test]
fn press_away_from_both_hands_grabs_nothing() {
    // Minute at 12, second at 6; press at 3.
    let state = AppState::new(at(10, 0, 30));
    assert_eq!(grab_hand(&state, FaceVector::new(1.0, 0.0)), None);
}
