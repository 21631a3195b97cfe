use super::*;
use chrono::NaiveDate;

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 4)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

#[test]
fn new_state_is_running_and_idle() {
    let state = AppState::new(at(10, 20, 30));
    assert!(state.running);
    assert!(!state.field.editing);
    assert!(!state.is_dragging());
    assert!(!state.should_quit);
    assert_eq!(state.current, at(10, 20, 30));
}

#[test]
fn display_time_shows_zero_padded_minutes_and_seconds() {
    let state = AppState::new(at(10, 7, 3));
    assert_eq!(state.display_time(), "07:03");
}
