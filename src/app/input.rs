use chrono::{Local, Timelike};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::{ClockApp, HAND_GRAB_MAX_RADIUS, HAND_GRAB_MIN_RADIUS, HAND_GRAB_TOLERANCE_DEG};
use crate::kernel::{dial, Action, AppState, FaceVector, Hand};
use crate::tui::{EventResult, InputEvent};

pub(super) fn handle_input(app: &mut ClockApp, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key) => handle_key(app, key),
        InputEvent::Mouse(mouse) => handle_mouse(app, mouse),
        InputEvent::Paste(text) => {
            if app.dispatch(Action::FieldPaste(text.clone())) {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            }
        }
        // A resize invalidates the frame even though no state changed.
        InputEvent::Resize(_, _) => EventResult::Consumed,
        InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
    }
}

fn handle_key(app: &mut ClockApp, key: &KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.dispatch(Action::Quit);
        return EventResult::Consumed;
    }

    if app.store.state().field.editing {
        let action = match key.code {
            KeyCode::Char(ch) => Action::FieldInput(ch),
            KeyCode::Backspace => Action::FieldBackspace,
            KeyCode::Enter | KeyCode::Esc => Action::BlurField {
                now: Local::now().naive_local(),
            },
            _ => return EventResult::Ignored,
        };
        app.dispatch(action);
        return EventResult::Consumed;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.dispatch(Action::Quit);
            EventResult::Consumed
        }
        _ => EventResult::Ignored,
    }
}

fn handle_mouse(app: &mut ClockApp, mouse: &MouseEvent) -> EventResult {
    let now = Local::now().naive_local();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let on_field = app
                .last_field_area
                .is_some_and(|area| rect_contains(area, mouse.column, mouse.row));

            if on_field {
                if app.store.state().field.editing {
                    return EventResult::Consumed;
                }
                app.dispatch(Action::FocusField);
                return EventResult::Consumed;
            }

            // A click outside the field while editing is a blur, never a
            // toggle: the field commits and the clock resumes.
            if app.store.state().field.editing {
                app.dispatch(Action::BlurField { now });
                return EventResult::Consumed;
            }

            if let Some(face) = app.last_face_area {
                if rect_contains(face, mouse.column, mouse.row) {
                    let vector = face_vector(face, mouse.column, mouse.row);
                    if let Some(hand) = grab_hand(app.store.state(), vector) {
                        app.dispatch(Action::DragStart { hand, vector, now });
                        return EventResult::Consumed;
                    }
                }
            }

            app.dispatch(Action::ToggleRunning);
            EventResult::Consumed
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if !app.store.state().is_dragging() {
                return EventResult::Ignored;
            }
            let Some(face) = app.last_face_area else {
                return EventResult::Ignored;
            };
            let vector = face_vector(face, mouse.column, mouse.row);
            app.dispatch(Action::DragMove { vector, now });
            EventResult::Consumed
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.dispatch(Action::DragEnd) {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            }
        }
        _ => EventResult::Ignored,
    }
}

pub(crate) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Map a cell position to a face-relative vector, normalized by the face's
/// half-extents so the cell aspect ratio drops out.
pub(crate) fn face_vector(face: Rect, x: u16, y: u16) -> FaceVector {
    let cx = f64::from(face.x) + f64::from(face.width) / 2.0;
    let cy = f64::from(face.y) + f64::from(face.height) / 2.0;
    let half_w = (f64::from(face.width) / 2.0).max(1.0);
    let half_h = (f64::from(face.height) / 2.0).max(1.0);
    FaceVector::new(
        (f64::from(x) + 0.5 - cx) / half_w,
        (f64::from(y) + 0.5 - cy) / half_h,
    )
}

/// Which hand, if any, a press at `vector` grabs. The second hand is drawn
/// on top of the minute hand, so it wins when both are within tolerance.
pub(crate) fn grab_hand(state: &AppState, vector: FaceVector) -> Option<Hand> {
    let magnitude = vector.magnitude();
    if !(HAND_GRAB_MIN_RADIUS..=HAND_GRAB_MAX_RADIUS).contains(&magnitude) {
        return None;
    }

    let press = dial::vector_angle_deg(vector);
    let to_second = dial::angle_distance_deg(press, dial::unit_angle_deg(state.current.second()));
    let to_minute = dial::angle_distance_deg(press, dial::unit_angle_deg(state.current.minute()));

    if to_second <= HAND_GRAB_TOLERANCE_DEG && to_second <= to_minute {
        Some(Hand::Second)
    } else if to_minute <= HAND_GRAB_TOLERANCE_DEG {
        Some(Hand::Minute)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/input.rs"]
mod tests;
