use chrono::NaiveDateTime;

/// A draggable hand on the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Minute,
    Second,
}

/// The time edit field. While `editing` is true the buffer holds the raw,
/// possibly-invalid user text; it is only interpreted on blur.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub editing: bool,
    pub buffer: String,
}

/// An active drag gesture on one of the hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub hand: Hand,
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// The displayed time, as host-local wall time.
    pub current: NaiveDateTime,
    /// Whether the tick driver advances `current` once per second.
    pub running: bool,
    pub field: FieldState,
    pub drag: Option<DragState>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            current: now,
            running: true,
            field: FieldState::default(),
            drag: None,
            should_quit: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The "MM:SS" text shown by the field when it is not being edited.
    pub fn display_time(&self) -> String {
        self.current.format("%M:%S").to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
