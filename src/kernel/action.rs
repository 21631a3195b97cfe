use chrono::NaiveDateTime;

use crate::kernel::state::Hand;

/// Pointer position relative to the clock face center, normalized to the
/// face's half-extents (so the visible circle has radius ~1 regardless of
/// cell aspect). +x is right, +y is down, matching screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceVector {
    pub dx: f64,
    pub dy: f64,
}

impl FaceVector {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Everything that can happen to the clock. Actions that rebind part of the
/// time to the live instant carry `now` explicitly so the store stays pure.
#[derive(Debug, Clone)]
pub enum Action {
    Tick,
    ToggleRunning,
    FocusField,
    FieldInput(char),
    FieldPaste(String),
    FieldBackspace,
    BlurField {
        now: NaiveDateTime,
    },
    DragStart {
        hand: Hand,
        vector: FaceVector,
        now: NaiveDateTime,
    },
    DragMove {
        vector: FaceVector,
        now: NaiveDateTime,
    },
    DragEnd,
    Quit,
}
