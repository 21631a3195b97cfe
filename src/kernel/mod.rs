//! Headless application core (state/action/effect).

pub mod action;
pub mod clock;
pub mod dial;
pub mod effect;
pub mod state;
pub mod store;

pub use action::{Action, FaceVector};
pub use effect::Effect;
pub use state::{AppState, DragState, FieldState, Hand};
pub use store::{DispatchResult, Store};
