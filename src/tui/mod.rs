//! Terminal lifecycle and input event types.

pub mod event;
pub mod terminal_guard;

pub use event::{EventResult, InputEvent};
pub use terminal_guard::{TerminalGuard, TerminalRestorer, TerminationSignal};
