use chrono::NaiveDateTime;

use super::{clock, dial, Action, AppState, DragState, Effect, FaceVector, Hand};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: true,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Tick => {
                // A drag overrides the driver; paused covers stale ticks
                // queued before the ticker was stopped.
                if !self.state.running || self.state.is_dragging() {
                    return DispatchResult::unchanged();
                }
                self.state.current = clock::advance_one_second(self.state.current);
                DispatchResult::changed()
            }
            Action::ToggleRunning => {
                if self.state.field.editing {
                    return DispatchResult::unchanged();
                }
                self.state.running = !self.state.running;
                let effect = if self.state.running {
                    Effect::StartTicker
                } else {
                    Effect::StopTicker
                };
                tracing::debug!(running = self.state.running, "toggle");
                DispatchResult {
                    effects: vec![effect],
                    state_changed: true,
                }
            }
            Action::FocusField => {
                if self.state.field.editing || self.state.is_dragging() {
                    return DispatchResult::unchanged();
                }
                self.state.field.editing = true;
                self.state.field.buffer.clear();
                DispatchResult::changed()
            }
            Action::FieldInput(ch) => {
                if !self.state.field.editing {
                    return DispatchResult::unchanged();
                }
                self.state.field.buffer.push(ch);
                DispatchResult::changed()
            }
            Action::FieldPaste(text) => {
                if !self.state.field.editing {
                    return DispatchResult::unchanged();
                }
                self.state.field.buffer.push_str(&text);
                DispatchResult::changed()
            }
            Action::FieldBackspace => {
                if !self.state.field.editing {
                    return DispatchResult::unchanged();
                }
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: self.state.field.buffer.pop().is_some(),
                }
            }
            Action::BlurField { now } => {
                if !self.state.field.editing {
                    return DispatchResult::unchanged();
                }

                if !self.state.field.buffer.is_empty() {
                    let committed = clock::parse_field_buffer(&self.state.field.buffer)
                        .and_then(|commit| clock::apply_field_commit(now, commit));
                    match committed {
                        Some(time) => self.state.current = time,
                        None => {
                            tracing::warn!(
                                buffer = %self.state.field.buffer,
                                "rejecting unusable time edit"
                            );
                        }
                    }
                }

                self.state.field.editing = false;
                self.state.field.buffer.clear();

                // Blur always resumes ticking, even when nothing was typed.
                let was_running = self.state.running;
                self.state.running = true;
                let effects = if was_running {
                    Vec::new()
                } else {
                    vec![Effect::StartTicker]
                };
                DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::DragStart { hand, vector, now } => {
                if self.state.field.editing {
                    return DispatchResult::unchanged();
                }
                self.state.drag = Some(DragState { hand });
                self.apply_drag(hand, vector, now);
                DispatchResult::changed()
            }
            Action::DragMove { vector, now } => {
                let Some(drag) = self.state.drag else {
                    return DispatchResult::unchanged();
                };
                self.apply_drag(drag.hand, vector, now);
                DispatchResult::changed()
            }
            Action::DragEnd => {
                // Running state is left as-is: if the clock was ticking it
                // resumes from the dragged value, otherwise it stays paused
                // showing it.
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: self.state.drag.take().is_some(),
                }
            }
            Action::Quit => {
                self.state.should_quit = true;
                DispatchResult::changed()
            }
        }
    }

    fn apply_drag(&mut self, hand: Hand, vector: FaceVector, now: NaiveDateTime) {
        let unit = dial::unit_from_vector(vector);
        self.state.current = match hand {
            Hand::Minute => clock::rebind_minute(now, unit),
            Hand::Second => clock::rebind_second(now, unit),
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
