//! The clock application: owns the store and services, routes terminal
//! input into kernel actions, applies effects and renders.

mod input;
mod render;
mod theme;

use std::time::Duration;

use chrono::Local;
use ratatui::layout::Rect;
use ratatui::Frame;
use tokio::runtime::Handle;

use crate::kernel::{Action, AppState, Effect, Store};
use crate::services::{Settings, Ticker};
use crate::tui::{EventResult, InputEvent};

pub use theme::ClockTheme;

/// How far (in dial degrees) a press may be from a hand and still grab it.
const HAND_GRAB_TOLERANCE_DEG: f64 = 18.0;
/// Presses closer to the center than this (normalized radius) hit the hub,
/// not a hand.
const HAND_GRAB_MIN_RADIUS: f64 = 0.1;
const HAND_GRAB_MAX_RADIUS: f64 = 1.05;

pub struct ClockApp {
    store: Store,
    ticker: Ticker,
    theme: ClockTheme,
    last_face_area: Option<Rect>,
    last_field_area: Option<Rect>,
}

impl ClockApp {
    pub fn new(handle: Handle, settings: &Settings) -> Self {
        let period = Duration::from_millis(settings.tick_interval_ms.max(1));
        let mut ticker = Ticker::new(handle, period);
        let store = Store::new(AppState::new(Local::now().naive_local()));
        if store.state().running {
            ticker.start();
        }
        Self {
            store,
            ticker,
            theme: ClockTheme::from_settings(settings),
            last_face_area: None,
            last_field_area: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().should_quit
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    /// Drain due ticks; called once per main-loop iteration.
    pub fn tick(&mut self) -> bool {
        let due = self.ticker.poll_ticks();
        let mut changed = false;
        for _ in 0..due {
            changed |= self.dispatch(Action::Tick);
        }
        changed
    }

    pub fn render(&mut self, frame: &mut Frame) {
        render::render(self, frame);
    }

    fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            match effect {
                Effect::StartTicker => self.ticker.start(),
                Effect::StopTicker => self.ticker.stop(),
            }
        }
        result.state_changed
    }
}
