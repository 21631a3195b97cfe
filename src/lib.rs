//! dialclock - an interactive analog clock for the terminal
//!
//! Module structure:
//! - kernel: headless application core (state, actions, effects, store)
//! - services: long-lived resources (async runtime, ticker, settings)
//! - app: input routing, effect application and rendering
//! - tui: terminal lifecycle and input event types

pub mod app;
pub mod kernel;
pub mod logging;
pub mod services;
pub mod tui;
