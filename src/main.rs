use std::io;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use dialclock::app::ClockApp;
use dialclock::logging;
use dialclock::services::{settings, AsyncRuntime};
use dialclock::tui::terminal_guard::TerminalGuard;
use dialclock::tui::{EventResult, InputEvent, TerminationSignal};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> io::Result<()> {
    let _logging = logging::init();

    if let Err(err) = settings::ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    let settings = settings::load_settings();

    let runtime = AsyncRuntime::new()?;
    let guard = TerminalGuard::new()?;

    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    let _signal_thread = dialclock::tui::terminal_guard::install_termination_signals(
        guard.restorer(),
        signal_tx,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = ClockApp::new(runtime.handle().clone(), &settings);
    let mut dirty = true;

    while !app.should_quit() {
        if let Ok(signal) = signal_rx.try_recv() {
            let _ = guard.restorer().restore();
            std::process::exit(signal.exit_code());
        }

        if dirty {
            terminal.draw(|frame| app.render(frame))?;
            dirty = false;
        }

        if crossterm::event::poll(EVENT_POLL_INTERVAL)? {
            let event = InputEvent::from(crossterm::event::read()?);
            dirty |= app.handle_input(&event) == EventResult::Consumed;
        }

        dirty |= app.tick();
    }

    drop(terminal);
    guard.restorer().restore()?;
    Ok(())
}
