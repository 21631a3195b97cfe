use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type RestoreFn = dyn Fn() -> io::Result<()> + Send + Sync;

fn enter_terminal() -> io::Result<()> {
    use crossterm::{
        cursor,
        event::EnableMouseCapture,
        execute,
        terminal::{enable_raw_mode, EnterAlternateScreen},
    };

    enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )
}

fn leave_terminal() -> io::Result<()> {
    use crossterm::{
        cursor,
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };

    // Run both steps even if the first fails; report the first failure.
    let raw = disable_raw_mode();
    let screen = execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        cursor::Show
    );
    raw.and(screen)
}

/// Shared handle that puts the terminal back exactly once, no matter how
/// many owners (drop, signal thread, shutdown path) race to do it.
#[derive(Clone)]
pub struct TerminalRestorer {
    done: Arc<AtomicBool>,
    restore: Arc<RestoreFn>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        (self.restore)()
    }
}

/// Puts the terminal into raw mode + alternate screen + mouse capture with
/// the cursor hidden, and undoes all of it on drop.
pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        enter_terminal()?;
        Ok(Self::with_restore(Arc::new(leave_terminal)))
    }

    fn with_restore(restore: Arc<RestoreFn>) -> Self {
        Self {
            restorer: TerminalRestorer {
                done: Arc::new(AtomicBool::new(false)),
                restore,
            },
        }
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Forward SIGINT/SIGTERM to the main loop so it can quit cleanly. If it
/// does not exit within the grace period, restore the terminal here and
/// hard-exit with the conventional code for the signal.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    const GRACE_PERIOD: Duration = Duration::from_secs(2);

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        for sig in signals.forever() {
            let signal = match sig {
                SIGINT => TerminationSignal::SigInt,
                SIGTERM => TerminationSignal::SigTerm,
                _ => continue,
            };

            let _ = tx.send(signal);

            std::thread::sleep(GRACE_PERIOD);
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
