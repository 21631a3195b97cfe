//! The periodic tick driver.
//!
//! A tokio interval task sends one message per period over an mpsc channel.
//! Every message carries the generation of the task that produced it:
//! messages from an aborted task can still be sitting in the channel when it
//! is drained, and those must never advance the clock.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const MAX_TICK_DRAIN_PER_POLL: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TickMessage {
    generation: u64,
}

pub struct Ticker {
    handle: Handle,
    period: Duration,
    tx: Sender<TickMessage>,
    rx: Receiver<TickMessage>,
    task: Option<JoinHandle<()>>,
    generation: u64,
}

impl Ticker {
    pub fn new(handle: Handle, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            handle,
            period,
            tx,
            rx,
            task: None,
            generation: 0,
        }
    }

    /// Start the periodic task, cancelling any live one first so two tasks
    /// can never tick at once.
    pub fn start(&mut self) {
        self.stop();
        self.generation += 1;
        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();

        self.task = Some(self.handle.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; skip it so the
            // first message lands one full period after start.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(TickMessage { generation }).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(generation, period_ms = period.as_millis() as u64, "ticker started");
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!(generation = self.generation, "ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Drain pending messages, counting only those from the live task.
    pub fn poll_ticks(&mut self) -> usize {
        let mut due = 0;
        while let Ok(msg) = self.rx.try_recv() {
            if self.task.is_some() && msg.generation == self.generation {
                due += 1;
            }
            if due >= MAX_TICK_DRAIN_PER_POLL {
                break;
            }
        }
        due
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/ticker.rs"]
mod tests;
