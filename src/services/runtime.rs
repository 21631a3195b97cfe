use std::io;

use tokio::runtime::{Handle, Runtime};

/// Owns the tokio runtime that background tasks are spawned on. Dropping it
/// tears all of them down.
pub struct AsyncRuntime {
    runtime: Runtime,
}

impl AsyncRuntime {
    pub fn new() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()?;
        Ok(Self { runtime })
    }

    pub fn handle(&self) -> &Handle {
        self.runtime.handle()
    }
}
