//! Long-lived resources owned by the app: the tokio runtime, the periodic
//! ticker and user settings.

pub mod runtime;
pub mod settings;
pub mod ticker;

pub use runtime::AsyncRuntime;
pub use settings::Settings;
pub use ticker::Ticker;
