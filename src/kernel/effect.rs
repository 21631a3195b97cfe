/// Side effects requested by the store. The kernel never touches the timer
/// itself; the app layer applies these to the ticker service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartTicker,
    StopTicker,
}
