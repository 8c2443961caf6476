use crate::state::GpuReading;

/// All messages (events) that can flow through the application.
///
/// Sources:
/// - Timer subscription    → `Tick`
/// - GPU worker            → `GpuSampled`
/// - Config watcher task   → `ConfigReloaded`
/// - Buttons               → `StopRequested`, `ExitAcknowledged`
#[derive(Debug, Clone)]
pub enum Message {
    /// One-second timer tick: sample CPU and memory, update history.
    Tick,
    /// Fresh reading from the background GPU worker.
    GpuSampled(GpuReading),
    /// Config file changed on disk, triggers a live reload.
    ConfigReloaded,
    /// User clicked "Stop Monitoring".
    StopRequested,
    /// User dismissed the stop acknowledgment; exit the process.
    ExitAcknowledged,
}
