use chrono::{DateTime, Local};

/// Latest result for one metric as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading<T> {
    /// No result yet (startup, or the CPU baseline tick).
    Pending,
    Ready(T),
    /// The last attempt failed; carries a short reason for logs / tooltips.
    Unavailable(String),
}

impl<T> Reading<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> Default for Reading<T> {
    fn default() -> Self {
        Self::Pending
    }
}

/// GPU utilization in whole percent, as reported by the vendor tool.
pub type GpuReading = Reading<u32>;

/// Physical memory usage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryInfo {
    /// Used memory (total − available) in whole MiB.
    pub used_mb: u64,
    /// Installed memory in whole MiB.
    pub total_mb: u64,
    /// Memory load (0.0 – 100.0).
    pub load_percent: f64,
}

impl MemoryInfo {
    /// Build from raw byte counts.  Returns `None` when `total_bytes` is zero.
    pub fn from_bytes(total_bytes: u64, available_bytes: u64) -> Option<Self> {
        const MIB: u64 = 1 << 20;

        if total_bytes == 0 {
            return None;
        }
        let used_bytes = total_bytes.saturating_sub(available_bytes);
        Some(Self {
            used_mb:      used_bytes / MIB,
            total_mb:     total_bytes / MIB,
            load_percent: used_bytes as f64 / total_bytes as f64 * 100.0,
        })
    }
}

/// Everything produced by one timer tick.
#[derive(Debug, Clone, Default)]
pub struct SystemSnapshot {
    /// Processor utilization (0.0 – 100.0).
    pub cpu: Reading<f64>,
    pub memory: Reading<MemoryInfo>,
    /// Mean of the retained CPU history, `None` if empty.
    pub cpu_average: Option<f64>,
    /// Mean of the retained memory-load history, `None` if empty.
    pub memory_average: Option<f64>,
}

/// Whether the sampling timer is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    /// Stop was pressed; the acknowledgment is on screen.
    Stopped,
}

/// Central application state; all widgets read from this.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Latest CPU / memory snapshot from the tick.
    pub system: SystemSnapshot,
    /// Most recent reading delivered by the GPU worker.
    pub gpu: GpuReading,
    pub phase: Phase,
    /// Local time of the last completed tick.
    pub last_tick: Option<DateTime<Local>>,
}

impl AppState {
    pub fn is_stopped(&self) -> bool {
        self.phase == Phase::Stopped
    }
}
