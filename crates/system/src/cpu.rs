use perfmon_core::SampleError;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Anything that can report processor utilization once per tick.
///
/// `Ok(None)` means the source has no baseline yet; usage is a delta
/// between two refreshes, so the first call can only establish one.
pub trait CpuSource {
    fn read_cpu(&mut self) -> Result<Option<f64>, SampleError>;
}

/// Global CPU usage via `sysinfo`.  The owned `System` keeps the previous
/// counters between ticks; only the CPU tables are refreshed.
pub struct SysinfoCpu {
    sys:    System,
    primed: bool,
}

impl SysinfoCpu {
    pub fn new() -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()),
        );
        Self { sys, primed: false }
    }
}

impl Default for SysinfoCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuSource for SysinfoCpu {
    fn read_cpu(&mut self) -> Result<Option<f64>, SampleError> {
        self.sys.refresh_cpu_usage();
        if self.sys.cpus().is_empty() {
            return Err(SampleError::Os("no processors reported".into()));
        }
        if !self.primed {
            self.primed = true;
            return Ok(None);
        }
        Ok(Some(clamp_percent(f64::from(self.sys.global_cpu_usage()))))
    }
}

/// Clamp to `[0, 100]`; anything non-finite becomes `0.0`.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
