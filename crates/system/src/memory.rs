use perfmon_core::{state::MemoryInfo, SampleError};
use sysinfo::System;

/// Anything that can report physical memory usage.
pub trait MemorySource {
    fn read_memory(&mut self) -> Result<MemoryInfo, SampleError>;
}

/// Physical memory via `sysinfo`.  Only the memory tables are refreshed.
pub struct SysinfoMemory {
    sys: System,
}

impl SysinfoMemory {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl Default for SysinfoMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySource for SysinfoMemory {
    fn read_memory(&mut self) -> Result<MemoryInfo, SampleError> {
        self.sys.refresh_memory();
        MemoryInfo::from_bytes(self.sys.total_memory(), self.sys.available_memory())
            .ok_or_else(|| SampleError::Os("total physical memory reported as 0".into()))
    }
}
