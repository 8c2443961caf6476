pub mod cpu;
pub mod gpu;
pub mod memory;

pub use cpu::{CpuSource, SysinfoCpu};
pub use gpu::{spawn_gpu_worker, GpuQuery};
pub use memory::{MemorySource, SysinfoMemory};

use perfmon_core::{
    state::{Reading, SystemSnapshot},
    HistoryAggregator, MetricId,
};
use tracing::{debug, warn};

/// Samples CPU and memory once per tick and keeps their rolling history.
///
/// A failed sample is reported as [`Reading::Unavailable`] for that metric
/// only and is never recorded, so it cannot drag the average towards zero.
pub struct Monitor<C = SysinfoCpu, M = SysinfoMemory> {
    cpu_source:    C,
    memory_source: M,
    history:       HistoryAggregator,
}

impl Monitor {
    /// Monitor backed by `sysinfo` and the default history size.
    pub fn platform() -> Self {
        Self::new(SysinfoCpu::new(), SysinfoMemory::new(), HistoryAggregator::default())
    }
}

impl<C: CpuSource, M: MemorySource> Monitor<C, M> {
    pub fn new(cpu_source: C, memory_source: M, history: HistoryAggregator) -> Self {
        Self { cpu_source, memory_source, history }
    }

    /// Take one sample of each metric, record the successful ones, and
    /// return the readings together with the updated averages.
    pub fn tick(&mut self) -> SystemSnapshot {
        let cpu = match self.cpu_source.read_cpu() {
            Ok(Some(pct)) => {
                self.history.record(MetricId::Cpu, pct);
                Reading::Ready(pct)
            }
            Ok(None) => {
                debug!("CPU baseline established");
                Reading::Pending
            }
            Err(e) => {
                warn!("CPU sample failed: {e}");
                Reading::Unavailable(e.to_string())
            }
        };

        let memory = match self.memory_source.read_memory() {
            Ok(info) => {
                self.history.record(MetricId::Memory, info.load_percent);
                Reading::Ready(info)
            }
            Err(e) => {
                warn!("Memory sample failed: {e}");
                Reading::Unavailable(e.to_string())
            }
        };

        SystemSnapshot {
            cpu,
            memory,
            cpu_average:    self.history.average(MetricId::Cpu),
            memory_average: self.history.average(MetricId::Memory),
        }
    }

    pub fn history(&self) -> &HistoryAggregator {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfmon_core::{state::MemoryInfo, SampleError};
    use std::collections::VecDeque;

    fn exhausted() -> SampleError {
        SampleError::Os("script exhausted".into())
    }

    /// Replays scripted CPU reads; `None` stands for the baseline tick.
    struct ScriptedCpu(VecDeque<Result<Option<f64>, SampleError>>);

    impl CpuSource for ScriptedCpu {
        fn read_cpu(&mut self) -> Result<Option<f64>, SampleError> {
            self.0.pop_front().unwrap_or_else(|| Err(exhausted()))
        }
    }

    struct ScriptedMemory(VecDeque<Result<MemoryInfo, SampleError>>);

    impl MemorySource for ScriptedMemory {
        fn read_memory(&mut self) -> Result<MemoryInfo, SampleError> {
            self.0.pop_front().unwrap_or_else(|| Err(exhausted()))
        }
    }

    fn mem(load: f64) -> MemoryInfo {
        MemoryInfo { used_mb: 0, total_mb: 1024, load_percent: load }
    }

    fn monitor(
        cpu: Vec<Result<Option<f64>, SampleError>>,
        memory: Vec<Result<MemoryInfo, SampleError>>,
    ) -> Monitor<ScriptedCpu, ScriptedMemory> {
        Monitor::new(
            ScriptedCpu(cpu.into()),
            ScriptedMemory(memory.into()),
            HistoryAggregator::new(8),
        )
    }

    #[test]
    fn first_tick_reports_pending_cpu_and_records_nothing_for_it() {
        let mut m = monitor(vec![Ok(None)], vec![Ok(mem(40.0))]);
        let snap = m.tick();

        assert_eq!(snap.cpu, Reading::Pending);
        assert_eq!(snap.cpu_average, None);
        assert!(m.history().is_empty(MetricId::Cpu));
        assert_eq!(snap.memory_average, Some(40.0));
    }

    #[test]
    fn second_tick_records_cpu_usage() {
        let mut m = monitor(
            vec![Ok(None), Ok(Some(75.0))],
            vec![Ok(mem(40.0)), Ok(mem(60.0))],
        );
        m.tick();
        let snap = m.tick();

        assert_eq!(snap.cpu, Reading::Ready(75.0));
        assert_eq!(snap.cpu_average, Some(75.0));
        assert_eq!(snap.memory_average, Some(50.0));
        assert_eq!(m.history().snapshot(MetricId::Memory), vec![40.0, 60.0]);
    }

    #[test]
    fn failed_samples_are_not_recorded() {
        let mut m = monitor(
            vec![Ok(None), Ok(Some(50.0)), Err(SampleError::Os("denied".into()))],
            vec![Ok(mem(30.0)), Err(SampleError::Os("denied".into())), Ok(mem(50.0))],
        );
        m.tick();
        let second = m.tick();
        let third = m.tick();

        assert!(matches!(second.memory, Reading::Unavailable(_)));
        assert!(matches!(third.cpu, Reading::Unavailable(_)));
        assert_eq!(m.history().snapshot(MetricId::Cpu), vec![50.0]);
        assert_eq!(m.history().snapshot(MetricId::Memory), vec![30.0, 50.0]);
        assert_eq!(third.cpu_average, Some(50.0));
    }

    #[test]
    fn failure_on_one_metric_leaves_the_other_intact() {
        let denied = SampleError::Os("denied".into());
        let mut m = monitor(vec![Err(denied.clone())], vec![Ok(mem(70.0))]);
        let snap = m.tick();

        assert_eq!(snap.cpu, Reading::Unavailable(denied.to_string()));
        assert_eq!(snap.memory, Reading::Ready(mem(70.0)));
    }

    #[test]
    fn history_stays_bounded_over_many_ticks() {
        let cpu = (0..50).map(|i| Ok(Some(i as f64))).collect();
        let memory = (0..50).map(|i| Ok(mem(i as f64))).collect();
        let mut m = monitor(cpu, memory);
        for _ in 0..50 {
            m.tick();
        }

        assert_eq!(m.history().len(MetricId::Cpu), 8);
        assert_eq!(m.history().len(MetricId::Memory), 8);
        let expected: Vec<f64> = (42..50).map(|i| i as f64).collect();
        assert_eq!(m.history().snapshot(MetricId::Memory), expected);
    }

    #[test]
    fn platform_monitor_reports_cpu_on_the_second_tick() {
        let mut m = Monitor::platform();
        let first = m.tick();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        let second = m.tick();

        assert_eq!(first.cpu, Reading::Pending);
        let pct = *second.cpu.value().expect("second tick has a CPU value");
        assert!((0.0..=100.0).contains(&pct));
        assert_eq!(m.history().len(MetricId::Cpu), 1);
    }
}
