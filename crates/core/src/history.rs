use std::collections::VecDeque;

use crate::MAX_HISTORY_SIZE;

/// Metrics that keep a rolling history.  GPU readings are displayed only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricId {
    Cpu,
    Memory,
}

/// Bounded FIFO ring of percentage samples, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples:  VecDeque<f64>,
    capacity: usize,
}

impl HistoryBuffer {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest if at capacity.
    pub fn push(&mut self, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// Mean of every retained sample, `None` when empty.
    pub fn average(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Per-metric rolling history from which the hourly averages are derived.
///
/// Mutated once per tick by the monitor; everything else only reads.  The
/// average is always recomputed from the retained samples, so before the
/// ring fills it is simply the mean of what has been recorded so far.
#[derive(Debug, Clone)]
pub struct HistoryAggregator {
    cpu:    HistoryBuffer,
    memory: HistoryBuffer,
}

impl HistoryAggregator {
    pub fn new(capacity: usize) -> Self {
        Self {
            cpu:    HistoryBuffer::new(capacity),
            memory: HistoryBuffer::new(capacity),
        }
    }

    /// Append `value` to the metric's ring.  Out-of-range values are stored
    /// as given; validation belongs to the caller.
    pub fn record(&mut self, metric: MetricId, value: f64) {
        self.buffer_mut(metric).push(value);
    }

    /// Arithmetic mean of the metric's samples, `None` if nothing is recorded.
    pub fn average(&self, metric: MetricId) -> Option<f64> {
        self.buffer(metric).average()
    }

    /// Owned copy of the metric's samples in chronological order.
    pub fn snapshot(&self, metric: MetricId) -> Vec<f64> {
        self.buffer(metric).to_vec()
    }

    pub fn len(&self, metric: MetricId) -> usize {
        self.buffer(metric).len()
    }

    pub fn is_empty(&self, metric: MetricId) -> bool {
        self.buffer(metric).is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cpu.capacity()
    }

    fn buffer(&self, metric: MetricId) -> &HistoryBuffer {
        match metric {
            MetricId::Cpu    => &self.cpu,
            MetricId::Memory => &self.memory,
        }
    }

    fn buffer_mut(&mut self, metric: MetricId) -> &mut HistoryBuffer {
        match metric {
            MetricId::Cpu    => &mut self.cpu,
            MetricId::Memory => &mut self.memory,
        }
    }
}

impl Default for HistoryAggregator {
    fn default() -> Self {
        Self::new(MAX_HISTORY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_spans_one_hour() {
        assert_eq!(HistoryAggregator::default().capacity(), 3600);
    }

    #[test]
    fn two_samples_average_to_midpoint() {
        let mut history = HistoryAggregator::default();
        history.record(MetricId::Cpu, 100.0);
        history.record(MetricId::Cpu, 0.0);

        assert_eq!(history.average(MetricId::Cpu), Some(50.0));
        assert_eq!(history.snapshot(MetricId::Cpu), vec![100.0, 0.0]);
    }

    #[test]
    fn full_ring_evicts_oldest_first() {
        let mut history = HistoryAggregator::new(3);
        for v in [1.0, 2.0, 3.0, 4.0] {
            history.record(MetricId::Memory, v);
        }

        assert_eq!(history.snapshot(MetricId::Memory), vec![2.0, 3.0, 4.0]);
        assert_eq!(history.average(MetricId::Memory), Some(3.0));
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut buf = HistoryBuffer::new(5);
        for i in 0..50 {
            buf.push(i as f64);
            assert!(buf.len() <= 5);
        }
        assert_eq!(buf.to_vec(), vec![45.0, 46.0, 47.0, 48.0, 49.0]);
    }

    #[test]
    fn overflow_keeps_most_recent_in_order() {
        let mut history = HistoryAggregator::new(100);
        for i in 0..250 {
            history.record(MetricId::Cpu, i as f64);
        }
        let expected: Vec<f64> = (150..250).map(|i| i as f64).collect();
        assert_eq!(history.snapshot(MetricId::Cpu), expected);
    }

    #[test]
    fn empty_history_has_no_average() {
        let history = HistoryAggregator::default();
        assert_eq!(history.average(MetricId::Cpu), None);
        assert!(history.snapshot(MetricId::Memory).is_empty());
    }

    #[test]
    fn average_matches_arithmetic_mean() {
        let values = [12.5, 99.0, 0.25, 47.75, 63.0, 8.0];
        let mut history = HistoryAggregator::default();
        for v in values {
            history.record(MetricId::Memory, v);
        }
        let expected = values.iter().sum::<f64>() / values.len() as f64;
        let got = history.average(MetricId::Memory).unwrap();
        assert!((got - expected).abs() < 1e-9);
    }

    #[test]
    fn repeated_queries_are_stable() {
        let mut history = HistoryAggregator::new(4);
        for v in [10.0, 20.0, 30.0, 40.0, 50.0] {
            history.record(MetricId::Cpu, v);
        }
        let first = (history.average(MetricId::Cpu), history.snapshot(MetricId::Cpu));
        for _ in 0..3 {
            assert_eq!(history.average(MetricId::Cpu), first.0);
            assert_eq!(history.snapshot(MetricId::Cpu), first.1);
        }
    }

    #[test]
    fn metrics_are_independent() {
        let mut history = HistoryAggregator::new(10);
        history.record(MetricId::Cpu, 80.0);
        assert_eq!(history.len(MetricId::Cpu), 1);
        assert!(history.is_empty(MetricId::Memory));
    }

    #[test]
    fn out_of_range_values_are_stored_as_given() {
        let mut history = HistoryAggregator::new(2);
        history.record(MetricId::Cpu, 150.0);
        history.record(MetricId::Cpu, -10.0);
        assert_eq!(history.snapshot(MetricId::Cpu), vec![150.0, -10.0]);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut buf = HistoryBuffer::new(0);
        buf.push(1.0);
        buf.push(2.0);
        assert_eq!(buf.capacity(), 1);
        assert_eq!(buf.to_vec(), vec![2.0]);
    }
}
