pub mod error;
pub mod event;
pub mod history;
pub mod state;

pub use error::{PerfError, Result, SampleError};
pub use event::Message;
pub use history::{HistoryAggregator, HistoryBuffer, MetricId};
pub use state::AppState;

use std::time::Duration;

/// Period of the sampling timer.  Not configurable.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Span covered by the rolling average.
pub const AVERAGE_WINDOW: Duration = Duration::from_secs(60 * 60);

/// One history slot per expected tick across [`AVERAGE_WINDOW`] (3600).
pub const MAX_HISTORY_SIZE: usize =
    (AVERAGE_WINDOW.as_secs() / TICK_INTERVAL.as_secs()) as usize;
