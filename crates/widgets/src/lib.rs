pub mod controls;
pub mod cpu;
pub mod gpu;
pub mod memory;

pub use controls::ControlsWidget;
pub use cpu::CpuWidget;
pub use gpu::GpuWidget;
pub use memory::MemoryWidget;

use perfmon_core::state::Reading;
use perfmon_theme::{Color, Theme};

/// Progress-bar fill for a percentage, clamped to `[0, 100]`.  Anything that
/// isn't a finite number renders as empty.
pub fn bar_fill(percent: Option<f64>) -> f32 {
    match percent {
        Some(p) if p.is_finite() => p.clamp(0.0, 100.0) as f32,
        _ => 0.0,
    }
}

/// `"<prefix>: Error"` after a failed sample, `"<prefix>: N/A"` otherwise.
fn placeholder<T>(prefix: &str, reading: &Reading<T>) -> String {
    match reading {
        Reading::Unavailable(_) => format!("{prefix}: Error"),
        _ => format!("{prefix}: N/A"),
    }
}

/// `"Hourly Avg <name>: 12.34%"`, or `N/A` while the history is empty.
pub fn average_label(name: &str, average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("Hourly Avg {name}: {avg:.2}%"),
        None => format!("Hourly Avg {name}: N/A"),
    }
}

/// Text color for a reading: red when the last sample failed.
fn reading_color<T>(reading: &Reading<T>, theme: &Theme) -> iced::Color {
    match reading {
        Reading::Unavailable(_) => Color::RED.to_iced(),
        _ => theme.foreground.to_iced(),
    }
}
