use crate::{average_label, bar_fill, placeholder, reading_color};
use iced::widget::{column, progress_bar, text};
use iced::Element;
use perfmon_core::{event::Message, state::{AppState, Reading}};
use perfmon_theme::Theme;

/// Current CPU usage, a progress bar, and the hourly average.
#[derive(Debug, Default)]
pub struct CpuWidget;

impl CpuWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let cpu = &state.system.cpu;

        column![
            text(cpu_label(cpu))
                .size(theme.font_size)
                .color(reading_color(cpu, theme)),
            progress_bar(0.0..=100.0, bar_fill(cpu.value().copied())),
            text(average_label("CPU", state.system.cpu_average)).size(theme.font_size),
        ]
        .spacing(theme.gap as f32)
        .into()
    }
}

/// `"CPU Usage: 12.34%"`.
pub fn cpu_label(reading: &Reading<f64>) -> String {
    match reading {
        Reading::Ready(pct) => format!("CPU Usage: {pct:.2}%"),
        other => placeholder("CPU Usage", other),
    }
}
