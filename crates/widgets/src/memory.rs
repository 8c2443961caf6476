use crate::{average_label, bar_fill, placeholder, reading_color};
use iced::widget::{column, progress_bar, text};
use iced::Element;
use perfmon_core::{event::Message, state::{AppState, MemoryInfo, Reading}};
use perfmon_theme::Theme;

/// Memory load with absolute usage, a progress bar, and the hourly average.
#[derive(Debug, Default)]
pub struct MemoryWidget;

impl MemoryWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let memory = &state.system.memory;
        let fill = bar_fill(memory.value().map(|m| m.load_percent));

        column![
            text(memory_label(memory))
                .size(theme.font_size)
                .color(reading_color(memory, theme)),
            progress_bar(0.0..=100.0, fill),
            text(average_label("Memory", state.system.memory_average)).size(theme.font_size),
        ]
        .spacing(theme.gap as f32)
        .into()
    }
}

/// `"Memory Usage: 45.00% (7000 MB used of 16000 MB)"`.
pub fn memory_label(reading: &Reading<MemoryInfo>) -> String {
    match reading {
        Reading::Ready(m) => format!(
            "Memory Usage: {:.2}% ({} MB used of {} MB)",
            m.load_percent, m.used_mb, m.total_mb
        ),
        other => placeholder("Memory Usage", other),
    }
}
