use crate::{placeholder, reading_color};
use iced::widget::text;
use iced::Element;
use perfmon_core::{event::Message, state::{AppState, GpuReading, Reading}};
use perfmon_theme::Theme;

/// Latest GPU utilization from the background worker.  Not averaged.
#[derive(Debug, Default)]
pub struct GpuWidget;

impl GpuWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        text(gpu_label(&state.gpu))
            .size(theme.font_size)
            .color(reading_color(&state.gpu, theme))
            .into()
    }
}

/// `"GPU Usage: 30%"`.
pub fn gpu_label(reading: &GpuReading) -> String {
    match reading {
        Reading::Ready(pct) => format!("GPU Usage: {pct}%"),
        other => placeholder("GPU Usage", other),
    }
}
