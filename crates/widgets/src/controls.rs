use chrono::{DateTime, Local};
use iced::widget::{button, column, row, text};
use iced::{Alignment, Element};
use perfmon_core::{event::Message, state::AppState};
use perfmon_theme::Theme;

/// Message shown once after the user stops monitoring.
pub const STOPPED_NOTICE: &str = "Monitoring has been stopped.";

/// Stop button with a last-update timestamp, and the post-stop acknowledgment.
#[derive(Debug, Default)]
pub struct ControlsWidget;

impl ControlsWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        row![
            button(text("Stop Monitoring").size(theme.font_size))
                .on_press(Message::StopRequested),
            text(status_label(state.last_tick))
                .size(theme.font_size * 0.85)
                .color(theme.foreground.with_alpha(0.6).to_iced()),
        ]
        .spacing(theme.gap as f32 * 2.0)
        .align_y(Alignment::Center)
        .into()
    }

    /// Replaces the whole window content after a stop.  Pressing OK exits.
    pub fn acknowledgment<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        column![
            text("Stopped Monitoring")
                .size(theme.font_size * 1.3)
                .color(theme.accent.to_iced()),
            text(STOPPED_NOTICE).size(theme.font_size),
            button(text("OK").size(theme.font_size)).on_press(Message::ExitAcknowledged),
        ]
        .spacing(theme.gap as f32 * 2.0)
        .align_x(Alignment::Center)
        .into()
    }
}

/// `"Updated 14:03:27"`, or `"Waiting for first sample…"`.
pub fn status_label(last_tick: Option<DateTime<Local>>) -> String {
    match last_tick {
        Some(t) => format!("Updated {}", t.format("%H:%M:%S")),
        None => "Waiting for first sample…".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_before_first_tick() {
        assert_eq!(status_label(None), "Waiting for first sample…");
    }

    #[test]
    fn status_shows_wall_clock() {
        let t = Local.with_ymd_and_hms(2024, 5, 1, 9, 4, 7).single().unwrap();
        assert_eq!(status_label(Some(t)), "Updated 09:04:07");
    }
}
