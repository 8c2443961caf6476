//! Desktop window for `perfmon`.
//!
//! Owns the Iced application loop and wires together all background tasks:
//! - 1-second timer (CPU / memory sampling, history, averages)
//! - GPU worker (vendor tool on its own task, latest reading only)
//! - Config file watcher (live theme reload on change)

use chrono::Local;
use futures::channel::mpsc::Sender;
use iced::{
    widget::{canvas, column, container, row, text},
    Element, Length, Subscription, Task,
};
use perfmon_config::{
    default_path, load as load_config, load_or_default, ConfigWatcher, GpuConfig, PerfConfig,
};
use perfmon_core::{
    event::Message,
    state::{AppState, Phase},
    TICK_INTERVAL,
};
use perfmon_renderer::HistoryChart;
use perfmon_system::{spawn_gpu_worker, GpuQuery, Monitor};
use perfmon_theme::Theme;
use perfmon_widgets::{ControlsWidget, CpuWidget, GpuWidget, MemoryWidget};
use std::time::Duration;
use tracing::{info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the monitor window.  Returns once the user acknowledges a stop.
pub fn run() -> iced::Result {
    let config = load_or_default();
    let size = iced::Size::new(config.window.width, config.window.height);

    iced::application(PerfMon::new, PerfMon::update, PerfMon::view)
        .title(PerfMon::title)
        .subscription(PerfMon::subscription)
        .style(PerfMon::style)
        .window_size(size)
        .transparent(true)
        .run()
}

// ── State ─────────────────────────────────────────────────────────────────────

struct PerfMon {
    state:    AppState,
    config:   PerfConfig,
    theme:    Theme,
    monitor:  Monitor,
    cpu:      CpuWidget,
    memory:   MemoryWidget,
    gpu:      GpuWidget,
    controls: ControlsWidget,
}

impl PerfMon {
    fn new() -> (Self, Task<Message>) {
        // Sample immediately so the CPU baseline is taken before the first
        // timer tick.
        (Self::with_config(load_or_default()), Task::done(Message::Tick))
    }

    fn with_config(config: PerfConfig) -> Self {
        let theme = Theme::from_config(&config.theme, &config.window);
        Self {
            state:    AppState::default(),
            config,
            theme,
            monitor:  Monitor::platform(),
            cpu:      CpuWidget::new(),
            memory:   MemoryWidget::new(),
            gpu:      GpuWidget::new(),
            controls: ControlsWidget::new(),
        }
    }

    fn title(&self) -> String {
        self.config.window.title.clone()
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                if !self.state.is_stopped() {
                    self.state.system = self.monitor.tick();
                    self.state.last_tick = Some(Local::now());
                }
            }
            Message::GpuSampled(reading) => {
                self.state.gpu = reading;
            }
            Message::ConfigReloaded => self.reload_config(),
            Message::StopRequested => {
                info!("Monitoring stopped by user");
                self.state.phase = Phase::Stopped;
            }
            Message::ExitAcknowledged => return iced::exit(),
        }
        Task::none()
    }

    fn reload_config(&mut self) {
        match load_config(default_path()) {
            Ok(cfg) => {
                info!("Config reloaded");
                if cfg.gpu != self.config.gpu {
                    warn!("GPU settings changed; they take effect after a restart");
                }
                self.theme  = Theme::from_config(&cfg.theme, &cfg.window);
                self.config = cfg;
            }
            Err(e) => warn!("Config reload failed: {e}"),
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let gap = self.theme.gap as f32;

        let content: Element<'_, Message> = if self.state.is_stopped() {
            container(self.controls.acknowledgment(&self.theme))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        } else {
            let chart = canvas(HistoryChart::new(
                self.monitor.history(),
                self.theme.chart_style(),
            ))
            .width(Length::Fill)
            .height(Length::Fixed(self.theme.chart_height));

            let legend = row![
                text("— CPU")
                    .size(self.theme.font_size * 0.85)
                    .color(self.theme.cpu.to_iced()),
                text("— Memory")
                    .size(self.theme.font_size * 0.85)
                    .color(self.theme.memory.to_iced()),
            ]
            .spacing(gap * 3.0);

            column![
                self.cpu.view(&self.state, &self.theme),
                self.memory.view(&self.state, &self.theme),
                self.gpu.view(&self.state, &self.theme),
                legend,
                chart,
                self.controls.view(&self.state, &self.theme),
            ]
            .spacing(gap * 2.0)
            .into()
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(self.theme.padding)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        // Dropping the streams on stop also ends the GPU worker.
        if self.state.is_stopped() {
            return Subscription::none();
        }

        Subscription::batch([
            iced::time::every(TICK_INTERVAL).map(|_| Message::Tick),
            Subscription::run(gpu_stream),
            Subscription::run(config_stream),
        ])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        let bg = self.theme.background.with_alpha(self.theme.opacity);
        iced::theme::Style {
            background_color: bg.to_iced(),
            text_color: self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.

/// Runs the GPU worker and forwards each fresh reading.  The tick never waits
/// on this; it renders whatever arrived last.
fn gpu_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let config = load_or_default();

        if config.gpu.enabled {
            let mut rx = spawn_gpu_worker(gpu_query(&config.gpu), TICK_INTERVAL);
            while rx.changed().await.is_ok() {
                let reading = rx.borrow_and_update().clone();
                let _ = sender.try_send(Message::GpuSampled(reading));
            }
        } else {
            info!("GPU query disabled in config");
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Watches `~/.config/perfmon/perfmon.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (watcher, mut rx) = ConfigWatcher::spawn(default_path());
        info!("Live reload enabled for {}", watcher.path().display());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn gpu_query(cfg: &GpuConfig) -> GpuQuery {
    GpuQuery::new(
        cfg.command.clone(),
        cfg.args.clone(),
        Duration::from_millis(cfg.timeout_ms.max(1)),
    )
}
