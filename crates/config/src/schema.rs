use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `perfmon.toml`.
///
/// The sampling interval and history length are fixed and deliberately
/// absent here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfConfig {
    pub window: WindowConfig,
    pub gpu: GpuConfig,
    pub theme: ThemeConfig,
}

/// Main window geometry and appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial width in logical pixels.
    pub width: f32,
    /// Initial height in logical pixels.
    pub height: f32,
    /// Background opacity (0.0 – 1.0).
    pub opacity: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title:   "Performance Monitor".to_string(),
            width:   500.0,
            height:  500.0,
            opacity: 0.8,
        }
    }
}

/// External GPU utilization query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuConfig {
    /// Set to `false` on machines without a supported GPU to skip the query.
    pub enabled: bool,
    /// Program to run; looked up on `$PATH`.
    pub command: String,
    pub args: Vec<String>,
    /// The query is abandoned (and the child killed) after this long.
    pub timeout_ms: u64,
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "nvidia-smi".to_string(),
            args: vec![
                "--query-gpu=utilization.gpu".to_string(),
                "--format=csv,noheader,nounits".to_string(),
            ],
            timeout_ms: 2_000,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Primary text/foreground color.
    pub foreground: String,
    /// Accent color (buttons, acknowledgment text).
    pub accent: String,
    /// CPU chart series color.
    pub cpu_color: String,
    /// Memory chart series color.
    pub memory_color: String,
    /// Chart grid line color.
    pub grid_color: String,
    /// Font size in points.
    pub font_size: f32,
    /// Outer padding (pixels).
    pub padding: u16,
    /// Gap between rows (pixels).
    pub gap: u16,
    /// Chart height (pixels).
    pub chart_height: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:   "#1e1e2e".to_string(), // Catppuccin Mocha — base
            foreground:   "#cdd6f4".to_string(), // Catppuccin Mocha — text
            accent:       "#cba6f7".to_string(), // Catppuccin Mocha — mauve
            cpu_color:    "#89b4fa".to_string(), // Catppuccin Mocha — blue
            memory_color: "#a6e3a1".to_string(), // Catppuccin Mocha — green
            grid_color:   "#45475a".to_string(), // Catppuccin Mocha — surface1
            font_size:    14.0,
            padding:      12,
            gap:          6,
            chart_height: 180.0,
        }
    }
}
