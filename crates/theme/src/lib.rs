pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::ChartStyle;

use perfmon_config::{ThemeConfig, WindowConfig};

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible; invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:   Color,
    pub foreground:   Color,
    pub accent:       Color,
    pub cpu:          Color,
    pub memory:       Color,
    pub grid:         Color,
    pub font_size:    f32,
    pub padding:      u16,
    pub gap:          u16,
    pub chart_height: f32,
    /// Window background opacity, from `[window]`.
    pub opacity:      f32,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` and `[window]` sections.
    pub fn from_config(cfg: &ThemeConfig, window: &WindowConfig) -> Self {
        Self {
            background:   Color::from_hex(&cfg.background).unwrap_or(Color::DARK),
            foreground:   Color::from_hex(&cfg.foreground).unwrap_or(Color::WHITE),
            accent:       Color::from_hex(&cfg.accent).unwrap_or(Color::PURPLE),
            cpu:          Color::from_hex(&cfg.cpu_color).unwrap_or(Color::BLUE),
            memory:       Color::from_hex(&cfg.memory_color).unwrap_or(Color::GREEN),
            grid:         Color::from_hex(&cfg.grid_color).unwrap_or(Color::SURFACE),
            font_size:    cfg.font_size,
            padding:      cfg.padding,
            gap:          cfg.gap,
            chart_height: cfg.chart_height.max(40.0),
            opacity:      window.opacity.clamp(0.0, 1.0),
        }
    }

    /// Colors for the history chart.
    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            background: self.background.with_alpha(self.opacity * 0.5),
            grid:       self.grid,
            cpu:        self.cpu,
            memory:     self.memory,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default(), &WindowConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_hex_falls_back() {
        let cfg = ThemeConfig {
            cpu_color: "not-a-color".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg, &WindowConfig::default());
        assert_eq!(theme.cpu, Color::BLUE);
    }

    #[test]
    fn opacity_is_clamped() {
        let window = WindowConfig {
            opacity: 3.0,
            ..WindowConfig::default()
        };
        let theme = Theme::from_config(&ThemeConfig::default(), &window);
        assert_eq!(theme.opacity, 1.0);
    }

    #[test]
    fn default_opacity_is_translucent() {
        assert!((Theme::default().opacity - 0.8).abs() < f32::EPSILON);
    }
}
