pub mod schema;
pub mod watcher;

pub use schema::{GpuConfig, PerfConfig, ThemeConfig, WindowConfig};
pub use watcher::ConfigWatcher;

use perfmon_core::{PerfError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `PerfConfig::default()` if
/// the file doesn't exist so the widget always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<PerfConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(PerfConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| PerfError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse a TOML document into a [`PerfConfig`].  Missing keys take defaults.
pub fn parse(raw: &str) -> Result<PerfConfig> {
    toml::from_str(raw).map_err(|e| PerfError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("perfmon").join("perfmon.toml")
}

/// Load from [`default_path`], logging and falling back to defaults on error.
pub fn load_or_default() -> PerfConfig {
    let path = default_path();
    load(&path).unwrap_or_else(|e| {
        tracing::warn!("Ignoring config at '{}': {e}", path.display());
        PerfConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load("/definitely/not/here/perfmon.toml").unwrap();
        assert_eq!(cfg.window.title, "Performance Monitor");
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = parse("[window\ntitle = 1").unwrap_err();
        assert!(matches!(err, PerfError::Config(_)));
    }

    #[test]
    fn default_path_ends_with_app_file() {
        assert!(default_path().ends_with("perfmon/perfmon.toml"));
    }
}
