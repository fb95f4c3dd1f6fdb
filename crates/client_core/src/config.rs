use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

use crate::{DEFAULT_PORT, DEFAULT_TIMEOUT};

pub const SETTINGS_FILE: &str = "remote_control.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_address: String,
    pub port: u16,
    pub timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_address: "192.168.1.100".into(),
            port: DEFAULT_PORT,
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    address: Option<String>,
    port: Option<u16>,
    timeout_ms: Option<u64>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

/// Defaults, then the TOML file at `path` if present, then environment overrides.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    match read_file_settings(path) {
        Ok(Some(file_cfg)) => {
            if let Some(v) = file_cfg.address {
                settings.default_address = v;
            }
            if let Some(v) = file_cfg.port {
                settings.port = v;
            }
            match file_cfg.timeout_ms {
                Some(0) => warn!("ignoring zero timeout_ms in {}", path.display()),
                Some(v) => settings.timeout_ms = v,
                None => {}
            }
        }
        Ok(None) => {}
        Err(err) => warn!("ignoring settings file: {err:#}"),
    }

    for name in ["REMOTE_CONTROL_ADDRESS", "APP__ADDRESS"] {
        if let Some(v) = env(name) {
            settings.default_address = v;
        }
    }
    for name in ["REMOTE_CONTROL_PORT", "APP__PORT"] {
        if let Some(v) = env(name) {
            match v.parse::<u16>() {
                Ok(parsed) => settings.port = parsed,
                Err(err) => warn!(var = name, value = %v, "ignoring invalid port: {err}"),
            }
        }
    }
    for name in ["REMOTE_CONTROL_TIMEOUT_MS", "APP__TIMEOUT_MS"] {
        if let Some(v) = env(name) {
            match v.parse::<u64>() {
                Ok(0) => warn!(var = name, "ignoring zero timeout"),
                Ok(parsed) => settings.timeout_ms = parsed,
                Err(err) => warn!(var = name, value = %v, "ignoring invalid timeout: {err}"),
            }
        }
    }

    settings
}

fn read_file_settings(path: &Path) -> anyhow::Result<Option<FileSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed = toml::from_str::<FileSettings>(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Some(parsed))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
