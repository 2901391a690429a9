use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use shared::domain::PdfOptions;

pub const DEFAULT_CONFIG_FILE: &str = "wordsearch.toml";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub binary_path: PathBuf,
    pub timeout_secs: u64,
    pub open_after_generate: bool,
    pub output_path: PathBuf,
    pub pdf: PdfOptions,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            binary_path: default_binary_path(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            open_after_generate: false,
            output_path: default_output_path(),
            pdf: PdfOptions::default(),
        }
    }
}

impl GeneratorSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

fn default_binary_path() -> PathBuf {
    let name = if cfg!(target_os = "windows") {
        "wordsearch.exe"
    } else {
        "wordsearch"
    };
    Path::new("bin").join(name)
}

fn default_output_path() -> PathBuf {
    dirs::document_dir()
        .map(|dir| dir.join("wordsearch.pdf"))
        .unwrap_or_else(|| PathBuf::from("wordsearch.pdf"))
}

/// Reads `path` (or `wordsearch.toml` in the working directory) and applies
/// environment overrides. A missing or malformed file falls back to defaults.
pub fn load_settings(path: Option<&Path>) -> GeneratorSettings {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let settings = read_settings_file(path).unwrap_or_default();
    apply_env_overrides(settings, |name| std::env::var(name).ok())
}

fn read_settings_file(path: &Path) -> Option<GeneratorSettings> {
    let raw = fs::read_to_string(path).ok()?;
    match parse_settings(&raw) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "loaded generator settings");
            Some(settings)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "ignoring malformed settings file: {err}");
            None
        }
    }
}

pub fn parse_settings(raw: &str) -> Result<GeneratorSettings, toml::de::Error> {
    toml::from_str(raw)
}

pub fn apply_env_overrides(
    mut settings: GeneratorSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> GeneratorSettings {
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = read("WORDSEARCH_BIN") {
        settings.binary_path = PathBuf::from(v);
    }
    if let Some(v) = read("APP__GENERATOR_BIN") {
        settings.binary_path = PathBuf::from(v);
    }

    if let Some(v) = read("APP__GENERATOR_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.timeout_secs = parsed,
            Err(_) => tracing::warn!("ignoring invalid APP__GENERATOR_TIMEOUT_SECS={v}"),
        }
    }

    if let Some(v) = read("APP__OPEN_AFTER_GENERATE") {
        match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => settings.open_after_generate = true,
            "0" | "false" | "no" | "off" => settings.open_after_generate = false,
            _ => tracing::warn!("ignoring invalid APP__OPEN_AFTER_GENERATE={v}"),
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
