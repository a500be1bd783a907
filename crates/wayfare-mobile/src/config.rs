//! Runtime configuration handling for mobile.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wayfare_core::util::normalize_text_option;
use wayfare_core::Result;

const RUNTIME_CONFIG_FILE: &str = "mobile-config.json";
const API_URL_ENV: &str = "WAYFARE_API_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiConfigSource {
    RuntimeSettings,
    EnvironmentFallback,
    None,
}

#[derive(Debug, Clone)]
pub struct ResolvedApiConfig {
    pub base_url: Option<String>,
    pub source: ApiConfigSource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MobileRuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl MobileRuntimeConfig {
    pub fn from_raw(api_base_url: Option<String>) -> Self {
        Self {
            api_base_url: normalize_text_option(api_base_url),
        }
    }

    pub const fn has_api_config(&self) -> bool {
        self.api_base_url.is_some()
    }
}

pub fn default_runtime_config_path() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wayfare")
        .join(RUNTIME_CONFIG_FILE)
}

pub fn load_runtime_config() -> MobileRuntimeConfig {
    load_runtime_config_from_path(&default_runtime_config_path())
}

pub fn load_runtime_config_from_path(path: &Path) -> MobileRuntimeConfig {
    if !path.exists() {
        return MobileRuntimeConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<MobileRuntimeConfig>(&content) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(
                    "Failed to parse mobile runtime config at {}: {}",
                    path.display(),
                    error
                );
                MobileRuntimeConfig::default()
            }
        },
        Err(error) => {
            tracing::warn!(
                "Failed to read mobile runtime config at {}: {}",
                path.display(),
                error
            );
            MobileRuntimeConfig::default()
        }
    }
}

pub fn save_runtime_config(config: &MobileRuntimeConfig) -> Result<()> {
    save_runtime_config_to_path(config, &default_runtime_config_path())
}

pub fn save_runtime_config_to_path(config: &MobileRuntimeConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let normalized = MobileRuntimeConfig::from_raw(config.api_base_url.clone());
    let content = serde_json::to_string_pretty(&normalized)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Resolve the API base URL: runtime settings win, the environment is the
/// fallback for development builds.
pub fn resolve_api_config() -> ResolvedApiConfig {
    let runtime_config = load_runtime_config();
    if let Some(base_url) = runtime_config.api_base_url {
        return ResolvedApiConfig {
            base_url: Some(base_url),
            source: ApiConfigSource::RuntimeSettings,
        };
    }

    if let Some(base_url) = normalize_text_option(std::env::var(API_URL_ENV).ok()) {
        return ResolvedApiConfig {
            base_url: Some(base_url),
            source: ApiConfigSource::EnvironmentFallback,
        };
    }

    ResolvedApiConfig {
        base_url: None,
        source: ApiConfigSource::None,
    }
}

pub fn api_config_source_label(source: ApiConfigSource) -> &'static str {
    match source {
        ApiConfigSource::RuntimeSettings => "runtime settings",
        ApiConfigSource::EnvironmentFallback => "env fallback",
        ApiConfigSource::None => "none",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_raw_rejects_empty_values() {
        assert!(!MobileRuntimeConfig::from_raw(None).has_api_config());
        assert!(!MobileRuntimeConfig::from_raw(Some("   ".to_string())).has_api_config());
    }

    #[test]
    fn from_raw_trims_the_base_url() {
        let config = MobileRuntimeConfig::from_raw(Some(" https://api.wayfare.app ".to_string()));
        assert_eq!(config.api_base_url.as_deref(), Some("https://api.wayfare.app"));
    }

    #[test]
    fn load_returns_default_for_missing_file() {
        let path = std::env::temp_dir().join("wayfare-config-test-missing/mobile-config.json");
        assert_eq!(
            load_runtime_config_from_path(&path),
            MobileRuntimeConfig::default()
        );
    }

    #[test]
    fn save_and_load_runtime_config_roundtrip() {
        let test_dir = std::env::temp_dir().join(format!(
            "wayfare-mobile-config-test-{}",
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let config_path = test_dir.join("mobile-config.json");

        let config = MobileRuntimeConfig::from_raw(Some(" https://api.wayfare.app ".to_string()));
        save_runtime_config_to_path(&config, &config_path).unwrap();

        let loaded = load_runtime_config_from_path(&config_path);
        assert_eq!(
            loaded.api_base_url.as_deref(),
            Some("https://api.wayfare.app")
        );

        let _ = std::fs::remove_file(config_path);
        let _ = std::fs::remove_dir_all(test_dir);
    }
}
