//! Startup configuration
//!
//! Read once from the environment; anything unset or unparsable falls back
//! to its default.

use std::path::PathBuf;
use tracing::warn;

use tm_core::remote::DEFAULT_BASE_URL;
use tm_core::view::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub api_base_url: String,
    pub page_size: usize,
    pub fetch_on_start: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".tm-data"),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            fetch_on_start: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_dir = lookup("TM_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let api_base_url = lookup("TM_API_BASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_base_url);

        let page_size = match lookup("TM_PAGE_SIZE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    warn!(value = %raw, "Invalid TM_PAGE_SIZE, using {}", defaults.page_size);
                    defaults.page_size
                }
            },
            None => defaults.page_size,
        };

        let fetch_on_start = env_flag(lookup("TM_FETCH_ON_START"), defaults.fetch_on_start);

        Self {
            data_dir,
            api_base_url,
            page_size,
            fetch_on_start,
        }
    }
}

fn env_flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}
