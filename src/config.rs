use anyhow::{ensure, Result};
use std::path::PathBuf;

pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Clone)]
pub struct Config {
    // Translator
    pub translate_api_url: String,
    pub translate_timeout_secs: u64,
    pub translate_max_attempts: u32,

    // Animation library
    pub asset_dir: PathBuf,

    // "auto" or a language code
    pub default_language_hint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translate_api_url: DEFAULT_TRANSLATE_API_URL.to_string(),
            translate_timeout_secs: 10,
            translate_max_attempts: 3,
            asset_dir: PathBuf::from("assets"),
            default_language_hint: "auto".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or(defaults.translate_api_url),
            translate_timeout_secs: std::env::var("TRANSLATE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.translate_timeout_secs),
            translate_max_attempts: std::env::var("TRANSLATE_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.translate_max_attempts),
            asset_dir: std::env::var("ASSET_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.asset_dir),
            default_language_hint: std::env::var("DEFAULT_LANGUAGE_HINT")
                .unwrap_or(defaults.default_language_hint),
        };

        ensure!(
            config.translate_api_url.starts_with("http://")
                || config.translate_api_url.starts_with("https://"),
            "TRANSLATE_API_URL must be an http(s) URL, got '{}'",
            config.translate_api_url
        );

        Ok(config)
    }
}
