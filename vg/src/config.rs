//! Viaggio configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main viaggio configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GenAI provider configuration
    pub genai: GenAiConfig,

    /// Output locations for generated artifacts
    pub output: OutputConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Call this early in startup to fail fast with a clear message when
    /// the API key environment variable is not set.
    pub fn validate(&self) -> Result<()> {
        if std::env::var(&self.genai.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "GenAI API key not found. Set the {} environment variable.",
                self.genai.api_key_env
            ));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .viaggio.yml
        let local_config = PathBuf::from(".viaggio.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/viaggio/viaggio.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("viaggio").join("viaggio.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!(
                            "Failed to load config from {}: {}",
                            user_config.display(),
                            e
                        );
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// GenAI provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenAiConfig {
    /// Model for structured itinerary generation
    #[serde(rename = "model-pro")]
    pub model_pro: String,

    /// Model for web-grounded search
    #[serde(rename = "model-flash")]
    pub model_flash: String,

    /// Model for image generation
    #[serde(rename = "model-image")]
    pub model_image: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds (transport-level)
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            model_pro: "gemini-3-pro-preview".to_string(),
            model_flash: "gemini-3-flash-preview".to_string(),
            model_image: "gemini-2.5-flash-image".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_ms: 120_000,
        }
    }
}

impl GenAiConfig {
    /// Read the API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).map_err(|_| {
            eyre::eyre!(
                "API key not found. Set the {} environment variable.",
                self.api_key_env
            )
        })
    }
}

/// Output locations for generated artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory where generated images are written
    #[serde(rename = "image-dir")]
    pub image_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("."),
        }
    }
}
