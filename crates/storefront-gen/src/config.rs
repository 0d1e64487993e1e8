//! Layered configuration
//!
//! Config is loaded with four layers of precedence (highest wins):
//! 1. Environment variable: `GEMINI_API_KEY`
//! 2. `GEMINI_API_KEY` in a `.env` file in the working directory
//! 3. Project-local: `.storefront/config.toml`
//! 4. Global: `~/.storefront/config.toml`

use crate::error::{Result, StorefrontError};
use crate::model::GeminiModel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;
pub const DEFAULT_OUTPUT_DIR: &str = "assets";
pub const DOTENV_FILENAME: &str = ".env";

/// `[gemini]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiSection {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// `[generation]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationSection {
    /// Short model name, see [`GeminiModel::short_name`]
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub output_dir: Option<String>,
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gemini: GeminiSection,
    #[serde(default)]
    pub generation: GenerationSection,
}

/// Resolved configuration with environment overrides applied
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub timeout: Duration,
    pub model: GeminiModel,
    pub output_dir: PathBuf,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            model: GeminiModel::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl StorefrontConfig {
    /// Load config with layered precedence: global < project < `.env` < env var
    pub fn load() -> Result<Self> {
        let mut file = ConfigFile::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut file, global);
            }
        }

        let local_path = PathBuf::from(".storefront/config.toml");
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut file, local);
        }

        Self::resolve(file, Self::env_api_key()?)
    }

    /// Load config from a specific file path only, still honouring the
    /// env var and `.env`
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = Self::load_file(path)?;
        Self::resolve(file, Self::env_api_key()?)
    }

    /// The API key, or a fatal error naming where to set it
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                StorefrontError::MissingCredential(format!(
                    "{} is not set. Export it, put it in {}, or add api_key under [gemini] \
                     in .storefront/config.toml",
                    API_KEY_ENV, DOTENV_FILENAME
                ))
            })
    }

    /// The process environment wins over `.env`
    fn env_api_key() -> Result<Option<String>> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) => Ok(Some(key)),
            Err(_) => dotenv_api_key(Path::new(DOTENV_FILENAME)),
        }
    }

    fn resolve(file: ConfigFile, env_key: Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let model = match file.generation.model.as_deref() {
            Some(name) => name.parse()?,
            None => defaults.model,
        };

        let timeout = match file.gemini.timeout_secs {
            Some(0) => {
                return Err(StorefrontError::Config(
                    "gemini.timeout_secs must be greater than zero".to_string(),
                ))
            }
            Some(secs) => Duration::from_secs(secs),
            None => defaults.timeout,
        };

        Ok(Self {
            api_key: env_key.or(file.gemini.api_key),
            api_url: file
                .gemini
                .api_url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            timeout,
            model,
            output_dir: file
                .generation
                .output_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".storefront").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            StorefrontError::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }

    fn merge_into(base: &mut ConfigFile, overlay: ConfigFile) {
        if overlay.gemini.api_key.is_some() {
            base.gemini.api_key = overlay.gemini.api_key;
        }
        if overlay.gemini.api_url.is_some() {
            base.gemini.api_url = overlay.gemini.api_url;
        }
        if overlay.gemini.timeout_secs.is_some() {
            base.gemini.timeout_secs = overlay.gemini.timeout_secs;
        }
        if overlay.generation.model.is_some() {
            base.generation.model = overlay.generation.model;
        }
        if overlay.generation.output_dir.is_some() {
            base.generation.output_dir = overlay.generation.output_dir;
        }
    }
}

/// Read `GEMINI_API_KEY` from a dotenv file without touching the process
/// environment. A missing file is not an error.
fn dotenv_api_key(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        StorefrontError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    for item in iter {
        let (key, value) = item.map_err(|e| {
            StorefrontError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        if key == API_KEY_ENV {
            return Ok(Some(value));
        }
    }
    Ok(None)
}
