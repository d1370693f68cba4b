use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    API_KEY_ENV, CONFIG_PATH_ENV, DEFAULT_API_BASE, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL,
};
use crate::error::{MemeError, Result};

/// Endpoint and model configuration for the Gemini client.
///
/// Endpoint/model fields can be overridden from an optional TOML file
/// (path in `MEMEFORGE_CONFIG`). The API key only ever comes from the
/// environment and is never serialized.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    #[serde(skip)]
    pub api_key: String,
    /// REST endpoint base, without a trailing slash.
    pub api_base: String,
    /// Model used for meme description generation.
    pub text_model: String,
    /// Model used for image generation.
    pub image_model: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build the config from the process environment: defaults, then the
    /// optional TOML overlay, then the required API key.
    pub fn from_env() -> Result<Self> {
        Self::resolve(env::var(API_KEY_ENV).ok(), config_file_path().as_deref())
    }

    /// Core of [`from_env`], split out so tests can inject inputs directly.
    pub fn resolve(api_key: Option<String>, file: Option<&Path>) -> Result<Self> {
        let mut config = match file {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path)?;
                toml::from_str::<Self>(&content).map_err(|e| {
                    MemeError::Config(format!("invalid config file {}: {e}", path.display()))
                })?
            }
            _ => Self::default(),
        };

        let key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(MemeError::MissingApiKey(API_KEY_ENV))?;
        config.api_key = key;

        if config.api_base.ends_with('/') {
            config.api_base.truncate(config.api_base.len() - 1);
        }
        Ok(config)
    }
}

fn config_file_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_ENV).map(PathBuf::from)
}
