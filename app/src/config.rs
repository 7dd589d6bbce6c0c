//! Configuration for the terminal front end.
//!
//! Values come from environment variables:
//!
//! | Variable      | Meaning                         | Default          |
//! |---------------|---------------------------------|------------------|
//! | `TODO_TITLE`  | Header shown above the list     | `So Much To Do`  |
//! | `TODO_RENDER` | Output format, `text` or `json` | `text`           |
//!
//! Log filtering is configured separately through `RUST_LOG`.

use crate::view::DEFAULT_TITLE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable holding the header title
pub const TITLE_VAR: &str = "TODO_TITLE";

/// Environment variable holding the render mode
pub const RENDER_VAR: &str = "TODO_RENDER";

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Render mode is not one of the supported values
    #[error("Invalid render mode `{0}`: expected `text` or `json`")]
    InvalidRenderMode(String),

    /// Title was set but empty
    #[error("TODO_TITLE must not be empty")]
    EmptyTitle,
}

/// How the list is written to the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per render
    Json,
}

impl FromStr for RenderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidRenderMode(s.to_string())),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Header shown above the list
    pub title: String,
    /// Output format
    pub render: RenderMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            render: RenderMode::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to an invalid value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(title) = lookup(TITLE_VAR) {
            if title.is_empty() {
                return Err(ConfigError::EmptyTitle);
            }
            config.title = title;
        }

        if let Some(render) = lookup(RENDER_VAR) {
            config.render = render.parse()?;
        }

        Ok(config)
    }
}
