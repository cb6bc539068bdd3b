// ABOUTME: Configuration module for the slidedeckml compiler
// ABOUTME: Provides page shell settings and environment variable handling

use crate::errors::{Result, SlideError};
use std::env;

pub const DEFAULT_REVEAL_URL: &str = "https://cdn.jsdelivr.net/npm/reveal.js@5.0.4/dist";
pub const DEFAULT_THEME: &str = "white";
pub const DEFAULT_TRANSITION: &str = "slide";
pub const DEFAULT_BACKGROUND_TRANSITION: &str = "fade";

pub const DEFAULT_TITLE: &str = "SlideDeckML Presentation";
pub const DEFAULT_AUTHOR: &str = "Unknown Author";

/// Settings for the static page shell the rendered sections are placed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Base URL of the reveal.js `dist` directory, without trailing slash
    pub reveal_url: String,
    pub theme: String,
    pub transition: String,
    pub background_transition: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            reveal_url: DEFAULT_REVEAL_URL.to_string(),
            theme: DEFAULT_THEME.to_string(),
            transition: DEFAULT_TRANSITION.to_string(),
            background_transition: DEFAULT_BACKGROUND_TRANSITION.to_string(),
        }
    }
}

impl ShellConfig {
    /// Check that every value can be placed in the shell verbatim
    pub fn validate(&self) -> Result<()> {
        if self.reveal_url.is_empty() || self.reveal_url.contains(['"', '<', '>']) {
            return Err(SlideError::ConfigError(format!(
                "Invalid reveal.js URL: {:?}",
                self.reveal_url
            )));
        }
        for (name, value) in [
            ("theme", &self.theme),
            ("transition", &self.transition),
            ("background transition", &self.background_transition),
        ] {
            let valid = !value.is_empty()
                && value
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if !valid {
                return Err(SlideError::ConfigError(format!(
                    "Invalid {}: {:?}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// URL of the core reveal.js stylesheet
    pub fn reveal_css(&self) -> String {
        format!("{}/reveal.css", self.reveal_url)
    }

    /// URL of the selected theme stylesheet
    pub fn theme_css(&self) -> String {
        format!("{}/theme/{}.css", self.reveal_url, self.theme)
    }

    /// URL of the reveal.js runtime script
    pub fn reveal_js(&self) -> String {
        format!("{}/reveal.js", self.reveal_url)
    }
}

/// Global configuration for the application
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub shell: ShellConfig,
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let shell = ShellConfig {
            reveal_url: env_or("SLIDEDECK_REVEAL_URL", DEFAULT_REVEAL_URL)
                .trim_end_matches('/')
                .to_string(),
            theme: env_or("SLIDEDECK_THEME", DEFAULT_THEME),
            transition: env_or("SLIDEDECK_TRANSITION", DEFAULT_TRANSITION),
            background_transition: env_or(
                "SLIDEDECK_BACKGROUND_TRANSITION",
                DEFAULT_BACKGROUND_TRANSITION,
            ),
        };

        Self { shell }
    }

    /// Get a shell configuration with command-line overrides applied
    pub fn get_shell_config(
        &self,
        theme: Option<String>,
        transition: Option<String>,
    ) -> ShellConfig {
        ShellConfig {
            theme: theme.unwrap_or_else(|| self.shell.theme.clone()),
            transition: transition.unwrap_or_else(|| self.shell.transition.clone()),
            ..self.shell.clone()
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
