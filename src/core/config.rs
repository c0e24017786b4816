//! Game configuration.
//!
//! `GameConfig` carries the tunables of a session:
//! - how many strikes end the game
//! - the RNG seed (random when unset)
//! - where event images live
//! - the base link used to look an event up externally
//!
//! Values come from defaults, then the environment, then CLI flags.

use serde::{Deserialize, Serialize};

/// Default number of strikes that ends a game.
pub const DEFAULT_MAX_STRIKES: u32 = 3;

/// Default directory event image references are resolved under.
pub const DEFAULT_IMAGE_DIR: &str = "data_images";

/// Default search endpoint for the external lookup link.
pub const DEFAULT_REFERENCE_BASE: &str = "https://www.google.com/search?q=";

/// Environment variable overriding `max_strikes`.
pub const ENV_MAX_STRIKES: &str = "TIMELINE_MAX_STRIKES";
/// Environment variable overriding `seed`.
pub const ENV_SEED: &str = "TIMELINE_SEED";
/// Environment variable overriding `image_dir`.
pub const ENV_IMAGE_DIR: &str = "TIMELINE_IMAGE_DIR";

/// Errors raised while building a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// The offending variable.
        key: &'static str,
        /// Its raw value.
        value: String,
    },

    /// A game must allow at least one strike.
    #[error("max_strikes must be at least 1")]
    ZeroStrikes,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Strikes that end the game.
    pub max_strikes: u32,

    /// RNG seed. `None` draws one from system entropy.
    pub seed: Option<u64>,

    /// Directory image references are resolved under.
    pub image_dir: String,

    /// Prefix of the external lookup link.
    pub reference_base: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_strikes: DEFAULT_MAX_STRIKES,
            seed: None,
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            reference_base: DEFAULT_REFERENCE_BASE.to_string(),
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_STRIKES) {
            config.max_strikes = parse_value(ENV_MAX_STRIKES, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_value(ENV_SEED, &raw)?);
        }
        if let Some(raw) = lookup(ENV_IMAGE_DIR) {
            config.image_dir = raw;
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the strike limit.
    #[must_use]
    pub fn with_max_strikes(mut self, max_strikes: u32) -> Self {
        self.max_strikes = max_strikes;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the image directory.
    #[must_use]
    pub fn with_image_dir(mut self, dir: impl Into<String>) -> Self {
        self.image_dir = dir.into();
        self
    }

    /// Check the configuration is playable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroStrikes`] when no strike is allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_strikes == 0 {
            return Err(ConfigError::ZeroStrikes);
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}
