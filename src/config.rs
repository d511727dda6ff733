//! Environment-driven configuration.

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

/// Prefix for every environment variable read by [`Config::load`].
pub const ENV_PREFIX: &str = "CHRONOSCOPE_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log filter directive, `CHRONOSCOPE_LOG_LEVEL`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Line template for pretty output, `CHRONOSCOPE_LOG_TEMPLATE`.
    #[serde(default)]
    pub log_template: Option<String>,
    /// Whether timers render elapsed time in human-readable form,
    /// `CHRONOSCOPE_USE_FORMATTER`.
    #[serde(default = "default_use_formatter")]
    pub use_formatter: bool,
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_use_formatter() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_template: None,
            use_formatter: default_use_formatter(),
        }
    }
}

impl Config {
    /// Defaults merged with `CHRONOSCOPE_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
