//! Configuration parsing
//!
//! Parses the tool configuration from TOML and validates it.
//! Falls back to built-in defaults if the text is unusable.

use tvmode_core::config::{ToolConfig, MAX_TICK_MS};

use super::EMBEDDED_CONFIG;

/// Configuration loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML syntax error, unknown key or wrong value type
    Parse,
    /// Well-formed but out-of-range value
    Invalid,
}

/// Parse and validate a TOML configuration
///
/// Missing tables and keys take their default values.
pub fn parse_config(text: &str) -> Result<ToolConfig, ConfigError> {
    let config: ToolConfig = toml::from_str(text).map_err(|_| ConfigError::Parse)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ToolConfig) -> Result<(), ConfigError> {
    if !config.session.is_valid() {
        warn!(
            "tick_ms {} outside 1..={}",
            config.session.tick_ms, MAX_TICK_MS
        );
        return Err(ConfigError::Invalid);
    }
    Ok(())
}

/// Load a configuration, falling back to defaults on any error
pub fn load_config(text: &str) -> ToolConfig {
    match parse_config(text) {
        Ok(config) => {
            log_config_summary(&config);
            config
        }
        Err(e) => {
            warn!("Failed to load config: {:?}, using defaults", e);
            ToolConfig::default()
        }
    }
}

/// Load the configuration compiled into the application
pub fn load_embedded_config() -> ToolConfig {
    load_config(EMBEDDED_CONFIG)
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &ToolConfig) {
    info!("Configuration loaded successfully");
    debug!("  policy: {:?}", config.policy.compatibility);
    debug!("  tick: {} ms", config.session.tick_ms);
    debug!("  exit after apply: {}", config.session.exit_after_apply);
}
