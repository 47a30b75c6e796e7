//! Runtime configuration
//!
//! [`ToolbeltConfig`] controls how a registry treats incoming payloads. With the
//! `config` feature enabled, [`loader`] reads it from YAML, TOML, JSON, INI, RON
//! or JSON5 files with `${VAR}` substitution and `TOOLBELT__*` overrides.

#[cfg(feature = "config")]
pub mod loader;
#[cfg(feature = "config")]
pub use loader::{
    ConfigError, ConfigResult, detect_format, from_str, load_config, load_from_env, load_with_env,
    substitute_env_vars,
};


use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment prefix for configuration overrides (`TOOLBELT__MISSING_FIELDS=substitute`).
pub const ENV_PREFIX: &str = "TOOLBELT";

/// What to do when a payload lacks a field the schema marks as required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFieldPolicy {
    /// Reject the invocation with an error response before the handler runs.
    #[default]
    Reject,
    /// Let the invocation through; the handler substitutes its own fallback.
    Substitute,
}

impl fmt::Display for MissingFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Substitute => write!(f, "substitute"),
        }
    }
}

impl FromStr for MissingFieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "substitute" => Ok(Self::Substitute),
            other => Err(format!("unknown missing-field policy: {other}")),
        }
    }
}

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbeltConfig {
    /// Policy for absent required fields
    pub missing_fields: MissingFieldPolicy,
    /// Fill schema `default` values into the payload before dispatch
    pub apply_defaults: bool,
    /// Default log filter for the binary (overridden by `--verbose`)
    pub log_level: String,
}

impl Default for ToolbeltConfig {
    fn default() -> Self {
        Self {
            missing_fields: MissingFieldPolicy::default(),
            apply_defaults: true,
            log_level: "info".to_string(),
        }
    }
}

impl ToolbeltConfig {
    pub fn with_missing_fields(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_fields = policy;
        self
    }

    pub fn with_apply_defaults(mut self, apply_defaults: bool) -> Self {
        self.apply_defaults = apply_defaults;
        self
    }

    /// Load from a file, then apply `TOOLBELT__*` environment overrides.
    #[cfg(feature = "config")]
    pub fn load(path: &str) -> ConfigResult<Self> {
        load_with_env(path, ENV_PREFIX)
    }

    /// Defaults with `TOOLBELT__*` environment overrides, for runs without a file.
    #[cfg(feature = "config")]
    pub fn from_env() -> ConfigResult<Self> {
        load_from_env(ENV_PREFIX)
    }
}

#[cfg(test)]
mod policy_tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("reject".parse::<MissingFieldPolicy>(), Ok(MissingFieldPolicy::Reject));
        assert_eq!(
            " Substitute ".parse::<MissingFieldPolicy>(),
            Ok(MissingFieldPolicy::Substitute)
        );
        assert!("ignore".parse::<MissingFieldPolicy>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = ToolbeltConfig::default();
        assert_eq!(config.missing_fields, MissingFieldPolicy::Reject);
        assert!(config.apply_defaults);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ToolbeltConfig =
            serde_json::from_str(r#"{ "missing_fields": "substitute" }"#).unwrap();
        assert_eq!(config.missing_fields, MissingFieldPolicy::Substitute);
        assert!(config.apply_defaults);
    }
}
