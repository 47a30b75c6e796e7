//! Multi-format configuration loading
//!
//! - Auto-detection of format from file extension
//! - Environment variable substitution (`${VAR}` and `$VAR` syntax)
//! - Environment overrides with a prefix and `__` nesting

use config::{Config as Cfg, Environment, File, FileFormat};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::de::DeserializeOwned;
use std::ffi::OsStr;
use std::path::Path;

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    Parse(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ConfigError> for crate::error::ToolError {
    fn from(err: ConfigError) -> Self {
        crate::error::ToolError::Config(err.to_string())
    }
}

/// Detect configuration format from file extension
///
/// | Extension        | Format |
/// |------------------|--------|
/// | `.yaml`, `.yml`  | YAML   |
/// | `.toml`          | TOML   |
/// | `.json`          | JSON   |
/// | `.ini`           | INI    |
/// | `.ron`           | RON    |
/// | `.json5`         | JSON5  |
pub fn detect_format(path: impl AsRef<Path>) -> ConfigResult<FileFormat> {
    let path = path.as_ref();
    let ext = path.extension().and_then(OsStr::to_str).ok_or_else(|| {
        ConfigError::UnsupportedFormat(format!("{} has no file extension", path.display()))
    })?;

    EXTENSIONS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, format)| *format)
        .ok_or_else(|| ConfigError::UnsupportedFormat(ext.to_string()))
}

const EXTENSIONS: &[(&str, FileFormat)] = &[
    ("yaml", FileFormat::Yaml),
    ("yml", FileFormat::Yaml),
    ("toml", FileFormat::Toml),
    ("json", FileFormat::Json),
    ("ini", FileFormat::Ini),
    ("ron", FileFormat::Ron),
    ("json5", FileFormat::Json5),
];

/// `${NAME}` (group 1) or bare `$NAME` (group 2), compiled once.
static ENV_REFERENCE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*)\b)").ok()
});

/// Substitute environment variables in a string
///
/// Both `${VAR_NAME}` and bare `$VAR_NAME` are expanded in a single pass, so a
/// substituted value is never expanded again. Unset variables are left
/// untouched.
///
/// ```rust,ignore
/// use toolbelt_kernel::config::substitute_env_vars;
///
/// // TOOLBELT_POLICY=substitute
/// let result = substitute_env_vars("missing_fields: ${TOOLBELT_POLICY}");
/// assert_eq!(result, "missing_fields: substitute");
/// ```
pub fn substitute_env_vars(content: &str) -> String {
    let Some(pattern) = ENV_REFERENCE.as_ref() else {
        return content.to_string();
    };

    pattern
        .replace_all(content, |caps: &Captures| {
            let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            std::env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

fn read_substituted(path: &Path) -> ConfigResult<(String, FileFormat)> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    Ok((substitute_env_vars(&content), format))
}

fn deserialize<T: DeserializeOwned>(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> ConfigResult<T> {
    builder
        .build()
        .map_err(|e| ConfigError::Parse(e.to_string()))?
        .try_deserialize()
        .map_err(|e| ConfigError::Serialization(e.to_string()))
}

/// Load configuration from a file
///
/// ```rust,ignore
/// use toolbelt_kernel::config::load_config;
/// use toolbelt_kernel::ToolbeltConfig;
///
/// let config: ToolbeltConfig = load_config("toolbelt.toml")?;
/// ```
pub fn load_config<T>(path: impl AsRef<Path>) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let (content, format) = read_substituted(path.as_ref())?;
    deserialize(Cfg::builder().add_source(File::from_str(&content, format)))
}

/// Load configuration from a string with explicit format
pub fn from_str<T>(content: &str, format: FileFormat) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let content = substitute_env_vars(content);
    deserialize(Cfg::builder().add_source(File::from_str(&content, format)))
}

/// Load configuration with environment variable overrides
///
/// Variables are prefixed and use double underscores for nesting: with prefix
/// `TOOLBELT`, `TOOLBELT__MISSING_FIELDS=substitute` overrides `missing_fields`.
pub fn load_with_env<T>(path: impl AsRef<Path>, env_prefix: &str) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let (content, format) = read_substituted(path.as_ref())?;
    deserialize(
        Cfg::builder()
            .add_source(File::from_str(&content, format))
            .add_source(env_overrides(env_prefix)),
    )
}

/// Load configuration from prefixed environment variables alone
///
/// Used when no configuration file is given; absent keys keep their serde
/// defaults.
pub fn load_from_env<T>(env_prefix: &str) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    deserialize(Cfg::builder().add_source(env_overrides(env_prefix)))
}

fn env_overrides(env_prefix: &str) -> Environment {
    Environment::with_prefix(env_prefix).separator("__")
}
