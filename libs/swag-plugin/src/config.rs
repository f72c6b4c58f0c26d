//! Layered configuration for the plugin and the document metadata.
//!
//! Sources, lowest to highest precedence:
//!
//! 1. built-in defaults
//! 2. an optional YAML file
//! 3. `SWAG__` prefixed environment variables, `__` separating nested keys
//!    (`SWAG__PLUGIN__ACCEPT_LANGUAGE=true`, `SWAG__INFO__TITLE=Orders`)

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize};
use swag_gen::OpenApiInfo;

use crate::constants::DEFAULT_ACCEPT_LANGUAGE;

pub const ENV_PREFIX: &str = "SWAG__";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid configuration: {0}")]
    Invalid(#[source] Box<figment::Error>),
}

/// Plugin toggles, one per filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub accept_language: bool,
    pub accept_language_default: String,
    pub camel_case_parameters: bool,
    pub auto_crud_documentation: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            accept_language: false,
            accept_language_default: DEFAULT_ACCEPT_LANGUAGE.to_owned(),
            camel_case_parameters: false,
            auto_crud_documentation: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwagConfig {
    pub info: OpenApiInfo,
    pub plugin: PluginConfig,
}

impl SwagConfig {
    /// Provider stack without extraction, for callers merging their own sources.
    ///
    /// # Errors
    /// Returns [`ConfigError::NotFound`] when `path` is given but is not a file.
    pub fn figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            tracing::debug!(path = %path.display(), "Merging YAML configuration");
            figment = figment.merge(Yaml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load defaults, then `path` (if any), then the environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::NotFound`] for a missing file and
    /// [`ConfigError::Invalid`] when a source does not deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(path)?)
    }

    /// # Errors
    /// Returns [`ConfigError::Invalid`] when the merged sources do not deserialize.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))?;

        tracing::debug!(
            title = %config.info.title,
            accept_language = config.plugin.accept_language,
            camel_case_parameters = config.plugin.camel_case_parameters,
            auto_crud_documentation = config.plugin.auto_crud_documentation,
            "Loaded swag configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_crud_documentation_only() {
        let config = PluginConfig::default();
        assert!(config.auto_crud_documentation);
        assert!(!config.accept_language);
        assert!(!config.camel_case_parameters);
        assert_eq!(config.accept_language_default, "nl-NL");
    }

    #[test]
    fn missing_file_is_reported() {
        let err = SwagConfig::load(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn serialized_override_wins_over_defaults() {
        let figment = Figment::new()
            .merge(Serialized::defaults(SwagConfig::default()))
            .merge(Serialized::default("plugin.camel_case_parameters", true));

        let config = SwagConfig::from_figment(&figment).unwrap();
        assert!(config.plugin.camel_case_parameters);
        assert_eq!(config.info, OpenApiInfo::default());
    }

    #[test]
    fn wrong_type_is_invalid() {
        let figment = Figment::new()
            .merge(Serialized::defaults(SwagConfig::default()))
            .merge(Serialized::default("plugin.accept_language", "sometimes"));

        let err = SwagConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
