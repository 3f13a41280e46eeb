use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// What a problem constructor does when auxiliary data is missing or too
/// short. This is an explicit configuration decision, never a hidden default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingDataPolicy {
    /// Refuse to construct the problem.
    #[default]
    Fail,
    /// Construct with the affected transform disabled.
    IdentityFallback,
}

/// Evaluation configuration shared by the problem factories.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvalConfig {
    /// Directory holding one `<version tag>` subdirectory per suite.
    pub data_root: PathBuf,
    #[serde(default)]
    pub missing_data: MissingDataPolicy,
    #[serde(default = "default_apply_bias")]
    pub apply_bias: bool,
}

fn default_apply_bias() -> bool {
    true
}

impl EvalConfig {
    pub fn builder() -> EvalConfigBuilder {
        EvalConfigBuilder::default()
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

#[derive(Debug, Default)]
pub struct EvalConfigBuilder {
    data_root: Option<PathBuf>,
    missing_data: Option<MissingDataPolicy>,
    apply_bias: Option<bool>,
}

impl EvalConfigBuilder {
    pub fn data_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_root = Some(path.into());
        self
    }

    pub fn missing_data(mut self, policy: MissingDataPolicy) -> Self {
        self.missing_data = Some(policy);
        self
    }

    pub fn apply_bias(mut self, apply: bool) -> Self {
        self.apply_bias = Some(apply);
        self
    }

    pub fn build(self) -> Result<EvalConfig, ConfigError> {
        Ok(EvalConfig {
            data_root: self
                .data_root
                .ok_or(ConfigError::MissingParameter("data_root"))?,
            missing_data: self.missing_data.unwrap_or_default(),
            apply_bias: self.apply_bias.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builder_fills_defaults() {
        let config = EvalConfig::builder().data_root("/data").build().unwrap();
        assert_eq!(config.data_root, PathBuf::from("/data"));
        assert_eq!(config.missing_data, MissingDataPolicy::Fail);
        assert!(config.apply_bias);
    }

    #[test]
    fn builder_requires_a_data_root() {
        let result = EvalConfig::builder().apply_bias(false).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("data_root"))
        ));
    }

    #[test]
    fn from_toml_file_parses_a_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eval.toml");
        fs::write(
            &path,
            r#"
            data_root = "/bench/data"
            missing-data = "identity-fallback"
            apply_bias = false
            "#,
        )
        .unwrap();

        // serde field names are snake_case; kebab-case only applies to the
        // policy variants.
        let result = EvalConfig::from_toml_file(&path);
        assert!(matches!(result, Err(ConfigError::Toml { .. })));

        fs::write(
            &path,
            r#"
            data_root = "/bench/data"
            missing_data = "identity-fallback"
            apply_bias = false
            "#,
        )
        .unwrap();
        let config = EvalConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.missing_data, MissingDataPolicy::IdentityFallback);
        assert!(!config.apply_bias);
    }

    #[test]
    fn from_toml_file_defaults_optional_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eval.toml");
        fs::write(&path, r#"data_root = "/bench/data""#).unwrap();

        let config = EvalConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.missing_data, MissingDataPolicy::Fail);
        assert!(config.apply_bias);
    }

    #[test]
    fn from_toml_file_reports_missing_files() {
        let dir = tempdir().unwrap();
        let result = EvalConfig::from_toml_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
