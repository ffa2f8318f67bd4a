use crate::{ConfigError, ValidationMode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ISSUES: usize = 1000;

/// Validator settings, loadable from YAML.
///
/// ```yaml
/// mode: exhaustive
/// max_issues: 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub mode: ValidationMode,
    pub max_issues: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::FailFast,
            max_issues: DEFAULT_MAX_ISSUES,
        }
    }
}

impl ValidatorConfig {
    pub fn fail_fast() -> Self {
        Self::default()
    }

    pub fn exhaustive() -> Self {
        Self {
            mode: ValidationMode::Exhaustive,
            ..Self::default()
        }
    }

    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::default()
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the settings are usable.
    pub fn compile(&self) -> Result<ValidationPlan, ConfigError> {
        if self.max_issues == 0 {
            return Err(ConfigError::InvalidConfig(
                "max_issues must be at least 1".to_string(),
            ));
        }
        Ok(ValidationPlan {
            mode: self.mode,
            max_issues: self.max_issues,
        })
    }
}

/// Checked settings a [`crate::Validator`] runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPlan {
    pub mode: ValidationMode,
    pub max_issues: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorConfigBuilder {
    config: ValidatorConfig,
}

impl ValidatorConfigBuilder {
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.config.mode = if fail_fast {
            ValidationMode::FailFast
        } else {
            ValidationMode::Exhaustive
        };
        self
    }

    pub fn max_issues(mut self, max_issues: usize) -> Self {
        self.config.max_issues = max_issues;
        self
    }

    pub fn build(self) -> ValidatorConfig {
        self.config
    }
}
