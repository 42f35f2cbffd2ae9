use crate::domain::ports::ConfigProvider;
use crate::utils::error::{HeartbeatError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_period, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: JobConfig,
    pub logging: Option<LoggingConfig>,
    pub limits: Option<LimitsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "crate::utils::duration::serde_duration")]
    pub period: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub timer_target: Option<String>,
    pub bean_target: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_ticks: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HeartbeatError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HeartbeatError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment values. Unset
    /// variables are left as-is so parsing reports the literal placeholder.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("job.name", &self.job.name)?;
        validate_period("job.period", self.job.period)?;

        if let Some(logging) = &self.logging {
            if let Some(timer_target) = &logging.timer_target {
                validate_non_empty_string("logging.timer_target", timer_target)?;
            }
            if let Some(bean_target) = &logging.bean_target {
                validate_non_empty_string("logging.bean_target", bean_target)?;
            }
        }

        if let Some(max_ticks) = self.max_ticks() {
            validate_positive_number("limits.max_ticks", max_ticks, 1)?;
        }

        Ok(())
    }

    pub fn timer_target(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.timer_target.as_deref())
            .unwrap_or("healthcheck")
    }

    pub fn bean_target(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.bean_target.as_deref())
            .unwrap_or("beanlog")
    }
}

impl ConfigProvider for TomlConfig {
    fn period(&self) -> Duration {
        self.job.period
    }

    fn max_ticks(&self) -> Option<u64> {
        self.limits.as_ref().and_then(|l| l.max_ticks)
    }

    fn job_name(&self) -> &str {
        &self.job.name
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[job]
name = "healthcheck"
description = "Periodic greeter heartbeat"
period = "5s"

[logging]
timer_target = "healthcheck"
bean_target = "beanlog"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.job_name(), "healthcheck");
        assert_eq!(config.period(), Duration::from_secs(5));
        assert_eq!(config.timer_target(), "healthcheck");
        assert_eq!(config.bean_target(), "beanlog");
        assert!(config.max_ticks().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_section_is_optional() {
        let toml_content = r#"
[job]
name = "healthcheck"
period = "250ms"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.period(), Duration::from_millis(250));
        assert_eq!(config.timer_target(), "healthcheck");
        assert_eq!(config.bean_target(), "beanlog");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_HEARTBEAT_PERIOD", "2m");

        let toml_content = r#"
[job]
name = "healthcheck"
period = "${TEST_HEARTBEAT_PERIOD}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.period(), Duration::from_secs(120));

        std::env::remove_var("TEST_HEARTBEAT_PERIOD");
    }

    #[test]
    fn test_unset_env_var_fails_parsing() {
        let toml_content = r#"
[job]
name = "healthcheck"
period = "${HEARTBEAT_UNSET_VARIABLE}"
"#;

        assert!(TomlConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_zero_period_fails_validation() {
        let toml_content = r#"
[job]
name = "healthcheck"
period = "0s"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_ticks_fails_validation() {
        let toml_content = r#"
[job]
name = "healthcheck"
period = "5s"

[limits]
max_ticks = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serializes_period_as_human_duration() {
        let config = TomlConfig::from_toml_str(
            r#"
[job]
name = "healthcheck"
period = "5s"
"#,
        )
        .unwrap();

        let rendered = toml::to_string(&config).unwrap();
        assert!(rendered.contains(r#"period = "5s""#));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[job]
name = "file-test"
period = "10s"

[limits]
max_ticks = 3
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.job_name(), "file-test");
        assert_eq!(config.max_ticks(), Some(3));
    }
}
