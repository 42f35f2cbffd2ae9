use crate::domain::ports::ConfigProvider;
use crate::utils::duration::parse_duration;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_period, validate_positive_number, Validate,
};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "heartbeat-greeter")]
#[command(about = "A small timer-driven greeter service")]
pub struct CliConfig {
    /// Timer period, e.g. "5s", "250ms", "2m"
    #[arg(long, default_value = "1s", value_parser = parse_duration)]
    pub period: Duration,

    /// Stop after this many ticks instead of running until shutdown
    #[arg(long)]
    pub max_ticks: Option<u64>,

    #[arg(long, default_value = "healthcheck")]
    pub job_name: String,

    /// Load settings from a TOML file; flags other than --verbose and
    /// --log-json are ignored when set
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn period(&self) -> Duration {
        self.period
    }

    fn max_ticks(&self) -> Option<u64> {
        self.max_ticks
    }

    fn job_name(&self) -> &str {
        &self.job_name
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_period("period", self.period)?;
        validate_non_empty_string("job_name", &self.job_name)?;
        if let Some(max_ticks) = self.max_ticks {
            validate_positive_number("max_ticks", max_ticks, 1)?;
        }
        Ok(())
    }
}
