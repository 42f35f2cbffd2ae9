use crate::utils::error::{HeartbeatError, Result};
use std::time::Duration;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A day-long period is almost certainly a unit mistake in this service.
const MAX_PERIOD: Duration = Duration::from_secs(24 * 3600);

pub fn validate_period(field_name: &str, period: Duration) -> Result<()> {
    if period.is_zero() {
        return Err(HeartbeatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "0".to_string(),
            reason: "Period must be greater than zero".to_string(),
        });
    }

    if period > MAX_PERIOD {
        return Err(HeartbeatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", period),
            reason: "Period must be at most 24h".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(HeartbeatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HeartbeatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
