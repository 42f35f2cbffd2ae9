use crate::utils::error::{HeartbeatError, Result};
use std::time::Duration;

/// Parse a human-readable duration: `"5s"`, `"250ms"`, `"2m"`, `"1h"`, or a
/// bare number of seconds.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let trimmed = s.trim();

    let parsed = if let Some(ms) = trimmed.strip_suffix("ms") {
        ms.trim().parse::<u64>().ok().map(Duration::from_millis)
    } else if let Some(secs) = trimmed.strip_suffix('s') {
        secs.trim().parse::<u64>().ok().map(Duration::from_secs)
    } else if let Some(mins) = trimmed.strip_suffix('m') {
        mins.trim()
            .parse::<u64>()
            .ok()
            .and_then(|m| m.checked_mul(60))
            .map(Duration::from_secs)
    } else if let Some(hours) = trimmed.strip_suffix('h') {
        hours
            .trim()
            .parse::<u64>()
            .ok()
            .and_then(|h| h.checked_mul(3600))
            .map(Duration::from_secs)
    } else {
        trimmed.parse::<u64>().ok().map(Duration::from_secs)
    };

    parsed.ok_or_else(|| HeartbeatError::InvalidConfigValueError {
        field: "period".to_string(),
        value: s.to_string(),
        reason: "expected a duration like '5s', '250ms', '2m', '1h' or plain seconds".to_string(),
    })
}

pub fn format_duration(duration: &Duration) -> String {
    if duration.subsec_millis() > 0 {
        format!("{}ms", duration.as_millis())
    } else {
        format!("{}s", duration.as_secs())
    }
}

/// Serde helper so TOML configs can say `period = "5s"`.
pub mod serde_duration {
    use super::{format_duration, parse_duration};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_duration(duration))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s).map_err(serde::de::Error::custom)
    }
}
