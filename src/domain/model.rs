use chrono::{DateTime, Utc};

/// Everything produced by a single firing of the timer. Nothing here outlives
/// the tick that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub fired_at: DateTime<Utc>,
    pub body: String,
    pub greeting: String,
}
