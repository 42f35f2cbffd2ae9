// Adapters layer: concrete implementations of the domain ports that talk to
// the outside world (wall clock, tracing pipeline).

use crate::domain::ports::{Clock, LogSink};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Wall-clock time source used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Log sink backed by the tracing pipeline. The sink name (`healthcheck`,
/// `beanlog`) is attached to every event as a field.
#[derive(Debug, Clone)]
pub struct TracingLogSink {
    name: String,
}

impl TracingLogSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl LogSink for TracingLogSink {
    fn emit(&self, message: &str) -> Result<()> {
        tracing::info!(sink = %self.name, "{}", message);
        Ok(())
    }
}
