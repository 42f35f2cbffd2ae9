use crate::domain::model::TickReport;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Time source for the tick job. Injected so tests can pin the fired
/// timestamp instead of reading the wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Pure greeting transformation. Total over every input string, including the
/// empty string; no side effects, no failure path.
pub trait Greeter: Send + Sync {
    fn hello(&self, name: &str) -> String;
}

/// Best-effort informational output channel. The production sink writes to
/// the tracing pipeline and never fails; test doubles may return errors to
/// exercise propagation.
pub trait LogSink: Send + Sync {
    fn emit(&self, message: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn period(&self) -> Duration;
    fn max_ticks(&self) -> Option<u64>;
    fn job_name(&self) -> &str;
}

/// The unit of work the scheduler drives once per tick. A failed tick is not
/// retried here; the error propagates to whoever runs the scheduler.
#[async_trait]
pub trait Job: Send + Sync {
    async fn run_tick(&self) -> Result<TickReport>;
}
