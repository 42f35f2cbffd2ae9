use crate::core::{Job, Result};
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

/// Drives a [`Job`] on a fixed period. The scheduler owns its job for its
/// whole lifetime; there is no name-based lookup and no state shared between
/// ticks.
pub struct Scheduler<J: Job> {
    job: J,
    period: Duration,
    max_ticks: Option<u64>,
}

impl<J: Job> Scheduler<J> {
    pub fn new(job: J, period: Duration) -> Self {
        Self {
            job,
            period,
            max_ticks: None,
        }
    }

    /// Bound the number of ticks. `None` keeps the timer firing until
    /// shutdown, which is the service default.
    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run the tick loop. Each tick runs to completion before the next one is
    /// awaited; a slow tick delays the following one rather than bursting.
    /// The first job run happens one full period after start.
    ///
    /// A tick error ends the loop and propagates to the caller. The scheduler
    /// defines no retry or recovery policy of its own.
    pub async fn run(&self) -> Result<()> {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // tokio intervals fire immediately; consume the zeroth tick.
        ticker.tick().await;

        let mut completed: u64 = 0;
        loop {
            ticker.tick().await;
            let report = self.job.run_tick().await?;
            completed += 1;
            tracing::debug!(
                fired_at = %report.fired_at,
                tick = completed,
                "tick completed"
            );

            if let Some(max) = self.max_ticks {
                if completed >= max {
                    tracing::info!("tick budget of {} reached, stopping timer", max);
                    return Ok(());
                }
            }
        }
    }

    /// Run the tick loop until Ctrl-C. Shutdown aborts any in-flight tick;
    /// no cleanup is needed since the job holds no resources across calls.
    pub async fn run_until_shutdown(&self) -> Result<()> {
        tokio::select! {
            result = self.run() => result,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown signal received, stopping timer");
                Ok(())
            }
        }
    }
}
