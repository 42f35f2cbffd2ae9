use crate::core::{Clock, Greeter, Job, LogSink, Result, TickReport};
use async_trait::async_trait;
use chrono::SecondsFormat;

/// The three-step tick pipeline: build the timestamped message, log it, run
/// it through the greeter, log the result.
///
/// Two distinct sinks, one for the timer message and one for the greeting.
/// The greeter receives the whole message body as its `name` argument, not a
/// separate name field.
pub struct GreeterTickJob<C, G, S> {
    clock: C,
    greeter: G,
    timer_sink: S,
    bean_sink: S,
}

impl<C: Clock, G: Greeter, S: LogSink> GreeterTickJob<C, G, S> {
    pub fn new(clock: C, greeter: G, timer_sink: S, bean_sink: S) -> Self {
        Self {
            clock,
            greeter,
            timer_sink,
            bean_sink,
        }
    }
}

#[async_trait]
impl<C: Clock, G: Greeter, S: LogSink> Job for GreeterTickJob<C, G, S> {
    async fn run_tick(&self) -> Result<TickReport> {
        let fired_at = self.clock.now();
        let body = format!(
            "Hello from timer at {}",
            fired_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        );

        self.timer_sink.emit(&body)?;

        let greeting = self.greeter.hello(&body);
        self.bean_sink.emit(&greeting)?;

        Ok(TickReport {
            fired_at,
            body,
            greeting,
        })
    }
}
