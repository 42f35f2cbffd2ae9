pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::{SystemClock, TracingLogSink};
pub use core::{greeter::NamedGreeter, job::GreeterTickJob, scheduler::Scheduler};
pub use utils::error::{HeartbeatError, Result};
