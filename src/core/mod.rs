pub mod greeter;
pub mod job;
pub mod scheduler;

pub use crate::domain::model::TickReport;
pub use crate::domain::ports::{Clock, ConfigProvider, Greeter, Job, LogSink};
pub use crate::utils::error::Result;
