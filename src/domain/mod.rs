// Domain layer: core models and ports (interfaces). No framework types leak in
// here beyond chrono timestamps and the async trait for the job port.

pub mod model;
pub mod ports;
