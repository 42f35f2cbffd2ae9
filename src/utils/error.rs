use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeartbeatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Log sink '{sink}' failed: {message}")]
    SinkError { sink: String, message: String },
}

pub type Result<T> = std::result::Result<T, HeartbeatError>;
