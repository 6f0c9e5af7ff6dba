use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl ApiError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        let message = message.into();
        log::debug!("rejected argument: {message}");
        Self::InvalidArgument(message)
    }
}
