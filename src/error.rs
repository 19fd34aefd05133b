use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[cfg(windows)]
    #[error("failed to enumerate windows: {0}")]
    Windows(#[from] windows::core::Error),

    #[cfg(not(windows))]
    #[error("reading class names from the OS is only supported on Windows, use --dry-run")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, Error>;
