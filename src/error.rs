use thiserror::Error;

#[derive(Error, Debug)]
pub enum WynnError {
    #[error("Invalid parameters provided: {0}")]
    InvalidParameters(String),

    #[error("Parameter {0} is required")]
    MissingParameter(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl WynnError {
    /// True for errors raised before any request was sent.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            WynnError::InvalidParameters(_) | WynnError::MissingParameter(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WynnError>;
