use thiserror::Error;

/// Failure of a single GET against the activity API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("{0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl LoadError {
    /// Maps a response status to an error when it is outside 2xx.
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Self::Status(status))
        }
    }
}

/// Rejected frequency input; no request is issued for these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrequencyInputError {
    #[error("Please enter a frequency in kHz.")]
    Empty,
    #[error("\"{0}\" is not a valid frequency.")]
    NotANumber(String),
    #[error("Frequency must be greater than zero.")]
    NotPositive,
    #[error("{0} kHz is outside the range that can be looked up.")]
    OutOfRange(String),
}
