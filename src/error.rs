//! Error types for the Pushover notifier

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", missing_credentials(.user, .token))]
    MissingCredentials { user: bool, token: bool },

    #[error("Invalid sound name: {0}")]
    InvalidSound(String),

    #[error("URL title provided but no URL given")]
    OrphanedUrlTitle,

    #[error("Invalid priority given: {0} (expected -2, -1, 1 or 2)")]
    InvalidPriority(i64),

    #[error("No message provided")]
    NoMessage,

    #[error("Too many arguments: expected a single message, got {0}")]
    TooManyArguments(usize),

    #[error("Error reading message: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Error sending POST request to Pushover: {0}")]
    TransportError(String),

    #[error("Unexpected response from Pushover: {0}")]
    MalformedResponse(String),

    #[error(
        "Error sending message, are your application and user tokens correct? \
         (HTTP {status}) Received data: {body}"
    )]
    ApiError {
        status: u16,
        body: String,
        errors: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

fn missing_credentials(user: &bool, token: &bool) -> &'static str {
    match (*user, *token) {
        (true, true) => "No user provided\nNo application token provided",
        (true, false) => "No user provided",
        _ => "No application token provided",
    }
}

impl Error {
    /// True for errors raised before any network call was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingCredentials { .. }
                | Error::InvalidSound(_)
                | Error::OrphanedUrlTitle
                | Error::InvalidPriority(_)
                | Error::NoMessage
                | Error::TooManyArguments(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::TransportError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}
