use thiserror::Error;

/// Failures talking to the listing API.
///
/// The form reports every variant to the user with the same generic
/// notification; the variant only reaches the logs.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Listing API unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Listing API rejected the request with status {status}")]
    Status { status: u16 },

    #[error("Invalid listing API response: {0}")]
    Decode(String),
}

/// Operations the form refuses in its current state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("A submission is already in flight")]
    SubmitInProgress,

    #[error("The listing was already created")]
    AlreadyNavigated,

    #[error("Submit ticket does not belong to the pending submission")]
    StaleTicket,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown condition: {0}")]
    UnknownCondition(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}
