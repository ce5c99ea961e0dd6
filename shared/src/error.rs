use thiserror::Error;

/// Submission refused locally; no request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejected {
    #[error("Unsupported file type: {0}. Please choose a PNG or JPEG image.")]
    UnsupportedType(String),
    #[error("No file selected for analysis.")]
    NoFileSelected,
    #[error("An analysis is already in progress.")]
    RequestInFlight,
}

/// The analysis request did not produce a usable result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    InvalidBody(String),
}

/// The Results View could not recover a result to display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    #[error("no result parameter present")]
    Missing,
    #[error("result handle is unknown or was already consumed")]
    UnknownHandle,
    #[error("result parameter is not valid percent-encoding: {0}")]
    InvalidEncoding(String),
    #[error("result parameter is not a valid analysis result: {0}")]
    InvalidJson(String),
}
