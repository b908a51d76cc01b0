use thiserror::Error;

/// Failure of a single backend call.
///
/// The three cases the client distinguishes: the request never completed,
/// the backend answered with a non-success status, or it answered 2xx but
/// flagged the operation as unsuccessful in the payload. Callers collapse
/// all of them into the same user-facing path, so no machine-readable codes
/// are carried beyond what is useful for logging.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP status {0}")]
    Status(u16),

    #[error("backend rejected the {0} request")]
    Rejected(&'static str),

    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Rejected preferences form submission. No state change and no network
/// call happens when the form does not parse.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("invalid value {value:?} for {field}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl FormError {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        FormError::InvalidNumber {
            field,
            value: value.to_string(),
        }
    }
}
