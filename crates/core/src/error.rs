//! Request failure taxonomy and the classifier that produces it.
//!
//! The transport layer never hands raw `reqwest` errors to callers. It first
//! reduces every failed call to a [`FailureOutcome`], and [`classify`] turns
//! that outcome into exactly one [`RequestFailure`].

/// Error returned by every client operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    #[error("The request was not accepted")]
    BadRequest,
    #[error("Request unauthorized")]
    Unauthorized,
    #[error("Request forbidden")]
    Forbidden,
    #[error("Resource not found")]
    NotFound,
    #[error("Backend API had a server internal error")]
    BackendInternal,
    #[error("Unexpected HTTP status code received: {0}")]
    UnexpectedStatusCode(u16),
    #[error(
        "Network error: {}",
        .0.as_deref().unwrap_or("unhandled network error occurred")
    )]
    Network(Option<String>),
    #[error("Unknown request failure")]
    UnknownRequestFailure,
    /// Rejected locally before any request was sent.
    #[error("Unable to login: {0}")]
    LoginFailed(String),
    /// A write was attempted without a logged in session.
    #[error("Missing credentials: no access token attached to the session")]
    MissingCredentials,
}

/// How a network call failed, as observed by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureOutcome {
    /// The server answered with a non-success status.
    Response { status: u16 },
    /// The request went out but nothing came back (timeout, reset, refused).
    NoResponse,
    /// The request could not be built or sent.
    NotSent { message: Option<String> },
    Unknown,
}

/// Maps a failed call to its error kind. Pure and total.
pub fn classify(outcome: &FailureOutcome) -> RequestFailure {
    match outcome {
        FailureOutcome::Response { status } => match status {
            400 => RequestFailure::BadRequest,
            401 => RequestFailure::Unauthorized,
            403 => RequestFailure::Forbidden,
            404 => RequestFailure::NotFound,
            500 => RequestFailure::BackendInternal,
            other => RequestFailure::UnexpectedStatusCode(*other),
        },
        FailureOutcome::NoResponse => RequestFailure::Network(None),
        FailureOutcome::NotSent {
            message: Some(message),
        } => RequestFailure::Network(Some(message.clone())),
        FailureOutcome::NotSent { message: None } | FailureOutcome::Unknown => {
            RequestFailure::UnknownRequestFailure
        }
    }
}

impl From<&reqwest::Error> for FailureOutcome {
    fn from(err: &reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FailureOutcome::Response {
                status: status.as_u16(),
            }
        } else if err.is_timeout() || err.is_connect() || err.is_request() {
            FailureOutcome::NoResponse
        } else if err.is_builder() {
            FailureOutcome::NotSent {
                message: Some(err.to_string()),
            }
        } else {
            // decode, body and redirect failures
            FailureOutcome::Unknown
        }
    }
}

impl From<FailureOutcome> for RequestFailure {
    fn from(outcome: FailureOutcome) -> Self {
        classify(&outcome)
    }
}

impl From<reqwest::Error> for RequestFailure {
    fn from(err: reqwest::Error) -> Self {
        classify(&FailureOutcome::from(&err))
    }
}
