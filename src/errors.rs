//! Errors for this crate.
//! About anyhow: see https://github.com/TrueLayer/reqwest-middleware/issues/119

use crate::types::OrganizationId;
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum InvalidContext {
    #[error("Context must not be empty")]
    Empty,

    #[error("Context \"{0}\" is not a valid host name label")]
    Label(String),
}

/// Errors representing failed interactions with the Nomalab API.
#[derive(thiserror::Error, Debug)]
pub enum NomalabError {
    /// The server answered 409: the deliverable already exists at its destination.
    #[error("This deliverable has already been delivered")]
    AlreadyPresentDeliverable,

    /// Error response from the API.
    #[error("{message} ({status:?} {reason:?}): {text}")]
    Request {
        message: String,
        status: StatusCode,
        reason: &'static str,
        text: String,
    },

    /// The `users/switch` request was rejected.
    #[error("Can't switch to organization {organization} ({status:?} {reason:?}): {text}")]
    Switch {
        organization: OrganizationId,
        status: StatusCode,
        reason: &'static str,
        text: String,
    },

    /// Strict handshake: the switch response did not set a session cookie.
    #[error("No cookie: switching to organization {0} did not return a session")]
    NoSessionCookie(OrganizationId),

    /// The session token can't be sent as an HTTP header.
    #[error(transparent)]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// Request body could not be encoded, or response body could not be decoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error without a response from the API (badness 100000).
    #[error(transparent)]
    Raw(#[from] reqwest::Error),

    /// Error from reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),
}

impl NomalabError {
    /// Whether this is the 409 conflict returned by delivery endpoints.
    pub fn is_already_present(&self) -> bool {
        matches!(self, NomalabError::AlreadyPresentDeliverable)
    }
}

impl From<reqwest_middleware::Error> for NomalabError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => NomalabError::Middleware(e),
            reqwest_middleware::Error::Reqwest(e) => NomalabError::Raw(e),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GetError {
    #[error(transparent)]
    Nomalab(#[from] NomalabError),

    /// Error when trying to find an object in a collection but it is not there.
    #[error("{0} not found")]
    NotFound(String),
}

/// Errors from [crate::NomalabClientBuilder::build].
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("No context nor embedding base URL was given, can't resolve the API origin")]
    MissingOrigin,

    #[error(transparent)]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

pub(crate) async fn check(
    res: reqwest::Response,
    message: impl Into<String>,
) -> Result<reqwest::Response, NomalabError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    if status == StatusCode::CONFLICT {
        return Err(NomalabError::AlreadyPresentDeliverable);
    }
    let reason = status.canonical_reason().unwrap_or("unknown reason");
    let text = res.text().await?;
    Err(NomalabError::Request {
        message: message.into(),
        status,
        reason,
        text,
    })
}
