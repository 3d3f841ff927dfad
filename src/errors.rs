use crate::feed::FeedError;
use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing records, etc.) or the sheet feed.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Feed(FeedError),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Feed(_) => 502,
            ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Feed(e) => write!(f, "Feed Error: {e}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Feed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FeedError> for ServerError {
    fn from(e: FeedError) -> Self {
        ServerError::Feed(e)
    }
}
