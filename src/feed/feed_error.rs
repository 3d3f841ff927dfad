use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FeedError {
    Network(String),
    Status(u16, String),
    Csv(String),
    MissingColumn(&'static str),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Network(msg) => write!(f, "Network error: {msg}"),
            FeedError::Status(code, body) => write!(f, "Feed returned HTTP {code}: {body}"),
            FeedError::Csv(msg) => write!(f, "CSV parse error: {msg}"),
            FeedError::MissingColumn(name) => write!(f, "Feed has no {name} column"),
        }
    }
}

impl Error for FeedError {}

impl From<csv::Error> for FeedError {
    fn from(e: csv::Error) -> Self {
        FeedError::Csv(e.to_string())
    }
}
