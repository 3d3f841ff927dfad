// fetcher.rs
use crate::feed::FeedError;
use rand::Rng;
use reqwest::blocking::Client;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("codlocal-dashboard/", env!("CARGO_PKG_VERSION"));

const MAX_BACKOFF_SECS: u64 = 10;
const JITTER_MAX_MILLIS: u64 = 1500;

/// Where the raw CSV text comes from.
pub trait FeedSource: Send + Sync {
    fn fetch(&self) -> Result<String, FeedError>;
}

/// Downloads the published sheet over HTTP.
pub struct FeedClient {
    client: Client,
    url: String,
    max_attempts: u32,
}

impl FeedClient {
    pub fn new(url: impl Into<String>, max_attempts: u32) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            max_attempts: max_attempts.max(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn try_fetch(&self) -> Result<String, FeedError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        if !status.is_success() {
            let snippet: String = text.chars().take(200).collect();
            return Err(FeedError::Status(status.as_u16(), snippet));
        }

        Ok(text)
    }
}

impl FeedSource for FeedClient {
    fn fetch(&self) -> Result<String, FeedError> {
        let mut last_err = None;

        for attempt in 1..=self.max_attempts {
            let start = Instant::now();

            match self.try_fetch() {
                Ok(text) => {
                    log::info!(
                        "Feed fetched on attempt {attempt} in {:?} ({} bytes)",
                        start.elapsed(),
                        text.len()
                    );
                    return Ok(text);
                }
                Err(e) => {
                    log::warn!(
                        "Feed attempt {attempt}/{} failed in {:?}: {e}",
                        self.max_attempts,
                        start.elapsed()
                    );
                    last_err = Some(e);

                    if attempt < self.max_attempts {
                        let base = std::cmp::min(2 * u64::from(attempt), MAX_BACKOFF_SECS);
                        let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_MILLIS);
                        std::thread::sleep(
                            Duration::from_secs(base) + Duration::from_millis(jitter),
                        );
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| FeedError::Network("feed retry loop failed".into())))
    }
}
