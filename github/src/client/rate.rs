use crate::client::{HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};
use serde::Deserialize;

/// Rate limit state reported in the headers of every API response.
///
/// Unauthenticated requests are limited to 60 per hour.
///
/// GitHub API docs: https://developer.github.com/v3/#rate-limiting
#[derive(Debug, Default, Deserialize)]
pub struct Rate {
    pub limit: usize,
    pub remaining: usize,
    /// UTC epoch seconds at which the current window resets
    pub reset: u64,
}

impl Rate {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        fn header<T: std::str::FromStr>(
            headers: &reqwest::header::HeaderMap,
            name: &str,
        ) -> Option<T> {
            headers
                .get(name)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse().ok())
        }

        let mut rate = Self::default();

        if let Some(limit) = header(headers, HEADER_RATE_LIMIT) {
            rate.limit = limit;
        }

        if let Some(remaining) = header(headers, HEADER_RATE_REMAINING) {
            rate.remaining = remaining;
        }

        if let Some(reset) = header(headers, HEADER_RATE_RESET) {
            rate.reset = reset;
        }

        rate
    }
}
