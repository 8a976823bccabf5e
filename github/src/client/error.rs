//! Error type for Github Client

use serde::Deserialize;
use std::{borrow::Cow, fmt};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("`{0}`")]
    Message(Cow<'static, str>),

    #[error("`{0}` {1}")]
    GithubClientError(reqwest::StatusCode, GithubClientError),

    #[error("RateLimit")]
    RateLimit,
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

// Github Error Responses
// https://developer.github.com/v3/#client-errors
#[derive(Debug, Deserialize)]
pub struct GithubClientError {
    pub message: Option<String>,
    pub errors: Option<Vec<GithubClientErrorType>>,
    pub documentation_url: Option<String>,
}

impl fmt::Display for GithubClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str("unknown error"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GithubClientErrorType {
    Message(String),
    Code {
        resource: String,
        field: String,
        code: String,
    },
}

#[cfg(test)]
mod test {
    use super::{Error, GithubClientError};
    use reqwest::StatusCode;

    #[test]
    fn not_found_payload() {
        const NOT_FOUND_JSON: &str = r#"
            {
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest/commits/commits#compare-two-commits"
            }
        "#;

        let payload: GithubClientError = serde_json::from_str(NOT_FOUND_JSON).unwrap();
        let error = Error::GithubClientError(StatusCode::NOT_FOUND, payload);
        assert_eq!(error.to_string(), "`404 Not Found` Not Found");
    }
}
