use log::debug;
use reqwest::{header, Client as ReqwestClient, Method, RequestBuilder, StatusCode};

mod error;
mod pagination;
mod rate;
mod repos;

pub use error::{Error, GithubClientError, Result};
pub use pagination::{Pagination, PaginationOptions};
pub use rate::Rate;
pub use repos::RepositoryClient;

// Constants
const DEFAULT_BASE_URL: &str = "https://api.github.com/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const HEADER_LINK: &str = "Link";
const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_RESET: &str = "X-RateLimit-Reset";

const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";

/// A successful response from Github along with the paging and rate limit information that came
/// with it.
#[derive(Debug)]
pub struct Response<T> {
    pagination: Pagination,
    rate: Rate,
    body: T,
}

impl<T> Response<T> {
    pub fn new(pagination: Pagination, rate: Rate, body: T) -> Self {
        Self {
            pagination,
            rate,
            body,
        }
    }

    pub fn into_parts(self) -> (Pagination, Rate, T) {
        (self.pagination, self.rate, self.body)
    }
}

#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self { base_url: None }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(MEDIA_TYPE_V3));

        let client = ReqwestClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Client { base_url, client })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Client {
    /// Base URL to use for API requests. Defaults to the public GitHub API,
    /// but can be overridden for use with GitHub Enterprise. Always
    /// terminated with a trailing slash.
    base_url: String,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, url);
        self.client.request(method, &url)
    }

    // Process a response recieved from Github. This checks for things like hitting rate limits,
    // etc., and then deserializes the json response.
    async fn json<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<T>> {
        debug!("Github Response: {:#?}", response);

        let status = response.status();
        let pagination = Pagination::from_headers(response.headers());
        let rate = Rate::from_headers(response.headers());

        if !status.is_success() {
            // Github answers with either status once the rate limit is exhausted
            let limited = matches!(status, StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS);
            if limited && rate.limit > 0 && rate.remaining == 0 {
                return Err(Error::RateLimit);
            }

            let payload = response.text().await?;
            return match serde_json::from_str::<GithubClientError>(&payload) {
                Ok(client_error) => Err(Error::GithubClientError(status, client_error)),
                Err(_) => Err(format!("Request failed: {}: {}", status, payload).into()),
            };
        }

        let payload = response.text().await?;
        let body = serde_json::from_str(&payload)?;

        Ok(Response::new(pagination, rate, body))
    }

    pub fn repos(&self) -> RepositoryClient<'_> {
        RepositoryClient::new(self)
    }
}
