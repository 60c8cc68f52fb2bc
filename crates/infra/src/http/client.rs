use std::time::Duration;

use reqwest::{Client as ReqwestClient, Response};
use rolodex_domain::constants::{DEFAULT_HTTP_MAX_ATTEMPTS, DEFAULT_HTTP_TIMEOUT_SECS};
use rolodex_domain::{ContactSourceConfig, Result, RolodexError};
use tracing::{debug, warn};
use url::Url;

use crate::errors::InfraError;

const USER_AGENT: &str = concat!("rolodex/", env!("CARGO_PKG_VERSION"));

/// Backoff stops growing after this many doublings.
const MAX_BACKOFF_DOUBLINGS: u32 = 6;

/// GET-only HTTP client for the contact source.
///
/// Every request is body-less, so each attempt is built fresh from the URL.
/// A call succeeds only on a 2xx response. Connect failures, timeouts and
/// 5xx responses are retried with exponential backoff until `max_attempts`
/// is spent; any other status fails on the first attempt.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: u32,
    base_backoff: Duration,
}

/// Outcome of a single attempt
enum Attempt {
    Success(Response),
    Transient(RolodexError),
    Fatal(RolodexError),
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client with default timeout and attempt budget.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Client tuned by the contact source settings.
    pub fn from_config(config: &ContactSourceConfig) -> Result<Self> {
        Self::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .max_attempts(config.max_attempts)
            .build()
    }

    /// Total attempts per call, including the first
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Fetch `url`, retrying transient failures.
    ///
    /// # Errors
    /// `Network` for transport failures and non-2xx statuses, formatted as
    /// `HTTP error! status: N`. The error of the last attempt is returned.
    pub async fn get(&self, url: &Url) -> Result<Response> {
        let mut attempt = 1;
        loop {
            match self.attempt(url, attempt).await {
                Attempt::Success(response) => return Ok(response),
                Attempt::Transient(err) if attempt < self.max_attempts => {
                    let delay = self.backoff_delay(attempt);
                    warn!(
                        endpoint = %url,
                        attempt,
                        retry_in_ms = delay.as_millis() as u64,
                        error = %err,
                        "contact source request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Attempt::Transient(err) | Attempt::Fatal(err) => return Err(err),
            }
        }
    }

    async fn attempt(&self, url: &Url, attempt: u32) -> Attempt {
        debug!(endpoint = %url, attempt, "requesting contacts");

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(err) => {
                let transient = is_transport_failure(&err);
                let error = RolodexError::from(InfraError::from(err));
                return if transient { Attempt::Transient(error) } else { Attempt::Fatal(error) };
            }
        };

        let status = response.status();
        if status.is_success() {
            return Attempt::Success(response);
        }

        let error = RolodexError::Network(format!("HTTP error! status: {}", status.as_u16()));
        if status.is_server_error() {
            Attempt::Transient(error)
        } else {
            Attempt::Fatal(error)
        }
    }

    /// Delay before retry number `attempt` (1-based): base, 2x base, 4x base, ...
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let doublings = attempt.saturating_sub(1).min(MAX_BACKOFF_DOUBLINGS);
        self.base_backoff * 2u32.pow(doublings)
    }
}

fn is_transport_failure(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: u32,
    base_backoff: Duration,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            max_attempts: DEFAULT_HTTP_MAX_ATTEMPTS,
            base_backoff: Duration::from_millis(200),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl HttpClientBuilder {
    /// Per-attempt timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total attempts per call; zero is raised to one.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Delay before the first retry
    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .no_proxy()
            .build()
            .map_err(|err| RolodexError::from(InfraError::from(err)))?;

        Ok(HttpClient {
            client,
            max_attempts: self.max_attempts.max(1),
            base_backoff: self.base_backoff,
        })
    }
}
