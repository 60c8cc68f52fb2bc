//! Random-user API adapter for the `ContactSource` port
//!
//! `GET {base_url}/api/?results={count}`. Every call is a fresh fetch.

use async_trait::async_trait;
use rolodex_core::ContactSource;
use rolodex_domain::{
    Contact, ContactName, ContactPicture, ContactSourceConfig, Result, RolodexError,
};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    results: Vec<RandomUserResult>,
}

#[derive(Debug, Deserialize)]
struct RandomUserResult {
    login: RandomUserLogin,
    name: ContactName,
    email: String,
    phone: String,
    #[serde(default)]
    picture: ContactPicture,
}

#[derive(Debug, Deserialize)]
struct RandomUserLogin {
    uuid: String,
}

impl From<RandomUserResult> for Contact {
    fn from(result: RandomUserResult) -> Self {
        Contact {
            id: result.login.uuid,
            name: result.name,
            email: result.email,
            phone: result.phone,
            picture: result.picture,
        }
    }
}

/// Contact source backed by the random-user generator API
#[derive(Clone)]
pub struct RandomUserClient {
    http: HttpClient,
    endpoint: Url,
}

impl RandomUserClient {
    /// # Errors
    /// `Config` when `base_url` is not an absolute http(s) URL.
    pub fn new(http: HttpClient, base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url).map_err(|err| {
            RolodexError::Config(format!("invalid contacts base URL '{base_url}': {err}"))
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(RolodexError::Config(format!(
                "contacts base URL must use http or https, got '{}'",
                base.scheme()
            )));
        }

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let endpoint = base
            .join("api/")
            .map_err(|err| RolodexError::Config(format!("invalid contacts base URL: {err}")))?;

        Ok(Self { http, endpoint })
    }

    /// Client for `config.base_url` with the configured timeout and retries
    pub fn from_config(config: &ContactSourceConfig) -> Result<Self> {
        Self::new(HttpClient::from_config(config)?, &config.base_url)
    }

    /// Full endpoint URL for a batch of `count` contacts
    pub fn endpoint(&self, count: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("results", &count.to_string());
        url
    }
}

#[async_trait]
impl ContactSource for RandomUserClient {
    async fn fetch_contacts(&self, count: u32) -> Result<Vec<Contact>> {
        let url = self.endpoint(count);
        let response = self.http.get(&url).await.inspect_err(|err| {
            warn!(endpoint = %url, requested = count, error = %err, "contact fetch failed");
        })?;

        let body: RandomUserResponse = response.json().await.map_err(|err| {
            RolodexError::Network(format!("invalid response from contact source: {err}"))
        })?;

        debug!(requested = count, received = body.results.len(), "decoded contact batch");
        Ok(body.results.into_iter().map(Contact::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> Result<RandomUserClient> {
        RandomUserClient::new(HttpClient::new()?, base_url)
    }

    #[test]
    fn endpoint_includes_result_count() {
        let client = client("https://randomuser.me").unwrap();
        assert_eq!(client.endpoint(25).as_str(), "https://randomuser.me/api/?results=25");
    }

    #[test]
    fn endpoint_respects_base_path() {
        for base in ["http://localhost:8080/mock/", "http://localhost:8080/mock"] {
            let client = client(base).unwrap();
            assert_eq!(client.endpoint(1).as_str(), "http://localhost:8080/mock/api/?results=1");
        }
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(client("not a url"), Err(RolodexError::Config(_))));
        assert!(matches!(client("ftp://example.com"), Err(RolodexError::Config(_))));
    }

    #[test]
    fn result_maps_login_uuid_to_id() {
        let json = r#"{
            "login": { "uuid": "9f0c", "username": "ignored" },
            "name": { "title": "Ms", "first": "Ada", "last": "Lovelace" },
            "email": "ada@example.com",
            "phone": "555-0100",
            "picture": { "large": "l", "medium": "m", "thumbnail": "t" }
        }"#;

        let contact: Contact = serde_json::from_str::<RandomUserResult>(json).unwrap().into();

        assert_eq!(contact.id, "9f0c");
        assert_eq!(contact.full_name(), "Ada Lovelace");
        assert_eq!(contact.picture.thumbnail, "t");
    }
}
