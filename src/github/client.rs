// client.rs
use crate::github::{GithubError, Profile, Repo};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("portfolio/", env!("CARGO_PKG_VERSION"));

/// Read-only access to public GitHub data. The router only sees this trait,
/// so tests can swap in canned responses.
pub trait GithubSource: Send + Sync {
    fn fetch_profile(&self, user: &str) -> Result<Profile, GithubError>;

    /// Most recently updated repositories, newest first.
    fn fetch_recent_repos(&self, user: &str, limit: u32) -> Result<Vec<Repo>, GithubError>;
}

/// Unauthenticated REST client. No retries: a failed call is reported once.
pub struct GithubClient {
    client: Client,
    api_base: Url,
}

impl GithubClient {
    pub fn new(api_base: Url, timeout: Duration) -> Result<Self, GithubError> {
        if api_base.cannot_be_a_base() {
            return Err(GithubError::InvalidBase(api_base.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| GithubError::Network(e.to_string()))?;

        Ok(Self { client, api_base })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GithubError> {
        let mut url = self.api_base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| GithubError::InvalidBase(self.api_base.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GithubError> {
        tracing::debug!(%url, "github request");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| GithubError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GithubError::Status(status.as_u16()));
        }

        resp.json::<T>()
            .map_err(|e| GithubError::Decode(e.to_string()))
    }
}

impl GithubSource for GithubClient {
    fn fetch_profile(&self, user: &str) -> Result<Profile, GithubError> {
        let url = self.endpoint(&["users", user])?;
        self.get_json(url)
    }

    fn fetch_recent_repos(&self, user: &str, limit: u32) -> Result<Vec<Repo>, GithubError> {
        let mut url = self.endpoint(&["users", user, "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &limit.to_string());
        self.get_json(url)
    }
}
