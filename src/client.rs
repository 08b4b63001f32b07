use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{RepositorySummary, UserProfile};

/// The two GitHub endpoints the viewer talks to.
#[async_trait]
pub trait ProfileApi {
    /// `GET /users/{username}`.
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile, ApiError>;

    /// `GET {list_url}?per_page=100&sort=updated`.
    async fn fetch_repositories(&self, list_url: &str)
        -> Result<Vec<RepositorySummary>, ApiError>;
}

#[async_trait]
impl<T: ProfileApi + Sync + ?Sized> ProfileApi for &T {
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile, ApiError> {
        (**self).fetch_profile(username).await
    }

    async fn fetch_repositories(
        &self,
        list_url: &str,
    ) -> Result<Vec<RepositorySummary>, ApiError> {
        (**self).fetch_repositories(list_url).await
    }
}

pub struct GitHubClient {
    client: Client,
    api_url: Url,
}

impl GitHubClient {
    /// Create a client against `api_url`, e.g. `https://api.github.com`.
    pub fn new(api_url: &str) -> Result<Self, ApiError> {
        let api_url =
            Url::parse(api_url).map_err(|e| ApiError::InvalidUrl(format!("{api_url}: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static("2022-11-28"));

        let client = Client::builder()
            .user_agent(concat!("github-profile-viewer/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(GitHubClient { client, api_url })
    }

    /// URL of the profile lookup. The username is percent-encoded as a single
    /// path segment.
    pub fn profile_url(&self, username: &str) -> Result<Url, ApiError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(["users", username]);
        Ok(url)
    }

    /// Log what GitHub reports about the remaining request budget.
    fn log_rate_limit(headers: &HeaderMap) {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
        };

        if let (Some(remaining), Some(limit)) =
            (read("X-RateLimit-Remaining"), read("X-RateLimit-Limit"))
        {
            if remaining == 0 {
                warn!("Rate limit exhausted (0/{})", limit);
            } else {
                debug!("Rate limit: {}/{}", remaining, limit);
            }
        }
    }
}

#[async_trait]
impl ProfileApi for GitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile, ApiError> {
        let url = self.profile_url(username)?;
        debug!("Requesting URL: {}", url);

        let response = self.client.get(url).send().await?;
        Self::log_rate_limit(response.headers());

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            warn!("Profile lookup for '{}' was rate limited", username);
            return Err(ApiError::RateLimited);
        }
        if !status.is_success() {
            debug!("Profile lookup for '{}' failed with {}", username, status);
            return Err(ApiError::NotFound(status));
        }

        Ok(response.json::<UserProfile>().await?)
    }

    async fn fetch_repositories(
        &self,
        list_url: &str,
    ) -> Result<Vec<RepositorySummary>, ApiError> {
        let url =
            Url::parse(list_url).map_err(|e| ApiError::InvalidUrl(format!("{list_url}: {e}")))?;
        debug!("Requesting URL: {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("per_page", "100"), ("sort", "updated")])
            .send()
            .await?;
        Self::log_rate_limit(response.headers());

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response.json::<Vec<RepositorySummary>>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_url_appends_encoded_username() {
        let client = GitHubClient::new("https://api.github.com").unwrap();
        assert_eq!(
            client.profile_url("octocat").unwrap().as_str(),
            "https://api.github.com/users/octocat"
        );
        assert_eq!(
            client.profile_url("a b").unwrap().as_str(),
            "https://api.github.com/users/a%20b"
        );
    }

    #[test]
    fn profile_url_keeps_enterprise_prefix() {
        let client = GitHubClient::new("https://ghe.example.com/api/v3/").unwrap();
        assert_eq!(
            client.profile_url("octocat").unwrap().as_str(),
            "https://ghe.example.com/api/v3/users/octocat"
        );
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(matches!(
            GitHubClient::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
