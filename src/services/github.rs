use crate::config::GitHubSettings;
use crate::core::build_profile;
use crate::models::{GitHubRepo, GitHubUser, Profile};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching a profile from GitHub
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub user not found: {0}")]
    NotFound(String),

    #[error("GitHub did not respond within {0:?}")]
    Timeout(Duration),

    #[error("Network error talking to GitHub: {0}")]
    Network(#[source] reqwest::Error),

    #[error("GitHub API returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid GitHub token: {0}")]
    InvalidToken(String),
}

/// GitHub REST API client
///
/// Fetches a user and their most recently updated repositories, then
/// normalizes both into a [`Profile`].
pub struct GitHubClient {
    base_url: String,
    recent_repos: u8,
    timeout: Duration,
    client: Client,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(settings: &GitHubSettings) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

        if let Some(token) = settings.token.as_deref().filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("token {}", token))
                .map_err(|e| GitHubError::InvalidToken(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let timeout = settings.timeout();
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(GitHubError::Network)?;

        Ok(Self {
            base_url: settings.api_base.trim_end_matches('/').to_string(),
            recent_repos: settings.recent_repos,
            timeout,
            client,
        })
    }

    /// Fetch and normalize the profile of `username`
    pub async fn fetch_profile(&self, username: &str) -> Result<Profile, GitHubError> {
        let user = self.fetch_user(username).await?;
        let repos = self.fetch_recent_repos(&user.login).await?;

        tracing::debug!(
            "Fetched {} ({} repos, {} followers, {} recent repos)",
            user.login,
            user.public_repos,
            user.followers,
            repos.len()
        );

        Ok(build_profile(user, repos, chrono::Utc::now()))
    }

    /// Fetch the raw user record
    pub async fn fetch_user(&self, username: &str) -> Result<GitHubUser, GitHubError> {
        let url = format!("{}/users/{}", self.base_url, urlencoding::encode(username));

        tracing::debug!("Fetching GitHub user from: {}", url);

        let response = self.get(&url).await?;
        self.decode(username, response).await
    }

    /// Fetch the most recently updated repositories, newest first
    pub async fn fetch_recent_repos(&self, username: &str) -> Result<Vec<GitHubRepo>, GitHubError> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url,
            urlencoding::encode(username),
            self.recent_repos
        );

        tracing::debug!("Fetching recent repositories from: {}", url);

        let response = self.get(&url).await?;
        self.decode(username, response).await
    }

    async fn get(&self, url: &str) -> Result<Response, GitHubError> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        username: &str,
        response: Response,
    ) -> Result<T, GitHubError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFound(username.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::warn!("GitHub API error for {}: {} - {}", username, status, body);
            return Err(GitHubError::Upstream {
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        response.json::<T>().await.map_err(|e| self.classify(e))
    }

    fn classify(&self, error: reqwest::Error) -> GitHubError {
        if error.is_timeout() {
            GitHubError::Timeout(self.timeout)
        } else if error.is_decode() {
            GitHubError::InvalidResponse(error.to_string())
        } else {
            GitHubError::Network(error)
        }
    }
}

/// GitHub error bodies carry a `message` field; fall back to the raw body
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
