//! GitHub repository metadata fetch.
//!
//! Fetches one repository object from the GitHub REST API and reduces it to
//! the handful of fields the site actually shows. Everything else the
//! upstream returns is dropped.

use reqwest::header;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("site-backend/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("github returned status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Projection of the upstream repository object served to clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepoMeta {
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: i64,
    pub forks_count: i64,
    pub open_issues_count: i64,
    pub license: Option<String>,
    pub pushed_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRepo {
    full_name: String,
    html_url: String,
    description: Option<String>,
    stargazers_count: i64,
    forks_count: i64,
    open_issues_count: i64,
    license: Option<RawLicense>,
    pushed_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLicense {
    spdx_id: Option<String>,
}

impl From<RawRepo> for RepoMeta {
    fn from(raw: RawRepo) -> Self {
        Self {
            full_name: raw.full_name,
            html_url: raw.html_url,
            description: raw.description,
            stargazers_count: raw.stargazers_count,
            forks_count: raw.forks_count,
            open_issues_count: raw.open_issues_count,
            license: raw.license.and_then(|l| l.spdx_id),
            pushed_at: raw.pushed_at,
        }
    }
}

#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    repo: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(repo: impl Into<String>, token: Option<String>) -> Self {
        Self::with_api_base(DEFAULT_API_BASE, repo, token)
    }

    /// `api_base` override lets tests point the client at a local server.
    pub fn with_api_base(
        api_base: impl Into<String>,
        repo: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            repo: repo.into(),
            token,
        }
    }

    pub async fn fetch_repo(&self) -> Result<RepoMeta, GithubError> {
        let url = format!("{}/repos/{}", self.api_base, self.repo);
        let mut req = self
            .http
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| GithubError::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GithubError::Status(status.as_u16()));
        }
        let raw = resp
            .json::<RawRepo>()
            .await
            .map_err(|e| GithubError::Parse(e.to_string()))?;
        Ok(raw.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_keeps_only_the_served_fields() {
        let raw: RawRepo = serde_json::from_value(serde_json::json!({
            "id": 1296269,
            "full_name": "acme/site",
            "html_url": "https://github.com/acme/site",
            "description": "Company site",
            "stargazers_count": 80,
            "forks_count": 9,
            "open_issues_count": 2,
            "watchers_count": 80,
            "default_branch": "main",
            "license": { "key": "mit", "spdx_id": "MIT", "name": "MIT License" },
            "pushed_at": "2024-05-01T12:00:00Z"
        }))
        .expect("deserialize");
        let meta = RepoMeta::from(raw);
        assert_eq!(meta.full_name, "acme/site");
        assert_eq!(meta.license.as_deref(), Some("MIT"));
        assert_eq!(meta.stargazers_count, 80);
        assert_eq!(meta.pushed_at.as_deref(), Some("2024-05-01T12:00:00Z"));
    }

    #[test]
    fn absent_license_projects_to_none() {
        let raw: RawRepo = serde_json::from_value(serde_json::json!({
            "full_name": "acme/site",
            "html_url": "https://github.com/acme/site",
            "description": null,
            "stargazers_count": 0,
            "forks_count": 0,
            "open_issues_count": 0,
            "license": null,
            "pushed_at": null
        }))
        .expect("deserialize");
        let meta = RepoMeta::from(raw);
        assert!(meta.license.is_none());
        assert!(meta.description.is_none());
        assert!(meta.pushed_at.is_none());
    }
}
