//! GitHub REST adapter
//!
//! Implements `GithubApi` with a blocking reqwest client.

use std::collections::HashMap;
use std::sync::Mutex;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::ports::{GithubApi, GithubError, RepoSettings};

/// Public GitHub API endpoint
pub const API_URL: &str = "https://api.github.com";

const PAGE_SIZE: usize = 100;

#[derive(Debug, Deserialize)]
struct ApiOwner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct ApiRepo {
    name: String,
    owner: ApiOwner,
    #[serde(default)]
    has_wiki: bool,
    #[serde(default)]
    has_projects: bool,
    #[serde(default)]
    fork: bool,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    private: bool,
}

impl From<ApiRepo> for RepoSettings {
    fn from(repo: ApiRepo) -> Self {
        Self {
            name: repo.name,
            owner: repo.owner.login,
            has_wiki: repo.has_wiki,
            has_projects: repo.has_projects,
            fork: repo.fork,
            archived: repo.archived,
            private: repo.private,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiCommit {
    sha: String,
}

/// GitHub client over the REST API
#[derive(Debug)]
pub struct RestGithub {
    client: Client,
    api_url: String,
    token: Option<String>,
    /// Latest commit per repository, looked up at most once per run
    commits: Mutex<HashMap<String, String>>,
}

impl RestGithub {
    /// Create a client for `api_url`, authenticating with `token` if given
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self, GithubError> {
        let client = Client::builder()
            .user_agent(concat!("repo-conformance/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GithubError::Http(e.to_string()))?;
        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
            commits: Mutex::new(HashMap::new()),
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GithubError> {
        let url = format!("{}{path}", self.api_url);
        debug!("GET {url}");

        let mut request = self.client.get(&url).header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().map_err(|e| GithubError::Http(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GithubError::NotFound(url));
        }
        if !status.is_success() {
            return Err(GithubError::Status {
                status: status.as_u16(),
                url,
            });
        }
        response.json::<T>().map_err(|e| GithubError::Decode(e.to_string()))
    }
}

impl GithubApi for RestGithub {
    fn repository(&self, owner: &str, name: &str) -> Result<RepoSettings, GithubError> {
        let repo: ApiRepo = self.get(&format!("/repos/{owner}/{name}"))?;
        Ok(repo.into())
    }

    fn latest_commit(&self, full_name: &str) -> Result<String, GithubError> {
        if let Some(sha) = self.commits.lock().ok().and_then(|c| c.get(full_name).cloned()) {
            return Ok(sha);
        }

        let commits: Vec<ApiCommit> = self.get(&format!("/repos/{full_name}/commits?per_page=1"))?;
        let sha = commits
            .into_iter()
            .next()
            .map(|c| c.sha)
            .ok_or_else(|| GithubError::NotFound(format!("commits of {full_name}")))?;

        if let Ok(mut cache) = self.commits.lock() {
            cache.insert(full_name.to_string(), sha.clone());
        }
        Ok(sha)
    }

    fn user_repositories(&self, user: &str) -> Result<Vec<RepoSettings>, GithubError> {
        let repos: Vec<ApiRepo> = collect_pages(|page| {
            self.get(&format!("/users/{user}/repos?per_page={PAGE_SIZE}&page={page}"))
        })?;
        Ok(repos.into_iter().map(RepoSettings::from).collect())
    }
}

/// Request pages from 1 until one comes back short of `PAGE_SIZE`
fn collect_pages<T>(
    mut fetch: impl FnMut(usize) -> Result<Vec<T>, GithubError>,
) -> Result<Vec<T>, GithubError> {
    let mut items = Vec::new();
    for page in 1.. {
        let batch = fetch(page)?;
        let last = batch.len() < PAGE_SIZE;
        items.extend(batch);
        if last {
            break;
        }
    }
    Ok(items)
}
