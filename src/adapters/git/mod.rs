//! Git integration adapter
//!
//! Implements `WorktreeProvider` using git2.
//!
//! A repo with a local `worktree` override is bound in place. Anything else
//! is fetched into a temporary directory with `main` checked out, and the
//! directory is removed when the returned guard drops.

use std::path::Path;

use git2::build::CheckoutBuilder;
use git2::{Cred, FetchOptions, RemoteCallbacks, Repository, Status, StatusOptions};
use log::{debug, info};

use crate::core::models::Repo;
use crate::core::ports::{Worktree, WorktreeError, WorktreeProvider};

/// Default clone URL, `{user}` and `{repo}` are substituted
pub const CLONE_URL_FORMAT: &str = "https://github.com/{user}/{repo}.git";

const MAIN_BRANCH: &str = "main";

impl From<git2::Error> for WorktreeError {
    fn from(err: git2::Error) -> Self {
        Self::Git(err.message().to_string())
    }
}

/// git2-based working tree provider
#[derive(Debug, Clone)]
pub struct GitWorktreeProvider {
    /// Clone URL template
    clone_url_format: String,

    /// Token used for HTTPS authentication, if any
    token: Option<String>,
}

impl GitWorktreeProvider {
    /// Create a provider cloning from `clone_url_format`
    #[must_use]
    pub fn new(clone_url_format: impl Into<String>) -> Self {
        Self {
            clone_url_format: clone_url_format.into(),
            token: None,
        }
    }

    /// Authenticate HTTPS fetches with `token`
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Clone URL for `repo`
    #[must_use]
    pub fn clone_url(&self, repo: &Repo) -> String {
        self.clone_url_format.replace("{user}", repo.owner()).replace("{repo}", &repo.name)
    }

    fn bind(path: &Path) -> Result<Worktree, WorktreeError> {
        if !path.is_dir() {
            return Err(WorktreeError::NotADirectory(path.to_path_buf()));
        }
        debug!("Using local worktree {}", path.display());
        Ok(Worktree::bound(path))
    }

    fn fetch_options(&self) -> FetchOptions<'_> {
        let mut callbacks = RemoteCallbacks::new();
        if let Some(token) = &self.token {
            callbacks.credentials(move |_, _, _| Cred::userpass_plaintext("x-access-token", token));
        }
        let mut options = FetchOptions::new();
        options.remote_callbacks(callbacks);
        options
    }

    fn clone_main(&self, repo: &Repo) -> Result<Worktree, WorktreeError> {
        let dir = tempfile::Builder::new().prefix("repo-conformance-").tempdir()?;
        let url = self.clone_url(repo);
        info!("Cloning {url}");

        let git_repo = Repository::init(dir.path())?;
        let mut origin = git_repo
            .remote("origin", &url)
            .map_err(|e| WorktreeError::Origin(e.message().to_string()))?;
        origin
            .fetch(
                &["+refs/heads/*:refs/remotes/origin/*"],
                Some(&mut self.fetch_options()),
                None,
            )
            .map_err(|e| WorktreeError::Origin(e.message().to_string()))?;

        let remote_main = match git_repo.find_reference(&format!("refs/remotes/origin/{MAIN_BRANCH}")) {
            Ok(reference) => reference,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Err(WorktreeError::NoMainBranch),
            Err(e) => return Err(e.into()),
        };
        let commit = remote_main.peel_to_commit()?;
        let mut main = git_repo.branch(MAIN_BRANCH, &commit, true)?;
        main.set_upstream(Some(format!("origin/{MAIN_BRANCH}").as_str()))?;
        git_repo.set_head(&format!("refs/heads/{MAIN_BRANCH}"))?;
        git_repo.checkout_head(Some(CheckoutBuilder::new().force()))?;

        verify_clean(&git_repo)?;
        debug!("Checked out {} at {}", repo, commit.id());
        Ok(Worktree::temporary(dir))
    }
}

impl Default for GitWorktreeProvider {
    fn default() -> Self {
        Self::new(CLONE_URL_FORMAT)
    }
}

impl WorktreeProvider for GitWorktreeProvider {
    fn open(&self, repo: &Repo) -> Result<Worktree, WorktreeError> {
        match &repo.worktree_override {
            Some(path) => Self::bind(path),
            None => self.clone_main(repo),
        }
    }
}

/// Fail if the checkout has modified or untracked files
fn verify_clean(git_repo: &Repository) -> Result<(), WorktreeError> {
    let mut options = StatusOptions::new();
    options.include_untracked(true).include_ignored(false);
    let statuses = git_repo.statuses(Some(&mut options))?;

    let mut untracked = false;
    for entry in statuses.iter() {
        let status = entry.status();
        if status.contains(Status::WT_NEW) {
            untracked = true;
        } else if status != Status::CURRENT {
            return Err(WorktreeError::Dirty);
        }
    }
    if untracked {
        return Err(WorktreeError::Untracked);
    }
    Ok(())
}
