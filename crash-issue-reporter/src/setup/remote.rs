//! Repository detection from the git `origin` remote.

use super::SetupError;
use crate::config::RepositoryId;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;
use url::Url;

/// Source of the `origin` remote URL.
pub trait RemoteSource {
    /// Returns the URL of the `origin` remote.
    fn origin_url(&self) -> Result<String, SetupError>;
}

/// Reads the remote with the installed `git` binary.
#[derive(Debug, Clone)]
pub struct GitRemote {
    repo_path: PathBuf,
}

impl GitRemote {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }
}

impl RemoteSource for GitRemote {
    fn origin_url(&self) -> Result<String, SetupError> {
        let output = Command::new("git")
            .args(["remote", "get-url", "origin"])
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| SetupError::Git(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SetupError::Git(format!(
                "remote get-url failed: {}",
                stderr.trim()
            )));
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(url = %url, "Read origin remote");
        Ok(url)
    }
}

/// Extracts `owner/repo` from a remote URL.
///
/// Supports `https://host/owner/repo(.git)` (and `http://`, `ssh://`,
/// `git://`) as well as scp-style `git@host:owner/repo(.git)`. For deeper
/// paths the last two segments are used.
#[must_use]
pub fn parse_remote_url(remote: &str) -> Option<RepositoryId> {
    let remote = remote.trim();

    let path = if remote.contains("://") {
        Url::parse(remote).ok()?.path().to_string()
    } else {
        let (_, path) = remote.split_once(':')?;
        path.to_string()
    };

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let mut segments = path.rsplit('/');
    let name = segments.next()?;
    let owner = segments.next()?;
    format!("{owner}/{name}").parse().ok()
}
