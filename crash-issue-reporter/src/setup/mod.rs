//! First-run setup of the reporter configuration.
//!
//! Setup makes sure the configuration file holds a validated token and a
//! repository identifier. A missing token is asked for and checked against
//! the API before anything is written; a missing repository is detected from
//! the git `origin` remote (with confirmation) or entered by hand.

mod error;
mod prompt;
mod remote;

pub use error::SetupError;
pub use prompt::{Prompter, TerminalPrompter};
pub use remote::{parse_remote_url, GitRemote, RemoteSource};

use crate::config::{ConfigFile, RepositoryId, ReporterConfig};
use crate::github::{TokenValidator, TrackerError};
use std::path::Path;
use tracing::{info, warn};

/// Token scope needed to list and create issues.
pub const REQUIRED_SCOPE: &str = "repo";

/// Ensures the configuration at `path` is complete and returns it.
///
/// The file is written once, and only if setup filled in a missing field.
/// Fields already present are kept as they are, along with any keys this
/// crate does not use.
///
/// # Errors
///
/// Returns [`SetupError`] if the token cannot be obtained or validated, the
/// repository cannot be determined, or the file cannot be read or written.
/// Nothing is saved in that case.
pub async fn resolve_configuration<V, P, R>(
    path: &Path,
    validator: &V,
    prompter: &mut P,
    remote: &R,
) -> Result<ReporterConfig, SetupError>
where
    V: TokenValidator + ?Sized,
    P: Prompter + ?Sized,
    R: RemoteSource + ?Sized,
{
    let mut file = ConfigFile::open(path)?;
    let mut changed = false;

    let token = match file.github_token() {
        Some(token) => token.to_string(),
        None => {
            info!(path = %path.display(), "GitHub token not configured, starting setup");
            let token = acquire_token(validator, prompter).await?;
            file.set_github_token(&token);
            changed = true;
            token
        }
    };

    let repository = match file.repo_name() {
        Some(name) => name.parse::<RepositoryId>()?,
        None => {
            info!("Repository not configured");
            let repository = acquire_repository(prompter, remote)?;
            file.set_repo_name(&repository);
            changed = true;
            repository
        }
    };

    if changed {
        file.save()?;
        info!(path = %path.display(), "Setup complete, configuration saved");
    } else {
        info!(path = %path.display(), "Configuration already complete, skipping setup");
    }

    Ok(ReporterConfig::new(token, repository))
}

/// Checks that `token` is accepted by the API and carries [`REQUIRED_SCOPE`].
///
/// # Errors
///
/// Returns [`SetupError::TokenRejected`] for a non-200 answer,
/// [`SetupError::MissingScope`] if the scope is absent, and
/// [`SetupError::Validation`] if the request could not be made.
pub async fn validate_token<V>(validator: &V, token: &str) -> Result<(), SetupError>
where
    V: TokenValidator + ?Sized,
{
    let scopes = validator
        .granted_scopes(token)
        .await
        .map_err(|e| match e {
            TrackerError::UnexpectedStatus { status, .. } => SetupError::TokenRejected { status },
            other => SetupError::Validation(other),
        })?;

    if !scopes.iter().any(|scope| scope == REQUIRED_SCOPE) {
        return Err(SetupError::MissingScope {
            scope: REQUIRED_SCOPE,
            granted: scopes.join(", "),
        });
    }

    info!("Token validation successful");
    Ok(())
}

async fn acquire_token<V, P>(validator: &V, prompter: &mut P) -> Result<String, SetupError>
where
    V: TokenValidator + ?Sized,
    P: Prompter + ?Sized,
{
    let token = prompter.token()?.trim().to_string();
    if token.is_empty() {
        return Err(SetupError::EmptyToken);
    }

    validate_token(validator, &token).await?;
    Ok(token)
}

fn acquire_repository<P, R>(prompter: &mut P, remote: &R) -> Result<RepositoryId, SetupError>
where
    P: Prompter + ?Sized,
    R: RemoteSource + ?Sized,
{
    if let Some(detected) = detect_repository(remote) {
        if prompter.confirm_repository(&detected)? {
            return Ok(detected);
        }
        info!("Detected repository rejected, asking for it instead");
    }

    Ok(prompter.repository()?.parse::<RepositoryId>()?)
}

fn detect_repository<R>(remote: &R) -> Option<RepositoryId>
where
    R: RemoteSource + ?Sized,
{
    let url = match remote.origin_url() {
        Ok(url) => url,
        Err(e) => {
            warn!(error = %e, "Unable to detect repository name. Ensure you're in a git repository");
            return None;
        }
    };

    match parse_remote_url(&url) {
        Some(repository) => {
            info!(repo = %repository, "Detected repository");
            Some(repository)
        }
        None => {
            warn!(url = %url, "Could not detect repository name from remote URL");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::collections::VecDeque;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Answers with `status` for every token, or the given scopes.
    struct FakeValidator {
        scopes: Vec<String>,
        status: Option<u16>,
        seen: Mutex<Vec<String>>,
    }

    impl FakeValidator {
        fn granting(scopes: &[&str]) -> Self {
            Self {
                scopes: scopes.iter().map(ToString::to_string).collect(),
                status: None,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn rejecting(status: u16) -> Self {
            Self {
                status: Some(status),
                ..Self::granting(&[])
            }
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TokenValidator for FakeValidator {
        async fn granted_scopes(&self, token: &str) -> Result<Vec<String>, TrackerError> {
            self.seen.lock().unwrap().push(token.to_string());
            match self.status {
                Some(status) => Err(TrackerError::UnexpectedStatus {
                    status,
                    body: "Bad credentials".to_string(),
                }),
                None => Ok(self.scopes.clone()),
            }
        }
    }

    /// Scripted answers; panics if asked something unscripted.
    #[derive(Default)]
    struct ScriptedPrompter {
        tokens: VecDeque<String>,
        confirmations: VecDeque<bool>,
        repositories: VecDeque<String>,
    }

    impl ScriptedPrompter {
        fn with_token(token: &str) -> Self {
            Self {
                tokens: VecDeque::from([token.to_string()]),
                ..Self::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn token(&mut self) -> Result<String, SetupError> {
            Ok(self.tokens.pop_front().expect("unexpected token prompt"))
        }

        fn confirm_repository(&mut self, _detected: &RepositoryId) -> Result<bool, SetupError> {
            Ok(self
                .confirmations
                .pop_front()
                .expect("unexpected confirmation prompt"))
        }

        fn repository(&mut self) -> Result<String, SetupError> {
            Ok(self
                .repositories
                .pop_front()
                .expect("unexpected repository prompt"))
        }
    }

    struct FakeRemote(Option<&'static str>);

    impl RemoteSource for FakeRemote {
        fn origin_url(&self) -> Result<String, SetupError> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| SetupError::Git("No such remote 'origin'".to_string()))
        }
    }

    fn write_config(temp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = temp.path().join("config.json");
        fs::write(&path, content).unwrap();
        path
    }

    fn read_config(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn complete_config_skips_setup() {
        let temp = TempDir::new().unwrap();
        let content = r#"{"github_token": "ghp_saved", "repo_name": "acme/widgets"}"#;
        let path = write_config(&temp, content);
        let validator = FakeValidator::granting(&["repo"]);

        let config = resolve_configuration(
            &path,
            &validator,
            &mut ScriptedPrompter::default(),
            &FakeRemote(None),
        )
        .await
        .unwrap();

        assert_eq!(config.token(), "ghp_saved");
        assert_eq!(config.repository().to_string(), "acme/widgets");
        assert_eq!(validator.calls(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[tokio::test]
    async fn missing_token_is_prompted_validated_and_saved() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#"{"repo_name": "acme/widgets", "theme": "dark"}"#);
        let validator = FakeValidator::granting(&["read:org", "repo"]);

        let config = resolve_configuration(
            &path,
            &validator,
            &mut ScriptedPrompter::with_token("  ghp_new \n"),
            &FakeRemote(None),
        )
        .await
        .unwrap();

        assert_eq!(config.token(), "ghp_new");
        assert_eq!(*validator.seen.lock().unwrap(), vec!["ghp_new"]);

        let saved = read_config(&path);
        assert_eq!(saved["github_token"], "ghp_new");
        assert_eq!(saved["repo_name"], "acme/widgets");
        assert_eq!(saved["theme"], "dark");
    }

    #[tokio::test]
    async fn rejected_token_is_not_saved() {
        let temp = TempDir::new().unwrap();
        let content = r#"{"repo_name": "acme/widgets"}"#;
        let path = write_config(&temp, content);

        let result = resolve_configuration(
            &path,
            &FakeValidator::rejecting(401),
            &mut ScriptedPrompter::with_token("ghp_bad"),
            &FakeRemote(None),
        )
        .await;

        assert!(matches!(result, Err(SetupError::TokenRejected { status: 401 })));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[tokio::test]
    async fn token_without_repo_scope_is_not_saved() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        let result = resolve_configuration(
            &path,
            &FakeValidator::granting(&["read:user"]),
            &mut ScriptedPrompter::with_token("ghp_narrow"),
            &FakeRemote(Some("https://github.com/acme/widgets.git")),
        )
        .await;

        assert!(matches!(result, Err(SetupError::MissingScope { .. })));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn empty_token_aborts_without_validation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        let validator = FakeValidator::granting(&["repo"]);

        let result = resolve_configuration(
            &path,
            &validator,
            &mut ScriptedPrompter::with_token("   "),
            &FakeRemote(None),
        )
        .await;

        assert!(matches!(result, Err(SetupError::EmptyToken)));
        assert_eq!(validator.calls(), 0);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn detected_repository_is_used_when_confirmed() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#"{"github_token": "ghp_saved"}"#);
        let mut prompter = ScriptedPrompter {
            confirmations: VecDeque::from([true]),
            ..ScriptedPrompter::default()
        };

        let config = resolve_configuration(
            &path,
            &FakeValidator::granting(&["repo"]),
            &mut prompter,
            &FakeRemote(Some("git@github.com:acme/widgets.git")),
        )
        .await
        .unwrap();

        assert_eq!(config.repository().to_string(), "acme/widgets");
        assert_eq!(read_config(&path)["repo_name"], "acme/widgets");
    }

    #[tokio::test]
    async fn rejected_detection_falls_back_to_manual_entry() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#"{"github_token": "ghp_saved"}"#);
        let mut prompter = ScriptedPrompter {
            confirmations: VecDeque::from([false]),
            repositories: VecDeque::from(["acme/gadgets".to_string()]),
            ..ScriptedPrompter::default()
        };

        let config = resolve_configuration(
            &path,
            &FakeValidator::granting(&["repo"]),
            &mut prompter,
            &FakeRemote(Some("https://github.com/acme/widgets.git")),
        )
        .await
        .unwrap();

        assert_eq!(config.repository().to_string(), "acme/gadgets");
    }

    #[tokio::test]
    async fn failed_detection_falls_back_to_manual_entry() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#"{"github_token": "ghp_saved"}"#);
        let mut prompter = ScriptedPrompter {
            repositories: VecDeque::from(["acme/gadgets".to_string()]),
            ..ScriptedPrompter::default()
        };

        let config = resolve_configuration(
            &path,
            &FakeValidator::granting(&["repo"]),
            &mut prompter,
            &FakeRemote(None),
        )
        .await
        .unwrap();

        assert_eq!(config.repository().to_string(), "acme/gadgets");
    }

    #[tokio::test]
    async fn malformed_saved_repository_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#"{"github_token": "ghp_saved", "repo_name": "widgets"}"#);

        let result = resolve_configuration(
            &path,
            &FakeValidator::granting(&["repo"]),
            &mut ScriptedPrompter::default(),
            &FakeRemote(None),
        )
        .await;

        assert!(matches!(
            result,
            Err(SetupError::Config(ConfigError::InvalidRepository { .. }))
        ));
    }

    #[tokio::test]
    async fn transport_failure_during_validation_aborts() {
        struct BrokenValidator;

        #[async_trait]
        impl TokenValidator for BrokenValidator {
            async fn granted_scopes(&self, _token: &str) -> Result<Vec<String>, TrackerError> {
                Err(TrackerError::DecodeError(
                    serde_json::from_str::<Value>("not json").unwrap_err(),
                ))
            }
        }

        let result = validate_token(&BrokenValidator, "ghp_any").await;
        assert!(matches!(result, Err(SetupError::Validation(_))));
    }
}
