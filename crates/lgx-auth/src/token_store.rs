//! Session token persistence.
//!
//! Tokens live in the OS keychain when one is available. `LOGIX_AUTH__TOKEN`
//! supplies a token for headless runs, and `~/.logix/credentials` (mode
//! 0600) is the fallback when the keychain refuses writes.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "logix-cli";
const KEYRING_USER: &str = "session-token";
const TOKEN_ENV: &str = "LOGIX_AUTH__TOKEN";

/// Where a stored token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `LOGIX_KEYRING_SERVICE` overrides the service name so tests never touch
/// real credentials.
fn keyring_entry() -> Option<keyring::Entry> {
    let service = std::env::var("LOGIX_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string());
    keyring::Entry::new(&service, KEYRING_USER)
        .inspect_err(|error| tracing::debug!(%error, "keyring unavailable"))
        .ok()
}

/// Save a token, preferring the keychain.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if neither the keychain nor the
/// credentials file accepts the token.
pub fn store(token: &str) -> Result<(), AuthError> {
    if let Some(entry) = keyring_entry() {
        match entry.set_password(token) {
            Ok(()) => return Ok(()),
            Err(error) => tracing::warn!(%error, "keyring store failed; using credentials file"),
        }
    }
    CredentialsFile::default_location()?.write(token)
}

/// The stored token and where it came from: keychain, then env, then file.
#[must_use]
pub fn load_with_source() -> Option<(String, TokenSource)> {
    let non_empty = |token: String| (!token.is_empty()).then_some(token);

    keyring_entry()
        .and_then(|entry| entry.get_password().ok())
        .and_then(non_empty)
        .map(|token| (token, TokenSource::Keyring))
        .or_else(|| {
            std::env::var(TOKEN_ENV)
                .ok()
                .and_then(non_empty)
                .map(|token| (token, TokenSource::Env))
        })
        .or_else(|| {
            CredentialsFile::default_location()
                .ok()
                .and_then(|file| file.read())
                .map(|token| (token, TokenSource::File))
        })
}

#[must_use]
pub fn load() -> Option<String> {
    load_with_source().map(|(token, _)| token)
}

/// Which tier the current token comes from, for `lgx auth status`.
#[must_use]
pub fn detect_token_source() -> Option<String> {
    load_with_source().map(|(_, source)| source.to_string())
}

/// Remove the token from the keychain and the credentials file.
///
/// An env-provided token cannot be cleared from here.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    if let Some(entry) = keyring_entry()
        && let Err(error) = entry.delete_credential()
    {
        tracing::debug!(%error, "no keyring credential to delete");
    }
    CredentialsFile::default_location()?.remove()
}

/// Plain-file token storage.
#[derive(Debug, Clone)]
struct CredentialsFile {
    path: PathBuf,
}

impl CredentialsFile {
    fn default_location() -> Result<Self, AuthError> {
        let home = dirs::home_dir().ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found; cannot store credentials".into())
        })?;
        Ok(Self::at(home.join(".logix").join("credentials")))
    }

    fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, token: &str) -> Result<(), AuthError> {
        let fail = |what: &str, path: &Path, e: std::io::Error| {
            AuthError::TokenStoreError(format!("{what} {}: {e}", path.display()))
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| fail("mkdir", dir, e))?;
            restrict(dir, 0o700);
        }
        fs::write(&self.path, token).map_err(|e| fail("write", &self.path, e))?;
        restrict(&self.path, 0o600);
        Ok(())
    }

    fn read(&self) -> Option<String> {
        let token = fs::read_to_string(&self.path).ok()?;
        let token = token.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn remove(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::TokenStoreError(format!(
                "delete {}: {e}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(unix)]
fn restrict(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(error) = fs::set_permissions(path, fs::Permissions::from_mode(mode)) {
        tracing::warn!(%error, path = %path.display(), "failed to restrict permissions");
    }
}

#[cfg(not(unix))]
fn restrict(_path: &Path, _mode: u32) {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_location_is_under_home() {
        let file = CredentialsFile::default_location().unwrap();
        assert!(file.path().ends_with(".logix/credentials"));
    }

    #[test]
    fn write_read_remove_cycle() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = CredentialsFile::at(tmp.path().join("nested").join("credentials"));

        file.write("tok_abc123").unwrap();
        assert_eq!(file.read().as_deref(), Some("tok_abc123"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(file.path()).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, 0o600);
        }

        file.remove().unwrap();
        assert!(!file.path().exists());
        file.remove().unwrap();
    }

    #[test]
    fn blank_file_holds_no_token() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = CredentialsFile::at(tmp.path().join("credentials"));
        fs::write(file.path(), "   \n  ").unwrap();
        assert!(file.read().is_none());

        fs::write(file.path(), "tok\n").unwrap();
        assert_eq!(file.read().as_deref(), Some("tok"));
    }

    #[test]
    fn source_names() {
        assert_eq!(TokenSource::Keyring.to_string(), "keyring");
        assert_eq!(TokenSource::File.as_str(), "file");
    }
}
