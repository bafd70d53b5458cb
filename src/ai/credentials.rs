//! API key lookup: environment first (dotenvy loads `.env` at startup),
//! then a per-provider key file under the user config directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::client::AiError;

pub struct CredentialManager;

impl CredentialManager {
    fn key_file_path(provider: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lexdraft").join(format!("{}_key", provider)))
    }

    fn env_var_name(provider: &str) -> String {
        format!("{}_API_KEY", provider.to_uppercase())
    }

    /// Get an API key for a provider, e.g. `gemini`.
    pub fn get_api_key(provider: &str) -> Result<String, AiError> {
        let var = Self::env_var_name(provider);
        if let Ok(key) = std::env::var(&var) {
            if !key.trim().is_empty() {
                return Ok(key.trim().to_string());
            }
        }

        if let Some(path) = Self::key_file_path(provider) {
            if let Some(key) = Self::read_key_file(&path)? {
                tracing::debug!(path = %path.display(), "API key loaded from file");
                return Ok(key);
            }
        }

        Err(AiError::MissingCredentials(format!(
            "set {} or create the {} key file",
            var, provider
        )))
    }

    /// Read a key file. A missing or blank file yields `None`; an unreadable
    /// file is an error.
    fn read_key_file(path: &Path) -> Result<Option<String>, AiError> {
        if !path.exists() {
            return Ok(None);
        }
        let key = fs::read_to_string(path).map_err(|e| {
            AiError::MissingCredentials(format!(
                "failed to read key file {}: {}",
                path.display(),
                e
            ))
        })?;
        let key = key.trim();
        if key.is_empty() {
            Ok(None)
        } else {
            Ok(Some(key.to_string()))
        }
    }
}
