//! Credential resolution for the catalog service.
//!
//! The API key is resolved on demand and never cached, so an exported
//! environment change takes effect the next time a client is built.

use super::CatalogSettings;

/// Environment variable consulted before the config file value.
pub const CREDENTIAL_ENV_VAR: &str = "TMDB_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building a request.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to the service.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl CatalogSettings {
    /// Resolve the API key, environment first, config file second.
    pub fn resolve_credential(&self) -> CredentialStatus {
        resolve_from(
            std::env::var(CREDENTIAL_ENV_VAR).ok().as_deref(),
            self.api_key.as_deref(),
        )
    }
}

fn resolve_from(env_value: Option<&str>, file_value: Option<&str>) -> CredentialStatus {
    for value in [env_value, file_value].into_iter().flatten() {
        if !value.trim().is_empty() {
            return CredentialStatus::Configured(SecureString::new(value.to_string()));
        }
    }

    CredentialStatus::Unconfigured {
        reason: format!("set {CREDENTIAL_ENV_VAR} or catalog.api_key in the config file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        // Debug should mask
        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains("••••••••"));

        // Display should mask
        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));
        assert!(display_output.contains("••••••••"));

        // expose() should reveal
        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn environment_beats_the_config_file() {
        let status = resolve_from(Some("env-key"), Some("file-key"));
        match status {
            CredentialStatus::Configured(key) => assert_eq!(key.expose(), "env-key"),
            other => panic!("expected Configured, got {other:?}"),
        }
    }

    #[test]
    fn blank_environment_falls_back_to_the_file() {
        let status = resolve_from(Some("   "), Some("file-key"));
        match status {
            CredentialStatus::Configured(key) => assert_eq!(key.expose(), "file-key"),
            other => panic!("expected Configured, got {other:?}"),
        }
    }

    #[test]
    fn nothing_configured_names_both_sources() {
        let status = resolve_from(None, None);
        match status {
            CredentialStatus::Unconfigured { reason } => {
                assert!(reason.contains(CREDENTIAL_ENV_VAR));
                assert!(reason.contains("api_key"));
            }
            other => panic!("expected Unconfigured, got {other:?}"),
        }
    }
}
