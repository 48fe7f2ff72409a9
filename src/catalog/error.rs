//! Error taxonomy for catalog queries.

use thiserror::Error;

/// Failures a catalog query can produce.
///
/// None of these are retried automatically; the controller re-issues a
/// query only on the next intent change.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No usable credential, or the service rejected the configured one.
    /// Not recoverable without reconfiguration.
    #[error("catalog credential problem: {reason}")]
    Auth { reason: String },

    /// The service answered with a non-success status.
    #[error("catalog service error (status {status})")]
    Service { status: u16 },

    /// Transport failure, or a response body that could not be read.
    #[error("catalog network failure: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
}

impl CatalogError {
    /// One-line message for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Auth { reason } => {
                format!("Credential missing or rejected: {reason}")
            }
            CatalogError::Service { status } => {
                format!("The catalog rejected the request (status {status})")
            }
            CatalogError::Network { .. } => {
                "Could not reach the catalog service".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_message_carries_the_status() {
        let err = CatalogError::Service { status: 503 };
        assert!(err.user_message().contains("503"));
    }

    #[test]
    fn auth_message_carries_the_reason() {
        let err = CatalogError::Auth {
            reason: "api key is not set".to_string(),
        };
        assert!(err.user_message().contains("api key is not set"));
    }
}
