//! The remote catalog client.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::{CatalogSettings, CredentialStatus};

use super::error::CatalogError;
use super::types::{Category, Language, RawResultPage, ResultPage};

/// Query surface the orchestration controller fetches through.
///
/// The controller is the only production caller; the trait exists so
/// controller flows can be driven by a scripted catalog in tests.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch one page of a curated list.
    async fn fetch_category(
        &self,
        category: Category,
        language: Language,
        page: u32,
    ) -> Result<ResultPage, CatalogError>;

    /// Fetch one page of free-text search results.
    async fn search(
        &self,
        query: &str,
        language: Language,
        page: u32,
    ) -> Result<ResultPage, CatalogError>;
}

/// HTTP implementation of [`CatalogProvider`].
///
/// Issues exactly one network call per invocation: no caching, no
/// retries. Re-issuing is the controller's job, on intent change.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    credential: CredentialStatus,
}

impl CatalogClient {
    pub fn new(settings: &CatalogSettings, credential: CredentialStatus) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(settings.request_timeout_seconds.into()))
            .build()
            .expect("catalog http client should build with static options");

        Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            credential,
        }
    }

    async fn fetch_page(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<ResultPage, CatalogError> {
        // A missing credential must not cost a network round trip.
        let key = match &self.credential {
            CredentialStatus::Configured(key) => key.clone(),
            CredentialStatus::Unconfigured { reason } => {
                return Err(CatalogError::Auth {
                    reason: reason.clone(),
                })
            }
        };

        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", key.expose()), ("include_adult", "false")])
            .query(params)
            .send()
            .await
            .map_err(|source| CatalogError::Network { source })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CatalogError::Auth {
                reason: "the catalog service rejected the configured api key".to_string(),
            });
        }
        if !status.is_success() {
            return Err(CatalogError::Service {
                status: status.as_u16(),
            });
        }

        let raw: RawResultPage = response
            .json()
            .await
            .map_err(|source| CatalogError::Network { source })?;
        Ok(ResultPage::from(raw))
    }
}

#[async_trait]
impl CatalogProvider for CatalogClient {
    async fn fetch_category(
        &self,
        category: Category,
        language: Language,
        page: u32,
    ) -> Result<ResultPage, CatalogError> {
        debug_assert!(page >= 1, "page is clamped by the controller");
        self.fetch_page(
            &format!("movie/{}", category.as_path()),
            &[
                ("language", language.code().to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    async fn search(
        &self,
        query: &str,
        language: Language,
        page: u32,
    ) -> Result<ResultPage, CatalogError> {
        debug_assert!(page >= 1, "page is clamped by the controller");
        debug_assert!(
            !query.trim().is_empty(),
            "the controller never issues an empty search"
        );
        self.fetch_page(
            "search/movie",
            &[
                ("query", query.to_string()),
                ("language", language.code().to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured_client() -> CatalogClient {
        let settings = CatalogSettings::default();
        CatalogClient::new(
            &settings,
            CredentialStatus::Unconfigured {
                reason: "api key is not set".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_network_call() {
        let client = unconfigured_client();
        let err = client
            .fetch_category(Category::Popular, Language::En, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Auth { .. }));
    }

    #[tokio::test]
    async fn search_with_missing_credential_fails_the_same_way() {
        let client = unconfigured_client();
        let err = client.search("dune", Language::En, 1).await.unwrap_err();
        assert!(matches!(err, CatalogError::Auth { .. }));
    }
}
