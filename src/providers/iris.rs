//! Circle Iris API attestation provider implementation.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, trace};
use url::Url;

use crate::error::{Result, SolverError};
use crate::protocol::{DomainId, V2AttestationResponse};
use crate::traits::AttestationApi;

/// Circle Iris API base URL (production)
///
/// See <https://developers.circle.com/stablecoins/cctp-apis>
pub const IRIS_API: &str = "https://iris-api.circle.com";

/// Circle Iris API base URL (sandbox/testnet)
pub const IRIS_API_SANDBOX: &str = "https://iris-api-sandbox.circle.com";

/// Production attestation source backed by Circle's Iris v2 messages API.
///
/// Queries `GET <base>/v2/messages/{sourceDomain}?transactionHash={hash}`.
///
/// # Examples
///
/// ```rust,no_run
/// use cctp_solver::providers::IrisApi;
/// use cctp_solver::{AttestationApi, DomainId};
///
/// # async fn example() -> Result<(), cctp_solver::SolverError> {
/// let api = IrisApi::production()?;
/// let response = api.fetch_messages(DomainId::Base, "0xabc...").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IrisApi {
    base_url: Url,
    client: Client,
}

impl IrisApi {
    /// Creates an Iris client against an arbitrary base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: Client::new(),
        })
    }

    /// Creates a client for Circle's production environment.
    pub fn production() -> Result<Self> {
        Self::new(IRIS_API)
    }

    /// Creates a client for Circle's sandbox (testnet) environment.
    pub fn sandbox() -> Result<Self> {
        Self::new(IRIS_API_SANDBOX)
    }

    /// Constructs the v2 messages URL for a source domain and burn tx hash.
    fn messages_url(&self, source_domain: DomainId, transaction_hash: &str) -> Result<Url> {
        let mut url = self
            .base_url
            .join(&format!("/v2/messages/{}", source_domain.as_u32()))?;
        url.query_pairs_mut()
            .append_pair("transactionHash", transaction_hash);
        Ok(url)
    }
}

#[async_trait]
impl AttestationApi for IrisApi {
    async fn fetch_messages(
        &self,
        source_domain: DomainId,
        transaction_hash: &str,
    ) -> Result<V2AttestationResponse> {
        let url = self.messages_url(source_domain, transaction_hash)?;
        trace!(url = %url, event = "attestation_request");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(SolverError::Network)?;

        // 404 means "not yet indexed", which the poll loop retries
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!(
                source_domain = %source_domain,
                event = "attestation_not_found"
            );
            return Err(SolverError::AttestationNotFound);
        }

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(300);

            debug!(retry_after_seconds = retry_after, event = "rate_limit_exceeded");
            return Err(SolverError::RateLimitExceeded {
                retry_after_seconds: retry_after,
            });
        }

        response.error_for_status_ref()?;

        // Body as text first so malformed responses can be logged verbatim
        let body = response.text().await.map_err(SolverError::Network)?;
        let parsed: V2AttestationResponse = serde_json::from_str(&body)?;

        debug!(
            message_count = parsed.messages.len(),
            event = "attestation_response_parsed"
        );

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_url_format() {
        let api = IrisApi::production().unwrap();
        let url = api.messages_url(DomainId::Base, "0xdeadbeef").unwrap();
        insta::assert_snapshot!(
            url.as_str(),
            @"https://iris-api.circle.com/v2/messages/6?transactionHash=0xdeadbeef"
        );
    }

    #[test]
    fn test_messages_url_sandbox() {
        let api = IrisApi::sandbox().unwrap();
        let url = api.messages_url(DomainId::Ethereum, "0xabc").unwrap();
        insta::assert_snapshot!(
            url.as_str(),
            @"https://iris-api-sandbox.circle.com/v2/messages/0?transactionHash=0xabc"
        );
    }
}
