//! Trait seams for attestation retrieval and time control
//!
//! The attestation poll loop depends on an external HTTP service and on
//! wall-clock time. Both are abstracted behind traits so tests can drive the
//! loop through its full timeout window without real network calls or real
//! delays.

use async_trait::async_trait;
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::protocol::{DomainId, V2AttestationResponse};

/// A source of CCTP v2 attestation responses.
///
/// The production implementation is [`IrisApi`](crate::providers::IrisApi),
/// which queries Circle's Iris service. Fakes can simulate not-found
/// sequences, outages, and state progressions.
///
/// # Errors
///
/// Implementations return [`SolverError::AttestationNotFound`] when the
/// service has not yet indexed the transaction (HTTP 404), and other error
/// variants for transport or service failures. The poll loop treats every
/// error as transient.
///
/// [`SolverError::AttestationNotFound`]: crate::SolverError::AttestationNotFound
#[async_trait]
pub trait AttestationApi: Send + Sync {
    /// Fetches the messages emitted by a burn transaction on `source_domain`.
    async fn fetch_messages(
        &self,
        source_domain: DomainId,
        transaction_hash: &str,
    ) -> Result<V2AttestationResponse>;
}

/// Trait for time-based operations.
///
/// Abstracts sleep and time queries so tests can fast-forward through
/// polling loops and timeouts without waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Asynchronously sleeps for the given duration.
    async fn sleep(&self, duration: Duration);

    /// Returns the current instant, used for deadline arithmetic.
    fn now(&self) -> Instant;
}
