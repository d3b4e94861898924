//! Attestation retrieval state machine
//!
//! Attestation generation is an asynchronous off-system process with
//! service-dependent latency, so the client polls at a fixed interval under a
//! hard deadline. Every non-success outcome of a poll keeps the loop alive,
//! whether the service has not indexed the burn yet, still reports it as
//! pending, or fails outright. The only exits are a completed attestation or
//! the deadline.

use std::time::Duration;

use bon::Builder;
use tracing::{debug, error, info};

use crate::error::{Result, SolverError};
use crate::protocol::{Attestation, AttestationStatus, DomainId};
use crate::traits::{AttestationApi, Clock};

/// Hard ceiling on a single attestation retrieval (5 minutes)
pub const ATTESTATION_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Fixed wait between polls (5 seconds)
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Polls an attestation source until a burn message is attested or the
/// deadline expires.
///
/// # Example
///
/// ```rust,no_run
/// use cctp_solver::providers::{IrisApi, TokioClock};
/// use cctp_solver::{AttestationClient, DomainId};
///
/// # async fn example() -> Result<(), cctp_solver::SolverError> {
/// let client = AttestationClient::builder()
///     .api(IrisApi::production()?)
///     .clock(TokioClock::new())
///     .build();
///
/// let attestation = client
///     .retrieve_attestation(DomainId::Base, "0xburnhash")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
pub struct AttestationClient<A: AttestationApi, C: Clock> {
    api: A,
    clock: C,

    /// Overall deadline for one retrieval
    #[builder(default = ATTESTATION_TIMEOUT)]
    timeout: Duration,

    /// Wait between polls, applied on every non-success branch
    #[builder(default = POLL_INTERVAL)]
    poll_interval: Duration,
}

impl<A: AttestationApi, C: Clock> AttestationClient<A, C> {
    /// Returns the configured timeout window
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the configured poll interval
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Polls until the first message for `burn_tx_hash` is attested.
    ///
    /// Transient failures (404, transport errors, malformed bodies, rate
    /// limiting) never abort the loop; they can only surface indirectly as
    /// [`SolverError::AttestationTimeout`] when the window elapses.
    pub async fn retrieve_attestation(
        &self,
        source_domain: DomainId,
        burn_tx_hash: &str,
    ) -> Result<Attestation> {
        debug!(
            source_domain = %source_domain,
            tx_hash = %burn_tx_hash,
            timeout_secs = self.timeout.as_secs(),
            poll_interval_secs = self.poll_interval.as_secs(),
            event = "attestation_polling_started"
        );

        let start = self.clock.now();
        let deadline = start + self.timeout;

        while self.clock.now() < deadline {
            match self.api.fetch_messages(source_domain, burn_tx_hash).await {
                Ok(response) => {
                    if let Some(first) = response.messages.into_iter().next() {
                        let status = first.status;
                        if status == AttestationStatus::Complete {
                            match first.into_attestation() {
                                Some(attestation) => {
                                    info!(
                                        message_len = attestation.message.len(),
                                        attestation_len = attestation.attestation.len(),
                                        event = "attestation_complete"
                                    );
                                    return Ok(attestation);
                                }
                                // Complete without payload is a malformed
                                // response; retry like any other glitch
                                None => {
                                    error!(event = "attestation_payload_missing");
                                }
                            }
                        } else {
                            debug!(status = ?status, event = "attestation_pending");
                        }
                    } else {
                        debug!(event = "attestation_no_messages");
                    }
                }
                Err(SolverError::AttestationNotFound) => {
                    debug!(event = "waiting_for_attestation");
                }
                Err(e) => {
                    error!(error = %e, event = "attestation_fetch_failed");
                }
            }

            self.clock.sleep(self.poll_interval).await;
        }

        let elapsed_secs = (self.clock.now() - start).as_secs();
        error!(elapsed_secs, event = "attestation_timeout");
        Err(SolverError::AttestationTimeout { elapsed_secs })
    }
}
