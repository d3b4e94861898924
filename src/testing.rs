//! Test fakes for the attestation API and clock seams
//!
//! These fakes let tests drive the attestation poll loop through not-found
//! sequences, outages, status progressions, and full timeout windows without
//! network access or wall-clock delays. They are public so integration tests
//! (and downstream consumers) can exercise the facade end to end.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use alloy_primitives::{hex::FromHex, Bytes};
use async_trait::async_trait;

use crate::error::{Result, SolverError};
use crate::protocol::{AttestationStatus, DomainId, V2AttestationResponse, V2Message};
use crate::traits::{AttestationApi, Clock};

// ============================================================================
// Fake Attestation API
// ============================================================================

#[derive(Debug, Clone)]
enum FakeOutcome {
    /// HTTP 404: not indexed yet
    NotFound,
    /// Transport-level failure
    Outage,
    Response(V2AttestationResponse),
}

/// A fake attestation source that replays a configured outcome sequence.
///
/// Each call for a transaction hash consumes the next outcome; once the
/// sequence is exhausted the last outcome repeats. Unconfigured hashes
/// always return not-found.
#[derive(Clone, Debug, Default)]
pub struct FakeAttestationApi {
    outcomes: Arc<Mutex<HashMap<String, Vec<FakeOutcome>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

impl FakeAttestationApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, tx_hash: &str, outcome: FakeOutcome) {
        self.outcomes
            .lock()
            .unwrap()
            .entry(tx_hash.to_string())
            .or_default()
            .push(outcome);
    }

    fn complete_response(message_hex: &str, attestation_hex: &str) -> V2AttestationResponse {
        V2AttestationResponse {
            messages: vec![V2Message {
                status: AttestationStatus::Complete,
                message: Some(Bytes::from_hex(message_hex).unwrap()),
                attestation: Some(Bytes::from_hex(attestation_hex).unwrap()),
            }],
        }
    }

    /// Configure an immediately complete attestation
    pub fn add_complete(&self, tx_hash: &str, message_hex: &str, attestation_hex: &str) {
        self.push(
            tx_hash,
            FakeOutcome::Response(Self::complete_response(message_hex, attestation_hex)),
        );
    }

    /// Configure `not_found_count` 404 responses followed by completion
    pub fn add_not_found_then_complete(
        &self,
        tx_hash: &str,
        not_found_count: usize,
        message_hex: &str,
        attestation_hex: &str,
    ) {
        for _ in 0..not_found_count {
            self.push(tx_hash, FakeOutcome::NotFound);
        }
        self.add_complete(tx_hash, message_hex, attestation_hex);
    }

    /// Configure a status progression followed by completion
    pub fn add_status_sequence(
        &self,
        tx_hash: &str,
        statuses: &[AttestationStatus],
        message_hex: &str,
        attestation_hex: &str,
    ) {
        for status in statuses {
            self.push(
                tx_hash,
                FakeOutcome::Response(V2AttestationResponse {
                    messages: vec![V2Message {
                        status: *status,
                        message: None,
                        attestation: None,
                    }],
                }),
            );
        }
        self.add_complete(tx_hash, message_hex, attestation_hex);
    }

    /// Configure a pending response that never completes (for timeout tests)
    pub fn add_always_pending(&self, tx_hash: &str) {
        self.push(
            tx_hash,
            FakeOutcome::Response(V2AttestationResponse {
                messages: vec![V2Message {
                    status: AttestationStatus::Pending,
                    message: None,
                    attestation: None,
                }],
            }),
        );
    }

    /// Configure `outage_count` transport failures followed by completion
    pub fn add_outages_then_complete(
        &self,
        tx_hash: &str,
        outage_count: usize,
        message_hex: &str,
        attestation_hex: &str,
    ) {
        for _ in 0..outage_count {
            self.push(tx_hash, FakeOutcome::Outage);
        }
        self.add_complete(tx_hash, message_hex, attestation_hex);
    }

    /// Configure a complete-status response with a missing payload, then a
    /// well-formed completion
    pub fn add_malformed_complete_then_complete(
        &self,
        tx_hash: &str,
        message_hex: &str,
        attestation_hex: &str,
    ) {
        self.push(
            tx_hash,
            FakeOutcome::Response(V2AttestationResponse {
                messages: vec![V2Message {
                    status: AttestationStatus::Complete,
                    message: None,
                    attestation: None,
                }],
            }),
        );
        self.add_complete(tx_hash, message_hex, attestation_hex);
    }

    /// Number of fetches observed for a transaction hash
    pub fn call_count(&self, tx_hash: &str) -> usize {
        self.call_counts
            .lock()
            .unwrap()
            .get(tx_hash)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl AttestationApi for FakeAttestationApi {
    async fn fetch_messages(
        &self,
        _source_domain: DomainId,
        transaction_hash: &str,
    ) -> Result<V2AttestationResponse> {
        let call_index = {
            let mut counts = self.call_counts.lock().unwrap();
            let count = counts.entry(transaction_hash.to_string()).or_insert(0);
            let index = *count;
            *count += 1;
            index
        };

        let outcomes = self.outcomes.lock().unwrap();
        let outcome = outcomes
            .get(transaction_hash)
            .and_then(|seq| seq.get(call_index.min(seq.len().saturating_sub(1))))
            .cloned();

        match outcome {
            None => Err(SolverError::AttestationNotFound),
            Some(FakeOutcome::NotFound) => Err(SolverError::AttestationNotFound),
            Some(FakeOutcome::Outage) => Err(SolverError::Api("simulated outage".to_string())),
            Some(FakeOutcome::Response(response)) => Ok(response),
        }
    }
}

// ============================================================================
// Fake Clock
// ============================================================================

/// A fake clock that advances a virtual instant on every sleep.
///
/// Lets timeout behavior be tested instantly: each `sleep` call records its
/// duration and moves the clock forward by it.
#[derive(Clone, Debug)]
pub struct FakeClock {
    current_time: Arc<Mutex<Instant>>,
    sleep_log: Arc<Mutex<Vec<Duration>>>,
}

impl Default for FakeClock {
    fn default() -> Self {
        Self {
            current_time: Arc::new(Mutex::new(Instant::now())),
            sleep_log: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fast-forward the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut time = self.current_time.lock().unwrap();
        *time += duration;
    }

    /// Total time "slept" by this clock
    pub fn total_sleep_time(&self) -> Duration {
        self.sleep_log.lock().unwrap().iter().sum()
    }

    /// Number of times sleep was called
    pub fn sleep_count(&self) -> usize {
        self.sleep_log.lock().unwrap().len()
    }
}

#[async_trait]
impl Clock for FakeClock {
    async fn sleep(&self, duration: Duration) {
        self.sleep_log.lock().unwrap().push(duration);
        self.advance(duration);
    }

    fn now(&self) -> Instant {
        *self.current_time.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_clock_tracks_sleep_calls() {
        let clock = FakeClock::new();

        clock.sleep(Duration::from_secs(5)).await;
        clock.sleep(Duration::from_secs(10)).await;

        assert_eq!(clock.sleep_count(), 2);
        assert_eq!(clock.total_sleep_time(), Duration::from_secs(15));
    }

    #[tokio::test]
    async fn test_fake_clock_advances_on_sleep() {
        let clock = FakeClock::new();
        let start = clock.now();

        clock.sleep(Duration::from_secs(30)).await;

        assert_eq!(clock.now() - start, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_fake_api_sequence_then_repeats_last() {
        let api = FakeAttestationApi::new();
        api.add_always_pending("0x1");

        for _ in 0..3 {
            let response = api.fetch_messages(DomainId::Base, "0x1").await.unwrap();
            assert_eq!(response.messages[0].status, AttestationStatus::Pending);
        }
        assert_eq!(api.call_count("0x1"), 3);
    }

    #[tokio::test]
    async fn test_fake_api_unconfigured_is_not_found() {
        let api = FakeAttestationApi::new();

        let result = api.fetch_messages(DomainId::Base, "0xmissing").await;
        assert!(matches!(result, Err(SolverError::AttestationNotFound)));
    }
}
