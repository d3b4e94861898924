//! CCTP protocol types and definitions
//!
//! Core protocol-level types used in Circle's Cross-Chain Transfer Protocol
//! (CCTP) v2: domain identifiers, finality thresholds, and attestation
//! responses.

mod attestation;
mod domain_id;
mod finality;

pub use attestation::{Attestation, AttestationStatus, V2AttestationResponse, V2Message};
pub use domain_id::DomainId;
pub use finality::FinalityThreshold;
