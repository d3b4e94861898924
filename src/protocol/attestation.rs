use alloy_primitives::{hex::FromHex, Bytes};
use serde::{Deserialize, Deserializer};

/// Response from the CCTP v2 messages API
///
/// The v2 endpoint (`/v2/messages/{sourceDomain}?transactionHash={tx}`)
/// returns a wrapper containing an array of messages, since a single
/// transaction can emit multiple `MessageSent` events.
///
/// # Example Response
///
/// ```json
/// {
///   "messages": [
///     {
///       "status": "complete",
///       "message": "0x...",
///       "attestation": "0x..."
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct V2AttestationResponse {
    /// Array of messages emitted by the transaction
    pub messages: Vec<V2Message>,
}

/// A single message in the v2 attestation response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V2Message {
    /// Status of the attestation
    pub status: AttestationStatus,

    /// The original message bytes from the MessageSent event
    #[serde(default, deserialize_with = "deserialize_optional_bytes_or_pending")]
    pub message: Option<Bytes>,

    /// The signed attestation bytes (null/PENDING until complete)
    #[serde(default, deserialize_with = "deserialize_optional_bytes_or_pending")]
    pub attestation: Option<Bytes>,
}

impl V2Message {
    /// Extracts a completed attestation, or `None` if the message is not yet
    /// attested or the payload is incomplete.
    pub fn into_attestation(self) -> Option<Attestation> {
        if self.status != AttestationStatus::Complete {
            return None;
        }
        Some(Attestation {
            message: self.message?,
            attestation: self.attestation?,
        })
    }
}

/// A completed attestation, ready to be submitted via `receiveMessage`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attestation {
    /// The message bytes emitted by the burn transaction
    pub message: Bytes,
    /// Circle's signature over the message
    pub attestation: Bytes,
}

/// Status of an attestation as reported by the service.
///
/// Anything the API reports that is not exactly `"complete"` is treated as
/// pending by the poll loop, including statuses added in future API versions
/// (captured by `Unknown`).
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttestationStatus {
    Complete,
    Pending,
    PendingConfirmations,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Custom deserializer that handles the Circle API quirk where bytes fields
/// may be the string "PENDING" instead of null
///
/// - Valid hex string (with or without "0x") deserializes to `Some(Bytes)`
/// - "PENDING"/"pending", null, missing, or empty string yields `None`
/// - Invalid hex is an error
fn deserialize_optional_bytes_or_pending<'de, D>(deserializer: D) -> Result<Option<Bytes>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;

    match opt {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("pending") => Ok(None),
        Some(s) => {
            let bytes = Bytes::from_hex(s).map_err(serde::de::Error::custom)?;
            Ok(Some(bytes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_complete_response() {
        let json = r#"{
            "messages": [
                {
                    "status": "complete",
                    "message": "0xdeadbeef",
                    "attestation": "0x1234abcd"
                }
            ]
        }"#;
        let response: V2AttestationResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.messages.len(), 1);
        assert_eq!(response.messages[0].status, AttestationStatus::Complete);
        assert_eq!(
            response.messages[0].message.as_ref().unwrap().to_vec(),
            vec![0xde, 0xad, 0xbe, 0xef]
        );
        assert_eq!(
            response.messages[0].attestation.as_ref().unwrap().to_vec(),
            vec![0x12, 0x34, 0xab, 0xcd]
        );
    }

    #[test]
    fn test_deserialize_pending_with_nulls() {
        let json = r#"{
            "messages": [
                {
                    "status": "pending",
                    "message": null,
                    "attestation": null
                }
            ]
        }"#;
        let response: V2AttestationResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.messages[0].status, AttestationStatus::Pending);
        assert!(response.messages[0].message.is_none());
        assert!(response.messages[0].attestation.is_none());
    }

    #[test]
    fn test_deserialize_pending_with_string() {
        let json = r#"{
            "messages": [
                {
                    "status": "pending_confirmations",
                    "message": "PENDING",
                    "attestation": "pending"
                }
            ]
        }"#;
        let response: V2AttestationResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.messages[0].status,
            AttestationStatus::PendingConfirmations
        );
        assert!(response.messages[0].message.is_none());
        assert!(response.messages[0].attestation.is_none());
    }

    #[test]
    fn test_deserialize_unknown_status() {
        let json = r#"{"messages": [{"status": "some_future_state"}]}"#;
        let response: V2AttestationResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.messages[0].status, AttestationStatus::Unknown);
    }

    #[test]
    fn test_deserialize_empty_messages() {
        let json = r#"{"messages": []}"#;
        let response: V2AttestationResponse = serde_json::from_str(json).unwrap();

        assert!(response.messages.is_empty());
    }

    #[test]
    fn test_deserialize_invalid_hex_fails() {
        let json = r#"{"messages": [{"status": "complete", "message": "not_hex"}]}"#;
        let result = serde_json::from_str::<V2AttestationResponse>(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_into_attestation_complete() {
        let message = V2Message {
            status: AttestationStatus::Complete,
            message: Some(Bytes::from(vec![0xaa])),
            attestation: Some(Bytes::from(vec![0xbb])),
        };

        let attestation = message.into_attestation().unwrap();
        assert_eq!(attestation.message.to_vec(), vec![0xaa]);
        assert_eq!(attestation.attestation.to_vec(), vec![0xbb]);
    }

    #[test]
    fn test_into_attestation_pending_is_none() {
        let message = V2Message {
            status: AttestationStatus::Pending,
            message: Some(Bytes::from(vec![0xaa])),
            attestation: None,
        };

        assert!(message.into_attestation().is_none());
    }

    #[test]
    fn test_into_attestation_complete_without_bytes_is_none() {
        // Complete status with missing payload is a malformed response
        let message = V2Message {
            status: AttestationStatus::Complete,
            message: None,
            attestation: Some(Bytes::from(vec![0xbb])),
        };

        assert!(message.into_attestation().is_none());
    }
}
