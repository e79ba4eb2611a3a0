use std::collections::HashMap;
use std::time::SystemTime;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A raw record handed back by a stream read.
///
/// The record is owned by the store round-trip that produced it; the read
/// path treats it as read-only and hands it to a deserializer to produce a
/// domain snapshot. Payload bytes are rendered as base64 when the record
/// itself is serialized to a text format.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RecordedEvent {
    pub event_name: String,
    #[serde(
        serialize_with = "payload_to_base64",
        deserialize_with = "payload_from_base64"
    )]
    pub payload: Vec<u8>,
    pub sequence: u64,
    pub timestamp: SystemTime,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

fn payload_to_base64<S: Serializer>(payload: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(payload))
}

fn payload_from_base64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    STANDARD.decode(&encoded).map_err(serde::de::Error::custom)
}

impl RecordedEvent {
    pub fn new(event_name: impl Into<String>, payload: Vec<u8>, sequence: u64) -> Self {
        RecordedEvent {
            event_name: event_name.into(),
            payload,
            sequence,
            timestamp: SystemTime::now(),
            metadata: HashMap::new(),
        }
    }

    /// Create a record with metadata.
    pub fn with_metadata(
        event_name: impl Into<String>,
        payload: Vec<u8>,
        sequence: u64,
        metadata: HashMap<String, String>,
    ) -> Self {
        RecordedEvent {
            event_name: event_name.into(),
            payload,
            sequence,
            timestamp: SystemTime::now(),
            metadata,
        }
    }

    /// Get the raw payload bytes.
    pub fn payload_bytes(&self) -> &[u8] {
        &self.payload
    }

    /// Get a metadata value by key.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }
}
