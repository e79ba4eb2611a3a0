use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::SnapshotReadError;
use crate::stream::RecordedEvent;

/// Maps a raw stored record to a domain snapshot value.
///
/// The reader hands an implementation the most recent record of the resolved
/// stream. Payload versioning and migration policy belong entirely to the
/// implementation; a payload it cannot decode is a data-integrity failure,
/// not an absent snapshot.
pub trait SnapshotDeserializer: Send + Sync {
    /// Domain snapshot type this deserializer produces.
    type Snapshot;

    fn deserialize(&self, record: &RecordedEvent) -> Result<Self::Snapshot, SnapshotReadError>;
}

/// Deserializer for snapshots stored as JSON payloads.
pub struct JsonSnapshotDeserializer<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonSnapshotDeserializer<T> {
    pub fn new() -> Self {
        JsonSnapshotDeserializer {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonSnapshotDeserializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonSnapshotDeserializer<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> SnapshotDeserializer for JsonSnapshotDeserializer<T> {
    type Snapshot = T;

    fn deserialize(&self, record: &RecordedEvent) -> Result<T, SnapshotReadError> {
        serde_json::from_slice(record.payload_bytes())
            .map_err(|e| SnapshotReadError::Deserialize(format!("json payload: {e}")))
    }
}

/// Deserializer for snapshots stored as bitcode payloads.
pub struct BitcodeSnapshotDeserializer<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> BitcodeSnapshotDeserializer<T> {
    pub fn new() -> Self {
        BitcodeSnapshotDeserializer {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for BitcodeSnapshotDeserializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for BitcodeSnapshotDeserializer<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> SnapshotDeserializer for BitcodeSnapshotDeserializer<T> {
    type Snapshot = T;

    fn deserialize(&self, record: &RecordedEvent) -> Result<T, SnapshotReadError> {
        bitcode::deserialize(record.payload_bytes())
            .map_err(|e| SnapshotReadError::Deserialize(format!("bitcode payload: {e}")))
    }
}
