use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::SnapshotReadError;

use super::name::StreamName;
use super::record::RecordedEvent;
use super::source::{ReadStatus, StreamSlice, StreamSource};

#[derive(Clone, Debug)]
enum StreamState {
    Live(Vec<RecordedEvent>),
    Tombstoned,
}

/// In-memory stream source backed by `Arc<RwLock<HashMap>>`.
///
/// Clone-friendly (cloning shares the same underlying storage). Serves as
/// the reference implementation of the slice classification contract:
/// absent, tombstoned, empty, and populated streams each produce the slice
/// the reader expects.
#[derive(Clone)]
pub struct InMemoryStreamSource {
    streams: Arc<RwLock<HashMap<StreamName, StreamState>>>,
}

impl Default for InMemoryStreamSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStreamSource {
    pub fn new() -> Self {
        Self {
            streams: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Append a record to the named stream, creating the stream if needed.
    /// Appending to a tombstoned stream fails.
    pub fn append(
        &self,
        stream: impl Into<StreamName>,
        record: RecordedEvent,
    ) -> Result<(), SnapshotReadError> {
        let stream = stream.into();
        let mut streams = self
            .streams
            .write()
            .map_err(|_| SnapshotReadError::LockPoisoned("stream append"))?;
        match streams.entry(stream).or_insert_with(|| StreamState::Live(Vec::new())) {
            StreamState::Live(records) => {
                records.push(record);
                Ok(())
            }
            StreamState::Tombstoned => {
                Err(SnapshotReadError::Transport("stream is deleted".into()))
            }
        }
    }

    /// Register a stream that exists but holds no records, as a scavenged or
    /// truncated stream would.
    pub fn create_empty(&self, stream: impl Into<StreamName>) -> Result<(), SnapshotReadError> {
        let mut streams = self
            .streams
            .write()
            .map_err(|_| SnapshotReadError::LockPoisoned("stream create"))?;
        streams.insert(stream.into(), StreamState::Live(Vec::new()));
        Ok(())
    }

    /// Delete the named stream, leaving a tombstone behind.
    pub fn tombstone(&self, stream: impl Into<StreamName>) -> Result<(), SnapshotReadError> {
        let mut streams = self
            .streams
            .write()
            .map_err(|_| SnapshotReadError::LockPoisoned("stream delete"))?;
        streams.insert(stream.into(), StreamState::Tombstoned);
        Ok(())
    }
}

impl StreamSource for InMemoryStreamSource {
    fn read_backward(
        &self,
        stream: &StreamName,
        limit: usize,
    ) -> Result<StreamSlice, SnapshotReadError> {
        let streams = self
            .streams
            .read()
            .map_err(|_| SnapshotReadError::LockPoisoned("stream read"))?;
        match streams.get(stream) {
            None => Ok(StreamSlice::not_found()),
            Some(StreamState::Tombstoned) => Ok(StreamSlice::deleted()),
            Some(StreamState::Live(records)) => {
                let taken: Vec<RecordedEvent> =
                    records.iter().rev().take(limit).cloned().collect();
                // The sentinel reflects the stream, not the returned page:
                // None only when the stream itself holds no records.
                let next_sequence = match taken.last() {
                    Some(oldest_returned) => Some(oldest_returned.sequence.saturating_sub(1)),
                    None => records.last().map(|newest| newest.sequence),
                };
                Ok(StreamSlice {
                    status: ReadStatus::Success,
                    next_sequence,
                    records: taken,
                })
            }
        }
    }
}
