use crate::error::SnapshotReadError;

use super::name::StreamName;
use super::record::RecordedEvent;

/// Outcome classification of a stream read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadStatus {
    /// The stream exists and was read.
    Success,
    /// The stream has never been written.
    NotFound,
    /// The stream was deleted (tombstoned).
    Deleted,
}

/// Records read backward from a stream's logical end, plus the status and
/// sentinel needed to classify the result.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamSlice {
    pub status: ReadStatus,
    /// Backward-read continuation point reported by the store. `None` is the
    /// sentinel for a stream that exists but holds no records.
    pub next_sequence: Option<u64>,
    /// Records in reverse chronological order (most recent first).
    pub records: Vec<RecordedEvent>,
}

impl StreamSlice {
    pub fn not_found() -> Self {
        StreamSlice {
            status: ReadStatus::NotFound,
            next_sequence: None,
            records: Vec::new(),
        }
    }

    pub fn deleted() -> Self {
        StreamSlice {
            status: ReadStatus::Deleted,
            next_sequence: None,
            records: Vec::new(),
        }
    }
}

/// Read access to named streams in the event store.
///
/// This is the single capability the snapshot read path depends on.
/// Implementations own their transport, pooling, and retry policy; failures
/// other than stream absence surface as `SnapshotReadError::Transport`.
pub trait StreamSource: Send + Sync {
    /// Read up to `limit` records backward from the logical end of `stream`.
    fn read_backward(
        &self,
        stream: &StreamName,
        limit: usize,
    ) -> Result<StreamSlice, SnapshotReadError>;
}
