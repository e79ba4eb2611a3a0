use std::fmt;

/// Error type for the snapshot read path.
///
/// Absence of a snapshot is not an error: the reader reports an absent,
/// tombstoned, or empty stream as `Ok(None)`. Every variant here is a real
/// failure that propagates to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotReadError {
    /// The aggregate identifier was empty, or rejected by the resolver.
    InvalidIdentifier(String),
    /// The stored payload could not be decoded into a snapshot.
    Deserialize(String),
    /// The store connection failed for a reason other than stream absence.
    Transport(String),
    LockPoisoned(&'static str),
}

impl fmt::Display for SnapshotReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotReadError::InvalidIdentifier(message) => {
                write!(f, "invalid aggregate identifier: {}", message)
            }
            SnapshotReadError::Deserialize(message) => {
                write!(f, "snapshot deserialization failed: {}", message)
            }
            SnapshotReadError::Transport(message) => {
                write!(f, "stream source failure: {}", message)
            }
            SnapshotReadError::LockPoisoned(operation) => {
                write!(f, "stream source lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for SnapshotReadError {}
