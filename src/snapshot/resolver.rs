use crate::error::SnapshotReadError;
use crate::stream::StreamName;

/// Maps an aggregate identifier to the physical stream holding its
/// snapshot history.
///
/// Implementations must be deterministic (the same identifier always yields
/// the same stream name) and side-effect free. Whether two identifiers may
/// share a stream is resolver policy.
pub trait StreamNameResolver: Send + Sync {
    /// Resolve `identifier` to a stream name, or reject a malformed one
    /// with `SnapshotReadError::InvalidIdentifier`.
    fn resolve(&self, identifier: &str) -> Result<StreamName, SnapshotReadError>;
}

fn require_non_empty(identifier: &str) -> Result<&str, SnapshotReadError> {
    if identifier.is_empty() {
        return Err(SnapshotReadError::InvalidIdentifier(
            "identifier is empty".into(),
        ));
    }
    Ok(identifier)
}

/// Resolver that uses the identifier itself as the stream name.
#[derive(Clone, Debug, Default)]
pub struct PassThroughStreamNameResolver;

impl StreamNameResolver for PassThroughStreamNameResolver {
    fn resolve(&self, identifier: &str) -> Result<StreamName, SnapshotReadError> {
        Ok(StreamName::new(require_non_empty(identifier)?))
    }
}

/// Resolver producing category streams of the form `"{prefix}-{identifier}"`,
/// e.g. prefix `orderSnapshots` and identifier `order-42` resolve to
/// `orderSnapshots-order-42`.
#[derive(Clone, Debug)]
pub struct PrefixedStreamNameResolver {
    prefix: String,
}

impl PrefixedStreamNameResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        PrefixedStreamNameResolver {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl StreamNameResolver for PrefixedStreamNameResolver {
    fn resolve(&self, identifier: &str) -> Result<StreamName, SnapshotReadError> {
        let identifier = require_non_empty(identifier)?;
        Ok(StreamName::new(format!("{}-{}", self.prefix, identifier)))
    }
}
