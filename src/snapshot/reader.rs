use crate::error::SnapshotReadError;
use crate::stream::{ReadStatus, StreamSource};

use super::config::ReadConfiguration;
use super::deserializer::SnapshotDeserializer;
use super::resolver::StreamNameResolver;

/// Reads the most recent snapshot of an aggregate from its snapshot stream.
///
/// Each read is one bounded backward query against the store: resolve the
/// identifier to a stream, fetch the single record at the stream's logical
/// end, and deserialize it. The reader keeps no state between calls, never
/// retries, and never writes.
#[derive(Clone, Debug)]
pub struct SnapshotReader<S, R, D> {
    connection: S,
    configuration: ReadConfiguration<R, D>,
}

impl<S, R, D> SnapshotReader<S, R, D>
where
    S: StreamSource,
    R: StreamNameResolver,
    D: SnapshotDeserializer,
{
    pub fn new(connection: S, configuration: ReadConfiguration<R, D>) -> Self {
        SnapshotReader {
            connection,
            configuration,
        }
    }

    /// The store connection reads go through.
    pub fn connection(&self) -> &S {
        &self.connection
    }

    /// The configuration used to read.
    pub fn configuration(&self) -> &ReadConfiguration<R, D> {
        &self.configuration
    }

    /// Read the most recent snapshot for `identifier`, if one exists.
    ///
    /// Returns `Ok(None)` when the resolved stream is absent, tombstoned, or
    /// holds no records. A missing snapshot is a normal state; callers fall
    /// back to replaying the aggregate's full event history. Resolver,
    /// deserializer, and transport failures propagate unchanged; a corrupt
    /// record is never reported as absence.
    pub fn read_optional(
        &self,
        identifier: &str,
    ) -> Result<Option<D::Snapshot>, SnapshotReadError> {
        if identifier.is_empty() {
            return Err(SnapshotReadError::InvalidIdentifier(
                "identifier is empty".into(),
            ));
        }
        let stream = self.configuration.resolver().resolve(identifier)?;
        let slice = self.connection.read_backward(&stream, 1)?;
        match slice.status {
            ReadStatus::NotFound | ReadStatus::Deleted => Ok(None),
            ReadStatus::Success => {
                if slice.next_sequence.is_none() {
                    return Ok(None);
                }
                match slice.records.first() {
                    None => Ok(None),
                    Some(record) => {
                        Ok(Some(self.configuration.deserializer().deserialize(record)?))
                    }
                }
            }
        }
    }
}
