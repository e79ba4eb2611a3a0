use super::deserializer::SnapshotDeserializer;
use super::resolver::StreamNameResolver;

/// Immutable pairing of a stream name resolver with a snapshot deserializer.
///
/// This is the read path's sole extension point: construct one at startup
/// and share it read-only with every reader that uses it. Both components
/// are owned values, so a configuration can never be missing either one.
#[derive(Clone, Debug)]
pub struct ReadConfiguration<R, D> {
    resolver: R,
    deserializer: D,
}

impl<R, D> ReadConfiguration<R, D>
where
    R: StreamNameResolver,
    D: SnapshotDeserializer,
{
    pub fn new(resolver: R, deserializer: D) -> Self {
        ReadConfiguration {
            resolver,
            deserializer,
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn deserializer(&self) -> &D {
        &self.deserializer
    }
}
