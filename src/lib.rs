mod error;
mod snapshot;
mod stream;

pub use error::SnapshotReadError;
pub use snapshot::{
    BitcodeSnapshotDeserializer, JsonSnapshotDeserializer, PassThroughStreamNameResolver,
    PrefixedStreamNameResolver, ReadConfiguration, SnapshotDeserializer, SnapshotReader,
    StreamNameResolver,
};
pub use stream::{
    InMemoryStreamSource, ReadStatus, RecordedEvent, StreamName, StreamSlice, StreamSource,
};
