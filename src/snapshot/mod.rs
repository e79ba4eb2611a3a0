mod config;
mod deserializer;
mod reader;
mod resolver;

pub use config::ReadConfiguration;
pub use deserializer::{
    BitcodeSnapshotDeserializer, JsonSnapshotDeserializer, SnapshotDeserializer,
};
pub use reader::SnapshotReader;
pub use resolver::{
    PassThroughStreamNameResolver, PrefixedStreamNameResolver, StreamNameResolver,
};
