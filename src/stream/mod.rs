mod in_memory;
mod name;
mod record;
mod source;

pub use in_memory::InMemoryStreamSource;
pub use name::StreamName;
pub use record::RecordedEvent;
pub use source::{ReadStatus, StreamSlice, StreamSource};
