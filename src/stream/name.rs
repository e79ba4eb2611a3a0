use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a physical stream in the event store.
///
/// Stream names are produced by resolvers; the rest of the read path treats
/// them as opaque.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamName(String);

impl StreamName {
    pub fn new(name: impl Into<String>) -> Self {
        StreamName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StreamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StreamName {
    fn from(name: &str) -> Self {
        StreamName::new(name)
    }
}

impl From<String> for StreamName {
    fn from(name: String) -> Self {
        StreamName(name)
    }
}
