use std::fmt;

/// Opaque reference to a binary object in the external image storage.
///
/// Only the storage service can turn a reference into a retrievable
/// URL. References are what gets persisted; resolved URLs never are.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for ImageRef {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for ImageRef {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<ImageRef> for String {
    fn from(from: ImageRef) -> Self {
        from.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
