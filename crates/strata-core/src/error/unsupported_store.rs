use super::Error;

/// Error when a connection descriptor names a store kind that is unknown or
/// that the selected driver does not handle.
#[derive(Debug)]
pub(super) struct UnsupportedStore {
    message: Box<str>,
}

impl std::error::Error for UnsupportedStore {}

impl core::fmt::Display for UnsupportedStore {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported store: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported store error.
    pub fn unsupported_store(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedStore(UnsupportedStore {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported store error.
    pub fn is_unsupported_store(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnsupportedStore(_)))
    }
}
