use super::Error;

/// Error when a record type cannot be mapped onto a table.
///
/// This occurs when:
/// - A record attribute has no matching column
/// - The table has no row identifier column, or more than one
/// - Two attributes resolve to the same column
///
/// Raised while the field mapping is built, before any row is read.
#[derive(Debug)]
pub(super) struct SchemaMismatch {
    message: Box<str>,
}

impl std::error::Error for SchemaMismatch {}

impl core::fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema mismatch: {}", self.message)
    }
}

impl Error {
    /// Creates a schema mismatch error.
    pub fn schema_mismatch(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaMismatch(SchemaMismatch {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema mismatch error.
    pub fn is_schema_mismatch(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::SchemaMismatch(_)))
    }
}
