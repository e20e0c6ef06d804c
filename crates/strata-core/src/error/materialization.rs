use super::Error;

/// Error when a store row cannot be turned into a record.
///
/// Raised per row. The query that produced the row stops at this point;
/// partially populated records are never returned.
#[derive(Debug)]
pub(super) struct MaterializationError {
    record: Box<str>,
    attribute: Box<str>,
    from: Box<str>,
    to: Box<str>,
}

impl std::error::Error for MaterializationError {}

impl core::fmt::Display for MaterializationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "could not convert {} to {} ({}.{})",
            self.from, self.to, self.record, self.attribute
        )
    }
}

impl Error {
    /// Creates a materialization error naming the source value type, the
    /// target attribute type and the record attribute being populated.
    pub fn materialization(
        record: impl Into<String>,
        attribute: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::Materialization(MaterializationError {
            record: record.into().into(),
            attribute: attribute.into().into(),
            from: from.into().into(),
            to: to.into().into(),
        }))
    }

    /// Returns `true` if this error is a materialization error.
    pub fn is_materialization(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::Materialization(_)))
    }
}
