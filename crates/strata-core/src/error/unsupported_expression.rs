use super::Error;

/// Error when an expression cannot be compiled into predicate text.
///
/// Carries the offending operator or method. A query whose filter fails to
/// compile is never executed unfiltered.
#[derive(Debug)]
pub(super) struct UnsupportedExpression {
    node: Box<str>,
}

impl std::error::Error for UnsupportedExpression {}

impl core::fmt::Display for UnsupportedExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} is not supported", self.node)
    }
}

impl Error {
    /// Creates an unsupported expression error for the named node.
    pub fn unsupported_expression(node: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedExpression(
            UnsupportedExpression {
                node: node.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported expression error.
    pub fn is_unsupported_expression(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnsupportedExpression(_)))
    }
}
