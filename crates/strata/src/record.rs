use crate::{Error, Result};

use strata_core::{schema::Attribute, stmt::Value};

/// An application type whose values are stored as rows of a table.
///
/// Implementations are generated by `#[derive(Record)]`. Attributes are
/// addressed by index: a record's own fields come first, in declaration
/// order, followed by the attributes of each `#[flatten]`ed record.
pub trait Record: Default + Sized + 'static {
    /// Typed paths to the record's attributes, used to build filters.
    type Fields;

    /// Number of attributes, flattened records included.
    const ATTRIBUTE_COUNT: usize;

    fn fields() -> Self::Fields;

    /// Describes every attribute, in index order.
    fn attributes() -> Vec<Attribute>;

    /// Reads the attribute at `index`.
    fn get(&self, index: usize) -> Value;

    /// Writes the attribute at `index`, converting `value` to the field's
    /// type.
    fn set(&mut self, index: usize, value: Value) -> Result<()>;
}

/// Error returned when an attribute index is out of range for `T`.
pub fn no_such_attribute<T: Record>(index: usize) -> Error {
    strata_core::err!(
        "{} has no attribute at index {index} (it has {})",
        std::any::type_name::<T>(),
        T::ATTRIBUTE_COUNT
    )
}
