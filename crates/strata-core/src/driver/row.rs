use crate::{stmt::Value, Result};

/// Read access to the columns of a row.
pub trait RowSource {
    /// Returns the value of `column`, matched ignoring case.
    fn get(&self, column: &str) -> Result<Value>;
}

/// Write access to the columns of a row.
pub trait RowSink {
    /// Sets the value of `column`, matched ignoring case.
    fn set(&mut self, column: &str, value: Value) -> Result<()>;
}

/// A row produced by a search cursor.
pub trait Row: RowSource + RowSink + Send {
    /// The store-assigned row identifier.
    fn id(&self) -> i64;

    /// Writes changes made through [`RowSink::set`] back to the table.
    fn store(&mut self) -> Result<()>;
}
