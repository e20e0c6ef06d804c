use super::{RowSink, RowSource};
use crate::{
    err,
    geometry::SpatialReference,
    schema::{Field, TableSchema},
    stmt::Value,
    Result,
};

/// A detached row used to stage inserts.
///
/// Values are held as given; the store coerces them to the column types
/// when the row is inserted.
#[derive(Debug, Clone)]
pub struct RowBuffer {
    table: String,
    fields: Vec<Field>,
    values: Vec<Value>,

    /// Coordinate system of geometry values written to the buffer, when it
    /// differs from the table's.
    spatial_reference: Option<SpatialReference>,
}

impl RowBuffer {
    pub fn new(schema: &TableSchema) -> RowBuffer {
        RowBuffer {
            table: schema.name.clone(),
            fields: schema.fields.clone(),
            values: vec![Value::Null; schema.fields.len()],
            spatial_reference: None,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Column values, in the order of [`RowBuffer::fields`].
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn spatial_reference(&self) -> Option<SpatialReference> {
        self.spatial_reference
    }

    pub fn set_spatial_reference(&mut self, sr: Option<SpatialReference>) {
        self.spatial_reference = sr;
    }

    /// Resets every value to null so the buffer can be reused.
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(|value| *value = Value::Null);
    }

    fn position(&self, column: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|field| field.name.eq_ignore_ascii_case(column))
            .ok_or_else(|| err!("'{}' was not found in '{}'", column, self.table))
    }
}

impl RowSource for RowBuffer {
    fn get(&self, column: &str) -> Result<Value> {
        Ok(self.values[self.position(column)?].clone())
    }
}

impl RowSink for RowBuffer {
    fn set(&mut self, column: &str, value: Value) -> Result<()> {
        let position = self.position(column)?;
        self.values[position] = value;
        Ok(())
    }
}
