use crate::{Error, Record, Result};

use strata_core::{
    driver::{RowSink, RowSource},
    Mapping,
};

/// Builds a record from a row.
///
/// Starts from `T::default()` and assigns each mapped attribute whose column
/// is not null, converting the column value to the attribute's type. The
/// first conversion failure aborts the row.
pub fn to_record<T: Record, R: RowSource + ?Sized>(row: &R, mapping: &Mapping) -> Result<T> {
    let mut record = T::default();

    for field in mapping.fields() {
        let value = row.get(&field.column.name)?;

        if value.is_null() {
            continue;
        }

        let from = value.type_name();

        record.set(field.index, value).map_err(|err| {
            err.context(Error::materialization(
                std::any::type_name::<T>(),
                &field.attribute.name,
                from,
                field.attribute.ty.name(),
            ))
        })?;
    }

    Ok(record)
}

/// Writes a record's attributes into a row.
///
/// Only editable columns are written; the row identifier and read-only
/// columns keep whatever the store put there.
pub fn to_row<T: Record, S: RowSink + ?Sized>(
    record: &T,
    mapping: &Mapping,
    sink: &mut S,
) -> Result<()> {
    for field in mapping.writable() {
        sink.set(&field.column.name, record.get(field.index))?;
    }

    Ok(())
}
