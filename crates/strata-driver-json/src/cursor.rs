use crate::{
    spatial::Projection,
    table::{Shared, StoredRow},
};

use std::{sync::Arc, vec};
use strata_core::{
    bail,
    driver::{InsertCursor, Row, RowBuffer, RowCursor, RowSink, RowSource},
    err,
    stmt::Value,
    Result,
};

/// Rows of a search, in result order.
///
/// While the cursor is alive the table refuses bulk deletes and inserts.
pub(crate) struct SearchRows {
    table: Arc<Shared>,
    rows: vec::IntoIter<StoredRow>,
    projection: Option<Projection>,
}

/// One row of a search. Changes made with [`RowSink::set`] are held until
/// [`Row::store`].
pub(crate) struct JsonRow {
    table: Arc<Shared>,
    row: StoredRow,
    changed: Vec<bool>,
    projection: Option<Projection>,
}

pub(crate) struct InsertRows {
    table: Arc<Shared>,
}

impl SearchRows {
    pub(crate) fn new(
        table: Arc<Shared>,
        rows: Vec<StoredRow>,
        projection: Option<Projection>,
    ) -> SearchRows {
        SearchRows {
            table,
            rows: rows.into_iter(),
            projection,
        }
    }
}

impl RowCursor for SearchRows {
    fn next_row(&mut self) -> Result<Option<Box<dyn Row>>> {
        Ok(self.rows.next().map(|row| {
            Box::new(JsonRow {
                table: self.table.clone(),
                changed: vec![false; row.values.len()],
                row,
                projection: self.projection,
            }) as Box<dyn Row>
        }))
    }
}

impl Drop for SearchRows {
    fn drop(&mut self) {
        if let Ok(mut state) = self.table.lock() {
            state.open_searches = state.open_searches.saturating_sub(1);
        }
    }
}

impl JsonRow {
    fn position(&self, column: &str) -> Result<usize> {
        self.table
            .schema
            .position(column)
            .ok_or_else(|| err!("'{}' was not found in '{}'", column, self.table.schema.name))
    }
}

impl RowSource for JsonRow {
    fn get(&self, column: &str) -> Result<Value> {
        Ok(self.row.values[self.position(column)?].clone())
    }
}

impl RowSink for JsonRow {
    fn set(&mut self, column: &str, value: Value) -> Result<()> {
        let position = self.position(column)?;
        let field = &self.table.schema.fields[position];

        if !field.is_writable() {
            bail!("'{}' of '{}' is not editable", field.name, self.table.schema.name);
        }

        self.row.values[position] = self.table.coerce(field, value)?;
        self.changed[position] = true;
        Ok(())
    }
}

impl Row for JsonRow {
    fn id(&self) -> i64 {
        self.row.id
    }

    fn store(&mut self) -> Result<()> {
        let mut changes = vec![];

        for (position, changed) in self.changed.iter().enumerate() {
            if !changed {
                continue;
            }

            let value = self.row.values[position].clone();
            let value = match &self.projection {
                Some(projection) => projection.to_table(value)?,
                None => value,
            };

            changes.push((position, value));
        }

        if changes.is_empty() {
            return Ok(());
        }

        self.table.store(self.row.id, changes)?;
        self.changed.fill(false);
        Ok(())
    }
}

impl InsertRows {
    pub(crate) fn new(table: Arc<Shared>) -> InsertRows {
        InsertRows { table }
    }
}

impl InsertCursor for InsertRows {
    fn insert(&mut self, row: &RowBuffer) -> Result<i64> {
        self.table.insert(row)
    }
}
