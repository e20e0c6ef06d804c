use crate::{
    cursor::{InsertRows, SearchRows},
    document::{self, CatalogDocument, TableDocument},
    order::OrderBy,
    predicate::Predicate,
    spatial::{Projection, SpatialMatch},
    Value,
};

use serde_json::Map;
use std::{
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard},
};
use strata_core::{
    bail,
    driver::{InsertCursor, QueryFilter, RowBuffer, RowCursor, RowSource, Table},
    err,
    schema::{Field, TableSchema},
    stmt::Value as CoreValue,
    Result,
};

/// A table loaded from a JSON document.
///
/// Every search and write starts from the document on disk, and a change
/// only reaches memory once it has been written.
#[derive(Debug)]
pub struct JsonTable {
    shared: Arc<Shared>,
}

#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) schema: TableSchema,
    location: Location,
    state: Mutex<State>,
}

/// Where the table's document is persisted.
#[derive(Debug, Clone)]
pub(crate) enum Location {
    /// The document is a file of its own.
    File(PathBuf),

    /// The document is an entry of a single-file catalog.
    Entry(PathBuf),
}

#[derive(Debug)]
pub(crate) struct State {
    next_id: i64,
    pub(crate) rows: Vec<StoredRow>,

    /// Number of search cursors that have not been dropped yet.
    pub(crate) open_searches: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct StoredRow {
    pub(crate) id: i64,

    /// Column values in schema order.
    pub(crate) values: Vec<CoreValue>,
}

impl JsonTable {
    pub(crate) fn load(document: TableDocument, location: Location) -> Result<JsonTable> {
        let schema = document.schema;
        identifier_position(&schema)?;

        let rows = decode_rows(&schema, &document.rows)?;

        tracing::debug!(table = %schema.name, rows = rows.len(), "loaded table");

        Ok(JsonTable {
            shared: Arc::new(Shared {
                schema,
                location,
                state: Mutex::new(State {
                    next_id: document.next_id,
                    rows,
                    open_searches: 0,
                }),
            }),
        })
    }
}

impl Table for JsonTable {
    fn name(&self) -> &str {
        &self.shared.schema.name
    }

    fn schema(&self) -> &TableSchema {
        &self.shared.schema
    }

    /// Rows are read from a snapshot taken when the search starts; `recycle`
    /// has no effect.
    fn search(&self, filter: &QueryFilter, _recycle: bool) -> Result<Box<dyn RowCursor>> {
        let schema = &self.shared.schema;

        let predicate = self.shared.predicate(filter)?;
        let spatial = self.shared.spatial_match(filter)?;
        let order = match &filter.postfix_clause {
            Some(postfix) => Some(OrderBy::parse(postfix, schema)?),
            None => None,
        };
        let projection = Projection::between(schema, filter.output_spatial_reference)?;
        let selected = self.shared.selected_columns(&filter.sub_fields)?;

        let mut state = self.shared.lock()?;
        self.shared.refresh(&mut state)?;

        let mut rows = vec![];
        for row in &state.rows {
            if self.shared.matches(row, predicate.as_ref(), spatial.as_ref())? {
                rows.push(row.clone());
            }
        }

        if let Some(order) = &order {
            rows.sort_by(|a, b| order.cmp(&a.values, &b.values));
        }

        for row in &mut rows {
            for (value, selected) in row.values.iter_mut().zip(&selected) {
                if !selected {
                    *value = CoreValue::Null;
                } else if let Some(projection) = &projection {
                    *value = projection.to_output(value.take())?;
                }
            }
        }

        state.open_searches += 1;
        drop(state);

        tracing::debug!(
            table = %schema.name,
            where_clause = %filter.where_clause,
            matched = rows.len(),
            "search"
        );

        Ok(Box::new(SearchRows::new(
            self.shared.clone(),
            rows,
            projection,
        )))
    }

    fn delete_rows(&self, filter: &QueryFilter) -> Result<u64> {
        let predicate = self.shared.predicate(filter)?;
        let spatial = self.shared.spatial_match(filter)?;

        let mut state = self.shared.lock()?;
        self.shared.ensure_no_search(&state, "delete from")?;

        let _writes = document::exclusive();
        self.shared.refresh(&mut state)?;

        let mut kept = Vec::with_capacity(state.rows.len());
        for row in &state.rows {
            if !self.shared.matches(row, predicate.as_ref(), spatial.as_ref())? {
                kept.push(row.clone());
            }
        }

        let deleted = (state.rows.len() - kept.len()) as u64;

        if deleted > 0 {
            let next_id = state.next_id;
            self.shared.commit(&mut state, next_id, kept)?;
        }

        tracing::debug!(table = %self.shared.schema.name, deleted, "delete");
        Ok(deleted)
    }

    fn create_insert_cursor(&self) -> Result<Box<dyn InsertCursor>> {
        let state = self.shared.lock()?;
        self.shared.ensure_no_search(&state, "insert into")?;
        drop(state);

        Ok(Box::new(InsertRows::new(self.shared.clone())))
    }
}

impl Shared {
    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| err!("table '{}' is unusable after a panic", self.schema.name))
    }

    fn predicate(&self, filter: &QueryFilter) -> Result<Option<Predicate>> {
        if !filter.has_where_clause() {
            return Ok(None);
        }

        Predicate::parse(&filter.where_clause, &self.schema).map(Some)
    }

    fn spatial_match(&self, filter: &QueryFilter) -> Result<Option<SpatialMatch>> {
        filter
            .spatial_filter
            .as_ref()
            .map(|spatial| SpatialMatch::new(spatial, &self.schema))
            .transpose()
    }

    /// Flags the columns a search returns. The identifier is always
    /// returned; an empty list selects every column.
    fn selected_columns(&self, sub_fields: &[String]) -> Result<Vec<bool>> {
        if sub_fields.is_empty() {
            return Ok(vec![true; self.schema.fields.len()]);
        }

        let mut selected: Vec<bool> = self.schema.fields.iter().map(|f| f.identifier).collect();

        for name in sub_fields {
            match self.schema.position(name) {
                Some(position) => selected[position] = true,
                None => bail!("'{}' was not found in '{}'", name, self.schema.name),
            }
        }

        Ok(selected)
    }

    fn matches(
        &self,
        row: &StoredRow,
        predicate: Option<&Predicate>,
        spatial: Option<&SpatialMatch>,
    ) -> Result<bool> {
        if let Some(spatial) = spatial {
            if !spatial.matches(&row.values) {
                return Ok(false);
            }
        }

        match predicate {
            Some(predicate) => predicate.matches(&row.values),
            None => Ok(true),
        }
    }

    fn ensure_no_search(&self, state: &State, action: &str) -> Result<()> {
        if state.open_searches > 0 {
            bail!(
                "cannot {action} '{}' while a search cursor is open",
                self.schema.name
            );
        }
        Ok(())
    }

    /// Appends a row built from `buffer` and returns its identifier.
    pub(crate) fn insert(&self, buffer: &RowBuffer) -> Result<i64> {
        let projection = Projection::between(&self.schema, buffer.spatial_reference())?;

        let mut state = self.lock()?;
        self.ensure_no_search(&state, "insert into")?;

        let _writes = document::exclusive();
        self.refresh(&mut state)?;

        let id = state.next_id;

        let values = self
            .schema
            .fields
            .iter()
            .map(|field| {
                if field.identifier {
                    return Ok(CoreValue::I64(id));
                }

                if !field.editable {
                    return Ok(CoreValue::Null);
                }

                let value = buffer.get(&field.name)?;
                let value = match &projection {
                    Some(projection) => projection.to_table(value)?,
                    None => value,
                };

                self.coerce(field, value)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut rows = state.rows.clone();
        rows.push(StoredRow { id, values });
        self.commit(&mut state, id + 1, rows)?;

        Ok(id)
    }

    /// Writes the changed columns of row `id`.
    pub(crate) fn store(&self, id: i64, changes: Vec<(usize, CoreValue)>) -> Result<()> {
        let mut state = self.lock()?;

        let _writes = document::exclusive();
        self.refresh(&mut state)?;

        let mut rows = state.rows.clone();
        let Some(row) = rows.iter_mut().find(|row| row.id == id) else {
            bail!("row {id} of '{}' no longer exists", self.schema.name);
        };

        for (position, value) in changes {
            row.values[position] = value;
        }

        let next_id = state.next_id;
        self.commit(&mut state, next_id, rows)
    }

    /// Converts `value` to the column's type and checks it may be stored.
    pub(crate) fn coerce(&self, field: &Field, value: CoreValue) -> Result<CoreValue> {
        let value = field.ty.cast(value)?;

        if value.is_null() && !field.nullable {
            bail!(
                "'{}' of '{}' does not accept null",
                field.name,
                self.schema.name
            );
        }

        Ok(value)
    }

    /// Replaces the rows with what is currently on disk, so writes made
    /// through other catalogs are not lost.
    fn refresh(&self, state: &mut State) -> Result<()> {
        let document = self.location.read(&self.schema.name)?;

        state.rows = decode_rows(&self.schema, &document.rows)?;
        state.next_id = document.next_id;
        Ok(())
    }

    /// Writes `rows` to disk and only then makes them the table's rows.
    fn commit(&self, state: &mut State, next_id: i64, rows: Vec<StoredRow>) -> Result<()> {
        self.persist(next_id, &rows)?;

        state.next_id = next_id;
        state.rows = rows;
        Ok(())
    }

    fn persist(&self, next_id: i64, rows: &[StoredRow]) -> Result<()> {
        let rows = rows
            .iter()
            .map(|row| {
                self.schema
                    .fields
                    .iter()
                    .zip(&row.values)
                    .map(|(field, value)| {
                        Ok((field.name.clone(), Value::from(value.clone()).to_json()?))
                    })
                    .collect::<Result<Map<_, _>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let document = TableDocument {
            schema: self.schema.clone(),
            next_id,
            rows,
        };

        match &self.location {
            Location::File(path) => document::write(path, &document),
            Location::Entry(path) => {
                let mut catalog: CatalogDocument = document::read(path)?;
                catalog.put(document);
                document::write(path, &catalog)
            }
        }
    }
}

impl Location {
    fn read(&self, name: &str) -> Result<TableDocument> {
        match self {
            Location::File(path) => document::read(path),
            Location::Entry(path) => {
                let catalog: CatalogDocument = document::read(path)?;
                catalog
                    .table(name)
                    .cloned()
                    .ok_or_else(|| err!("table '{name}' was not found in '{}'", path.display()))
            }
        }
    }
}

fn decode_rows(
    schema: &TableSchema,
    rows: &[Map<String, serde_json::Value>],
) -> Result<Vec<StoredRow>> {
    let identifier = identifier_position(schema)?;

    rows.iter()
        .map(|row| {
            let values = schema
                .fields
                .iter()
                .map(|field| match row.get(&field.name) {
                    Some(json) => Ok(Value::from_json(json, field.ty)?.into_inner()),
                    None => Ok(CoreValue::Null),
                })
                .collect::<Result<Vec<_>>>()?;

            let id = values[identifier]
                .as_i64()
                .ok_or_else(|| err!("a row of '{}' has no identifier", schema.name))?;

            Ok(StoredRow { id, values })
        })
        .collect()
}

fn identifier_position(schema: &TableSchema) -> Result<usize> {
    schema
        .fields
        .iter()
        .position(|field| field.identifier)
        .ok_or_else(|| err!("'{}' has no row identifier column", schema.name))
}
