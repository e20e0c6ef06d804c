use crate::{
    stmt::{Expr, IntoExpr},
    to_row, Cursor, Db, Query, Record, Result, Updates,
};

use std::{fmt, marker::PhantomData, sync::Arc};
use strata_core::{
    driver::Table,
    err,
    geometry::{Geometry, SpatialReference, SpatialRelationship},
    stmt::OrderByExpr,
    Mapping,
};
use strata_sql::Serializer;

/// A table opened as a collection of `T` records, together with the query
/// that selects which of its rows an operation applies to.
///
/// The builder methods return a narrowed copy and leave `self` unchanged.
pub struct FeatureClass<T> {
    query: Query,

    mapping: Arc<Mapping>,

    output_spatial_reference: Option<SpatialReference>,

    /// Dropped before `db`, so the table closes before its catalog.
    table: Arc<dyn Table>,

    db: Db,

    _p: PhantomData<fn() -> T>,
}

impl<T: Record> FeatureClass<T> {
    pub(crate) fn new(
        db: Db,
        table: Arc<dyn Table>,
        mapping: Arc<Mapping>,
        output_spatial_reference: Option<SpatialReference>,
    ) -> FeatureClass<T> {
        FeatureClass {
            query: Query::new(),
            mapping,
            output_spatial_reference,
            table,
            db,
            _p: PhantomData,
        }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub fn table(&self) -> &dyn Table {
        &*self.table
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// The query accumulated so far.
    pub fn query_descriptor(&self) -> &Query {
        &self.query
    }

    pub fn fields() -> T::Fields {
        T::fields()
    }

    /// Keeps only the records matching `expr`.
    pub fn filter(&self, expr: impl IntoExpr<bool>) -> Result<Self> {
        let expr: Expr<bool> = expr.into_expr();
        let predicate = Serializer::new(&self.mapping).filter(expr.untyped())?;
        Ok(self.filter_by(&predicate))
    }

    /// Keeps only the rows matching `predicate`, written in the store's own
    /// predicate language against physical column names.
    pub fn filter_by(&self, predicate: &str) -> Self {
        self.with_query(self.query.filter_by(predicate))
    }

    /// Keeps only the rows whose shape relates to `geometry`. Replaces any
    /// earlier spatial filter.
    pub fn filter_spatial(&self, geometry: Geometry, relationship: SpatialRelationship) -> Self {
        self.with_query(self.query.filter_by_spatial(geometry, relationship))
    }

    /// Sorts by an attribute, after any earlier sort keys.
    pub fn order_by(&self, key: impl Into<OrderByExpr>) -> Result<Self> {
        let key = key.into();
        let field = Serializer::new(&self.mapping).sort_key(&key.expr)?;
        Ok(self.order_by_field(&field, key.order.is_desc()))
    }

    /// Sorts by a physical column, after any earlier sort keys.
    pub fn order_by_field(&self, field: &str, descending: bool) -> Self {
        self.with_query(self.query.order_by(field, descending))
    }

    /// Returns geometries in `sr` instead of the session default.
    pub fn output_spatial_reference(&self, sr: SpatialReference) -> Self {
        let mut ret = self.clone();
        ret.output_spatial_reference = Some(sr);
        ret
    }

    /// Runs the query, loading records lazily.
    pub fn query(&self) -> Result<Cursor<T>> {
        let filter = self
            .query
            .compose_read_filter(&self.mapping, self.output_spatial_reference);

        tracing::debug!(
            table = self.table.name(),
            where_clause = %filter.where_clause,
            postfix_clause = ?filter.postfix_clause,
            "opening search cursor"
        );

        let rows = self.table.search(&filter, true)?;
        Ok(Cursor::new(rows, self.mapping.clone()))
    }

    /// Runs the query and collects every record.
    pub fn all(&self) -> Result<Vec<T>> {
        self.query()?.collect()
    }

    /// Returns the first matching record, if any.
    pub fn first(&self) -> Result<Option<T>> {
        self.query()?.next().transpose()
    }

    /// Applies `edit` to every matching record and writes the result back,
    /// lazily. Each edited record is yielded once it has been stored.
    pub fn updates<F>(&self, edit: F) -> Result<Updates<T, F>>
    where
        F: FnMut(T) -> T,
    {
        let filter = self
            .query
            .compose_read_filter(&self.mapping, self.output_spatial_reference);

        tracing::debug!(
            table = self.table.name(),
            where_clause = %filter.where_clause,
            "opening update cursor"
        );

        let rows = self.table.search(&filter, false)?;
        Ok(Updates::new(rows, self.mapping.clone(), edit))
    }

    /// Applies `edit` to every matching record and writes the result back.
    /// Returns the number of rows updated.
    ///
    /// Rows are stored one at a time; a failure leaves the rows before it
    /// updated.
    pub fn update(&self, edit: impl FnMut(T) -> T) -> Result<usize> {
        let count = self
            .updates(edit)?
            .try_fold(0, |count, ret| ret.map(|_| count + 1))?;

        tracing::debug!(table = self.table.name(), count, "updated rows");
        Ok(count)
    }

    /// Like [`FeatureClass::update`], editing each record in place.
    pub fn update_in_place(&self, mut edit: impl FnMut(&mut T)) -> Result<usize> {
        self.update(|mut record| {
            edit(&mut record);
            record
        })
    }

    /// Inserts `records` through one insert cursor and returns the
    /// identifiers the store assigned, in insertion order.
    ///
    /// The first failure aborts the batch. The query's filters play no part
    /// in inserts.
    pub fn insert<'a>(&self, records: impl IntoIterator<Item = &'a T>) -> Result<Vec<i64>>
    where
        T: 'a,
    {
        let mut cursor = self.table.create_insert_cursor()?;
        let mut buffer = self.table.create_row_buffer();
        buffer.set_spatial_reference(self.output_spatial_reference);

        let mut ids = vec![];

        for record in records {
            buffer.clear();
            to_row(record, &self.mapping, &mut buffer)?;
            ids.push(cursor.insert(&buffer)?);
        }

        cursor.flush()?;

        tracing::debug!(table = self.table.name(), ?ids, "inserted rows");
        Ok(ids)
    }

    /// Inserts `record`, then reads the stored row back so store-assigned
    /// values are filled in.
    pub fn insert_one(&self, record: &T) -> Result<T> {
        let id = self
            .insert([record])?
            .into_iter()
            .next()
            .ok_or_else(|| err!("insert into '{}' returned no identifier", self.table.name()))?;

        let predicate = format!("{} = {id}", self.mapping.identifier().name);
        let filter = Query::new()
            .filter_by(&predicate)
            .compose_read_filter(&self.mapping, self.output_spatial_reference);

        let rows = self.table.search(&filter, true)?;

        Cursor::<T>::new(rows, self.mapping.clone())
            .next()
            .unwrap_or_else(|| {
                Err(err!(
                    "inserted row {id} was not found in '{}'",
                    self.table.name()
                ))
            })
    }

    /// Deletes every row matching the query's predicates and spatial filter.
    /// Returns the number of rows the store removed.
    pub fn delete(&self) -> Result<u64> {
        let filter = self.query.compose_delete_filter();
        let count = self.table.delete_rows(&filter)?;

        tracing::debug!(
            table = self.table.name(),
            where_clause = %filter.where_clause,
            count,
            "deleted rows"
        );

        Ok(count)
    }

    fn with_query(&self, query: Query) -> Self {
        FeatureClass {
            query,
            ..self.clone()
        }
    }
}

impl<T> Clone for FeatureClass<T> {
    fn clone(&self) -> Self {
        FeatureClass {
            query: self.query.clone(),
            mapping: self.mapping.clone(),
            output_spatial_reference: self.output_spatial_reference,
            table: self.table.clone(),
            db: self.db.clone(),
            _p: PhantomData,
        }
    }
}

impl<T> fmt::Debug for FeatureClass<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureClass")
            .field("table", &self.table.name())
            .field("record", &std::any::type_name::<T>())
            .field("query", &self.query)
            .finish()
    }
}
