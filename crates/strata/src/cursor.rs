use crate::{to_record, to_row, Record, Result};

use std::{iter::FusedIterator, marker::PhantomData, sync::Arc};
use strata_core::{
    driver::{Row, RowCursor},
    Mapping,
};

/// Records read from a table, one row at a time.
///
/// The store cursor is released as soon as the rows run out, a row fails to
/// load, or the `Cursor` is dropped. Once an error has been returned the
/// cursor yields nothing further.
pub struct Cursor<T> {
    rows: Rows,
    mapping: Arc<Mapping>,
    _p: PhantomData<fn() -> T>,
}

/// Records edited and written back, one row at a time.
///
/// Each row is loaded, passed to the edit function, written back and stored
/// before the edited record is yielded. Rows already stored stay stored if a
/// later row fails.
pub struct Updates<T, F> {
    rows: Rows,
    mapping: Arc<Mapping>,
    edit: F,
    _p: PhantomData<fn() -> T>,
}

enum Rows {
    Opened(Box<dyn RowCursor>),
    Exhausted,
    Failed,
}

impl Rows {
    fn next(&mut self, table: &str) -> Option<Result<Box<dyn Row>>> {
        let Rows::Opened(cursor) = self else {
            return None;
        };

        match cursor.next_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                tracing::debug!(table, "cursor exhausted");
                *self = Rows::Exhausted;
                None
            }
            Err(err) => {
                *self = Rows::Failed;
                Some(Err(err))
            }
        }
    }

    /// Stops iteration after `ret` if it is an error.
    fn check<T>(&mut self, ret: Result<T>) -> Result<T> {
        if ret.is_err() {
            *self = Rows::Failed;
        }
        ret
    }
}

impl<T: Record> Cursor<T> {
    pub(crate) fn new(rows: Box<dyn RowCursor>, mapping: Arc<Mapping>) -> Cursor<T> {
        Cursor {
            rows: Rows::Opened(rows),
            mapping,
            _p: PhantomData,
        }
    }

    /// Returns `true` once every row has been read.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.rows, Rows::Exhausted)
    }

    /// Returns `true` if iteration stopped on an error.
    pub fn is_failed(&self) -> bool {
        matches!(self.rows, Rows::Failed)
    }
}

impl<T: Record> Iterator for Cursor<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        let row = match self.rows.next(self.mapping.table())? {
            Ok(row) => row,
            Err(err) => return Some(Err(err)),
        };

        let ret = to_record(&*row, &self.mapping);
        Some(self.rows.check(ret))
    }
}

impl<T: Record> FusedIterator for Cursor<T> {}

impl<T, F> Updates<T, F>
where
    T: Record,
    F: FnMut(T) -> T,
{
    pub(crate) fn new(rows: Box<dyn RowCursor>, mapping: Arc<Mapping>, edit: F) -> Updates<T, F> {
        Updates {
            rows: Rows::Opened(rows),
            mapping,
            edit,
            _p: PhantomData,
        }
    }

    fn apply(&mut self, row: &mut dyn Row) -> Result<T> {
        let record = to_record(&*row, &self.mapping)?;
        let edited = (self.edit)(record);

        to_row(&edited, &self.mapping, row)?;
        row.store()?;

        Ok(edited)
    }
}

impl<T, F> Iterator for Updates<T, F>
where
    T: Record,
    F: FnMut(T) -> T,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        let mut row = match self.rows.next(self.mapping.table())? {
            Ok(row) => row,
            Err(err) => return Some(Err(err)),
        };

        let ret = self.apply(&mut *row);
        Some(self.rows.check(ret))
    }
}

impl<T, F> FusedIterator for Updates<T, F>
where
    T: Record,
    F: FnMut(T) -> T,
{
}
