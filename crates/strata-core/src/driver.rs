mod descriptor;
pub use descriptor::{ConnectionDescriptor, StoreKind};

mod filter;
pub use filter::{QueryFilter, SpatialFilter};

mod row;
pub use row::{Row, RowSink, RowSource};

mod row_buffer;
pub use row_buffer::RowBuffer;

use crate::{schema::TableSchema, Result};

use std::{fmt::Debug, path::Path, sync::Arc};

/// Opens catalogs of one kind of store.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens the catalog described by `descriptor`.
    fn connect(&self, descriptor: &ConnectionDescriptor) -> Result<Box<dyn Catalog>>;

    /// Performs the store's one-time, process-wide setup. Called at most once
    /// per process, before the first connection that asks for it.
    fn initialize_host(&self) -> Result<()> {
        Ok(())
    }
}

/// An open collection of tables.
pub trait Catalog: Debug + Send + Sync {
    /// Location the catalog was opened from.
    fn path(&self) -> &Path;

    /// Opens a table by name.
    fn open_table(&self, name: &str) -> Result<Arc<dyn Table>>;

    /// Names of the tables in the catalog.
    fn table_names(&self) -> Result<Vec<String>>;
}

/// An open table of a catalog.
pub trait Table: Debug + Send + Sync {
    fn name(&self) -> &str;

    /// The table's physical schema.
    fn schema(&self) -> &TableSchema;

    /// Opens a cursor over the rows matching `filter`.
    ///
    /// With `recycle` the store may reuse one row object across iterations;
    /// callers must then finish with a row before advancing.
    fn search(&self, filter: &QueryFilter, recycle: bool) -> Result<Box<dyn RowCursor>>;

    /// Deletes every row matching the predicate and spatial filter of
    /// `filter`, returning the number of rows removed.
    fn delete_rows(&self, filter: &QueryFilter) -> Result<u64>;

    fn create_insert_cursor(&self) -> Result<Box<dyn InsertCursor>>;

    /// Returns an empty row shaped like the table.
    fn create_row_buffer(&self) -> RowBuffer {
        RowBuffer::new(self.schema())
    }
}

/// A forward-only cursor over the rows of a search.
///
/// The store's resources are released when the cursor is dropped.
pub trait RowCursor: Send {
    /// Advances to the next row; `None` once the search is exhausted.
    fn next_row(&mut self) -> Result<Option<Box<dyn Row>>>;
}

/// Inserts rows into a table.
pub trait InsertCursor: Send {
    /// Inserts the contents of `row`, returning the identifier the store
    /// assigned to it.
    fn insert(&mut self, row: &RowBuffer) -> Result<i64>;

    /// Commits any rows the cursor is holding.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
