mod catalog;
pub use catalog::JsonCatalog;

mod cursor;
mod document;
mod order;
mod predicate;
mod spatial;

mod table;
pub use table::JsonTable;

mod value;
pub(crate) use value::Value;

use std::path::Path;
use strata_core::{
    driver::{Catalog, ConnectionDescriptor, Driver},
    schema::TableSchema,
    Result,
};

/// A store kept in JSON documents on the local file system.
///
/// Every catalog layout is supported: `.gdb` directories with one
/// `<table>.json` per table, `.geodatabase` files holding all tables, `.sde`
/// connection files of the form `{"path": "..."}`, and single `.json`
/// tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct Json;

impl Json {
    pub fn new() -> Json {
        Json
    }

    /// Creates an empty table in the catalog at `path`, creating the
    /// catalog when it does not exist yet. For a `.json` path the file
    /// itself becomes the table.
    pub fn create_table(path: impl AsRef<Path>, schema: TableSchema) -> Result<()> {
        let descriptor = ConnectionDescriptor::from_path(path.as_ref())?;

        tracing::debug!(
            catalog = %descriptor.path.display(),
            table = %schema.name,
            "creating table"
        );

        JsonCatalog::create_table(&descriptor, schema)
    }
}

impl Driver for Json {
    fn connect(&self, descriptor: &ConnectionDescriptor) -> Result<Box<dyn Catalog>> {
        Ok(Box::new(JsonCatalog::open(descriptor)?))
    }
}
