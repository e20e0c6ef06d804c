//! On-disk layout of tables and catalogs.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::{
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};
use strata_core::{schema::TableSchema, Error, Result};

/// One table: its schema, the next identifier to hand out and its rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TableDocument {
    #[serde(flatten)]
    pub(crate) schema: TableSchema,

    #[serde(default = "first_id")]
    pub(crate) next_id: i64,

    /// Rows keyed by column name.
    #[serde(default)]
    pub(crate) rows: Vec<Map<String, JsonValue>>,
}

/// A single-file catalog holding every table.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct CatalogDocument {
    #[serde(default)]
    pub(crate) tables: Vec<TableDocument>,
}

/// A connection file naming the catalog to open. Relative paths are
/// resolved against the directory holding the connection file.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ConnectionFile {
    pub(crate) path: PathBuf,
}

fn first_id() -> i64 {
    1
}

impl TableDocument {
    pub(crate) fn new(schema: TableSchema) -> TableDocument {
        TableDocument {
            schema,
            next_id: first_id(),
            rows: vec![],
        }
    }
}

impl CatalogDocument {
    pub(crate) fn table(&self, name: &str) -> Option<&TableDocument> {
        self.tables
            .iter()
            .find(|table| table.schema.name.eq_ignore_ascii_case(name))
    }

    /// Replaces the table with the same name, or adds it.
    pub(crate) fn put(&mut self, document: TableDocument) {
        match self
            .tables
            .iter_mut()
            .find(|table| table.schema.name.eq_ignore_ascii_case(&document.schema.name))
        {
            Some(table) => *table = document,
            None => self.tables.push(document),
        }
    }
}

/// Held across every read-modify-write of a document, so catalogs opened
/// separately on the same files do not overwrite each other's changes.
static WRITES: Mutex<()> = Mutex::new(());

pub(crate) fn exclusive() -> MutexGuard<'static, ()> {
    WRITES.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(Error::driver_operation_failed)
}

/// Writes `value` next to `path`, then moves it into place.
pub(crate) fn write<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).map_err(Error::driver_operation_failed)?;

    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");

    std::fs::write(&staging, bytes)?;
    std::fs::rename(&staging, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strata_core::{schema::Field, stmt::Type};

    #[test]
    fn table_document_shape() {
        let schema = TableSchema::new(
            "airport_pt",
            vec![
                Field::identifier("OBJECTID"),
                Field::new("name_e", Type::String),
            ],
        );

        let json = serde_json::to_value(TableDocument::new(schema)).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "airport_pt",
                "fields": [
                    {"name": "OBJECTID", "type": "i64", "nullable": false, "identifier": true, "editable": false},
                    {"name": "name_e", "type": "string", "nullable": true, "identifier": false, "editable": true},
                ],
                "next_id": 1,
                "rows": [],
            })
        );
    }

    #[test]
    fn defaults_when_missing() {
        let document: TableDocument = serde_json::from_value(json!({
            "name": "t",
            "fields": [{"name": "OBJECTID", "type": "i64", "identifier": true}],
        }))
        .unwrap();

        assert_eq!(document.next_id, 1);
        assert!(document.rows.is_empty());
        assert!(document.schema.fields[0].editable);
    }
}
