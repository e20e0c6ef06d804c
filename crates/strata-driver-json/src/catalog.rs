use crate::{
    document::{self, CatalogDocument, ConnectionFile, TableDocument},
    table::{JsonTable, Location},
};

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use strata_core::{
    bail,
    driver::{Catalog, ConnectionDescriptor, StoreKind, Table},
    err,
    schema::TableSchema,
    Error, Result,
};

/// A catalog of JSON table documents.
///
/// Tables are loaded on first open and shared by every later open of the
/// same name, so all feature classes of one catalog see the same rows.
#[derive(Debug)]
pub struct JsonCatalog {
    /// Path the catalog was opened from.
    path: PathBuf,

    layout: Layout,

    /// Open tables keyed by lower-cased name.
    tables: Mutex<HashMap<String, Arc<JsonTable>>>,
}

/// Where table documents are found.
#[derive(Debug, Clone)]
enum Layout {
    /// A directory holding one `<table>.json` per table.
    Directory(PathBuf),

    /// One file holding every table.
    SingleFile(PathBuf),

    /// One table in its own `.json` file.
    FlatFile(PathBuf),
}

impl JsonCatalog {
    pub(crate) fn open(descriptor: &ConnectionDescriptor) -> Result<JsonCatalog> {
        let layout = Layout::resolve(descriptor)?;

        let exists = match &layout {
            Layout::Directory(path) => path.is_dir(),
            Layout::SingleFile(path) | Layout::FlatFile(path) => path.is_file(),
        };

        if !exists {
            bail!("catalog '{}' does not exist", descriptor.path.display());
        }

        Ok(JsonCatalog {
            path: descriptor.path.clone(),
            layout,
            tables: Mutex::new(HashMap::new()),
        })
    }

    pub(crate) fn create_table(descriptor: &ConnectionDescriptor, schema: TableSchema) -> Result<()> {
        let identifiers = schema.identifiers().count();
        if identifiers != 1 {
            return Err(Error::schema_mismatch(format!(
                "'{}' must have exactly one row identifier column, found {identifiers}",
                schema.name
            )));
        }

        Layout::resolve(descriptor)?.create(schema)
    }
}

impl Catalog for JsonCatalog {
    fn path(&self) -> &Path {
        &self.path
    }

    fn open_table(&self, name: &str) -> Result<Arc<dyn Table>> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|_| err!("catalog '{}' is unusable after a panic", self.path.display()))?;

        let key = name.to_lowercase();

        if let Some(table) = tables.get(&key) {
            return Ok(table.clone());
        }

        let (document, location) = self.layout.load(name)?;
        let table = Arc::new(JsonTable::load(document, location)?);
        tables.insert(key, table.clone());

        Ok(table)
    }

    fn table_names(&self) -> Result<Vec<String>> {
        self.layout.table_names()
    }
}

impl Layout {
    fn resolve(descriptor: &ConnectionDescriptor) -> Result<Layout> {
        let path = descriptor.path.clone();

        Ok(match descriptor.kind {
            StoreKind::Directory => Layout::Directory(path),
            StoreKind::SingleFile => Layout::SingleFile(path),
            StoreKind::FlatFile if has_json_extension(&path) => Layout::FlatFile(path),
            StoreKind::FlatFile => {
                return Err(Error::unsupported_store(format!(
                    "'{}' is not a supported format",
                    path.display()
                )))
            }
            StoreKind::ConnectionFile => {
                let connection: ConnectionFile = document::read(&path)?;
                let target = match path.parent() {
                    Some(dir) => dir.join(&connection.path),
                    None => connection.path,
                };

                let target = ConnectionDescriptor::from_path(&target)?;
                if target.kind == StoreKind::ConnectionFile {
                    return Err(Error::unsupported_store(format!(
                        "'{}' points at another connection file",
                        path.display()
                    )));
                }

                tracing::debug!(
                    connection = %path.display(),
                    target = %target.path.display(),
                    "resolved connection file"
                );

                Layout::resolve(&target)?
            }
        })
    }

    fn load(&self, name: &str) -> Result<(TableDocument, Location)> {
        match self {
            Layout::Directory(dir) => {
                let Some(path) = self.table_files()?.into_iter().find(|path| stem_is(path, name))
                else {
                    bail!("table '{name}' was not found in '{}'", dir.display());
                };

                Ok((document::read(&path)?, Location::File(path)))
            }
            Layout::SingleFile(path) => {
                let catalog: CatalogDocument = document::read(path)?;

                match catalog.table(name) {
                    Some(table) => Ok((table.clone(), Location::Entry(path.clone()))),
                    None => bail!("table '{name}' was not found in '{}'", path.display()),
                }
            }
            Layout::FlatFile(path) => {
                if !stem_is(path, name) {
                    bail!("table '{name}' was not found in '{}'", path.display());
                }

                Ok((document::read(path)?, Location::File(path.clone())))
            }
        }
    }

    fn table_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = match self {
            Layout::Directory(_) => self
                .table_files()?
                .iter()
                .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
                .collect(),
            Layout::SingleFile(path) => {
                let catalog: CatalogDocument = document::read(path)?;
                catalog
                    .tables
                    .into_iter()
                    .map(|table| table.schema.name)
                    .collect()
            }
            Layout::FlatFile(path) => path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
                .into_iter()
                .collect(),
        };

        names.sort();
        Ok(names)
    }

    fn create(&self, schema: TableSchema) -> Result<()> {
        let name = schema.name.clone();
        let _writes = document::exclusive();

        match self {
            Layout::Directory(dir) => {
                std::fs::create_dir_all(dir)?;

                if self.table_files()?.iter().any(|path| stem_is(path, &name)) {
                    bail!("table '{name}' already exists in '{}'", dir.display());
                }

                document::write(&dir.join(format!("{name}.json")), &TableDocument::new(schema))
            }
            Layout::SingleFile(path) => {
                let mut catalog = if path.exists() {
                    document::read(path)?
                } else {
                    CatalogDocument::default()
                };

                if catalog.table(&name).is_some() {
                    bail!("table '{name}' already exists in '{}'", path.display());
                }

                catalog.put(TableDocument::new(schema));
                document::write(path, &catalog)
            }
            Layout::FlatFile(path) => {
                if path.exists() {
                    bail!("'{}' already exists", path.display());
                }

                document::write(path, &TableDocument::new(schema))
            }
        }
    }

    /// The `.json` files of a directory catalog.
    fn table_files(&self) -> Result<Vec<PathBuf>> {
        let Layout::Directory(dir) = self else {
            return Ok(vec![]);
        };

        let mut files = vec![];
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && has_json_extension(&path) {
                files.push(path);
            }
        }

        Ok(files)
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn stem_is(path: &Path, name: &str) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.eq_ignore_ascii_case(name))
}
