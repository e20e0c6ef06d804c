use crate::{Error, Result};

use std::path::{Path, PathBuf};

/// How a catalog is laid out on disk, derived from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// A `.gdb` directory holding one file per table
    Directory,

    /// A `.geodatabase` file holding every table
    SingleFile,

    /// A `.sde` connection file pointing at another catalog
    ConnectionFile,

    /// A single table stored in its own file
    FlatFile,
}

/// Identifies the catalog to connect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    pub path: PathBuf,
    pub kind: StoreKind,
}

impl StoreKind {
    /// Classifies a path by its extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<StoreKind> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        Some(match extension.as_str() {
            "gdb" => StoreKind::Directory,
            "geodatabase" => StoreKind::SingleFile,
            "sde" => StoreKind::ConnectionFile,
            _ => StoreKind::FlatFile,
        })
    }

    pub fn is_flat_file(self) -> bool {
        matches!(self, Self::FlatFile)
    }
}

impl ConnectionDescriptor {
    pub fn from_path(path: impl AsRef<Path>) -> Result<ConnectionDescriptor> {
        let path = path.as_ref();

        match StoreKind::from_path(path) {
            Some(kind) => Ok(ConnectionDescriptor {
                path: path.to_path_buf(),
                kind,
            }),
            None => Err(Error::unsupported_store(format!(
                "'{}' is not a supported format",
                path.display()
            ))),
        }
    }

    /// Splits a table path such as `Sample.geodatabase/airport_pt` into the
    /// catalog it lives in and the table name.
    ///
    /// A flat-file table is its own catalog; the table is named after the
    /// file stem.
    pub fn from_table_path(path: impl AsRef<Path>) -> Result<(ConnectionDescriptor, String)> {
        let path = path.as_ref();

        if let Some(kind @ StoreKind::FlatFile) = StoreKind::from_path(path) {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                let descriptor = ConnectionDescriptor {
                    path: path.to_path_buf(),
                    kind,
                };
                return Ok((descriptor, stem.to_string()));
            }
        }

        let table = path.file_name().and_then(|name| name.to_str());
        let catalog = path.parent().filter(|p| !p.as_os_str().is_empty());

        match (catalog, table) {
            (Some(catalog), Some(table)) => {
                Ok((ConnectionDescriptor::from_path(catalog)?, table.to_string()))
            }
            _ => Err(Error::unsupported_store(format!(
                "'{}' does not name a table inside a catalog",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_extension() {
        let kind = |p: &str| ConnectionDescriptor::from_path(p).unwrap().kind;

        assert_eq!(kind("data/Sample.gdb"), StoreKind::Directory);
        assert_eq!(kind("data/Sample.GeoDatabase"), StoreKind::SingleFile);
        assert_eq!(kind("conn/prod.sde"), StoreKind::ConnectionFile);
        assert_eq!(kind("roads.json"), StoreKind::FlatFile);
    }

    #[test]
    fn no_extension_is_unsupported() {
        let err = ConnectionDescriptor::from_path("data/Sample").unwrap_err();
        assert!(err.is_unsupported_store());
    }

    #[test]
    fn split_table_path() {
        let (descriptor, table) =
            ConnectionDescriptor::from_table_path("Sample.geodatabase/airport_pt").unwrap();
        assert_eq!(descriptor.kind, StoreKind::SingleFile);
        assert_eq!(descriptor.path, PathBuf::from("Sample.geodatabase"));
        assert_eq!(table, "airport_pt");
    }

    #[test]
    fn split_flat_file_path() {
        let (descriptor, table) = ConnectionDescriptor::from_table_path("out/roads.json").unwrap();
        assert_eq!(descriptor.kind, StoreKind::FlatFile);
        assert_eq!(table, "roads");
    }

    #[test]
    fn bare_table_name_is_unsupported() {
        let err = ConnectionDescriptor::from_table_path("airport_pt").unwrap_err();
        assert!(err.is_unsupported_store());
    }
}
