mod builder;
pub use builder::Builder;

mod connect;

mod host;
pub use host::Host;

mod open_table;
pub use open_table::OpenTable;

use crate::{FeatureClass, Record, Result};

use strata_core::{
    driver::{Catalog, Driver},
    geometry::SpatialReference,
};

use std::{fmt, path::Path, sync::Arc};

/// Shared state between all `Db` clones.
struct Shared {
    catalog: Box<dyn Catalog>,

    driver: Arc<dyn Driver>,

    /// Default coordinate system for geometries read through this session.
    output_spatial_reference: Option<SpatialReference>,

    /// Present when the session asked for the store host to be set up.
    host: Option<Host>,
}

/// An open catalog.
///
/// Cloning is cheap; clones share the catalog, which is closed once the last
/// clone and every table opened from it are dropped.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Starts opening the table `name` as a feature class of `T`.
    pub fn table<T: Record>(&self, name: &str) -> OpenTable<'_, T> {
        OpenTable::new(self, name)
    }

    /// Opens the table `name` with the session defaults.
    pub fn open<T: Record>(&self, name: &str) -> Result<FeatureClass<T>> {
        self.table(name).open()
    }

    pub fn catalog(&self) -> &dyn Catalog {
        &*self.shared.catalog
    }

    pub fn path(&self) -> &Path {
        self.shared.catalog.path()
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    pub fn output_spatial_reference(&self) -> Option<SpatialReference> {
        self.shared.output_spatial_reference
    }

    /// Returns `true` if this session set up the store host.
    pub fn has_host(&self) -> bool {
        self.shared.host.is_some()
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("catalog", &self.shared.catalog)
            .field("driver", &self.shared.driver)
            .field("output_spatial_reference", &self.shared.output_spatial_reference)
            .finish()
    }
}
