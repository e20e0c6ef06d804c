use super::{connect, Db, Host, Shared};
use crate::{FeatureClass, Record, Result};

use strata_core::{
    driver::{ConnectionDescriptor, Driver},
    geometry::SpatialReference,
};

use std::{path::Path, sync::Arc};

/// Configures and opens a [`Db`].
#[derive(Debug)]
pub struct Builder {
    /// Set up the store host before connecting.
    initialize_host: bool,

    output_spatial_reference: Option<SpatialReference>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            initialize_host: true,
            output_spatial_reference: None,
        }
    }
}

impl Builder {
    /// Whether to run the store's one-time host setup before connecting.
    /// Enabled by default.
    pub fn initialize_host(&mut self, initialize_host: bool) -> &mut Self {
        self.initialize_host = initialize_host;
        self
    }

    /// Coordinate system geometries are returned in, unless a table
    /// overrides it.
    pub fn output_spatial_reference(&mut self, sr: SpatialReference) -> &mut Self {
        self.output_spatial_reference = Some(sr);
        self
    }

    /// Opens the catalog at `path`.
    pub fn connect(&self, driver: impl Driver, path: impl AsRef<Path>) -> Result<Db> {
        let descriptor = ConnectionDescriptor::from_path(path.as_ref())?;
        self.connect_descriptor(Arc::new(driver), &descriptor)
    }

    /// Opens the catalog at `path` with the built-in driver for its format.
    /// Built-in drivers are enabled with crate features.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Db> {
        let descriptor = ConnectionDescriptor::from_path(path.as_ref())?;
        self.connect_descriptor(connect::driver_for(&descriptor)?, &descriptor)
    }

    /// Opens a single table given its full path, such as
    /// `data/Canada.geodatabase/airport_pt` or `data/roads.json`.
    pub fn open_table_path<T: Record>(
        &self,
        driver: impl Driver,
        path: impl AsRef<Path>,
    ) -> Result<FeatureClass<T>> {
        let (descriptor, table) = ConnectionDescriptor::from_table_path(path.as_ref())?;
        self.connect_descriptor(Arc::new(driver), &descriptor)?
            .open(&table)
    }

    fn connect_descriptor(
        &self,
        driver: Arc<dyn Driver>,
        descriptor: &ConnectionDescriptor,
    ) -> Result<Db> {
        let host = if self.initialize_host {
            Some(Host::initialize(&*driver)?)
        } else {
            None
        };

        let catalog = driver.connect(descriptor)?;

        tracing::info!(
            path = %descriptor.path.display(),
            kind = ?descriptor.kind,
            "connected to catalog"
        );

        Ok(Db {
            shared: Arc::new(Shared {
                catalog,
                driver,
                output_spatial_reference: self.output_spatial_reference,
                host,
            }),
        })
    }
}
