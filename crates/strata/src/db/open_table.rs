use super::Db;
use crate::{FeatureClass, Record, Result};

use indexmap::IndexMap;
use std::{marker::PhantomData, sync::Arc};
use strata_core::{geometry::SpatialReference, Mapping};

/// Options for opening one table as a feature class.
#[derive(Debug)]
pub struct OpenTable<'a, T> {
    db: &'a Db,
    name: String,

    /// Attribute name to column name, overriding declared columns.
    renames: IndexMap<String, String>,

    output_spatial_reference: Option<SpatialReference>,
    _p: PhantomData<fn() -> T>,
}

impl<'a, T: Record> OpenTable<'a, T> {
    pub(super) fn new(db: &'a Db, name: &str) -> Self {
        OpenTable {
            db,
            name: name.to_string(),
            renames: IndexMap::new(),
            output_spatial_reference: db.output_spatial_reference(),
            _p: PhantomData,
        }
    }

    /// Stores `attribute` in `column` instead of the column it declares.
    pub fn rename(mut self, attribute: &str, column: &str) -> Self {
        self.renames.insert(attribute.to_string(), column.to_string());
        self
    }

    /// Coordinate system geometries are returned in.
    pub fn output_spatial_reference(mut self, sr: SpatialReference) -> Self {
        self.output_spatial_reference = Some(sr);
        self
    }

    /// Opens the table and maps it to `T`.
    pub fn open(self) -> Result<FeatureClass<T>> {
        let table = self.db.catalog().open_table(&self.name)?;
        let mapping = Mapping::build(&T::attributes(), table.schema(), &self.renames)?;

        tracing::debug!(
            table = table.name(),
            record = std::any::type_name::<T>(),
            columns = ?mapping.projection(),
            "opened feature class"
        );

        Ok(FeatureClass::new(
            self.db.clone(),
            table,
            Arc::new(mapping),
            self.output_spatial_reference,
        ))
    }
}
