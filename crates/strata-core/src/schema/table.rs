use super::Field;
use crate::geometry::SpatialReference;

use serde::{Deserialize, Serialize};

/// The physical schema of a store table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// The table name.
    pub name: String,

    /// Fields in store order.
    pub fields: Vec<Field>,

    /// Coordinate system of the table's geometry column, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            spatial_reference: None,
        }
    }

    pub fn with_spatial_reference(mut self, sr: SpatialReference) -> Self {
        self.spatial_reference = Some(sr);
        self
    }

    /// Finds a field by name, ignoring case.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.position(name).map(|index| &self.fields[index])
    }

    /// Returns the position of a field, ignoring case.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.name.eq_ignore_ascii_case(name))
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.identifier)
    }

    /// Returns the name of the geometry column, if the table has one.
    pub fn geometry_field(&self) -> Option<&Field> {
        self.fields.iter().find(|field| field.ty.is_geometry())
    }
}
