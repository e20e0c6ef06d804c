use crate::stmt::Type;

use serde::{Deserialize, Serialize};

/// A physical field (column) of a store table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// The name of the column in the store.
    pub name: String,

    /// The declared column type.
    #[serde(rename = "type")]
    pub ty: Type,

    /// Whether or not the column accepts null
    #[serde(default)]
    pub nullable: bool,

    /// True if the column holds the store-assigned row identifier
    #[serde(default)]
    pub identifier: bool,

    /// False for columns maintained by the store itself
    #[serde(default = "editable_default")]
    pub editable: bool,
}

fn editable_default() -> bool {
    true
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: true,
            identifier: false,
            editable: true,
        }
    }

    /// The store-assigned row identifier column. It is never nullable or
    /// editable.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Type::I64,
            nullable: false,
            identifier: true,
            editable: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Returns `true` if values are written to this column on insert and update.
    pub fn is_writable(&self) -> bool {
        self.editable && !self.identifier
    }
}
