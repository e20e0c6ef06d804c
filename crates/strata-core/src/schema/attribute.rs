use crate::stmt::Type;

/// A typed attribute of an application record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name as declared on the record.
    pub name: String,

    /// The attribute's underlying type, with any `Option` stripped.
    pub ty: Type,

    /// True when the attribute is an `Option`.
    pub nullable: bool,

    /// Column declared on the attribute, used when no rename applies.
    pub column: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            column: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}
