use super::{Attribute, Field, TableSchema};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Links the attributes of a record type to the physical fields of a table.
///
/// A mapping is built once when a table is opened and is shared, read only,
/// by every query on that table.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    /// Name of the mapped table.
    table: String,

    /// The table's row identifier column.
    identifier: Field,

    /// Mapped attributes in record declaration order.
    fields: Vec<MappedField>,

    /// Lower-cased column name to position in `fields`.
    by_column: IndexMap<String, usize>,

    /// Attribute name to position in `fields`.
    by_attribute: IndexMap<String, usize>,
}

/// One attribute bound to one physical field.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedField {
    /// Index of the attribute, as understood by the record's accessors.
    pub index: usize,

    /// The record attribute.
    pub attribute: Attribute,

    /// The physical field the attribute reads from and writes to.
    pub column: Field,
}

impl Mapping {
    /// Resolves every attribute to a column of `table`.
    ///
    /// A column is chosen by, in order: an entry of `renames` keyed by the
    /// attribute name (ignoring case), the attribute's declared column, or
    /// the attribute name itself. Column names are matched ignoring case.
    pub fn build(
        attributes: &[Attribute],
        table: &TableSchema,
        renames: &IndexMap<String, String>,
    ) -> Result<Mapping> {
        let identifier = {
            let mut identifiers = table.identifiers();

            match (identifiers.next(), identifiers.next()) {
                (Some(identifier), None) => identifier.clone(),
                (None, _) => {
                    return Err(Error::schema_mismatch(format!(
                        "'{}' has no row identifier column",
                        table.name
                    )))
                }
                (Some(_), Some(_)) => {
                    return Err(Error::schema_mismatch(format!(
                        "'{}' has more than one row identifier column",
                        table.name
                    )))
                }
            }
        };

        let mut mapping = Mapping {
            table: table.name.clone(),
            identifier,
            fields: Vec::with_capacity(attributes.len()),
            by_column: IndexMap::with_capacity(attributes.len()),
            by_attribute: IndexMap::with_capacity(attributes.len()),
        };

        for (index, attribute) in attributes.iter().enumerate() {
            let column = resolve(attribute, table, renames)?;
            let key = column.name.to_lowercase();

            if let Some(&prev) = mapping.by_column.get(&key) {
                return Err(Error::schema_mismatch(format!(
                    "'{}' and '{}' both map to '{}.{}'",
                    mapping.fields[prev].attribute.name, attribute.name, table.name, column.name
                )));
            }

            if mapping.by_attribute.contains_key(&attribute.name) {
                return Err(Error::schema_mismatch(format!(
                    "attribute '{}' is declared more than once",
                    attribute.name
                )));
            }

            let position = mapping.fields.len();
            mapping.by_column.insert(key, position);
            mapping.by_attribute.insert(attribute.name.clone(), position);
            mapping.fields.push(MappedField {
                index,
                attribute: attribute.clone(),
                column: column.clone(),
            });
        }

        Ok(mapping)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// The table's row identifier column.
    pub fn identifier(&self) -> &Field {
        &self.identifier
    }

    /// Mapped attributes in record declaration order.
    pub fn fields(&self) -> &[MappedField] {
        &self.fields
    }

    /// Finds the mapped attribute stored in `column`, ignoring case.
    pub fn by_column(&self, column: &str) -> Option<&MappedField> {
        self.by_column
            .get(&column.to_lowercase())
            .map(|&position| &self.fields[position])
    }

    /// Finds the mapping of a record attribute by its declared name.
    pub fn by_attribute(&self, attribute: &str) -> Option<&MappedField> {
        self.by_attribute
            .get(attribute)
            .map(|&position| &self.fields[position])
    }

    /// Physical columns read by a query: every mapped column, in mapping order.
    pub fn projection(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.column.name.as_str()).collect()
    }

    /// Mapped fields that are written on insert and update.
    pub fn writable(&self) -> impl Iterator<Item = &MappedField> + '_ {
        self.fields.iter().filter(|f| f.column.is_writable())
    }
}

fn resolve<'a>(
    attribute: &Attribute,
    table: &'a TableSchema,
    renames: &IndexMap<String, String>,
) -> Result<&'a Field> {
    let renamed = renames
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&attribute.name))
        .map(|(_, column)| column.as_str());

    let column = renamed
        .or(attribute.column.as_deref())
        .unwrap_or(&attribute.name);

    table.field(column).ok_or_else(|| {
        if column == attribute.name {
            Error::schema_mismatch(format!(
                "'{}' was not found in '{}'",
                attribute.name, table.name
            ))
        } else {
            Error::schema_mismatch(format!(
                "'{}' (mapped from '{}') was not found in '{}'",
                column, attribute.name, table.name
            ))
        }
    })
}
