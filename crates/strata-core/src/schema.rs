//! Record-side and store-side schemas, and the mapping between them.

mod attribute;
pub use attribute::Attribute;

mod field;
pub use field::Field;

mod mapping;
pub use mapping::{MappedField, Mapping};

mod table;
pub use table::TableSchema;
