pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError};

pub mod geometry;
pub use geometry::Geometry;

pub mod schema;
pub use schema::Mapping;

pub mod stmt;

/// A Result type alias that uses Strata's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
