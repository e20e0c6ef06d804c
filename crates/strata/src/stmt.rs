mod expr;
pub use expr::{captured, lit, Expr};

mod into_expr;
pub use into_expr::IntoExpr;

mod path;
pub use path::Path;

mod primitive;
pub use primitive::Primitive;

mod primitive_chrono;

pub use strata_core::stmt::{Direction, OrderByExpr, Type, Value};
