mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_call;
pub use expr_call::ExprCall;

mod expr_captured;
pub use expr_captured::ExprCaptured;

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_field;
pub use expr_field::ExprField;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod num;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_chrono;
