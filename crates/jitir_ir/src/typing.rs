use crate::{
  fatal::{self, InvariantViolation},
  Expr, IrType, TypeEnv,
};

/// Type of `expr` under `tyenv`.
///
/// Only three shapes are typed: temporaries (via the environment), constants
/// (from their width tag) and binary applications of the 32-bit operators,
/// which are `I32` whatever their operands are. Operands are not checked.
/// Everything else aborts after printing the expression into the message.
pub fn type_of(
  tyenv: &TypeEnv,
  expr: &Expr,
) -> IrType {
  match expr {
    Expr::Tmp(tmp) => tyenv.lookup(*tmp),
    Expr::Const(con) => con.tag().ir_type(),
    Expr::Binop { op, .. } if op.is_binary() => IrType::I32,
    _ => fatal::abort(InvariantViolation::UntypeableExpr { expr: expr.to_string() }),
  }
}
