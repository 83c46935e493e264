use serde::{Deserialize, Serialize};

use crate::{Const, IrType, Op, Temp};

/// A value-producing node. Children are owned by exactly one parent.
///
/// # Adding New Variants
///
/// Every match on `Expr` must be revisited: `IrPrinter::print_expr` and
/// `typing::type_of`. Neither uses a wildcard arm that would hide a new
/// shape, except `type_of`, which aborts on anything it does not type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
  /// Read `size` bytes of guest state at byte `offset`.
  Get { offset: u32, size: u32 },

  /// Read a temporary.
  Tmp(Temp),

  Binop {
    op: Op,
    arg1: Box<Expr>,
    arg2: Box<Expr>,
  },

  Unop { op: Op, arg: Box<Expr> },

  /// Little-endian load of a `ty` value from `addr`.
  LdLe { ty: IrType, addr: Box<Expr> },

  Const(Const),
}

impl Expr {
  pub fn get(
    offset: u32,
    size: u32,
  ) -> Self {
    Expr::Get { offset, size }
  }

  pub fn tmp(tmp: Temp) -> Self {
    Expr::Tmp(tmp)
  }

  pub fn binop(
    op: Op,
    arg1: Expr,
    arg2: Expr,
  ) -> Self {
    Expr::Binop {
      op,
      arg1: Box::new(arg1),
      arg2: Box::new(arg2),
    }
  }

  pub fn unop(
    op: Op,
    arg: Expr,
  ) -> Self {
    Expr::Unop { op, arg: Box::new(arg) }
  }

  pub fn ldle(
    ty: IrType,
    addr: Expr,
  ) -> Self {
    Expr::LdLe {
      ty,
      addr: Box::new(addr),
    }
  }

  pub fn constant(con: Const) -> Self {
    Expr::Const(con)
  }
}
