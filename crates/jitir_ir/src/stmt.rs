use serde::{Deserialize, Serialize};

use crate::{Expr, Temp};

/// A single effect in a block body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
  /// Write `expr` to `size` bytes of guest state at byte `offset`.
  Put { offset: u32, size: u32, expr: Expr },

  /// Define a temporary. Single assignment by convention only.
  Tmp { tmp: Temp, expr: Expr },

  /// Little-endian store of `data` to `addr`.
  StLe { addr: Expr, data: Expr },
}

impl Stmt {
  pub fn put(
    offset: u32,
    size: u32,
    value: Expr,
  ) -> Self {
    Stmt::Put {
      offset,
      size,
      expr: value,
    }
  }

  pub fn tmp(
    tmp: Temp,
    expr: Expr,
  ) -> Self {
    Stmt::Tmp { tmp, expr }
  }

  pub fn stle(
    addr: Expr,
    value: Expr,
  ) -> Self {
    Stmt::StLe { addr, data: value }
  }
}
