use serde::{Deserialize, Serialize};

use crate::{Const, Expr};

/// How control leaves a block. Every block has exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Next {
  /// Jump to a known guest address.
  UJump { dst: Const },

  /// Two-way jump on `cond`. `dst0` and `dst1` are an ordered pair; which
  /// condition value selects which destination is left to the consumer.
  CJump01 { cond: Expr, dst0: Const, dst1: Const },

  /// Jump to a computed guest address.
  IJump { dst: Expr },
}

impl Next {
  pub fn ujump(dst: Const) -> Self {
    Next::UJump { dst }
  }

  pub fn cjump01(
    cond: Expr,
    dst0: Const,
    dst1: Const,
  ) -> Self {
    Next::CJump01 { cond, dst0, dst1 }
  }

  pub fn ijump(dst: Expr) -> Self {
    Next::IJump { dst }
  }
}
