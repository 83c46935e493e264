use serde::{Deserialize, Serialize};

use crate::{Next, Stmt, TypeEnv};

/// One translated block: its temporaries, its effects in order, and its exit.
///
/// Built once by a front end, then only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrBlock {
  pub tyenv: TypeEnv,
  pub stmts: Vec<Stmt>,
  pub next: Next,
}

impl IrBlock {
  pub fn new(
    tyenv: TypeEnv,
    stmts: Vec<Stmt>,
    next: Next,
  ) -> Self {
    Self { tyenv, stmts, next }
  }
}
