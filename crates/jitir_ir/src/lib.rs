//! Tree-form IR for a single translated block of guest code.
//!
//! A front end registers temporaries in a [`TypeEnv`], builds expressions,
//! statements and a terminator bottom-up, and assembles them into an
//! [`IrBlock`]. [`type_of`] and the printer only read the finished tree.

pub mod block;
pub mod constant;
pub mod display;
pub mod expr;
pub mod fatal;
pub mod next;
pub mod op;
pub mod stmt;
pub mod tyenv;
pub mod types;
pub mod typing;

use serde::{Deserialize, Serialize};

pub use block::IrBlock;
pub use constant::{Const, ConstTag};
pub use display::IrPrinter;
pub use expr::Expr;
pub use fatal::InvariantViolation;
pub use next::Next;
pub use op::Op;
pub use stmt::Stmt;
pub use tyenv::{Maplet, TypeEnv};
pub use types::IrType;
pub use typing::type_of;

/// A block-local value slot. Carries no type; see [`TypeEnv`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temp(pub u32);

impl Temp {
  pub fn index(&self) -> u32 {
    self.0
  }
}
