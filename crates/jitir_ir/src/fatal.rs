//! Invariant violations.
//!
//! A violation means the tree was built wrong upstream. There is no recovery
//! path: [`abort`] panics with the violation's message, and release builds
//! run with `panic = "abort"`, so the process ends there.

use std::fmt;

use crate::Temp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
  /// A temporary was looked up but never inserted into the type environment.
  UnboundTemp { tmp: Temp },

  /// `type_of` was asked about a shape or operator it does not type.
  /// Holds the printed form of the offending expression.
  UntypeableExpr { expr: String },

  /// `new_temp` found the highest temporary already at `u32::MAX`.
  ExhaustedTemps,
}

impl fmt::Display for InvariantViolation {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      InvariantViolation::UnboundTemp { tmp } => {
        write!(f, "lookup: {} is not bound in the type environment", tmp)
      },

      InvariantViolation::UntypeableExpr { expr } => {
        write!(f, "type_of: cannot infer the type of {}", expr)
      },

      InvariantViolation::ExhaustedTemps => {
        write!(f, "new_temp: no temporary identifiers left past t{}", u32::MAX)
      },
    }
  }
}

impl std::error::Error for InvariantViolation {}

pub fn abort(violation: InvariantViolation) -> ! {
  panic!("{}", violation)
}
