use serde::{Deserialize, Serialize};

/// Operator tag shared by binary and unary expressions.
///
/// Every operator is defined over 32-bit operands only. Whether an operator
/// is used with the right arity is not checked at construction time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
  // Binary
  Add32,
  Sub32,
  Mul32,
  Or32,
  And32,
  Xor32,
  Shl32,
  Shr32,
  Sar32,

  // Unary
  Not32,
  Neg32,
}

impl Op {
  pub fn name(&self) -> &'static str {
    match self {
      Op::Add32 => "Add32",
      Op::Sub32 => "Sub32",
      Op::Mul32 => "Mul32",
      Op::Or32 => "Or32",
      Op::And32 => "And32",
      Op::Xor32 => "Xor32",
      Op::Shl32 => "Shl32",
      Op::Shr32 => "Shr32",
      Op::Sar32 => "Sar32",
      Op::Not32 => "Not32",
      Op::Neg32 => "Neg32",
    }
  }

  /// True for the nine two-operand 32-bit operators.
  pub fn is_binary(&self) -> bool {
    matches!(
      self,
      Op::Add32 | Op::Sub32 | Op::Mul32 | Op::Or32 | Op::And32 | Op::Xor32 | Op::Shl32 | Op::Shr32 | Op::Sar32
    )
  }
}
