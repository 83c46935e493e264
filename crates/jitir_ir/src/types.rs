use serde::{Deserialize, Serialize};

/// Width of a value flowing through the IR.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrType {
  Bit,
  I8,
  I16,
  I32,
  I64,
}

impl IrType {
  pub fn name(&self) -> &'static str {
    match self {
      IrType::Bit => "Bit",
      IrType::I8 => "I8",
      IrType::I16 => "I16",
      IrType::I32 => "I32",
      IrType::I64 => "I64",
    }
  }
}
