use serde::{Deserialize, Serialize};

use crate::IrType;

/// An immediate value tagged with its width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Const {
  U8(u8),
  U16(u16),
  U32(u32),
  U64(u64),
}

/// The width tag of a [`Const`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstTag {
  U8,
  U16,
  U32,
  U64,
}

impl Const {
  pub fn u8(value: u8) -> Self {
    Const::U8(value)
  }

  pub fn u16(value: u16) -> Self {
    Const::U16(value)
  }

  pub fn u32(value: u32) -> Self {
    Const::U32(value)
  }

  pub fn u64(value: u64) -> Self {
    Const::U64(value)
  }

  pub fn tag(&self) -> ConstTag {
    match self {
      Const::U8(_) => ConstTag::U8,
      Const::U16(_) => ConstTag::U16,
      Const::U32(_) => ConstTag::U32,
      Const::U64(_) => ConstTag::U64,
    }
  }

  /// Payload zero-extended to 64 bits.
  pub fn value(&self) -> u64 {
    match self {
      Const::U8(v) => u64::from(*v),
      Const::U16(v) => u64::from(*v),
      Const::U32(v) => u64::from(*v),
      Const::U64(v) => *v,
    }
  }
}

impl ConstTag {
  /// The value type a constant of this width produces.
  pub fn ir_type(&self) -> IrType {
    match self {
      ConstTag::U8 => IrType::I8,
      ConstTag::U16 => IrType::I16,
      ConstTag::U32 => IrType::I32,
      ConstTag::U64 => IrType::I64,
    }
  }
}
