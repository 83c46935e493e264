#![allow(dead_code)]

use jitir_ir::{Const, Expr, IrBlock, IrType, Next, Op, Stmt, Temp, TypeEnv};

/// Environment with `t0..tN` all typed `ty`.
pub fn env_of(
  count: u32,
  ty: IrType,
) -> TypeEnv {
  let mut env = TypeEnv::new();
  for i in 0..count {
    env.insert(Temp(i), ty);
  }
  env
}

/// `t1 = Add32(t0,0x5)` followed by `UJump 0x400000`.
pub fn add_block() -> IrBlock {
  let env = env_of(2, IrType::I32);
  let stmts = vec![Stmt::tmp(
    Temp(1),
    Expr::binop(Op::Add32, Expr::tmp(Temp(0)), Expr::constant(Const::u8(0x5))),
  )];
  IrBlock::new(env, stmts, Next::ujump(Const::u32(0x400000)))
}

/// A block touching every statement kind, ending in a conditional jump.
pub fn mixed_block() -> IrBlock {
  let mut env = TypeEnv::new();
  let addr = env.new_temp(IrType::I32);
  let loaded = env.new_temp(IrType::I32);
  let flag = env.new_temp(IrType::Bit);

  let stmts = vec![
    Stmt::tmp(addr, Expr::binop(Op::Add32, Expr::get(16, 4), Expr::constant(Const::u32(0x10)))),
    Stmt::tmp(loaded, Expr::ldle(IrType::I32, Expr::tmp(addr))),
    Stmt::put(0, 4, Expr::unop(Op::Not32, Expr::tmp(loaded))),
    Stmt::stle(
      Expr::tmp(addr),
      Expr::binop(Op::Sar32, Expr::tmp(loaded), Expr::constant(Const::u8(0x1f))),
    ),
    Stmt::tmp(flag, Expr::get(32, 1)),
  ];

  let next = Next::cjump01(Expr::tmp(flag), Const::u32(0x8048000), Const::u32(0x8048010));
  IrBlock::new(env, stmts, next)
}

/// A block that leaves through a computed address.
pub fn indirect_block() -> IrBlock {
  let env = env_of(1, IrType::I32);
  let stmts = vec![Stmt::tmp(Temp(0), Expr::ldle(IrType::I32, Expr::get(20, 4)))];
  IrBlock::new(env, stmts, Next::ijump(Expr::tmp(Temp(0))))
}
