mod common;

use jitir_ir::{type_of, Const, Expr, IrType, Op, Temp, TypeEnv};

#[test]
fn typing_temp_uses_environment() {
  let block = common::add_block();

  assert_eq!(type_of(&block.tyenv, &Expr::tmp(Temp(1))), IrType::I32);
}

#[test]
fn typing_temp_sees_first_insert() {
  let mut env = TypeEnv::new();
  env.insert(Temp(2), IrType::Bit);
  env.insert(Temp(2), IrType::I64);

  assert_eq!(type_of(&env, &Expr::tmp(Temp(2))), IrType::Bit);
}

#[test]
fn typing_const_follows_tag() {
  let env = TypeEnv::new();

  assert_eq!(type_of(&env, &Expr::constant(Const::u8(0xff))), IrType::I8);
  assert_eq!(type_of(&env, &Expr::constant(Const::u16(0))), IrType::I16);
  assert_eq!(type_of(&env, &Expr::constant(Const::u32(0x400000))), IrType::I32);
  assert_eq!(type_of(&env, &Expr::constant(Const::u64(1 << 40))), IrType::I64);
}

#[test]
fn typing_binop_ignores_operands() {
  let env = TypeEnv::new();
  // Neither operand would type on its own.
  let expr = Expr::binop(Op::Shl32, Expr::get(0, 1), Expr::tmp(Temp(99)));

  assert_eq!(type_of(&env, &expr), IrType::I32);
}

#[test]
#[should_panic(expected = "type_of: cannot infer the type of GET(0,4)")]
fn typing_get_aborts() {
  type_of(&TypeEnv::new(), &Expr::get(0, 4));
}

#[test]
#[should_panic(expected = "type_of: cannot infer the type of Not32(t0)")]
fn typing_unop_aborts() {
  let env = common::env_of(1, IrType::I32);

  type_of(&env, &Expr::unop(Op::Not32, Expr::tmp(Temp(0))));
}

#[test]
#[should_panic(expected = "type_of: cannot infer the type of LDle<I8>(0x1000)")]
fn typing_load_aborts() {
  type_of(&TypeEnv::new(), &Expr::ldle(IrType::I8, Expr::constant(Const::u32(0x1000))));
}

#[test]
#[should_panic(expected = "type_of: cannot infer the type of Neg32(t0,t1)")]
fn typing_binop_with_unary_operator_aborts() {
  let env = common::env_of(2, IrType::I32);

  type_of(&env, &Expr::binop(Op::Neg32, Expr::tmp(Temp(0)), Expr::tmp(Temp(1))));
}

#[test]
#[should_panic(expected = "lookup: t3 is not bound in the type environment")]
fn typing_unbound_temp_aborts() {
  let env = common::env_of(2, IrType::I32);

  type_of(&env, &Expr::tmp(Temp(3)));
}
