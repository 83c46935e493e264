//! Canonical text form of the IR.
//!
//! The format is consumed by tooling that compares dumps byte for byte, so
//! spacing here is part of the contract:
//!
//! ```text
//!    t0:I32   t1:I32
//!    t1 = Add32(t0,0x5)
//!    UJump 0x400000
//! ```

use std::fmt::{self, Write};

use crate::{Const, Expr, IrBlock, IrType, Next, Op, Stmt, Temp, TypeEnv};

/// Maplets per line in a printed type environment.
const TYENV_LINE_WIDTH: usize = 8;

const INDENT: &str = "   ";

/// Writes IR entities to any `fmt::Write` sink.
pub struct IrPrinter<'w, W: Write> {
  out: &'w mut W,
}

impl<'w, W: Write> IrPrinter<'w, W> {
  pub fn new(out: &'w mut W) -> Self {
    Self { out }
  }

  pub fn print_type(
    &mut self,
    ty: IrType,
  ) -> fmt::Result {
    self.out.write_str(ty.name())
  }

  pub fn print_const(
    &mut self,
    con: &Const,
  ) -> fmt::Result {
    match con {
      Const::U8(v) => write!(self.out, "0x{:x}", v),
      Const::U16(v) => write!(self.out, "0x{:x}", v),
      Const::U32(v) => write!(self.out, "0x{:x}", v),
      Const::U64(v) => write!(self.out, "0x{:x}", v),
    }
  }

  pub fn print_temp(
    &mut self,
    tmp: Temp,
  ) -> fmt::Result {
    write!(self.out, "t{}", tmp.index())
  }

  pub fn print_op(
    &mut self,
    op: Op,
  ) -> fmt::Result {
    self.out.write_str(op.name())
  }

  pub fn print_expr(
    &mut self,
    expr: &Expr,
  ) -> fmt::Result {
    match expr {
      Expr::Get { offset, size } => write!(self.out, "GET({},{})", offset, size),
      Expr::Tmp(tmp) => self.print_temp(*tmp),
      Expr::Binop { op, arg1, arg2 } => {
        self.print_op(*op)?;
        self.out.write_char('(')?;
        self.print_expr(arg1)?;
        self.out.write_char(',')?;
        self.print_expr(arg2)?;
        self.out.write_char(')')
      },
      Expr::Unop { op, arg } => {
        self.print_op(*op)?;
        self.out.write_char('(')?;
        self.print_expr(arg)?;
        self.out.write_char(')')
      },
      Expr::LdLe { ty, addr } => {
        self.out.write_str("LDle<")?;
        self.print_type(*ty)?;
        self.out.write_str(">(")?;
        self.print_expr(addr)?;
        self.out.write_char(')')
      },
      Expr::Const(con) => self.print_const(con),
    }
  }

  pub fn print_stmt(
    &mut self,
    stmt: &Stmt,
  ) -> fmt::Result {
    match stmt {
      Stmt::Put { offset, size, expr } => {
        write!(self.out, "Put({},{}) = ", offset, size)?;
        self.print_expr(expr)
      },
      Stmt::Tmp { tmp, expr } => {
        self.print_temp(*tmp)?;
        self.out.write_str(" = ")?;
        self.print_expr(expr)
      },
      Stmt::StLe { addr, data } => {
        self.out.write_str("STle(")?;
        self.print_expr(addr)?;
        self.out.write_str(") = ")?;
        self.print_expr(data)
      },
    }
  }

  pub fn print_next(
    &mut self,
    next: &Next,
  ) -> fmt::Result {
    match next {
      Next::UJump { dst } => {
        self.out.write_str("UJump ")?;
        self.print_const(dst)
      },
      Next::CJump01 { cond, dst0, dst1 } => {
        self.out.write_str("CJump01 (")?;
        self.print_expr(cond)?;
        self.out.write_str(") ")?;
        self.print_const(dst0)?;
        self.out.write_char(' ')?;
        self.print_const(dst1)
      },
      Next::IJump { dst } => {
        self.out.write_str("IJump ")?;
        self.print_expr(dst)
      },
    }
  }

  /// Maplets as `tN:Ty`, up to eight per line, each preceded by three
  /// spaces. Every line ends with a newline; an empty map prints nothing.
  pub fn print_tyenv(
    &mut self,
    tyenv: &TypeEnv,
  ) -> fmt::Result {
    let last = tyenv.len().saturating_sub(1);

    for (i, maplet) in tyenv.iter().enumerate() {
      self.out.write_str(INDENT)?;
      self.print_temp(maplet.tmp)?;
      self.out.write_char(':')?;
      self.print_type(maplet.ty)?;

      if i % TYENV_LINE_WIDTH == TYENV_LINE_WIDTH - 1 || i == last {
        self.out.write_char('\n')?;
      }
    }

    Ok(())
  }

  pub fn print_block(
    &mut self,
    block: &IrBlock,
  ) -> fmt::Result {
    self.print_tyenv(&block.tyenv)?;

    for stmt in &block.stmts {
      self.out.write_str(INDENT)?;
      self.print_stmt(stmt)?;
      self.out.write_char('\n')?;
    }

    self.out.write_str(INDENT)?;
    self.print_next(&block.next)?;
    self.out.write_char('\n')
  }
}

macro_rules! display_via_printer {
  ($ty:ty, $method:ident, $arg:ident => $val:expr) => {
    impl fmt::Display for $ty {
      fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
      ) -> fmt::Result {
        let $arg = self;
        IrPrinter::new(f).$method($val)
      }
    }
  };
}

display_via_printer!(IrType, print_type, ty => *ty);
display_via_printer!(Const, print_const, con => con);
display_via_printer!(Temp, print_temp, tmp => *tmp);
display_via_printer!(Op, print_op, op => *op);
display_via_printer!(Expr, print_expr, expr => expr);
display_via_printer!(Stmt, print_stmt, stmt => stmt);
display_via_printer!(Next, print_next, next => next);
display_via_printer!(TypeEnv, print_tyenv, tyenv => tyenv);
display_via_printer!(IrBlock, print_block, block => block);
