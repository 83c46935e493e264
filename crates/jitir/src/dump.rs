use ascii_table::AsciiTable;
use jitir_config::{DebugTrace, DumpFormat, JitirConfig};
use jitir_ir::{type_of, Const, Expr, IrBlock, IrType, Next, Op, Stmt, Temp, TypeEnv};
use jitir_log::{log_trc, trace_dbg};

/// Render `block` in the configured format. Text output ends in a newline.
pub fn render_block(
  config: &JitirConfig,
  block: &IrBlock,
) -> Result<String, serde_json::Error> {
  trace_dbg!(config, DebugTrace::Print, "rendering block as {:?}", config.dump.format);

  match config.dump.format {
    DumpFormat::Text => Ok(block.to_string()),
    DumpFormat::Json => serde_json::to_string_pretty(block).map(|json| json + "\n"),
  }
}

/// One temporary definition with its declared and inferred types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRow {
  pub index: usize,
  pub tmp: Temp,
  pub declared: IrType,
  pub inferred: IrType,
}

impl TypeRow {
  pub fn to_ascii_table_row(&self) -> Vec<String> {
    let status = if self.declared == self.inferred { "" } else { "mismatch" };

    vec![
      self.index.to_string(),
      self.tmp.to_string(),
      self.declared.to_string(),
      self.inferred.to_string(),
      status.to_string(),
    ]
  }
}

/// Declared and inferred types for every `tN = ...` statement.
///
/// Inference is `type_of`, so a right-hand side it cannot type aborts.
pub fn type_rows(
  config: &JitirConfig,
  block: &IrBlock,
) -> Vec<TypeRow> {
  block
    .stmts
    .iter()
    .enumerate()
    .filter_map(|(index, stmt)| match stmt {
      Stmt::Tmp { tmp, expr } => {
        trace_dbg!(config, DebugTrace::Typing, "typing stmt {}: {}", index, stmt);
        Some(TypeRow {
          index,
          tmp: *tmp,
          declared: block.tyenv.lookup(*tmp),
          inferred: type_of(&block.tyenv, expr),
        })
      },
      _ => {
        log_trc!(config, "stmt {} defines no temporary", index);
        None
      },
    })
    .collect()
}

/// Where the type table goes when it follows a block dump.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TableStream {
  Stdout,
  /// JSON dumps keep stdout parseable, so the table moves to stderr.
  Stderr,
}

pub fn type_table_stream(config: &JitirConfig) -> TableStream {
  match config.dump.format {
    DumpFormat::Text => TableStream::Stdout,
    DumpFormat::Json => TableStream::Stderr,
  }
}

/// The type table as text, ending in a newline.
pub fn format_type_table(rows: &[TypeRow]) -> String {
  let mut ascii_table = AsciiTable::default();
  ascii_table.column(0).set_header("Stmt");
  ascii_table.column(1).set_header("Temp");
  ascii_table.column(2).set_header("Declared");
  ascii_table.column(3).set_header("Inferred");
  ascii_table.column(4).set_header("Note");

  let data: Vec<Vec<String>> = rows.iter().map(TypeRow::to_ascii_table_row).collect();
  ascii_table.format(data) + "\n"
}

/// `t1 = Add32(t0,0x5)` jumping to `0x400000`, built the way a front end
/// would build it.
pub fn demo_block() -> IrBlock {
  let mut tyenv = TypeEnv::new();
  let t0 = tyenv.new_temp(IrType::I32);
  let t1 = tyenv.new_temp(IrType::I32);

  let sum = Expr::binop(Op::Add32, Expr::tmp(t0), Expr::constant(Const::u8(0x5)));
  let stmts = vec![Stmt::tmp(t1, sum)];

  IrBlock::new(tyenv, stmts, Next::ujump(Const::u32(0x400000)))
}
