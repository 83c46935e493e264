use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use jitir_config::{DebugTrace, DumpFormat};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DebugTraceCli {
  /// Reading and decoding block files
  Load,
  /// Rendering blocks
  Print,
  /// Type inference over temporaries
  Typing,
}

impl From<DebugTraceCli> for DebugTrace {
  fn from(value: DebugTraceCli) -> DebugTrace {
    match value {
      DebugTraceCli::Load => DebugTrace::Load,
      DebugTraceCli::Print => DebugTrace::Print,
      DebugTraceCli::Typing => DebugTrace::Typing,
    }
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DumpFormatCli {
  /// Canonical IR text
  Text,
  /// Pretty-printed JSON
  Json,
}

impl From<DumpFormatCli> for DumpFormat {
  fn from(value: DumpFormatCli) -> DumpFormat {
    match value {
      DumpFormatCli::Text => DumpFormat::Text,
      DumpFormatCli::Json => DumpFormat::Json,
    }
  }
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PrintCommand {
  /// JSON file holding one block
  pub file_path: String,

  /// Output format (overrides jitir.toml)
  #[arg(short, long, value_enum)]
  pub format: Option<DumpFormatCli>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TypesCommand {
  /// JSON file holding one block
  pub file_path: String,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct DemoCommand {
  /// Also print the inferred type table
  #[arg(long)]
  pub types: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SubCommand {
  /// Print a block
  Print(PrintCommand),
  /// Tabulate declared and inferred types of defined temporaries
  Types(TypesCommand),
  /// Build and print a small sample block
  Demo(DemoCommand),
}

#[derive(Parser, Debug)]
#[command(name = "jitir", version, about = "Inspect translated IR blocks", color = ColorChoice::Auto)]
pub struct Cli {
  #[command(subcommand)]
  pub subcommand: SubCommand,

  /// Enable all debug traces
  #[arg(long, global = true)]
  pub debug: bool,

  /// Enable debug traces for one area (can be repeated)
  #[arg(long = "debug-trace", value_enum, global = true, action = clap::ArgAction::Append)]
  pub debug_trace: Vec<DebugTraceCli>,

  /// Only print errors
  #[arg(short, long, global = true)]
  pub quiet: bool,

  /// Increase verbosity (-v, -vv, -vvv)
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Path to the configuration file
  #[arg(long, global = true, default_value = "jitir.toml")]
  pub config: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_print_with_format() {
    let cli = Cli::try_parse_from(["jitir", "print", "block.json", "--format", "json", "-vv"]).unwrap();

    assert_eq!(cli.verbose, 2);
    assert_eq!(
      cli.subcommand,
      SubCommand::Print(PrintCommand {
        file_path: "block.json".to_string(),
        format: Some(DumpFormatCli::Json),
      })
    );
  }

  #[test]
  fn test_parse_repeated_traces() {
    let cli = Cli::try_parse_from(["jitir", "--debug-trace", "load", "--debug-trace", "typing", "demo"]).unwrap();

    assert_eq!(cli.debug_trace, vec![DebugTraceCli::Load, DebugTraceCli::Typing]);
    assert_eq!(cli.config, "jitir.toml");
  }

  #[test]
  fn test_types_requires_file() {
    assert!(Cli::try_parse_from(["jitir", "types"]).is_err());
  }
}
