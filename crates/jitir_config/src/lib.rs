use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugTrace {
  Load,
  Print,
  Typing,
}

/// How a block is written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpFormat {
  /// Canonical IR text.
  #[default]
  Text,
  /// Pretty-printed serde JSON of the block.
  Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DumpConfig {
  #[serde(default)]
  pub format: DumpFormat,
  /// Also print a table of inferred temporary types after the block.
  #[serde(default)]
  pub type_table: bool,
}

/// Root structure of jitir.toml.
///
/// ```toml
/// [dump]
/// format = "json"
/// type_table = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JitirToml {
  #[serde(default)]
  pub dump: DumpConfig,
}

impl JitirToml {
  pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(content)
  }

  /// Copy file settings into `config`. Command-line overrides are applied
  /// afterwards by the caller.
  pub fn apply(
    &self,
    config: &mut JitirConfig,
  ) {
    config.dump = self.dump.clone();
  }
}

#[derive(Debug, Clone, Default)]
pub struct JitirConfig {
  pub debug: bool,
  pub debug_trace: Vec<DebugTrace>,
  pub quiet: bool,
  pub verbose: u8,
  pub dump: DumpConfig,
}

impl JitirConfig {
  pub fn new_basic(
    debug: bool,
    debug_trace: Vec<DebugTrace>,
    quiet: bool,
    verbose: u8,
  ) -> Self {
    Self {
      debug,
      debug_trace,
      quiet,
      verbose,
      dump: DumpConfig::default(),
    }
  }
}
