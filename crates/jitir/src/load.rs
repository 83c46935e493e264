//! Reading blocks and configuration from disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use jitir_config::{DebugTrace, JitirConfig, JitirToml};
use jitir_ir::IrBlock;
use jitir_log::{log_dbg, trace_dbg};

/// Errors that can occur while loading input files.
#[derive(Debug)]
pub enum LoadError {
  /// I/O error while reading a file.
  Io { path: PathBuf, source: std::io::Error },

  /// The file is not a valid serialized block.
  Json { path: PathBuf, message: String },

  /// Failed to parse jitir.toml.
  Toml { path: PathBuf, message: String },
}

impl fmt::Display for LoadError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      LoadError::Io { path, source } => {
        write!(f, "failed to read '{}': {}", path.display(), source)
      },

      LoadError::Json { path, message } => {
        write!(f, "invalid block in '{}': {}", path.display(), message)
      },

      LoadError::Toml { path, message } => {
        write!(f, "failed to parse '{}': {}", path.display(), message)
      },
    }
  }
}

impl std::error::Error for LoadError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      LoadError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}

fn read(path: &Path) -> Result<String, LoadError> {
  fs::read_to_string(path).map_err(|source| LoadError::Io {
    path: path.to_path_buf(),
    source,
  })
}

/// Read and decode one block from a JSON file.
pub fn load_block(
  config: &JitirConfig,
  path: &Path,
) -> Result<IrBlock, LoadError> {
  let content = read(path)?;
  trace_dbg!(config, DebugTrace::Load, "read {} bytes from {}", content.len(), path.display());

  let block: IrBlock = serde_json::from_str(&content).map_err(|e| LoadError::Json {
    path: path.to_path_buf(),
    message: e.to_string(),
  })?;

  trace_dbg!(
    config,
    DebugTrace::Load,
    "{} temporaries, {} statements",
    block.tyenv.len(),
    block.stmts.len()
  );

  Ok(block)
}

/// Read jitir.toml if it exists. A missing file is not an error.
pub fn load_config_file(
  config: &JitirConfig,
  path: &Path,
) -> Result<Option<JitirToml>, LoadError> {
  if !path.exists() {
    log_dbg!(config, "no config file at {}", path.display());
    return Ok(None);
  }

  let content = read(path)?;
  let parsed = JitirToml::parse(&content).map_err(|e| LoadError::Toml {
    path: path.to_path_buf(),
    message: e.to_string(),
  })?;

  log_dbg!(config, "loaded config from {}", path.display());
  Ok(Some(parsed))
}
