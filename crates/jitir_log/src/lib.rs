//! Logging utilities for the jitir tools.
//!
//! Provides macros for:
//! - Phase logging (`phase_log!`, `phase_ok!`, `phase_warn!`)
//! - Errors (`log_err!`), shown even in quiet mode
//! - Debug traces by category (`trace_dbg!`)
//! - Verbose logging (`log_dbg!`, `log_trc!`)
//!
//! All output goes to stderr so IR dumps on stdout stay byte-exact.

use jitir_config::{DebugTrace, JitirConfig};

pub fn effective_verbose(config: &JitirConfig) -> u8 {
  if config.quiet {
    return 0;
  }

  if config.debug && config.verbose < 2 {
    return 2;
  }

  config.verbose
}

pub fn log_phase(config: &JitirConfig) -> bool {
  !config.quiet
}

pub fn log_info(config: &JitirConfig) -> bool {
  effective_verbose(config) >= 1
}

pub fn log_debug(config: &JitirConfig) -> bool {
  effective_verbose(config) >= 2
}

pub fn log_trace(config: &JitirConfig) -> bool {
  effective_verbose(config) >= 3
}

pub fn debug_trace_enabled(
  config: &JitirConfig,
  trace: DebugTrace,
) -> bool {
  !config.quiet && (config.debug || config.debug_trace.contains(&trace))
}

/// Returns lowercase name of a DebugTrace variant for log output.
pub fn trace_name(trace: DebugTrace) -> &'static str {
  match trace {
    DebugTrace::Load => "load",
    DebugTrace::Print => "print",
    DebugTrace::Typing => "typing",
  }
}

/// Log a phase message with an arrow prefix.
///
/// # Examples
///
/// ```ignore
/// phase_log!(&config, "Loading {}", path);
/// phase_log!(&config, indent = 8, "{} statements", count);
/// ```
#[macro_export]
macro_rules! phase_log {
  ($config:expr, indent = $indent:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_phase($config) {
      use colored::Colorize;
      eprintln!(
        "{:indent$}{} {}",
        "",
        "-->".bright_green().bold(),
        format!($fmt $(, $arg)*),
        indent = $indent
      );
    }
  }};

  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    $crate::phase_log!($config, indent = 4, $fmt $(, $arg)*);
  }};
}

/// Log a successful phase completion (green arrow, no indent).
#[macro_export]
macro_rules! phase_ok {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_phase($config) {
      use colored::Colorize;
      eprintln!("{} {}", "-->".bright_green().bold(), format!($fmt $(, $arg)*));
    }
  }};
}

/// Log a warning during a phase (yellow arrow, no indent).
#[macro_export]
macro_rules! phase_warn {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_phase($config) {
      use colored::Colorize;
      eprintln!("{} {}", "-->".bright_yellow().bold(), format!($fmt $(, $arg)*));
    }
  }};
}

/// Report an error. Not silenced by `quiet`.
///
/// ```ignore
/// log_err!("failed to read '{}'", path);
/// // Output: error: failed to read 'block.json'
/// ```
#[macro_export]
macro_rules! log_err {
  ($fmt:literal $(, $arg:expr)* $(,)?) => {{
    use colored::Colorize;
    eprintln!("{} {}", "error:".bright_red().bold(), format!($fmt $(, $arg)*));
  }};
}

/// Log a debug trace for a specific area.
///
/// Output format: `debug[area]: message`
///
/// ```ignore
/// trace_dbg!(&config, DebugTrace::Load, "read {} bytes", len);
/// // Output: debug[load]: read 412 bytes
/// ```
#[macro_export]
macro_rules! trace_dbg {
  ($config:expr, $trace:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::debug_trace_enabled($config, $trace) {
      eprintln!(
        "debug[{}]: {}",
        $crate::trace_name($trace),
        format!($fmt $(, $arg)*)
      );
    }
  }};
}

/// Log a verbose debug message (verbosity >= 2).
#[macro_export]
macro_rules! log_dbg {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_debug($config) {
      eprintln!("debug: {}", format!($fmt $(, $arg)*));
    }
  }};
}

/// Log a trace message (verbosity >= 3).
#[macro_export]
macro_rules! log_trc {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_trace($config) {
      eprintln!("trace: {}", format!($fmt $(, $arg)*));
    }
  }};
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_quiet_silences_everything() {
    let config = JitirConfig::new_basic(true, vec![DebugTrace::Load], true, 3);

    assert_eq!(effective_verbose(&config), 0);
    assert!(!log_phase(&config));
    assert!(!debug_trace_enabled(&config, DebugTrace::Load));
  }

  #[test]
  fn test_debug_raises_verbosity() {
    let config = JitirConfig::new_basic(true, vec![], false, 0);

    assert_eq!(effective_verbose(&config), 2);
    assert!(log_debug(&config));
    assert!(!log_trace(&config));
    assert!(debug_trace_enabled(&config, DebugTrace::Typing));
  }

  #[test]
  fn test_single_trace_area() {
    let config = JitirConfig::new_basic(false, vec![DebugTrace::Print], false, 1);

    assert!(log_info(&config));
    assert!(!log_debug(&config));
    assert!(debug_trace_enabled(&config, DebugTrace::Print));
    assert!(!debug_trace_enabled(&config, DebugTrace::Load));
  }
}
