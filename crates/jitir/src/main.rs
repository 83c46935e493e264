mod cli;
mod dump;
mod load;

use std::io::Write;
use std::path::Path;

use clap::Parser as ClapParser;
use jitir_config::JitirConfig;
use jitir_ir::IrBlock;
use jitir_log::{log_dbg, log_err, log_info, phase_log, phase_ok, phase_warn};

use cli::{Cli, SubCommand};

fn parse_cli_to_config(cli: &Cli) -> Result<JitirConfig, load::LoadError> {
  let mut config = JitirConfig::new_basic(
    cli.debug,
    cli.debug_trace.iter().copied().map(Into::into).collect(),
    cli.quiet,
    cli.verbose,
  );

  if let Some(file) = load::load_config_file(&config, Path::new(&cli.config))? {
    file.apply(&mut config);
  }

  match &cli.subcommand {
    SubCommand::Print(print) => {
      if let Some(format) = print.format {
        config.dump.format = format.into();
      }
    },
    SubCommand::Demo(demo) => {
      config.dump.type_table |= demo.types;
    },
    SubCommand::Types(_) => {},
  }

  Ok(config)
}

fn write_stdout(text: &str) {
  let mut stdout = std::io::stdout().lock();
  if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
    log_err!("failed to write output: {}", e);
    std::process::exit(1);
  }
}

fn emit_block(
  config: &JitirConfig,
  block: &IrBlock,
) {
  match dump::render_block(config, block) {
    Ok(text) => write_stdout(&text),
    Err(e) => {
      log_err!("failed to serialize block: {}", e);
      std::process::exit(1);
    },
  }

  if config.dump.type_table {
    let rows = dump::type_rows(config, block);
    if rows.is_empty() {
      phase_warn!(config, "no temporary definitions to type");
      return;
    }

    let table = dump::format_type_table(&rows);
    match dump::type_table_stream(config) {
      dump::TableStream::Stdout => write_stdout(&table),
      dump::TableStream::Stderr => eprint!("{}", table),
    }
  }
}

fn load_or_exit(
  config: &JitirConfig,
  file_path: &str,
) -> IrBlock {
  phase_log!(config, "Loading {}", file_path);

  match load::load_block(config, Path::new(file_path)) {
    Ok(block) => block,
    Err(e) => {
      log_err!("{}", e);
      std::process::exit(1);
    },
  }
}

fn main() {
  let cli = Cli::parse();

  let config = match parse_cli_to_config(&cli) {
    Ok(config) => config,
    Err(e) => {
      log_err!("{}", e);
      std::process::exit(1);
    },
  };

  log_dbg!(&config, "dump settings {:?}", config.dump);

  match &cli.subcommand {
    SubCommand::Print(print) => {
      let block = load_or_exit(&config, &print.file_path);
      emit_block(&config, &block);
      phase_ok!(&config, "Printed {} statements", block.stmts.len());
    },
    SubCommand::Types(types) => {
      let block = load_or_exit(&config, &types.file_path);
      let rows = dump::type_rows(&config, &block);
      if rows.is_empty() {
        phase_warn!(&config, "no temporary definitions to type");
        return;
      }
      write_stdout(&dump::format_type_table(&rows));

      if log_info(&config) {
        let mismatches = rows.iter().filter(|row| row.declared != row.inferred).count();
        phase_log!(&config, "{} of {} declared types differ from inferred", mismatches, rows.len());
      }
      phase_ok!(&config, "Typed {} temporaries", rows.len());
    },
    SubCommand::Demo(_) => {
      emit_block(&config, &dump::demo_block());
    },
  }
}
