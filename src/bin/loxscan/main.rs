mod repl;

use std::fs;
use std::process::exit;

use anyhow::Context;
use clap::Parser;
use log::{debug, LevelFilter};
use loxscan::cli::Cli;
use loxscan::run;
use repl::Repl;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// `EX_DATAERR` from sysexits.h
const EXIT_DATA_ERR: i32 = 65;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::builder();
    logger.format_module_path(false);
    if cli.debug {
        logger.filter_level(LevelFilter::Debug).init();
    } else {
        logger.filter_level(LevelFilter::Warn).init();
    }

    if let Some(script) = &cli.script {
        let code =
            fs::read_to_string(script).with_context(|| format!("script `{}`", script.display()))?;
        debug!("scanning `{}` ({} bytes)", script.display(), code.len());

        let errors = run(&script.to_string_lossy(), &code);
        if errors > 0 {
            debug!("{errors} lexical error(s) in `{}`", script.display());
            exit(EXIT_DATA_ERR);
        }
    } else {
        repl()?;
    }

    Ok(())
}

fn repl() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut state = Repl::default();
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                state.rep(&line);
            }
            Err(ReadlineError::Eof) => return Ok(()),
            Err(ReadlineError::Interrupted) => {
                eprintln!("user exit");
                exit(1);
            }
            Err(e) => return Err(e),
        }
    }
}
