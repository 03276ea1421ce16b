use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use hsk_vocab::cli;
use hsk_vocab::config::{Args, Config};
use hsk_vocab::vocab::VocabularyStore;

fn main() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Usage problems are reported on stdout and the run ends normally
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            write!(out, "{}", err.render())?;
            return Ok(());
        }
    };

    let config = Config::from_args(&args)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    if let Some((path, reason)) = &config.skipped_config {
        log::warn!("ignoring config file {:?}: {}", path, reason);
    }
    if let Some(path) = &config.config_path {
        log::debug!("using config file {:?}", path);
    }

    let Some(command) = &args.command else {
        writeln!(out, "{}", cli::USAGE)?;
        return Ok(());
    };

    let mut store = VocabularyStore::new();
    cli::preload(&mut store, &config, &mut out)?;
    cli::run(command, &mut store, &config, &mut out)?;
    out.flush()?;

    Ok(())
}
