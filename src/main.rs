use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use log::warn;

use breathe::cli::args::{Cli, Commands};
use breathe::cli::commands;
use breathe::config::Config;
use breathe::error::BreatheError;
use breathe::store::{HttpStore, Store};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BreatheError> {
    let cli = Cli::parse();
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("{e}; using default settings");
        Config::default()
    });
    config.general.color.apply();

    if let Some(server) = cli.server {
        config.server.base_url = server;
    }
    let format = cli.output.unwrap_or(config.general.default_output);
    let store: Arc<dyn Store> = Arc::new(HttpStore::new(&config.server));

    let output = match cli.command.unwrap_or(Commands::Timer) {
        Commands::Timer => {
            breathe::tui::run(store, config.stopwatch.tick_ms)?;
            String::new()
        }
        Commands::Timings(args) => commands::timings(store.as_ref(), args.command, format)?,
        Commands::Session(args) => commands::session(store.as_ref(), args.command, format)?,
        Commands::Stats => commands::stats(store.as_ref(), format)?,
        Commands::Profile(args) => commands::profile(store.as_ref(), args.command, format)?,
        Commands::Clear { force } => commands::clear(store.as_ref(), force, format)?,
        Commands::Health => commands::health(store.as_ref(), format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
