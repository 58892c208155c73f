//! rTimeclock library root.
//! Exposes the CLI parser, the high-level run() function, the entry store
//! and the HTTP surface.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod http;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg),
        Commands::Punch { .. } => cli::commands::punch::handle(&cli.command, cfg),
        Commands::Add { .. } | Commands::Edit { .. } => {
            cli::commands::add::handle(&cli.command, cfg)
        }
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Del { .. } | Commands::Remove { .. } => {
            cli::commands::del::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ data file override from the command line
    if let Some(custom) = &cli.data {
        cfg.data_file = custom.clone();
    }

    // 4️⃣ logging: the server logs at the configured level, one-shot
    //    commands only report warnings
    let level = match cli.command {
        Commands::Serve { .. } => cfg.log_level.as_str(),
        _ => "warn",
    };
    logging::init(level);

    dispatch(&cli, &cfg)
}
