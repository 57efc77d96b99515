use clap::Parser;
use directories::ProjectDirs;
use locdex::api::{LocdexApi, LocdexPaths};
use locdex::config::LocdexConfig;
use locdex::error::{LocdexError, Result};
use locdex::storage::fs::FileStorage;
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

pub struct AppContext {
    pub api: LocdexApi<FileStorage>,
    pub config: LocdexConfig,
}

/// Returns `Ok(false)` when the command reported an error message.
fn run(cli: Cli) -> Result<bool> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => cli::handle_list(&mut ctx, search),
        Some(Commands::Add { name, fields }) => cli::handle_add(&mut ctx, name, fields),
        Some(Commands::Edit {
            selector,
            name,
            fields,
        }) => cli::handle_edit(&mut ctx, &selector, name, fields),
        Some(Commands::Enable { selectors }) => cli::handle_bulk(&mut ctx, &selectors, true),
        Some(Commands::Disable { selectors }) => cli::handle_bulk(&mut ctx, &selectors, false),
        Some(Commands::Remove { selectors, yes }) => cli::handle_remove(&mut ctx, &selectors, yes),
        Some(Commands::Export { export }) => cli::handle_export(&mut ctx, export),
        Some(Commands::Import { file }) => cli::handle_import(&mut ctx, &file),
        Some(Commands::Config { key, value }) => cli::handle_config(&mut ctx, key, value),
        Some(Commands::Shell) => cli::shell::run(&mut ctx),
        None => cli::handle_list(&mut ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let config = LocdexConfig::load(&data_dir)?;
    let storage = FileStorage::new(data_dir.clone());
    let api = LocdexApi::open(storage, &config, LocdexPaths { data_dir })?;

    Ok(AppContext { api, config })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "locdex", "locdex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LocdexError::Store("Could not determine data directory".to_string()))
}
