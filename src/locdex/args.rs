use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "locdex", version)]
#[command(about = "Keep a short list of locations: search, toggle, export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the snapshot and config (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Optional address fields shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Street address
    #[arg(long)]
    pub street: Option<String>,

    /// State
    #[arg(long)]
    pub state: Option<String>,

    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// Zip code
    #[arg(long)]
    pub zip: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// File to write (defaults to the configured export file)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also copy the JSON to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Print the JSON instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List locations
    #[command(alias = "ls")]
    List {
        /// Only show locations matching this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a location (enabled, at the top of the list)
    #[command(alias = "n")]
    Add {
        /// Name of the location
        name: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a location; fields not given keep their value
    #[command(alias = "e")]
    Edit {
        /// Row number, id or name
        selector: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Enable one or more locations
    Enable {
        /// Row numbers, ids or names
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Disable one or more locations
    Disable {
        /// Row numbers, ids or names
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Remove one or more locations
    #[command(alias = "rm")]
    Remove {
        /// Row numbers, ids or names
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Export all locations as JSON
    Export {
        #[command(flatten)]
        export: ExportArgs,
    },

    /// Import locations from a JSON export
    Import {
        /// File in export format
        file: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, export-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive session with search and multi-select
    Shell,
}
