//! Interactive session. Query and selection persist between lines, which is
//! what makes multi-select and "select all visible" useful from a terminal.

use super::print::print_selection;
use super::{finish, handle_add, handle_edit, handle_export, handle_remove, print_listing};
use crate::args::{ExportArgs, FieldArgs};
use crate::AppContext;
use clap::{Parser, Subcommand};
use locdex::api::CmdResult;
use locdex::error::{LocdexError, Result};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Show the current view
    #[command(alias = "ls")]
    List,

    /// Filter the view; no text shows everything
    #[command(alias = "q")]
    Search { terms: Vec<String> },

    /// Add a location
    Add {
        name: String,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a location
    Edit {
        selector: String,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Enable the given rows, or every selected row when none are given
    Enable { selectors: Vec<String> },

    /// Disable the given rows, or every selected row when none are given
    Disable { selectors: Vec<String> },

    /// Add rows to the selection
    #[command(alias = "sel")]
    Select {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Remove rows from the selection
    Unselect {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Select every visible row
    SelectAll,

    /// Unselect every visible row
    UnselectAll,

    /// Empty the selection
    Clear,

    /// Remove a location
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
        #[arg(short, long)]
        yes: bool,
    },

    /// Export all locations
    Export {
        #[command(flatten)]
        export: ExportArgs,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

pub fn run(ctx: &mut AppContext) -> Result<bool> {
    let stdin = io::stdin();
    let mut line = String::new();
    print_listing(&ctx.api.list_locations()?);

    loop {
        print!("locdex> ");
        io::stdout().flush().map_err(LocdexError::Io)?;

        line.clear();
        if stdin.lock().read_line(&mut line).map_err(LocdexError::Io)? == 0 {
            break;
        }

        let words = split_words(&line);
        if words.is_empty() {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };

        // A failed line is reported and the session goes on.
        match dispatch(ctx, parsed.command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(true)
}

/// Run one shell command. Returns `Ok(false)` when the session should end.
fn dispatch(ctx: &mut AppContext, command: ShellCommand) -> Result<bool> {
    match command {
        ShellCommand::Quit => return Ok(false),
        ShellCommand::List => listed(ctx.api.list_locations()?)?,
        ShellCommand::Search { terms } => listed(ctx.api.search(&terms.join(" "))?)?,
        ShellCommand::Add { name, fields } => handle_add(ctx, name, fields)?,
        ShellCommand::Edit {
            selector,
            name,
            fields,
        } => handle_edit(ctx, &selector, name, fields)?,
        ShellCommand::Enable { selectors } => set_status(ctx, &selectors, true)?,
        ShellCommand::Disable { selectors } => set_status(ctx, &selectors, false)?,
        ShellCommand::Select { selectors } => summary(ctx.api.select(&selectors, true)?)?,
        ShellCommand::Unselect { selectors } => summary(ctx.api.select(&selectors, false)?)?,
        ShellCommand::SelectAll => summary(ctx.api.select_all_visible(true)?)?,
        ShellCommand::UnselectAll => summary(ctx.api.select_all_visible(false)?)?,
        ShellCommand::Clear => summary(ctx.api.clear_selection()?)?,
        ShellCommand::Remove { selectors, yes } => handle_remove(ctx, &selectors, yes)?,
        ShellCommand::Export { export } => handle_export(ctx, export)?,
    };
    Ok(true)
}

fn set_status(ctx: &mut AppContext, selectors: &[String], enabled: bool) -> Result<bool> {
    let result = if selectors.is_empty() {
        ctx.api.bulk_set_status(enabled)?
    } else if enabled {
        ctx.api.enable_locations(selectors)?
    } else {
        ctx.api.disable_locations(selectors)?
    };
    finish(&result)
}

fn listed(result: CmdResult) -> Result<bool> {
    print_listing(&result);
    finish(&result)
}

fn summary(result: CmdResult) -> Result<bool> {
    print_selection(&result);
    finish(&result)
}

/// Split a line into words, keeping quoted text ("New York") together.
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}
