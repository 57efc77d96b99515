//! Terminal front end. Everything that prints, prompts or reads files for the
//! user lives here; the library only returns `CmdResult`s.

pub mod print;
pub mod shell;

use crate::args::{ExportArgs, FieldArgs};
use crate::AppContext;
use locdex::api::{CmdResult, ConfigAction};
use locdex::clipboard::copy_to_clipboard;
use locdex::error::{LocdexError, Result};
use locdex::model::{Location, LocationFields};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub use print::{print_listing, print_messages};

/// Log to stderr. `RUST_LOG` wins over the `-v` count when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("locdex={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Print messages and report whether the command went through cleanly.
fn finish(result: &CmdResult) -> Result<bool> {
    print_messages(&result.messages);
    Ok(!result.has_errors())
}

pub fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<bool> {
    let result = match search {
        Some(query) => ctx.api.search(&query)?,
        None => ctx.api.list_locations()?,
    };
    print_listing(&result);
    finish(&result)
}

pub fn handle_add(ctx: &mut AppContext, name: String, fields: FieldArgs) -> Result<bool> {
    let fields = LocationFields {
        name,
        street_address: fields.street.unwrap_or_default(),
        state: fields.state.unwrap_or_default(),
        city: fields.city.unwrap_or_default(),
        zip_code: fields.zip.unwrap_or_default(),
    };
    let result = ctx.api.create_location(fields)?;
    finish(&result)
}

pub fn handle_edit(
    ctx: &mut AppContext,
    selector: &str,
    name: Option<String>,
    fields: FieldArgs,
) -> Result<bool> {
    let current = ctx.api.get_location(selector)?;
    let edited = merge_fields(&current, name, fields);
    let result = ctx.api.update_location(&current.id.to_string(), edited)?;
    finish(&result)
}

/// Start from the stored values and overwrite whatever was given.
fn merge_fields(current: &Location, name: Option<String>, fields: FieldArgs) -> LocationFields {
    let base = current.fields();
    LocationFields {
        name: name.unwrap_or(base.name),
        street_address: fields.street.unwrap_or(base.street_address),
        state: fields.state.unwrap_or(base.state),
        city: fields.city.unwrap_or(base.city),
        zip_code: fields.zip.unwrap_or(base.zip_code),
    }
}

/// Select the given locations and switch them all at once.
pub fn handle_bulk(ctx: &mut AppContext, selectors: &[String], enabled: bool) -> Result<bool> {
    ctx.api.select(selectors, true)?;
    let result = ctx.api.bulk_set_status(enabled)?;
    finish(&result)
}

pub fn handle_remove(ctx: &mut AppContext, selectors: &[String], yes: bool) -> Result<bool> {
    let targets = ctx.api.get_locations(selectors)?;
    if !yes && !confirm_removal(&targets)? {
        println!("Cancelled.");
        return Ok(true);
    }

    let ids: Vec<String> = targets.iter().map(|l| l.id.to_string()).collect();
    let result = ctx.api.remove_locations(&ids)?;
    finish(&result)
}

fn confirm_removal(targets: &[Location]) -> Result<bool> {
    let names: Vec<String> = targets.iter().map(|l| format!("\"{}\"", l.name)).collect();
    print!("Remove {}? [y/N]: ", names.join(", "));
    io::stdout().flush().map_err(LocdexError::Io)?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(LocdexError::Io)?;
    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}

pub fn handle_export(ctx: &mut AppContext, args: ExportArgs) -> Result<bool> {
    let result = ctx.api.export_locations()?;
    let text = result
        .export
        .as_deref()
        .ok_or_else(|| LocdexError::Api("Export produced no output".to_string()))?;

    if args.copy {
        match copy_to_clipboard(text) {
            Ok(()) => println!("JSON copied to clipboard."),
            Err(e) => eprintln!("Warning: Failed to copy to clipboard: {}", e),
        }
    }

    if args.stdout {
        println!("{}", text);
        return Ok(true);
    }

    let path = args
        .output
        .unwrap_or_else(|| ctx.config.export_file.clone().into());
    std::fs::write(&path, text).map_err(LocdexError::Io)?;
    print_messages(&result.messages);
    println!("Wrote {}", path.display());
    Ok(true)
}

pub fn handle_import(ctx: &mut AppContext, file: &Path) -> Result<bool> {
    let json = std::fs::read_to_string(file).map_err(LocdexError::Io)?;
    let result = ctx.api.import_locations(&json)?;
    finish(&result)
}

pub fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<bool> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        for key in locdex::config::CONFIG_KEYS {
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    finish(&result)
}
