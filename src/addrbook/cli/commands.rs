//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Handles argument parsing and prompting
//! - Decides when the book is written back to disk
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::print::{
    eprint_messages, print_contacts, print_full_contacts, print_json, print_messages,
    print_saved_footer,
};
use super::prompt::{collect_fields, confirm};
use super::setup::{Cli, Commands, FieldArgs};
use addrbook::api::{AddrbookApi, AddrbookPaths, CmdResult, ConfigAction, MessageLevel};
use addrbook::config::AddrbookConfig;
use addrbook::error::{AddrbookError, Result};
use addrbook::logging::init_logging;
use addrbook::model::{ContactField, ContactFields};
use addrbook::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the platform data directory as the home for config and data.
const HOME_ENV: &str = "ADDRBOOK_HOME";

struct AppContext {
    api: AddrbookApi<FileStore>,
}

impl AppContext {
    /// Reads the data file into memory; load notices go to stderr.
    fn load(&mut self) -> Result<()> {
        let result = self.api.load()?;
        eprint_messages(&result.messages);
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let result = self.api.save()?;
        print_messages(&result.messages);
        Ok(())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::List { sort, json }) => handle_list(&mut ctx, sort, json),
        Some(Commands::Sort { field, json }) => handle_list(&mut ctx, Some(field), json),
        Some(Commands::Filter { query, json }) => handle_filter(&mut ctx, query, json),
        Some(Commands::View { selectors, json }) => handle_view(&mut ctx, selectors, json),
        Some(Commands::Edit { selectors, fields }) => handle_edit(&mut ctx, selectors, fields),
        Some(Commands::Delete { selectors, yes }) => handle_delete(&mut ctx, selectors, yes),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Check) => handle_check(&ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, false),
    }
}

fn home_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AddrbookError::Config("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = home_dir()?;
    let config = AddrbookConfig::load(&home)?;

    let data_file = match &cli.file {
        Some(file) => file.clone(),
        None => config.data_path(&home),
    };
    log::debug!(
        "event=context_init home={} data_file={} malformed_lines={}",
        home.display(),
        data_file.display(),
        config.malformed_lines
    );

    let store = FileStore::new(data_file.clone());
    let paths = AddrbookPaths { home, data_file };
    let api = AddrbookApi::new(store, paths, config.malformed_lines);

    Ok(AppContext { api })
}

/// Fields from flags when any were given, otherwise read from stdin.
/// `None` means the user ended input early.
fn gather_fields(args: &FieldArgs, current: ContactFields) -> Result<Option<ContactFields>> {
    if args.is_empty() {
        collect_fields(&current)
    } else {
        Ok(Some(args.apply_to(current)))
    }
}

fn handle_add(ctx: &mut AppContext, args: FieldArgs) -> Result<()> {
    ctx.load()?;

    let fields = match gather_fields(&args, ContactFields::default())? {
        Some(fields) => fields,
        None => {
            println!("Cancelled, nothing added.");
            return Ok(());
        }
    };

    let result = ctx.api.add_contact(fields)?;
    print_messages(&result.messages);
    ctx.save()
}

fn handle_list(ctx: &mut AppContext, sort: Option<ContactField>, json: bool) -> Result<()> {
    ctx.load()?;

    let result = match sort {
        Some(field) => ctx.api.sorted_by(field)?,
        None => ctx.api.list()?,
    };
    print_listing(ctx, &result, json)
}

fn handle_filter(ctx: &mut AppContext, query: Vec<String>, json: bool) -> Result<()> {
    ctx.load()?;

    let result = ctx.api.filter(&query.join(" "))?;
    print_listing(ctx, &result, json)
}

fn print_listing(ctx: &AppContext, result: &CmdResult, json: bool) -> Result<()> {
    if json {
        return print_json(&result.listed_contacts);
    }
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    print_saved_footer(ctx.api.last_saved()?);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, selectors: Vec<String>, json: bool) -> Result<()> {
    ctx.load()?;

    let result = ctx.api.view_contacts(&selectors)?;
    if json {
        return print_json(&result.listed_contacts);
    }
    print_full_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selectors: Vec<String>, args: FieldArgs) -> Result<()> {
    ctx.load()?;

    let target = ctx.api.view_contacts(&selectors)?;
    let current = match target.listed_contacts.as_slice() {
        [one] => one.clone(),
        _ => {
            return Err(AddrbookError::Api(
                "Select exactly one contact to edit".into(),
            ))
        }
    };

    let fields = match gather_fields(&args, current.contact.fields.clone())? {
        Some(fields) => fields,
        None => {
            println!("Cancelled, nothing changed.");
            return Ok(());
        }
    };

    // the number was just resolved, so pin the edit to it rather than re-matching a name
    let result = ctx
        .api
        .update_contact(&[current.index.to_string()], fields)?;
    print_messages(&result.messages);
    ctx.save()
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    ctx.load()?;

    let preview = ctx.api.view_contacts(&selectors)?;
    if !yes {
        println!("This will delete the following contacts:");
        for dc in &preview.listed_contacts {
            println!("  {}. {}", dc.index, dc.contact.display_name());
        }
        if !confirm("Delete?")? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let numbers: Vec<String> = preview
        .listed_contacts
        .iter()
        .map(|dc| dc.index.to_string())
        .collect();
    let result = ctx.api.delete_contacts(&numbers)?;
    print_messages(&result.messages);
    ctx.save()
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    ctx.load()?;

    let count = ctx.api.contacts().len();
    if count == 0 {
        let result = ctx.api.clear()?;
        print_messages(&result.messages);
        return Ok(());
    }

    if !yes && !confirm(&format!("Erase all {} contact(s)?", count))? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let result = ctx.api.clear()?;
    print_messages(&result.messages);
    ctx.save()
}

fn handle_check(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.check()?;
    print_messages(&result.messages);
    if result.rejected_lines.is_empty() {
        Ok(())
    } else {
        Err(AddrbookError::Api(format!(
            "{} malformed line(s) in {}",
            result.rejected_lines.len(),
            ctx.api.paths().data_file.display()
        )))
    }
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.paths().data_file.display());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);

    if result
        .messages
        .iter()
        .any(|m| m.level == MessageLevel::Error)
    {
        return Err(AddrbookError::Config("request not applied".into()));
    }
    Ok(())
}
