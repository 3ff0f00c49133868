use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use collectify_core::{DomainError, ListKey};
use collectify_infra::{
    JsonFileListStore, ListRegistry, ListSession, StorageConfig, load_in_background,
};
use collectify_inventory::{FilterMode, range};

mod render;

type Registry = ListRegistry<Arc<JsonFileListStore>>;

#[derive(Debug, Parser)]
#[command(name = "collectify", author, version, about = "Track which numbered items of a collection you own")]
struct Cli {
    /// Directory holding one JSON document per list.
    #[arg(long, global = true, value_name = "DIR")]
    lists_dir: Option<PathBuf>,
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every list with its completion.
    Lists,
    /// Create a list tracking items 1..=COUNT.
    Create {
        name: String,
        #[arg(allow_hyphen_values = true)]
        count: String,
        /// Picture reference stored with the list.
        #[arg(long, value_name = "REF")]
        image: Option<String>,
    },
    /// Show a list's items.
    Show {
        name: String,
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        filter: FilterMode,
    },
    /// Mark items as owned, e.g. "1-3, 7".
    Add { name: String, items: String },
    /// Mark owned items as missing again (comma-separated ids).
    Remove {
        name: String,
        #[arg(allow_hyphen_values = true)]
        ids: String,
        /// Also accept "a-b" ranges.
        #[arg(long)]
        ranges: bool,
    },
    /// Mark every item as missing.
    Reset { name: String },
    /// Give a list a new name.
    Rename { name: String, new_name: String },
    /// Delete a list.
    Delete { name: String },
}

fn parse_filter(value: &str) -> Result<FilterMode, String> {
    value.parse().map_err(|e: DomainError| e.to_string())
}

fn parse_count(value: &str) -> Result<i64, DomainError> {
    value.trim().parse().map_err(|_| {
        DomainError::validation(format!("item count must be a whole number, got {value:?}"))
    })
}

fn main() -> ExitCode {
    collectify_observability::init("warn");
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = StorageConfig::resolve(cli.lists_dir);
    let store = JsonFileListStore::open(config.lists_dir.clone()).with_context(|| {
        format!("cannot use list directory {}", config.lists_dir.display())
    })?;
    let registry = ListRegistry::new(Arc::new(store));
    let json = cli.json;

    match cli.command {
        Command::Lists => {
            let summaries = registry.summaries()?;
            render::summaries(&summaries, json)
        }
        Command::Create { name, count, image } => {
            let count = parse_count(&count)?;
            let list = registry.create(&name, count, image.as_deref())?;
            render::message(&format!("List '{}' created!", list.name()), json)
        }
        Command::Show { name, filter } => {
            let list = load(&registry, &name)?;
            render::list(&list, filter, json)
        }
        Command::Add { name, items } => {
            let mut session = ListSession::open(&registry, &name)?;
            session.add_owned(&items)?;
            render::updated(session.list(), "Items added to your possession!", json)
        }
        Command::Remove { name, ids, ranges } => {
            let ids = if ranges {
                range::parse(&ids)
            } else {
                range::parse_ids(&ids)
            }
            .map_err(DomainError::from)?;
            let ids: Vec<_> = ids.into_iter().collect();

            let mut session = ListSession::open(&registry, &name)?;
            session.remove_owned(&ids)?;
            render::updated(session.list(), "Selected items removed from owned list.", json)
        }
        Command::Reset { name } => {
            let mut session = ListSession::open(&registry, &name)?;
            session.reset()?;
            render::updated(session.list(), "List reset.", json)
        }
        Command::Rename { name, new_name } => {
            let mut session = ListSession::open(&registry, &name)?;
            session.rename(&new_name)?;
            render::message(&format!("List renamed to '{}'.", session.list().name()), json)
        }
        Command::Delete { name } => {
            let key = ListKey::from_name(&name)?;
            match registry.delete_key(&key) {
                Ok(()) => render::message(&format!("List '{name}' deleted."), json),
                Err(err) if err.is_not_found() => {
                    render::message(&format!("List '{name}' was already gone."), json)
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}

/// Load a list on a worker thread, noting when it takes a while.
fn load(registry: &Registry, name: &str) -> anyhow::Result<collectify_inventory::InventoryList> {
    let key = ListKey::from_name(name)?;
    let pending = load_in_background(registry.store().clone(), key);
    let result = match pending.wait_timeout(Duration::from_millis(250)) {
        Ok(result) => result,
        Err(pending) => {
            tracing::info!(key = %pending.key(), "loading list, please wait");
            pending.wait()
        }
    };
    Ok(result?)
}
