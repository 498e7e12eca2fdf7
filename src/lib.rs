use clap::Parser;

pub mod error;
pub mod host;
pub mod places;
pub mod shortcut;
pub mod store;

mod cli;
mod logging;

use crate::{
    cli::{Cli, CliSession, Command},
    error::Error,
    places::{StoreOp, Synchronizer},
    shortcut::{resolve_target_dir, ShortcutConfig},
    store::JsonFileStore,
};

pub use error::Result;

fn open_store(cli: &Cli) -> Result<JsonFileStore> {
    match &cli.store {
        Some(path) => JsonFileStore::open(path),
        None => JsonFileStore::open_profile(&cli.profile),
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let store = open_store(&cli)?;
    log::debug!("using dialog store {}", store.path().display());
    let mut sync = Synchronizer::new(store);

    match cli.command {
        Command::Setup {
            path,
            depth,
            document,
        } => {
            let config = shortcut::configure(sync.store_mut(), &path, &depth)?;
            println!(
                "Shortcut base {} at depth {} saved",
                config.base_path, config.depth
            );
            if let Some(document) = document {
                host::sync_document(&mut sync, &document)?;
            }
        }
        Command::Sync { document } => {
            let outcome = host::sync_document(&mut sync, &document)?.ok_or(Error::NotConfigured)?;
            println!(
                "{} is place {} of {}",
                sync.label(),
                outcome.position,
                outcome.entry_count
            );
        }
        Command::Trigger { document } => {
            host::on_enter_modal(&mut sync, &CliSession { document });
        }
        Command::Plan { document } => {
            let config = ShortcutConfig::load(sync.store())?.ok_or(Error::NotConfigured)?;
            let target = resolve_target_dir(&config.base_path, &document, config.depth)?;
            let plan = sync.plan(&target.to_string_lossy())?;
            for op in plan.ops() {
                match op {
                    StoreOp::Delete(key) => println!("delete {key}"),
                    StoreOp::Set(key, value) => println!("set    {key} = {value:?}"),
                }
            }
        }
        Command::List { json } => {
            let entries = sync.places()?.entries;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in entries {
                    println!("{:>3}  {:<16} {}", entry.position, entry.display, entry.path);
                }
            }
        }
    }
    Ok(())
}
