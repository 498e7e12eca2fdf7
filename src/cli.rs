use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::host::HostSession;

#[derive(Parser, Debug)]
#[command(name = "places-sync", about = "Keeps a Google Drive shortcut in the CAD file dialog")]
pub struct Cli {
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,
    /// Host profile whose dialog settings are edited
    #[arg(long, global = true, env = "PLACES_SYNC_PROFILE", default_value = "Unnamed Profile")]
    pub profile: String,
    /// Dialog settings file, overriding the profile location
    #[arg(long, global = true, env = "PLACES_SYNC_STORE")]
    pub store: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store the shortcut base path and depth
    Setup {
        #[arg(long)]
        path: String,
        #[arg(long)]
        depth: String,
        /// Drawing to synchronize for right after setup
        #[arg(long)]
        document: Option<PathBuf>,
    },
    /// Point the shortcut at the folder of a drawing
    Sync {
        #[arg(long)]
        document: PathBuf,
    },
    /// Same as `sync`, but fails silently the way the dialog hook does
    Trigger {
        #[arg(long)]
        document: Option<PathBuf>,
    },
    /// Print the store writes a sync would make
    Plan {
        #[arg(long)]
        document: PathBuf,
    },
    /// Print the places list
    List {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Session backed by command-line arguments.
pub struct CliSession {
    pub document: Option<PathBuf>,
}

impl HostSession for CliSession {
    fn active_document(&self) -> Option<PathBuf> {
        self.document.clone()
    }

    fn message(&self, text: &str) {
        eprintln!("{text}");
    }
}
