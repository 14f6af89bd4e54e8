//! catctl - Command-line harness for the cat registry
//!
//! Maps one subcommand onto each registry operation against a
//! JSON-file world state, playing the role of the hosting runtime's
//! method-name-plus-arguments invocation protocol.
//!
//! ## Example Usage
//!
//! ```bash
//! # Seed the ledger with the predefined cats
//! catctl --store ledger.json init
//!
//! # Create and inspect a record
//! catctl --store ledger.json create 7 Tom grey jerry
//! catctl --store ledger.json read 7
//!
//! # Reassign ownership, then list everything
//! catctl --store ledger.json transfer 7 spike
//! catctl --store ledger.json list
//! ```

use cat_registry::error::Result;
use cat_registry::prelude::*;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

/// catctl: ledger-backed cat asset registry
#[derive(Parser)]
#[command(name = "catctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ledger-backed cat asset registry", long_about = None)]
struct Cli {
    /// Path to the world-state snapshot file
    #[arg(short = 's', long, global = true, default_value = "ledger.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the ledger with the predefined assets
    Init,

    /// Check whether an asset exists
    Exists {
        /// Asset identifier
        id: String,
    },

    /// Create a new asset
    Create {
        /// Asset identifier (must not exist yet)
        id: String,
        /// Display name
        name: String,
        /// Category attribute, e.g. coat color
        category: String,
        /// Initial owner
        owner: String,
    },

    /// Read an asset
    Read {
        /// Asset identifier
        id: String,
    },

    /// Overwrite an existing asset
    Update {
        /// Asset identifier (must exist)
        id: String,
        /// New display name
        name: String,
        /// New category attribute
        category: String,
        /// New owner
        owner: String,
    },

    /// Delete an existing asset
    Delete {
        /// Asset identifier
        id: String,
    },

    /// Reassign ownership of an existing asset
    Transfer {
        /// Asset identifier
        id: String,
        /// New owner
        new_owner: String,
    },

    /// List every asset in store key order
    List,
}

fn print_asset(asset: &Asset) -> Result<()> {
    let json = serde_json::to_string_pretty(asset)
        .map_err(|e| RegistryError::Serialization(e.to_string()))?;
    println!("{json}");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let registry = AssetRegistry::new();
    let mut store = JsonFileStore::open(&cli.store)?;

    match cli.command {
        Commands::Init => {
            registry.init(&mut store)?;
            println!("ledger seeded");
        }
        Commands::Exists { id } => {
            println!("{}", registry.exists(&store, &id)?);
        }
        Commands::Create {
            id,
            name,
            category,
            owner,
        } => {
            registry.create(&mut store, &id, &name, &category, &owner)?;
            println!("created {id}");
        }
        Commands::Read { id } => {
            let asset = registry.read(&store, &id)?;
            print_asset(&asset)?;
        }
        Commands::Update {
            id,
            name,
            category,
            owner,
        } => {
            registry.update(&mut store, &id, &name, &category, &owner)?;
            println!("updated {id}");
        }
        Commands::Delete { id } => {
            registry.delete(&mut store, &id)?;
            println!("deleted {id}");
        }
        Commands::Transfer { id, new_owner } => {
            registry.transfer(&mut store, &id, &new_owner)?;
            println!("transferred {id} to {new_owner}");
        }
        Commands::List => {
            for entry in registry.list_all(&store)? {
                print_asset(&entry?)?;
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
