mod inventory;
mod lookup;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shelfscan")]
#[command(about = "Storefront product lookup by barcode")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a barcode against local inventory, then the external catalogs
    Lookup {
        /// Barcode exactly as scanned
        barcode: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the local inventory
    Inventory {
        #[command(subcommand)]
        command: InventoryCommands,
    },
}

#[derive(Debug, Subcommand)]
enum InventoryCommands {
    /// Add or replace an item entered by hand
    Add {
        barcode: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// List every inventory item
    List {
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = shelfscan_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, save_back = %config.save_back, "config loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Lookup { barcode, json }) => {
            lookup::run_lookup(&config, &barcode, json).await?;
        }
        Some(Commands::Inventory { command }) => match command {
            InventoryCommands::Add {
                barcode,
                name,
                brand,
                price,
                category,
                description,
                image_url,
            } => {
                let item = inventory::build_manual_item(inventory::ManualEntry {
                    barcode,
                    name,
                    brand,
                    price,
                    category,
                    description,
                    image_url,
                })?;
                inventory::run_add(&config, item).await?;
            }
            InventoryCommands::List { json } => inventory::run_list(&config, json).await?,
        },
        None => println!("shelfscan: run `shelfscan --help` for usage"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
