pub mod app_config;
pub mod config;
pub mod inventory;
pub mod products;

pub use app_config::{AppConfig, CatalogConfig, Environment, SaveBackPolicy};
pub use config::{load_app_config, load_app_config_from_env};
pub use inventory::InventoryItem;
pub use products::{Category, ProductRecord, ProductSource};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
