pub mod app_config;
pub mod catalog;
pub mod config;
pub mod facets;
pub mod filter;
pub mod listing;
pub mod session;
pub mod storage;
pub mod view;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, Catalog, Pool};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{apply_facets, select, select_base_set, FilterSelection, Mode};
pub use listing::{Coordinates, Listing, PriceTier, RatingBreakdown};
pub use session::{Preferences, Session};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid price tier: {0}")]
    InvalidPriceTier(String),

    #[error("unknown mode: {0}")]
    UnknownMode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
