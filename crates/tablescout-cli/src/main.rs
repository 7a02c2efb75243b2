mod account;
mod api;
mod browse;
mod output;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tablescout_core::{FileStore, FilterSelection, KeyValueStore, Mode, PriceTier};
use tracing_subscriber::EnvFilter;

use crate::api::ApiCommands;

#[derive(Debug, Parser)]
#[command(name = "tablescout")]
#[command(about = "Restaurant discovery for New York")]
struct Cli {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List restaurants for a mode and filter set
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Instant search by name or category over a mode's listings
    Search {
        /// Case-insensitive substring of a name or category
        term: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show the filter choices and the modes available right now
    Facets,
    /// Plot the filtered listings as map markers
    Map {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Sign in (simulated; always succeeds)
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account (simulated; always succeeds)
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in profile
    Profile,
    /// Talk to the restaurant backend over HTTP
    Api {
        #[command(subcommand)]
        command: ApiCommands,
    },
}

/// Filter bar options shared by `browse`, `search` and `map`.
#[derive(Debug, Clone, Default, Args)]
struct FilterArgs {
    /// Recommendation mode (e.g. popular, seasonal); unknown values use the
    /// default pool
    #[arg(long)]
    mode: Option<String>,
    /// Cuisine id or label; `all` clears it
    #[arg(long)]
    cuisine: Option<String>,
    /// Neighborhood id or label; `all` clears it
    #[arg(long)]
    neighborhood: Option<String>,
    /// Minimum rating, inclusive
    #[arg(long)]
    min_rating: Option<f64>,
    /// Price tier: $, $$, $$$ or $$$$
    #[arg(long)]
    price: Option<PriceTier>,
    /// Search term applied on top of the facets
    #[arg(long)]
    search: Option<String>,
}

impl FilterArgs {
    fn into_selection(self, session_present: bool) -> FilterSelection {
        let mode = match self.mode.as_deref() {
            None => Some(Mode::default_for(session_present)),
            Some(raw) => {
                let parsed = Mode::parse_lenient(raw);
                if parsed.is_none() {
                    tracing::warn!(mode = raw, "unknown mode; falling back to the default pool");
                }
                parsed
            }
        };
        if let Some(mode) = mode.filter(|m| !Mode::available(session_present).contains(m)) {
            tracing::warn!(
                %mode,
                session_present,
                "mode not offered in this session state; falling back to the default pool"
            );
        }
        FilterSelection {
            mode,
            cuisine: browse::resolve_facet(self.cuisine, tablescout_core::facets::cuisine_label),
            neighborhood: browse::resolve_facet(
                self.neighborhood,
                tablescout_core::facets::neighborhood_label,
            ),
            min_rating: self.min_rating,
            price: self.price,
            search: self.search,
        }
    }
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = tablescout_core::load_app_config()?;
    init_tracing(&config.log_level)?;

    let cli = Cli::parse();
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.state_path));
    tracing::debug!(
        env = %config.env,
        state_path = %config.state_path.display(),
        "configuration loaded"
    );

    let json = cli.json;
    match cli.command {
        Some(Commands::Browse { filters }) => {
            browse::run_browse(&config, store, filters, json).await?;
        }
        Some(Commands::Search { term, filters }) => {
            browse::run_search(&config, store, &term, filters, json).await?;
        }
        Some(Commands::Facets) => browse::run_facets(&config, store, json)?,
        Some(Commands::Map { filters }) => {
            browse::run_map(&config, store, filters, json).await?;
        }
        Some(Commands::Login { email, password }) => {
            account::run_login(&config, store, &email, &password, json).await?;
        }
        Some(Commands::Signup {
            email,
            name,
            password,
        }) => {
            account::run_signup(&config, store, &email, &name, &password, json).await?;
        }
        Some(Commands::Logout) => account::run_logout(&config, store)?,
        Some(Commands::Profile) => account::run_profile(&config, store, json)?,
        Some(Commands::Api { command }) => api::run_api(&config, store, command, json).await?,
        None => browse::run_browse(&config, store, FilterArgs::default(), json).await?,
    }

    Ok(())
}
