//! Backend API command handlers.
//!
//! These talk to the HTTP backend configured by `TABLESCOUT_API_URL`. The
//! bearer token shares the state file with the local session.

use std::sync::Arc;

use clap::Subcommand;
use tablescout_client::{ApiClient, RestaurantQuery};
use tablescout_core::facets;
use tablescout_core::view;
use tablescout_core::{AppConfig, KeyValueStore, PriceTier};

use crate::browse::resolve_facet;
use crate::output;

/// Sub-commands available under `api`.
#[derive(Debug, Subcommand)]
pub(crate) enum ApiCommands {
    /// List restaurants from the backend
    Restaurants {
        #[arg(long)]
        cuisine: Option<String>,
        #[arg(long)]
        neighborhood: Option<String>,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long)]
        price: Option<PriceTier>,
    },
    /// Fetch one restaurant by id
    Restaurant { id: String },
    /// Fetch recommendations for the stored token
    Recommendations,
    /// Exchange credentials for a bearer token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a backend account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Forget the stored bearer token
    Logout,
    /// Show the base URL and whether a token is stored
    Status,
}

pub(crate) async fn run_api(
    config: &AppConfig,
    store: Arc<dyn KeyValueStore>,
    command: ApiCommands,
    json: bool,
) -> anyhow::Result<()> {
    let client = ApiClient::from_config(config, store)?;

    match command {
        ApiCommands::Restaurants {
            cuisine,
            neighborhood,
            min_rating,
            price,
        } => {
            let query = RestaurantQuery {
                cuisine_type: resolve_facet(cuisine, facets::cuisine_label),
                neighborhood: resolve_facet(neighborhood, facets::neighborhood_label),
                min_rating,
                price_range: price,
            };
            let listings = client.list_restaurants(&query).await?;
            if json {
                return output::print_json(&listings);
            }
            output::print_cards("Restaurants", &view::cards(&listings));
        }
        ApiCommands::Restaurant { id } => {
            let listing = client.get_restaurant(&id).await?;
            if json {
                return output::print_json(&listing);
            }
            output::print_cards(&listing.name, &view::cards(std::slice::from_ref(&listing)));
        }
        ApiCommands::Recommendations => {
            let listings = client.get_recommendations().await?;
            if json {
                return output::print_json(&listings);
            }
            output::print_cards("Recommendations", &view::cards(&listings));
        }
        ApiCommands::Login { email, password } => {
            let response = client.login(&email, &password).await?;
            if response.access_token.is_some() {
                println!("token stored for {email}");
            } else {
                println!("login accepted but no token was returned");
            }
        }
        ApiCommands::Register {
            email,
            password,
            name,
        } => {
            let body = client.register(&email, &password, name.as_deref()).await?;
            output::print_json(&body)?;
        }
        ApiCommands::Logout => {
            client.logout()?;
            println!("token cleared");
        }
        ApiCommands::Status => {
            let authenticated = client.is_authenticated()?;
            if json {
                return output::print_json(&serde_json::json!({
                    "base_url": client.base_url().as_str(),
                    "authenticated": authenticated,
                }));
            }
            println!("base URL:      {}", client.base_url());
            println!("authenticated: {authenticated}");
        }
    }

    Ok(())
}
