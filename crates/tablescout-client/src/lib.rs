//! HTTP client for the restaurant backend.
//!
//! The browse flow runs entirely on the local catalog; this client is kept
//! ready for a real backend and is reachable from the CLI's `api` commands.

pub mod client;
pub mod error;
pub(crate) mod retry;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{LoginResponse, RestaurantQuery, TOKEN_KEY};
