use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::listing::Listing;
use crate::ConfigError;

mod seed;

/// Named candidate pools a mode can select from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
    /// Top restaurants shown to anonymous visitors.
    Popular,
    /// Unusual picks for anonymous visitors.
    TryNew,
    /// Random picks for signed-in users.
    Discover,
    Seasonal,
    /// Picks based on a signed-in user's past visits.
    Personalized,
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pool::Popular => write!(f, "popular"),
            Pool::TryNew => write!(f, "try-new"),
            Pool::Discover => write!(f, "discover"),
            Pool::Seasonal => write!(f, "seasonal"),
            Pool::Personalized => write!(f, "personalized"),
        }
    }
}

/// The selectable dataset: one pinned sponsored listing plus every pool in
/// its literal display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub sponsored: Listing,
    #[serde(default)]
    pub popular: Vec<Listing>,
    #[serde(default)]
    pub try_new: Vec<Listing>,
    #[serde(default)]
    pub discover: Vec<Listing>,
    #[serde(default)]
    pub seasonal: Vec<Listing>,
    #[serde(default)]
    pub personalized: Vec<Listing>,
}

impl Catalog {
    /// The hardcoded New York sample data.
    #[must_use]
    pub fn builtin() -> Self {
        seed::builtin()
    }

    #[must_use]
    pub fn pool(&self, pool: Pool) -> &[Listing] {
        match pool {
            Pool::Popular => &self.popular,
            Pool::TryNew => &self.try_new,
            Pool::Discover => &self.discover,
            Pool::Seasonal => &self.seasonal,
            Pool::Personalized => &self.personalized,
        }
    }

    /// The pool prefixed with the sponsored listing, ready for display.
    #[must_use]
    pub fn with_sponsored(&self, pool: Pool) -> Vec<Listing> {
        std::iter::once(&self.sponsored)
            .chain(self.pool(pool))
            .cloned()
            .collect()
    }

    /// Finds a listing by id across the sponsored slot and every pool.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.iter().find(|l| l.id == id)
    }

    fn iter(&self) -> impl Iterator<Item = &Listing> {
        std::iter::once(&self.sponsored)
            .chain(&self.popular)
            .chain(&self.try_new)
            .chain(&self.discover)
            .chain(&self.seasonal)
            .chain(&self.personalized)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Load and validate a catalog from a YAML file.
///
/// The top-level `sponsored` entry is always marked sponsored, whether or not
/// the file sets `isAdvertisement` on it.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut catalog: Catalog = serde_yaml::from_str(&content)?;
    catalog.sponsored.sponsored = true;

    validate_catalog(&catalog)?;

    tracing::debug!(
        path = %path.display(),
        popular = catalog.popular.len(),
        try_new = catalog.try_new.len(),
        discover = catalog.discover.len(),
        seasonal = catalog.seasonal.len(),
        personalized = catalog.personalized.len(),
        "loaded catalog"
    );

    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for listing in catalog.iter() {
        if listing.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "listing '{}' has an empty id",
                listing.name
            )));
        }

        if !seen_ids.insert(listing.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate listing id: '{}'",
                listing.id
            )));
        }

        if listing.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "listing '{}' has an empty name",
                listing.id
            )));
        }

        let scores = [
            listing.rating,
            listing.ratings.food,
            listing.ratings.service,
            listing.ratings.ambience,
        ];
        if scores.iter().any(|s| !(0.0..=10.0).contains(s)) {
            return Err(ConfigError::Validation(format!(
                "listing '{}' has a rating outside 0-10",
                listing.id
            )));
        }

        if listing.sponsored && listing.id != catalog.sponsored.id {
            return Err(ConfigError::Validation(format!(
                "listing '{}' is flagged sponsored but is not the sponsored slot",
                listing.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../catalog_test.rs"]
mod tests;
