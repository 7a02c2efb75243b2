use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Closed set of price tiers, written as dollar signs on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceTier {
    pub const ALL: [PriceTier; 4] = [
        PriceTier::Budget,
        PriceTier::Moderate,
        PriceTier::Upscale,
        PriceTier::Luxury,
    ];

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Upscale => "$$$",
            PriceTier::Luxury => "$$$$",
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PriceTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceTier::ALL
            .into_iter()
            .find(|tier| tier.symbol() == s.trim())
            .ok_or_else(|| CoreError::InvalidPriceTier(s.to_string()))
    }
}

/// Per-dimension scores shown on a listing, each on the 0–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub food: f64,
    pub service: f64,
    pub ambience: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One restaurant record in the selectable dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Overall score, 0–10 with one decimal.
    pub rating: f64,
    pub review_count: u32,
    pub categories: Vec<String>,
    #[serde(rename = "price_range")]
    pub price: PriceTier,
    pub average_price: f64,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub neighborhood: String,
    pub cuisine_type: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub ratings: RatingBreakdown,
    /// Pinned advertisement; always rendered first.
    #[serde(rename = "isAdvertisement", default, skip_serializing_if = "is_false")]
    pub sponsored: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

impl Listing {
    /// Case-insensitive substring match on the name or any category.
    ///
    /// `needle_lower` must already be lowercased.
    #[must_use]
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self
                .categories
                .iter()
                .any(|c| c.to_lowercase().contains(needle_lower))
    }
}
