//! Presentation models derived from the filtered list.
//!
//! The list view and the map view consume the same listings; nothing here
//! filters or reorders.

use serde::Serialize;

use crate::filter::Mode;
use crate::listing::{Listing, PriceTier};
use crate::session::Session;

/// Shown when a listing has no image.
pub const FALLBACK_IMAGE: &str =
    "https://images.pexels.com/photos/6267/menu-restaurant-vintage-table.jpg";

/// Map viewport used regardless of which listings are plotted.
pub const DEFAULT_CENTER: (f64, f64) = (40.7128, -74.0060);
pub const DEFAULT_ZOOM: u8 = 12;

/// Heading for the browse page.
#[must_use]
pub fn page_title(mode: Option<Mode>, session_present: bool) -> &'static str {
    if session_present {
        match mode {
            Some(Mode::DiscoverNewTaste) => "Discover new tastes and experiences",
            Some(Mode::Seasonal) => "Seasonal recommendations just for you",
            _ => "Restaurants based on your past experiences",
        }
    } else {
        match mode {
            Some(Mode::TrySomethingNew) => "Try something new in New York",
            _ => "Popular restaurants in New York",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingCard {
    pub id: String,
    pub name: String,
    /// At most three tags.
    pub categories: Vec<String>,
    pub price: PriceTier,
    pub rating: f64,
    pub review_count: u32,
    pub address: String,
    pub neighborhood: String,
    pub description: Option<String>,
    pub image_url: String,
    pub sponsored: bool,
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        let image_url = if listing.image_url.trim().is_empty() {
            FALLBACK_IMAGE.to_owned()
        } else {
            listing.image_url.clone()
        };
        Self {
            id: listing.id.clone(),
            name: listing.name.clone(),
            categories: listing.categories.iter().take(3).cloned().collect(),
            price: listing.price,
            rating: listing.rating,
            review_count: listing.review_count,
            address: listing.address.clone(),
            neighborhood: listing.neighborhood.clone(),
            description: Some(listing.description.clone()).filter(|d| !d.is_empty()),
            image_url,
            sponsored: listing.sponsored,
        }
    }
}

#[must_use]
pub fn cards(listings: &[Listing]) -> Vec<ListingCard> {
    listings.iter().map(ListingCard::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub name: String,
    pub cuisine_type: String,
    pub rating: f64,
    pub price: PriceTier,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub sponsored: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    #[must_use]
    pub fn from_listings(listings: &[Listing]) -> Self {
        let markers = listings
            .iter()
            .map(|l| MapMarker {
                id: l.id.clone(),
                name: l.name.clone(),
                cuisine_type: l.cuisine_type.clone(),
                rating: l.rating,
                price: l.price,
                address: l.address.clone(),
                latitude: l.coordinates.latitude,
                longitude: l.coordinates.longitude,
                sponsored: l.sponsored,
            })
            .collect();
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            markers,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    /// Avatar letter: first character of the display name.
    pub initial: String,
    pub name: String,
    pub email: String,
    pub favorite_cuisines: Vec<String>,
    pub favorite_neighborhoods: Vec<String>,
    pub price_range: Option<PriceTier>,
}

impl From<&Session> for ProfileView {
    fn from(session: &Session) -> Self {
        let prefs = session.preferences.as_ref();
        Self {
            initial: session.name.chars().next().map(String::from).unwrap_or_default(),
            name: session.name.clone(),
            email: session.email.clone(),
            favorite_cuisines: prefs
                .map(|p| p.favorite_cuisines.clone())
                .unwrap_or_default(),
            favorite_neighborhoods: prefs
                .map(|p| p.favorite_neighborhoods.clone())
                .unwrap_or_default(),
            price_range: prefs.map(|p| p.price_range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Pool};

    #[test]
    fn page_title_per_session_state() {
        assert_eq!(page_title(None, false), "Popular restaurants in New York");
        assert_eq!(
            page_title(Some(Mode::TrySomethingNew), false),
            "Try something new in New York"
        );
        assert_eq!(
            page_title(Some(Mode::DiscoverNewTaste), true),
            "Discover new tastes and experiences"
        );
        assert_eq!(
            page_title(Some(Mode::Seasonal), true),
            "Seasonal recommendations just for you"
        );
        assert_eq!(
            page_title(Some(Mode::PastExperience), true),
            "Restaurants based on your past experiences"
        );
    }

    #[test]
    fn card_truncates_categories_and_flags_sponsor() {
        let catalog = Catalog::builtin();
        let mut listing = catalog.sponsored.clone();
        listing.categories.push("Extra".to_string());
        let card = ListingCard::from(&listing);
        assert_eq!(card.categories.len(), 3);
        assert!(card.sponsored);
    }

    #[test]
    fn card_falls_back_when_image_missing() {
        let mut listing = Catalog::builtin().popular[0].clone();
        listing.image_url = String::new();
        assert_eq!(ListingCard::from(&listing).image_url, FALLBACK_IMAGE);
    }

    #[test]
    fn map_has_one_marker_per_listing_in_order() {
        let listings = Catalog::builtin().with_sponsored(Pool::Seasonal);
        let map = MapView::from_listings(&listings);
        assert_eq!(map.markers.len(), listings.len());
        assert_eq!(map.markers[0].id, "ad-1");
        assert!(map.markers[0].sponsored);
        assert_eq!(map.center, DEFAULT_CENTER);
    }

    #[test]
    fn empty_list_yields_empty_map() {
        assert!(MapView::from_listings(&[]).is_empty());
    }

    #[test]
    fn profile_lists_preferences() {
        let profile = ProfileView::from(&Session::demo());
        assert_eq!(profile.initial, "T");
        assert_eq!(profile.favorite_cuisines, vec!["Italian", "American"]);
        assert_eq!(profile.favorite_neighborhoods, vec!["West Village", "SoHo"]);
        assert_eq!(profile.price_range, Some(PriceTier::Moderate));
    }
}
