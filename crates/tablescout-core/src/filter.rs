//! Pool selection and facet filtering.
//!
//! Everything here is pure: identical inputs always produce the same ordered
//! output, and nothing touches the session or storage.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Pool};
use crate::listing::{Listing, PriceTier};
use crate::CoreError;

/// Named recommendation strategy that picks the base candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Popular,
    TrySomethingNew,
    DiscoverNewTaste,
    PastExperience,
    Seasonal,
}

const ANONYMOUS_MODES: &[Mode] = &[Mode::Popular, Mode::TrySomethingNew];
const SESSION_MODES: &[Mode] = &[Mode::DiscoverNewTaste, Mode::PastExperience, Mode::Seasonal];

impl Mode {
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Mode::Popular => "popular",
            Mode::TrySomethingNew => "try-something-new",
            Mode::DiscoverNewTaste => "discover-new-taste",
            Mode::PastExperience => "past-experience",
            Mode::Seasonal => "seasonal",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::Popular => "Popular",
            Mode::TrySomethingNew => "Try Something New",
            Mode::DiscoverNewTaste => "Discover New Taste",
            Mode::PastExperience => "Based on Past Experience",
            Mode::Seasonal => "Seasonal For You",
        }
    }

    /// Modes offered for the given session state, in menu order.
    #[must_use]
    pub fn available(session_present: bool) -> &'static [Mode] {
        if session_present {
            SESSION_MODES
        } else {
            ANONYMOUS_MODES
        }
    }

    /// First mode offered for the session state.
    #[must_use]
    pub fn default_for(session_present: bool) -> Mode {
        Self::available(session_present)[0]
    }

    /// Like [`FromStr`] but maps unknown slugs to `None` instead of failing.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Option<Mode> {
        s.parse().ok()
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ANONYMOUS_MODES
            .iter()
            .chain(SESSION_MODES)
            .copied()
            .find(|m| m.slug() == needle)
            .ok_or_else(|| CoreError::UnknownMode(s.to_string()))
    }
}

/// Transient filter state held while browsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub mode: Option<Mode>,
    pub cuisine: Option<String>,
    pub neighborhood: Option<String>,
    pub min_rating: Option<f64>,
    pub price: Option<PriceTier>,
    pub search: Option<String>,
}

impl FilterSelection {
    /// The reset value applied whenever session presence toggles.
    #[must_use]
    pub fn defaults_for(session_present: bool) -> Self {
        Self {
            mode: Some(Mode::default_for(session_present)),
            ..Self::default()
        }
    }

    /// Same selection with a different search term.
    #[must_use]
    pub fn with_search(mut self, term: Option<String>) -> Self {
        self.search = term;
        self
    }

    fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref().filter(|c| !c.is_empty())
    }

    fn neighborhood(&self) -> Option<&str> {
        self.neighborhood.as_deref().filter(|n| !n.is_empty())
    }

    fn min_rating(&self) -> Option<f64> {
        self.min_rating.filter(|r| *r > 0.0)
    }

    /// Lowercased search needle, or `None` when the term is blank.
    ///
    /// Only blankness is judged on the trimmed term; matching uses the term
    /// as typed.
    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_lowercase)
    }
}

/// Pool a mode resolves to for the given session state.
///
/// Modes that do not belong to the session state, and `None`, fall back to
/// the state's default pool.
#[must_use]
pub fn pool_for(mode: Option<Mode>, session_present: bool) -> Pool {
    if session_present {
        match mode {
            Some(Mode::DiscoverNewTaste) => Pool::Discover,
            Some(Mode::Seasonal) => Pool::Seasonal,
            _ => Pool::Personalized,
        }
    } else {
        match mode {
            Some(Mode::TrySomethingNew) => Pool::TryNew,
            _ => Pool::Popular,
        }
    }
}

/// Picks the base candidate list for a mode: the sponsored listing followed
/// by the resolved pool in literal order.
#[must_use]
pub fn select_base_set(catalog: &Catalog, mode: Option<Mode>, session_present: bool) -> Vec<Listing> {
    catalog.with_sponsored(pool_for(mode, session_present))
}

/// Narrows `list` by the selection's facets and search term.
///
/// The sponsored listing bypasses the cuisine, neighborhood, rating, and price
/// facets, but must still match a non-blank search term.
#[must_use]
pub fn apply_facets(list: &[Listing], selection: &FilterSelection) -> Vec<Listing> {
    let cuisine = selection.cuisine();
    let neighborhood = selection.neighborhood();
    let min_rating = selection.min_rating();
    let needle = selection.search_needle();

    list.iter()
        .filter(|listing| {
            if !listing.sponsored {
                if cuisine.is_some_and(|c| listing.cuisine_type != c) {
                    return false;
                }
                if neighborhood.is_some_and(|n| listing.neighborhood != n) {
                    return false;
                }
                if min_rating.is_some_and(|r| listing.rating < r) {
                    return false;
                }
                if selection.price.is_some_and(|p| listing.price != p) {
                    return false;
                }
            }
            needle.as_deref().is_none_or(|n| listing.matches_text(n))
        })
        .cloned()
        .collect()
}

/// Base set for the selection's mode, narrowed by its facets.
#[must_use]
pub fn select(catalog: &Catalog, selection: &FilterSelection, session_present: bool) -> Vec<Listing> {
    let base = select_base_set(catalog, selection.mode, session_present);
    apply_facets(&base, selection)
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
