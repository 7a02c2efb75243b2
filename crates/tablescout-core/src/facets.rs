//! Facet choices offered by the filter bar.
//!
//! Each dimension starts with an "all" entry that leaves the facet unset.

use crate::listing::PriceTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NEIGHBORHOODS: &[FacetOption] = &[
    FacetOption { id: "all", label: "All Neighborhoods" },
    FacetOption { id: "greenwich-village", label: "Greenwich Village" },
    FacetOption { id: "west-village", label: "West Village" },
    FacetOption { id: "soho", label: "SoHo" },
    FacetOption { id: "lower-east-side", label: "Lower East Side" },
    FacetOption { id: "east-village", label: "East Village" },
    FacetOption { id: "flatiron", label: "Flatiron District" },
    FacetOption { id: "midtown", label: "Midtown" },
    FacetOption { id: "williamsburg", label: "Williamsburg" },
    FacetOption { id: "upper-east-side", label: "Upper East Side" },
    FacetOption { id: "upper-west-side", label: "Upper West Side" },
    FacetOption { id: "tribeca", label: "Tribeca" },
    FacetOption { id: "chelsea", label: "Chelsea" },
];

pub const CUISINES: &[FacetOption] = &[
    FacetOption { id: "all", label: "All Cuisines" },
    FacetOption { id: "American", label: "American" },
    FacetOption { id: "Italian", label: "Italian" },
    FacetOption { id: "Japanese", label: "Japanese" },
    FacetOption { id: "Chinese", label: "Chinese" },
    FacetOption { id: "French", label: "French" },
    FacetOption { id: "Steakhouse", label: "Steakhouse" },
    FacetOption { id: "Pizza", label: "Pizza" },
    FacetOption { id: "Seafood", label: "Seafood" },
    FacetOption { id: "Deli", label: "Deli" },
    FacetOption { id: "Jewish", label: "Jewish" },
    FacetOption { id: "Contemporary", label: "Contemporary" },
];

/// Rating floors; `None` is "Any Rating".
pub const RATING_FLOORS: &[(&str, Option<f64>)] =
    &[("Any Rating", None), ("8.0+", Some(8.0)), ("9.0+", Some(9.0))];

/// Resolves a neighborhood option id (e.g. `west-village`) or label to the
/// label listings carry. The `all` option resolves to `None`.
#[must_use]
pub fn neighborhood_label(input: &str) -> Option<&'static str> {
    lookup(NEIGHBORHOODS, input)
}

/// Resolves a cuisine option to the `cuisine_type` listings carry.
#[must_use]
pub fn cuisine_label(input: &str) -> Option<&'static str> {
    lookup(CUISINES, input)
}

#[must_use]
pub fn price_tiers() -> &'static [PriceTier] {
    &PriceTier::ALL
}

fn lookup(options: &'static [FacetOption], input: &str) -> Option<&'static str> {
    let needle = input.trim();
    options
        .iter()
        .skip(1)
        .find(|o| o.id.eq_ignore_ascii_case(needle) || o.label.eq_ignore_ascii_case(needle))
        .map(|o| o.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_resolves_by_id_or_label() {
        assert_eq!(neighborhood_label("west-village"), Some("West Village"));
        assert_eq!(neighborhood_label("soho"), Some("SoHo"));
        assert_eq!(neighborhood_label("Flatiron District"), Some("Flatiron District"));
    }

    #[test]
    fn all_option_resolves_to_none() {
        assert_eq!(neighborhood_label("all"), None);
        assert_eq!(cuisine_label("all"), None);
    }

    #[test]
    fn unknown_option_resolves_to_none() {
        assert_eq!(cuisine_label("Martian"), None);
    }

    #[test]
    fn every_dimension_starts_with_all() {
        assert_eq!(NEIGHBORHOODS[0].id, "all");
        assert_eq!(CUISINES[0].id, "all");
        assert_eq!(RATING_FLOORS[0].1, None);
    }
}
