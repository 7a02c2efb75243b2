//! Browse, search, map and facet command handlers.
//!
//! Each handler builds an [`AppContext`] from configuration, restores any
//! stored session, and runs one selection through the engine.

use std::sync::Arc;

use serde::Serialize;
use tablescout_app::{AppContext, Outcome};
use tablescout_core::facets::{self, FacetOption};
use tablescout_core::view::{self, MapView};
use tablescout_core::{AppConfig, KeyValueStore, Listing, Mode, PriceTier};

use crate::output;
use crate::FilterArgs;

/// Maps a cuisine or neighborhood argument onto the label listings carry.
///
/// `all` clears the facet. Unknown values are passed through unchanged so a
/// custom catalog can use its own labels.
pub(crate) fn resolve_facet(
    input: Option<String>,
    lookup: fn(&str) -> Option<&'static str>,
) -> Option<String> {
    let raw = input?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return None;
    }
    match lookup(trimmed) {
        Some(label) => Some(label.to_owned()),
        None => {
            tracing::debug!(value = %trimmed, "facet value not in the filter bar; using as-is");
            Some(trimmed.to_owned())
        }
    }
}

/// Restores the session and publishes the selection built from `filters`.
async fn load(
    config: &AppConfig,
    store: Arc<dyn KeyValueStore>,
    filters: FilterArgs,
) -> anyhow::Result<(AppContext, Vec<Listing>)> {
    let ctx = AppContext::from_config(config, store)?;
    let present = ctx.restore().is_some();
    let selection = filters.into_selection(present);
    let listings = match ctx.apply_filters(selection).await {
        Outcome::Published(listings) => listings,
        // Nothing else issues requests on this context.
        Outcome::Superseded => ctx.view().listings,
    };
    Ok((ctx, listings))
}

pub(crate) async fn run_browse(
    config: &AppConfig,
    store: Arc<dyn KeyValueStore>,
    filters: FilterArgs,
    json: bool,
) -> anyhow::Result<()> {
    let (ctx, listings) = load(config, store, filters).await?;
    let cards = view::cards(&listings);
    if json {
        return output::print_json(&cards);
    }
    output::print_cards(ctx.view().title(), &cards);
    Ok(())
}

pub(crate) async fn run_search(
    config: &AppConfig,
    store: Arc<dyn KeyValueStore>,
    term: &str,
    filters: FilterArgs,
    json: bool,
) -> anyhow::Result<()> {
    let (ctx, _) = load(config, store, filters).await?;
    let found = ctx.search(Some(term.to_owned()));
    let cards = view::cards(&found);
    if json {
        return output::print_json(&cards);
    }
    output::print_cards(&format!("{} matching \"{term}\"", ctx.view().title()), &cards);
    Ok(())
}

pub(crate) async fn run_map(
    config: &AppConfig,
    store: Arc<dyn KeyValueStore>,
    filters: FilterArgs,
    json: bool,
) -> anyhow::Result<()> {
    let (ctx, listings) = load(config, store, filters).await?;
    let map = MapView::from_listings(&listings);
    if json {
        return output::print_json(&map);
    }
    output::print_map(ctx.view().title(), &map);
    Ok(())
}

#[derive(Debug, Serialize)]
struct ModeEntry {
    slug: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct FacetEntry {
    id: &'static str,
    label: &'static str,
}

impl From<&FacetOption> for FacetEntry {
    fn from(option: &FacetOption) -> Self {
        Self {
            id: option.id,
            label: option.label,
        }
    }
}

#[derive(Debug, Serialize)]
struct FacetsReport {
    session_present: bool,
    modes: Vec<ModeEntry>,
    neighborhoods: Vec<FacetEntry>,
    cuisines: Vec<FacetEntry>,
    rating_floors: Vec<(&'static str, Option<f64>)>,
    price_tiers: Vec<PriceTier>,
}

fn facets_report(session_present: bool) -> FacetsReport {
    FacetsReport {
        session_present,
        modes: Mode::available(session_present)
            .iter()
            .map(|m| ModeEntry {
                slug: m.slug(),
                label: m.label(),
            })
            .collect(),
        neighborhoods: facets::NEIGHBORHOODS.iter().map(FacetEntry::from).collect(),
        cuisines: facets::CUISINES.iter().map(FacetEntry::from).collect(),
        rating_floors: facets::RATING_FLOORS.to_vec(),
        price_tiers: facets::price_tiers().to_vec(),
    }
}

pub(crate) fn run_facets(
    config: &AppConfig,
    store: Arc<dyn KeyValueStore>,
    json: bool,
) -> anyhow::Result<()> {
    let ctx = AppContext::from_config(config, store)?;
    let report = facets_report(ctx.restore().is_some());
    if json {
        return output::print_json(&report);
    }

    println!("Modes:");
    for mode in &report.modes {
        println!("  {:<22}{}", mode.slug, mode.label);
    }
    println!("Neighborhoods:");
    for option in &report.neighborhoods {
        println!("  {:<22}{}", option.id, option.label);
    }
    println!("Cuisines:");
    for option in &report.cuisines {
        println!("  {:<22}{}", option.id, option.label);
    }
    println!("Ratings:");
    for (label, _) in &report.rating_floors {
        println!("  {label}");
    }
    println!("Price:");
    for tier in &report.price_tiers {
        println!("  {tier}");
    }
    Ok(())
}
