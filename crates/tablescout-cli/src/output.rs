//! Plain-text and JSON rendering for command results.

use serde::Serialize;
use tablescout_core::view::{ListingCard, MapView, ProfileView};

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_owned()
    }
}

pub(crate) fn print_cards(title: &str, cards: &[ListingCard]) {
    println!("{title}");
    println!();
    if cards.is_empty() {
        println!("no restaurants match these filters");
        return;
    }

    let header = format!(
        "{:<6}{:<32}{:<7}{:<7}{:<20}CATEGORIES",
        "ID", "NAME", "RATING", "PRICE", "NEIGHBORHOOD"
    );
    println!("{header}");
    for card in cards {
        let name = if card.sponsored {
            format!("{} [Sponsored]", card.name)
        } else {
            card.name.clone()
        };
        println!(
            "{:<6}{:<32}{:<7.1}{:<7}{:<20}{}",
            card.id,
            truncate(&name, 28),
            card.rating,
            card.price.symbol(),
            card.neighborhood,
            card.categories.join(", ")
        );
    }
    println!();
    println!("{} restaurant(s)", cards.len());
}

pub(crate) fn print_map(title: &str, map: &MapView) {
    println!("{title}");
    println!(
        "center {:.4}, {:.4}  zoom {}",
        map.center.0, map.center.1, map.zoom
    );
    println!();
    if map.is_empty() {
        println!("no markers to plot");
        return;
    }

    println!("{:<6}{:<32}{:<11}{:<12}CUISINE", "ID", "NAME", "LAT", "LON");
    for marker in &map.markers {
        let name = if marker.sponsored {
            format!("* {}", marker.name)
        } else {
            marker.name.clone()
        };
        println!(
            "{:<6}{:<32}{:<11.4}{:<12.4}{}",
            marker.id,
            truncate(&name, 28),
            marker.latitude,
            marker.longitude,
            marker.cuisine_type
        );
    }
}

pub(crate) fn print_profile(profile: &ProfileView) {
    println!("[{}] {}", profile.initial, profile.name);
    println!("{}", profile.email);
    println!();
    println!("Favorite cuisines:      {}", list_or_none(&profile.favorite_cuisines));
    println!(
        "Favorite neighborhoods: {}",
        list_or_none(&profile.favorite_neighborhoods)
    );
    println!(
        "Price range:            {}",
        profile
            .price_range
            .map_or_else(|| "not set".to_owned(), |p| p.to_string())
    );
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_owned()
    } else {
        items.join(", ")
    }
}
