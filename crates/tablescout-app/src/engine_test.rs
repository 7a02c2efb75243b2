use tablescout_core::Mode;

use super::*;

fn engine(latency_ms: u64) -> SelectionEngine {
    SelectionEngine::new(Arc::new(Catalog::builtin()), Duration::from_millis(latency_ms))
}

fn mode(mode: Mode) -> FilterSelection {
    FilterSelection {
        mode: Some(mode),
        ..FilterSelection::default()
    }
}

fn ids(list: &[Listing]) -> Vec<&str> {
    list.iter().map(|l| l.id.as_str()).collect()
}

#[tokio::test(start_paused = true)]
async fn apply_publishes_after_latency() {
    let engine = engine(2000);
    let outcome = engine.apply(mode(Mode::Popular), false).await;

    let listings = outcome.listings().expect("published");
    assert_eq!(ids(listings), vec!["ad-1", "1", "2", "3", "4", "5", "6"]);

    let state = engine.snapshot();
    assert!(!state.loading);
    assert!(!state.recommending);
    assert_eq!(state.base.len(), 7);
    assert_eq!(state.listings, listings);
    assert_eq!(state.title(), "Popular restaurants in New York");
}

#[tokio::test(start_paused = true)]
async fn loading_and_recommending_are_visible_while_pending() {
    let engine = engine(2000);
    let mut rx = engine.subscribe();

    let pending = engine.apply(mode(Mode::Seasonal), true);
    let observe = async {
        rx.changed().await.unwrap();
        let state = rx.borrow_and_update().clone();
        assert!(state.loading);
        assert!(state.recommending);
        assert_eq!(state.selection.mode, Some(Mode::Seasonal));
        assert!(state.listings.is_empty(), "listings unchanged until publish");
    };
    let (outcome, ()) = tokio::join!(pending, observe);

    assert!(matches!(outcome, Outcome::Published(_)));
    assert_eq!(
        engine.snapshot().title(),
        "Seasonal recommendations just for you"
    );
}

#[tokio::test(start_paused = true)]
async fn newer_request_supersedes_older_one() {
    let engine = engine(2000);

    let older = engine.apply(mode(Mode::Popular), false);
    let newer = engine.apply(mode(Mode::TrySomethingNew), false);
    let (older, newer) = tokio::join!(older, newer);

    assert_eq!(older, Outcome::Superseded);
    assert_eq!(
        ids(newer.listings().unwrap()),
        vec!["ad-1", "t1", "t2", "t3", "t4", "t5"]
    );
    let state = engine.snapshot();
    assert!(!state.loading);
    assert_eq!(state.selection.mode, Some(Mode::TrySomethingNew));
    assert_eq!(state.base[1].id, "t1");
}

#[tokio::test(start_paused = true)]
async fn superseded_request_leaves_previous_listings_in_place() {
    let engine = engine(2000);
    engine.apply(mode(Mode::Popular), false).await;

    let older = engine.apply(mode(Mode::TrySomethingNew), false);
    let newer = async {
        // Issued halfway through the older request's wait.
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let before = engine.snapshot();
        assert!(before.loading);
        assert_eq!(before.listings[1].id, "1");
        engine.apply(mode(Mode::Popular), false).await
    };
    let (older, newer) = tokio::join!(older, newer);

    assert_eq!(older, Outcome::Superseded);
    assert_eq!(engine.snapshot().listings, newer.listings().unwrap());
    assert_eq!(engine.snapshot().listings[1].id, "1");
}

#[tokio::test]
async fn search_refilters_current_base_without_latency() {
    let engine = engine(0);
    engine.apply(mode(Mode::DiscoverNewTaste), true).await;

    let found = engine.search(Some("pizza".to_string()));
    assert_eq!(ids(&found), vec!["r4"]);
    assert_eq!(engine.snapshot().selection.search.as_deref(), Some("pizza"));

    let cleared = engine.search(None);
    assert_eq!(cleared.len(), 7);
}

#[tokio::test(start_paused = true)]
async fn search_during_pending_request_is_kept_on_publish() {
    let engine = engine(2000);

    let pending = engine.apply(mode(Mode::Popular), false);
    let typing = async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        engine.search(Some("katz".to_string()));
    };
    let (outcome, ()) = tokio::join!(pending, typing);

    assert_eq!(ids(outcome.listings().unwrap()), vec!["1"]);
}

#[tokio::test(start_paused = true)]
async fn search_during_pending_request_keeps_published_listings() {
    let engine = engine(2000);
    engine.apply(mode(Mode::Popular), false).await;
    let popular = engine.snapshot().listings;

    let pending = engine.apply(
        FilterSelection {
            mode: Some(Mode::DiscoverNewTaste),
            cuisine: Some("Mexican".to_string()),
            ..FilterSelection::default()
        },
        true,
    );
    let typing = async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        let shown = engine.search(None);
        assert_eq!(shown, popular, "old pool must not be re-filtered by new facets");
        assert_eq!(engine.snapshot().listings, popular);
    };
    let (outcome, ()) = tokio::join!(pending, typing);

    let published = outcome.listings().unwrap();
    assert_eq!(ids(published), vec!["ad-1", "r1", "r5", "r6"]);
    assert_eq!(engine.snapshot().listings, published);
}

#[test]
fn search_before_any_load_is_empty() {
    let engine = engine(0);
    assert!(engine.search(Some("katz".to_string())).is_empty());
}
