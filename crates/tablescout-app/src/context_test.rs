use std::path::PathBuf;

use tablescout_core::session::{DEMO_EMAIL, DEMO_PASSWORD, SESSION_KEY};
use tablescout_core::{Environment, FileStore, MemoryStore, Mode};

use super::*;

fn context_with(store: Arc<dyn KeyValueStore>) -> AppContext {
    AppContext::new(
        Catalog::builtin(),
        store,
        Duration::from_millis(2000),
        Duration::from_millis(1000),
    )
}

fn context() -> AppContext {
    context_with(Arc::new(MemoryStore::new()))
}

fn ids(list: &[Listing]) -> Vec<&str> {
    list.iter().map(|l| l.id.as_str()).collect()
}

fn config(state_path: PathBuf, catalog_path: Option<PathBuf>) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "debug".to_string(),
        api_base_url: "http://localhost:8000".to_string(),
        state_path,
        catalog_path,
        request_timeout_secs: 10,
        selection_latency_ms: 0,
        auth_latency_ms: 0,
        max_retries: 0,
        retry_backoff_base_ms: 0,
    }
}

#[tokio::test(start_paused = true)]
async fn start_without_session_loads_popular() {
    let ctx = context();
    let outcome = ctx.start().await;

    assert_eq!(
        ids(outcome.listings().unwrap()),
        vec!["ad-1", "1", "2", "3", "4", "5", "6"]
    );
    let view = ctx.view();
    assert_eq!(view.selection.mode, Some(Mode::Popular));
    assert!(!view.session_present);
    assert!(ctx.profile().is_none());
}

#[tokio::test(start_paused = true)]
async fn start_with_stored_session_loads_discover() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(SESSION_KEY, &serde_json::to_string(&Session::demo()).unwrap())
        .unwrap();
    let ctx = context_with(store);

    ctx.start().await;

    let view = ctx.view();
    assert!(view.session_present);
    assert_eq!(view.selection.mode, Some(Mode::DiscoverNewTaste));
    assert_eq!(view.title(), "Discover new tastes and experiences");
    assert_eq!(view.base[1].id, "r1");
}

#[tokio::test(start_paused = true)]
async fn login_resets_mode_and_facets_and_reloads() {
    let ctx = context();
    ctx.start().await;
    ctx.apply_filters(FilterSelection {
        mode: Some(Mode::TrySomethingNew),
        cuisine: Some("Italian".to_string()),
        ..FilterSelection::default()
    })
    .await;
    ctx.search(Some("carbone".to_string()));

    let (session, outcome) = ctx.login(DEMO_EMAIL, DEMO_PASSWORD).await;

    assert_eq!(session, Session::demo());
    assert!(outcome.is_some(), "session toggled so listings reload");
    let view = ctx.view();
    assert_eq!(view.selection, FilterSelection::defaults_for(true));
    assert_eq!(view.listings.len(), 7);
    assert_eq!(ctx.profile().unwrap().name, "Test User");
}

#[tokio::test(start_paused = true)]
async fn second_login_does_not_reset_selection() {
    let ctx = context();
    ctx.login(DEMO_EMAIL, DEMO_PASSWORD).await;
    ctx.apply_filters(FilterSelection {
        mode: Some(Mode::Seasonal),
        ..FilterSelection::default()
    })
    .await;

    let (_, outcome) = ctx.login("other@example.com", "x").await;

    assert!(outcome.is_none());
    assert_eq!(ctx.view().selection.mode, Some(Mode::Seasonal));
    assert_eq!(ctx.profile().unwrap().name, "other");
}

#[tokio::test(start_paused = true)]
async fn logout_resets_to_popular() {
    let ctx = context();
    ctx.signup("new@user.io", "New User", "pw").await;
    assert_eq!(ctx.view().selection.mode, Some(Mode::DiscoverNewTaste));

    let outcome = ctx.logout().await;

    assert!(outcome.is_some());
    let view = ctx.view();
    assert_eq!(view.selection.mode, Some(Mode::Popular));
    assert!(!view.session_present);
    assert!(ctx.profile().is_none());
}

#[tokio::test(start_paused = true)]
async fn logout_while_logged_out_does_not_reload() {
    let ctx = context();
    assert!(ctx.logout().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn apply_filters_keeps_search_term_from_search_box() {
    let ctx = context();
    ctx.login(DEMO_EMAIL, DEMO_PASSWORD).await;
    ctx.search(Some("casual".to_string()));

    let outcome = ctx
        .apply_filters(FilterSelection {
            mode: Some(Mode::DiscoverNewTaste),
            cuisine: Some("Mexican".to_string()),
            ..FilterSelection::default()
        })
        .await;

    assert_eq!(ids(outcome.listings().unwrap()), vec!["r5", "r6"]);
}

#[tokio::test]
async fn from_config_persists_session_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path().join("state.json"), None);

    let first = AppContext::from_config(&cfg, Arc::new(FileStore::new(&cfg.state_path))).unwrap();
    first.login(DEMO_EMAIL, DEMO_PASSWORD).await;

    let second =
        AppContext::from_config(&cfg, Arc::new(FileStore::new(&cfg.state_path))).unwrap();
    assert_eq!(second.restore(), Some(Session::demo()));
}

#[test]
fn from_config_reports_missing_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(
        dir.path().join("state.json"),
        Some(dir.path().join("missing.yaml")),
    );
    let result = AppContext::from_config(&cfg, Arc::new(MemoryStore::new()));
    assert!(matches!(result, Err(ConfigError::CatalogFileIo { .. })));
}
