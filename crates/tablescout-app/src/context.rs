use std::sync::Arc;
use std::time::Duration;

use tablescout_core::view::ProfileView;
use tablescout_core::{
    load_catalog, AppConfig, Catalog, ConfigError, FilterSelection, KeyValueStore, Listing,
    Session,
};
use tokio::sync::watch;

use crate::engine::{Outcome, SelectionEngine, ViewState};
use crate::session::SessionHolder;

/// Application state handed explicitly to every consumer.
pub struct AppContext {
    session: SessionHolder,
    engine: SelectionEngine,
}

impl AppContext {
    #[must_use]
    pub fn new(
        catalog: Catalog,
        store: Arc<dyn KeyValueStore>,
        selection_latency: Duration,
        auth_latency: Duration,
    ) -> Self {
        Self {
            session: SessionHolder::new(store, auth_latency),
            engine: SelectionEngine::new(Arc::new(catalog), selection_latency),
        }
    }

    /// Builds the context from configuration, loading the YAML catalog when
    /// one is configured and the builtin sample data otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configured catalog cannot be read,
    /// parsed, or validated.
    pub fn from_config(
        config: &AppConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, ConfigError> {
        let catalog = match &config.catalog_path {
            Some(path) => load_catalog(path)?,
            None => Catalog::builtin(),
        };
        Ok(Self::new(
            catalog,
            store,
            Duration::from_millis(config.selection_latency_ms),
            Duration::from_millis(config.auth_latency_ms),
        ))
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.engine.catalog()
    }

    #[must_use]
    pub fn session(&self) -> &SessionHolder {
        &self.session
    }

    /// Rehydrates the stored session without loading any listings.
    pub fn restore(&self) -> Option<Session> {
        self.session.restore()
    }

    /// Restores the session and runs the initial load with the default
    /// selection for that session state.
    pub async fn start(&self) -> Outcome {
        let present = self.session.restore().is_some();
        tracing::info!(session_present = present, "starting");
        self.reload_defaults(present).await
    }

    /// Signs in. Returns the reload outcome when the session state toggled.
    pub async fn login(&self, email: &str, password: &str) -> (Session, Option<Outcome>) {
        let was_present = self.session.is_authenticated();
        let session = self.session.login(email, password).await;
        (session, self.on_session_change(was_present).await)
    }

    pub async fn signup(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> (Session, Option<Outcome>) {
        let was_present = self.session.is_authenticated();
        let session = self.session.signup(email, name, password).await;
        (session, self.on_session_change(was_present).await)
    }

    pub async fn logout(&self) -> Option<Outcome> {
        let was_present = self.session.is_authenticated();
        self.session.logout();
        self.on_session_change(was_present).await
    }

    /// Applies a new filter selection. A selection without a search term
    /// keeps the term currently in the search box.
    pub async fn apply_filters(&self, mut selection: FilterSelection) -> Outcome {
        if selection.search.is_none() {
            selection.search = self.engine.snapshot().selection.search;
        }
        self.engine
            .apply(selection, self.session.is_authenticated())
            .await
    }

    pub fn search(&self, term: Option<String>) -> Vec<Listing> {
        self.engine.search(term)
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.engine.snapshot()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.engine.subscribe()
    }

    /// `None` when logged out.
    #[must_use]
    pub fn profile(&self) -> Option<ProfileView> {
        self.session.current().as_ref().map(ProfileView::from)
    }

    async fn on_session_change(&self, was_present: bool) -> Option<Outcome> {
        let present = self.session.is_authenticated();
        if present == was_present {
            return None;
        }
        Some(self.reload_defaults(present).await)
    }

    async fn reload_defaults(&self, present: bool) -> Outcome {
        self.engine
            .apply(FilterSelection::defaults_for(present), present)
            .await
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
