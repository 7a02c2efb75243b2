//! Selection wrapped in a simulated backend round-trip.
//!
//! Every [`SelectionEngine::apply`] call takes a fresh in-flight token. Only the
//! holder of the newest token may publish, so a slow older request can never
//! overwrite the result of a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tablescout_core::view::page_title;
use tablescout_core::{apply_facets, select_base_set, Catalog, FilterSelection, Listing};
use tokio::sync::watch;

/// What the list and map views render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub loading: bool,
    /// Set while a session-scoped request is in flight.
    pub recommending: bool,
    pub session_present: bool,
    pub selection: FilterSelection,
    /// Sponsored listing plus the chosen pool, before facets.
    pub base: Vec<Listing>,
    pub listings: Vec<Listing>,
}

impl ViewState {
    #[must_use]
    pub fn title(&self) -> &'static str {
        page_title(self.selection.mode, self.session_present)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Published(Vec<Listing>),
    /// A newer request was issued while this one was waiting.
    Superseded,
}

impl Outcome {
    #[must_use]
    pub fn listings(&self) -> Option<&[Listing]> {
        match self {
            Self::Published(listings) => Some(listings),
            Self::Superseded => None,
        }
    }
}

pub struct SelectionEngine {
    catalog: Arc<Catalog>,
    latency: Duration,
    generation: AtomicU64,
    state: watch::Sender<ViewState>,
}

impl SelectionEngine {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, latency: Duration) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            catalog,
            latency,
            generation: AtomicU64::new(0),
            state,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Recomputes the base set and listings for `selection` after the
    /// simulated latency.
    ///
    /// The selection is recorded immediately so the views can reflect the
    /// pending choice; listings only change when this call still holds the
    /// newest token once the delay elapses. A search term set through
    /// [`SelectionEngine::search`] while the request is pending is honoured.
    pub async fn apply(&self, selection: FilterSelection, session_present: bool) -> Outcome {
        let mut token = 0;
        self.state.send_modify(|state| {
            token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.loading = true;
            state.recommending = session_present;
            state.selection = selection.clone();
        });
        tracing::debug!(
            token,
            mode = ?selection.mode,
            session_present,
            "selection requested"
        );

        tokio::time::sleep(self.latency).await;

        let base = select_base_set(&self.catalog, selection.mode, session_present);
        let mut published = None;
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != token {
                return false;
            }
            let listings = apply_facets(&base, &state.selection);
            state.loading = false;
            state.recommending = false;
            state.session_present = session_present;
            state.base = base;
            state.listings = listings.clone();
            published = Some(listings);
            true
        });

        match published {
            Some(listings) => {
                tracing::debug!(token, count = listings.len(), "selection published");
                Outcome::Published(listings)
            }
            None => {
                tracing::debug!(token, "selection superseded");
                Outcome::Superseded
            }
        }
    }

    /// Re-filters the current base list with a new search term, without
    /// any latency.
    ///
    /// While a request is pending the recorded selection belongs to that
    /// request but `base` still holds the previous pool, so the term is only
    /// stored and the published listings stay as they are until it lands.
    pub fn search(&self, term: Option<String>) -> Vec<Listing> {
        let mut listings = Vec::new();
        let mut deferred = false;
        self.state.send_modify(|state| {
            state.selection.search = term;
            if state.loading {
                deferred = true;
            } else {
                state.listings = apply_facets(&state.base, &state.selection);
            }
            listings.clone_from(&state.listings);
        });
        if deferred {
            tracing::debug!("search recorded; applied when the pending request publishes");
        } else {
            tracing::debug!(count = listings.len(), "search applied");
        }
        listings
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
