//! Simulated authentication backed by the key-value storage port.
//!
//! Login and signup always succeed after a fixed delay. The signed-in identity
//! is mirrored to the store under [`SESSION_KEY`] so it survives restarts.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::Utc;
use tablescout_core::session::{DEMO_EMAIL, DEMO_PASSWORD, SESSION_KEY};
use tablescout_core::{KeyValueStore, Session};

pub struct SessionHolder {
    store: Arc<dyn KeyValueStore>,
    latency: Duration,
    current: RwLock<Option<Session>>,
}

impl SessionHolder {
    /// Starts logged out; call [`SessionHolder::restore`] to rehydrate.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, latency: Duration) -> Self {
        Self {
            store,
            latency,
            current: RwLock::new(None),
        }
    }

    /// Rehydrates the persisted identity.
    ///
    /// Corrupt data is logged and removed, leaving the holder logged out.
    /// Errors are never propagated.
    pub fn restore(&self) -> Option<Session> {
        let restored = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable stored session");
                    if let Err(e) = self.store.remove(SESSION_KEY) {
                        tracing::warn!(error = %e, "failed to remove unreadable stored session");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "session storage unavailable; starting logged out");
                None
            }
        };

        if let Some(session) = &restored {
            tracing::debug!(user_id = %session.id, "restored session");
        }
        self.replace(restored.clone());
        restored
    }

    /// Signs in after the simulated delay. Never fails: the demo credentials
    /// yield the demo identity, anything else a demo identity re-labelled with
    /// `email`.
    pub async fn login(&self, email: &str, password: &str) -> Session {
        tokio::time::sleep(self.latency).await;

        let session = if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            Session::demo()
        } else {
            Session::for_email(email)
        };

        tracing::info!(user_id = %session.id, email = %session.email, "signed in");
        self.persist(&session);
        self.replace(Some(session.clone()));
        session
    }

    /// Registers after the simulated delay. Never fails.
    pub async fn signup(&self, email: &str, name: &str, _password: &str) -> Session {
        tokio::time::sleep(self.latency).await;

        let session = Session::registered(email, name, Utc::now());

        tracing::info!(user_id = %session.id, email = %session.email, "registered");
        self.persist(&session);
        self.replace(Some(session.clone()));
        session
    }

    /// Clears the identity from memory and storage immediately.
    pub fn logout(&self) {
        if let Err(e) = self.store.remove(SESSION_KEY) {
            tracing::warn!(error = %e, "failed to clear stored session");
        }
        self.replace(None);
        tracing::info!("signed out");
    }

    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn replace(&self, session: Option<Session>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = session;
    }

    // The in-memory session changes even when the write fails.
    fn persist(&self, session: &Session) {
        let result = serde_json::to_string(session)
            .map_err(|e| e.to_string())
            .and_then(|raw| self.store.set(SESSION_KEY, &raw).map_err(|e| e.to_string()));
        if let Err(error) = result {
            tracing::warn!(%error, "failed to persist session");
        }
    }
}
