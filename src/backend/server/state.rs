/**
 * Application State Management
 *
 * `AppState` is cloned into every handler. It holds no per-request data:
 * only the store handle, the token keys and the password hashing cost.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers and middleware extract just the
 * part they need, e.g. `State(keys): State<Arc<SessionKeys>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::store::BlogStore;
use crate::shared::AppConfig;

/// Application state shared by all routes
#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator
    pub store: Arc<dyn BlogStore>,

    /// Token signing and verification keys
    pub sessions: Arc<SessionKeys>,

    /// bcrypt work factor used at signup
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(store: Arc<dyn BlogStore>, sessions: SessionKeys, bcrypt_cost: u32) -> Self {
        Self {
            store,
            sessions: Arc::new(sessions),
            bcrypt_cost,
        }
    }

    /// Build state for `store` using the secret, TTL and cost from `config`
    pub fn from_config(store: Arc<dyn BlogStore>, config: &AppConfig) -> Self {
        Self::new(
            store,
            SessionKeys::new(&config.jwt_secret, config.token_ttl),
            config.bcrypt_cost,
        )
    }
}

impl FromRef<AppState> for Arc<dyn BlogStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<SessionKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
