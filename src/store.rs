// =============================================================================
// STORE MODULE
// =============================================================================
// The application state store: three independent slices (catalog view, cart,
// auth), each mutated only through its own named, pure transitions. One
// process-wide Store instance wraps the combined state behind a lock, so
// dispatches apply atomically relative to each other; all orchestration
// between slices (load-then-filter, login delays) happens in the handlers.
//
// There is no cancellation for in-flight loads: a superseded load's result
// still lands, last write wins. Accepted staleness, not guarded against.
// =============================================================================

use std::sync::RwLock;

use serde::Serialize;

use crate::cart::{self, CartState};
use crate::models::{Product, ProductCategory, User};

// =============================================================================
// CATALOG VIEW SLICE
// =============================================================================

/// What the browsing surface currently shows: the loaded products, the load
/// lifecycle flags and the active filters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogViewState {
    pub products: Vec<Product>,
    pub loading: bool,
    /// Set on a failed load; mutually exclusive with a successful one
    pub error: Option<String>,
    /// `None` means "all"
    pub selected_category: Option<ProductCategory>,
    pub search_query: String,
}

#[derive(Debug, Clone)]
pub enum CatalogAction {
    LoadStarted,
    /// A load cycle completed; replaces the product list and clears both
    /// the loading flag and any previous error
    Loaded(Vec<Product>),
    /// A load cycle failed; the message is surfaced as-is to clients
    LoadFailed(String),
    CategorySelected(Option<ProductCategory>),
    QueryChanged(String),
}

pub fn reduce_catalog(state: CatalogViewState, action: CatalogAction) -> CatalogViewState {
    let mut state = state;
    match action {
        CatalogAction::LoadStarted => {
            state.loading = true;
        }
        CatalogAction::Loaded(products) => {
            state.products = products;
            state.loading = false;
            state.error = None;
        }
        CatalogAction::LoadFailed(message) => {
            state.error = Some(message);
            state.loading = false;
        }
        CatalogAction::CategorySelected(category) => {
            state.selected_category = category;
        }
        CatalogAction::QueryChanged(query) => {
            state.search_query = query;
        }
    }
    state
}

// =============================================================================
// AUTH SLICE
// =============================================================================

/// Login lifecycle state machine:
/// Idle -> LoggingIn -> Authenticated, or Idle -> LoggingIn -> Failed.
/// Logout returns Authenticated to Idle; retrying from Failed re-enters
/// LoggingIn. No session outlives the process.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuthState {
    #[default]
    Idle,
    LoggingIn,
    Authenticated {
        user: User,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone)]
pub enum AuthAction {
    LoginStarted,
    LoginSucceeded(User),
    LoginFailed(String),
    LoggedOut,
}

pub fn reduce_auth(state: AuthState, action: AuthAction) -> AuthState {
    match (state, action) {
        // Dispatch is unguarded: starting a login while authenticated simply
        // re-enters LoggingIn, matching last-write-wins semantics
        (_, AuthAction::LoginStarted) => AuthState::LoggingIn,
        (_, AuthAction::LoginSucceeded(user)) => AuthState::Authenticated { user },
        (_, AuthAction::LoginFailed(error)) => AuthState::Failed { error },
        (_, AuthAction::LoggedOut) => AuthState::Idle,
    }
}

// =============================================================================
// COMBINED STORE
// =============================================================================

/// The combined state snapshot across all three slices.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreState {
    pub catalog: CatalogViewState,
    pub cart: CartState,
    pub auth: AuthState,
}

/// Any slice transition. An action addresses exactly one slice; the other
/// slices pass through untouched.
#[derive(Debug, Clone)]
pub enum Action {
    Catalog(CatalogAction),
    Cart(cart::CartAction),
    Auth(AuthAction),
}

/// Root reducer: routes the action to its slice.
pub fn reduce(state: StoreState, action: Action) -> StoreState {
    let StoreState {
        catalog,
        cart,
        auth,
    } = state;

    match action {
        Action::Catalog(action) => StoreState {
            catalog: reduce_catalog(catalog, action),
            cart,
            auth,
        },
        Action::Cart(action) => StoreState {
            catalog,
            cart: cart::reduce(cart, action),
            auth,
        },
        Action::Auth(action) => StoreState {
            catalog,
            cart,
            auth: reduce_auth(auth, action),
        },
    }
}

// -----------------------------------------------------------------------------
// STORE CONTAINER
// -----------------------------------------------------------------------------
/// Process-wide state container. State is mutated exclusively through
/// `dispatch`; the write lock serializes transitions so each one applies
/// atomically. Initial state: empty catalog, empty cart, idle auth.
#[derive(Debug, Default)]
pub struct Store {
    state: RwLock<StoreState>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one transition and return the resulting snapshot.
    pub fn dispatch(&self, action: Action) -> StoreState {
        let mut guard = match self.state.write() {
            Ok(guard) => guard,
            // A poisoned lock means a reducer panicked mid-swap; the state
            // itself is still the last consistent value, so keep serving it
            Err(poisoned) => poisoned.into_inner(),
        };

        let previous = std::mem::take(&mut *guard);
        *guard = reduce(previous, action);
        guard.clone()
    }

    /// Read the current snapshot without mutating.
    pub fn snapshot(&self) -> StoreState {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Lock health, surfaced by the readiness endpoint.
    pub fn is_healthy(&self) -> bool {
        self.state.read().is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartAction;
    use crate::data::seed_products;
    use uuid::Uuid;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "john@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[test]
    fn initial_state_is_empty_cart_empty_catalog_idle_auth() {
        let store = Store::new();
        let state = store.snapshot();

        assert!(state.catalog.products.is_empty());
        assert!(!state.catalog.loading);
        assert!(state.catalog.error.is_none());
        assert!(state.cart.lines.is_empty());
        assert_eq!(state.cart.total, 0.0);
        assert_eq!(state.auth, AuthState::Idle);
    }

    #[test]
    fn catalog_load_lifecycle_clears_error_on_success() {
        let mut state = CatalogViewState::default();

        state = reduce_catalog(state, CatalogAction::LoadStarted);
        assert!(state.loading);

        state = reduce_catalog(state, CatalogAction::LoadFailed("Failed to load".to_string()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to load"));

        // A retry is the same load again; success wipes the error
        state = reduce_catalog(state, CatalogAction::LoadStarted);
        state = reduce_catalog(state, CatalogAction::Loaded(seed_products("")));
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.products.len(), 12);
    }

    #[test]
    fn catalog_filter_selections_are_recorded() {
        let mut state = CatalogViewState::default();
        state = reduce_catalog(
            state,
            CatalogAction::CategorySelected(Some(ProductCategory::Bass)),
        );
        state = reduce_catalog(state, CatalogAction::QueryChanged("fender".to_string()));

        assert_eq!(state.selected_category, Some(ProductCategory::Bass));
        assert_eq!(state.search_query, "fender");

        state = reduce_catalog(state, CatalogAction::CategorySelected(None));
        assert_eq!(state.selected_category, None);
    }

    #[test]
    fn auth_happy_path_reaches_authenticated_and_logs_out() {
        let u = user();
        let mut state = AuthState::Idle;

        state = reduce_auth(state, AuthAction::LoginStarted);
        assert_eq!(state, AuthState::LoggingIn);

        state = reduce_auth(state, AuthAction::LoginSucceeded(u.clone()));
        assert_eq!(state, AuthState::Authenticated { user: u });

        state = reduce_auth(state, AuthAction::LoggedOut);
        assert_eq!(state, AuthState::Idle);
    }

    #[test]
    fn auth_failure_can_be_retried() {
        let mut state = AuthState::Idle;
        state = reduce_auth(state, AuthAction::LoginStarted);
        state = reduce_auth(state, AuthAction::LoginFailed("Login failed".to_string()));
        assert_eq!(
            state,
            AuthState::Failed {
                error: "Login failed".to_string()
            }
        );

        state = reduce_auth(state, AuthAction::LoginStarted);
        assert_eq!(state, AuthState::LoggingIn);
    }

    #[test]
    fn actions_touch_only_their_own_slice() {
        let store = Store::new();
        store.dispatch(Action::Auth(AuthAction::LoginSucceeded(user())));

        let products = seed_products("");
        let first = products[0].clone();
        store.dispatch(Action::Catalog(CatalogAction::Loaded(products)));
        let state = store.dispatch(Action::Cart(CartAction::Add(first)));

        assert!(matches!(state.auth, AuthState::Authenticated { .. }));
        assert_eq!(state.catalog.products.len(), 12);
        assert_eq!(state.cart.lines.len(), 1);
    }

    #[test]
    fn dispatch_returns_the_resulting_snapshot() {
        let store = Store::new();
        let product = seed_products("").remove(0);

        let state = store.dispatch(Action::Cart(CartAction::Add(product)));
        assert_eq!(state.cart.total, 299.0);
        assert_eq!(store.snapshot().cart.total, 299.0);
    }
}
