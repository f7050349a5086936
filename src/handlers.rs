// =============================================================================
// HANDLERS MODULE
// =============================================================================
// This module contains all HTTP request handlers (controller layer).
//
// Handlers are the orchestration boundary: they parse request input, call
// the catalog provider, dispatch store transitions and shape responses.
// Validation failures are answered here and never reach the store.
// =============================================================================

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::cart::{CartAction, CartState};
use crate::error::{AppError, AppResult};
use crate::filter::{apply_filters, FilterSpec};
use crate::metrics;
use crate::models::*;
use crate::store::{Action, AuthAction, AuthState, CatalogAction, CatalogViewState};
use crate::AppState;

// =============================================================================
// HEALTH CHECK ENDPOINTS
// =============================================================================

/// Liveness probe - Is the service running?
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "storefront-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness probe - Is the service ready to handle requests?
///
/// Checks that the catalog was seeded and the store lock is healthy.
///
/// GET /ready
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReadinessResponse>, StatusCode> {
    let catalog_seeded = !state.catalog.is_empty();
    let store_healthy = state.store.is_healthy();

    let all_healthy = catalog_seeded && store_healthy;
    let status = if all_healthy { "ready" } else { "not_ready" };

    let response = ReadinessResponse {
        status: status.to_string(),
        checks: ReadinessChecks {
            catalog_seeded,
            store: store_healthy,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

// =============================================================================
// METRICS ENDPOINT
// =============================================================================
/// Prometheus metrics endpoint
///
/// GET /metrics
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> String {
    state.metrics_handle.render()
}

// =============================================================================
// PRODUCT API ENDPOINTS
// =============================================================================

// -----------------------------------------------------------------------------
// QUERY PARAMETERS
// -----------------------------------------------------------------------------
/// Query parameters for the product listing
///
/// # Example
/// GET /api/v1/products?category=electric&q=ibanez&min_price=200&max_price=400
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsParams {
    /// Category name, or "all" (the default) for no category filter
    pub category: Option<String>,

    /// Free-text search query
    pub q: Option<String>,

    /// Inclusive price bounds. Kept as strings so malformed values can be
    /// excluded from filtering instead of failing the request.
    pub min_price: Option<String>,
    pub max_price: Option<String>,

    /// Only return purchasable products
    pub in_stock: Option<bool>,
}

/// A price bound participates only when it parses as a real number.
/// Anything else ("abc", "", NaN) is excluded from filtering entirely.
fn parse_price_param(raw: &Option<String>) -> Option<f64> {
    raw.as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}

/// Build the filter spec from request parameters. "all" (and absence)
/// resolve to no category filter before the provider is ever involved;
/// an unknown category name is a client error.
fn filter_spec_from_params(params: &ListProductsParams) -> AppResult<FilterSpec> {
    let category = match params.category.as_deref().map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(name) => Some(
            ProductCategory::parse(name)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown category: {name}")))?,
        ),
    };

    Ok(FilterSpec {
        category,
        query: params.q.clone(),
        min_price: parse_price_param(&params.min_price),
        max_price: parse_price_param(&params.max_price),
        in_stock_only: params.in_stock.unwrap_or(false),
    })
}

// -----------------------------------------------------------------------------
// LIST / FILTER PRODUCTS
// -----------------------------------------------------------------------------
/// List products, optionally narrowed by category, search query, price
/// bounds and stock flag.
///
/// GET /api/v1/products
/// GET /api/v1/products?category=bass
/// GET /api/v1/products?q=yamaha&max_price=400
///
/// The full catalog is loaded through the provider and recorded in the
/// catalog-view slice; the response carries the filter-engine subset.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListProductsParams>,
) -> AppResult<Json<ProductListResponse>> {
    let start = Instant::now();

    // Parameter validation happens before any store transition
    let spec = filter_spec_from_params(&params)?;

    state.store.dispatch(Action::Catalog(CatalogAction::LoadStarted));

    let fetch_start = Instant::now();
    let products = state.catalog.list_all().await;
    metrics::record_catalog_fetch("list_all", fetch_start.elapsed().as_secs_f64());

    state
        .store
        .dispatch(Action::Catalog(CatalogAction::Loaded(products.clone())));
    state.store.dispatch(Action::Catalog(CatalogAction::CategorySelected(
        spec.category,
    )));
    state.store.dispatch(Action::Catalog(CatalogAction::QueryChanged(
        spec.query.clone().unwrap_or_default(),
    )));

    let visible = apply_filters(&products, &spec);

    metrics::record_http_request(
        "GET",
        "/api/v1/products",
        200,
        start.elapsed().as_secs_f64(),
    );

    Ok(Json(ProductListResponse {
        total: visible.len(),
        products: visible,
    }))
}

// -----------------------------------------------------------------------------
// GET SINGLE PRODUCT
// -----------------------------------------------------------------------------
/// Get a single product by id
///
/// GET /api/v1/products/:id
///
/// # Response
/// - 200 OK: Product found
/// - 404 Not Found: No product has that id
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let start = Instant::now();

    let fetch_start = Instant::now();
    let product = state.catalog.get_by_id(&id).await;
    metrics::record_catalog_fetch("get_by_id", fetch_start.elapsed().as_secs_f64());

    let product = product.ok_or_else(|| AppError::NotFound(format!("Product not found: {id}")))?;

    metrics::record_http_request(
        "GET",
        "/api/v1/products/:id",
        200,
        start.elapsed().as_secs_f64(),
    );

    Ok(Json(product))
}

// -----------------------------------------------------------------------------
// SEARCH PRODUCTS
// -----------------------------------------------------------------------------
/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query; empty or absent matches everything
    #[serde(default)]
    pub q: String,
}

/// Free-text product search through the provider. Unlike the listing
/// filters, this also matches against the product description.
///
/// GET /api/v1/products/search?q=fender
pub async fn search_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<ProductListResponse>> {
    let start = Instant::now();

    let fetch_start = Instant::now();
    let products = state.catalog.search(&params.q).await;
    metrics::record_catalog_fetch("search", fetch_start.elapsed().as_secs_f64());

    metrics::record_http_request(
        "GET",
        "/api/v1/products/search",
        200,
        start.elapsed().as_secs_f64(),
    );

    Ok(Json(ProductListResponse {
        total: products.len(),
        products,
    }))
}

// -----------------------------------------------------------------------------
// FEATURED PRODUCTS
// -----------------------------------------------------------------------------
/// High-rating subset for the landing view: at most 6 products with a
/// rating of 4.5 or better, in storage order.
///
/// GET /api/v1/products/featured
pub async fn featured_products(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ProductListResponse>> {
    let start = Instant::now();

    let fetch_start = Instant::now();
    let products = state.catalog.featured().await;
    metrics::record_catalog_fetch("featured", fetch_start.elapsed().as_secs_f64());

    metrics::record_http_request(
        "GET",
        "/api/v1/products/featured",
        200,
        start.elapsed().as_secs_f64(),
    );

    Ok(Json(ProductListResponse {
        total: products.len(),
        products,
    }))
}

// -----------------------------------------------------------------------------
// CATALOG STATISTICS
// -----------------------------------------------------------------------------
/// Aggregate catalog statistics: stock and category counts, price spread.
///
/// GET /api/v1/products/stats
pub async fn catalog_stats(State(state): State<Arc<AppState>>) -> AppResult<Json<CatalogStats>> {
    let start = Instant::now();

    let fetch_start = Instant::now();
    let stats = state.catalog.statistics().await;
    metrics::record_catalog_fetch("statistics", fetch_start.elapsed().as_secs_f64());

    metrics::record_http_request(
        "GET",
        "/api/v1/products/stats",
        200,
        start.elapsed().as_secs_f64(),
    );

    Ok(Json(stats))
}

// -----------------------------------------------------------------------------
// CATALOG VIEW STATE
// -----------------------------------------------------------------------------
/// Current catalog-view slice: the last loaded products, the load lifecycle
/// flags and the active filters. Clients render from this snapshot.
///
/// GET /api/v1/catalog/view
pub async fn catalog_view(State(state): State<Arc<AppState>>) -> Json<CatalogViewState> {
    Json(state.store.snapshot().catalog)
}

// =============================================================================
// CART API ENDPOINTS
// =============================================================================

/// Current cart snapshot (lines plus derived total)
///
/// GET /api/v1/cart
pub async fn get_cart(State(state): State<Arc<AppState>>) -> Json<CartState> {
    let cart = state.store.snapshot().cart;
    metrics::set_cart_gauges(cart.lines.len(), cart.total);
    Json(cart)
}

/// Add a product to the cart. Adding the same product again increments the
/// existing line; the ledger itself never rejects an out-of-stock product.
///
/// POST /api/v1/cart/items
///
/// # Request Body
/// ```json
/// { "product_id": "1" }
/// ```
///
/// # Response
/// - 200 OK: Updated cart
/// - 404 Not Found: Unknown product id
pub async fn add_cart_item(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddCartItemRequest>,
) -> AppResult<Json<CartState>> {
    let start = Instant::now();

    tracing::info!(product_id = %request.product_id, "Adding product to cart");

    let fetch_start = Instant::now();
    let product = state.catalog.get_by_id(&request.product_id).await;
    metrics::record_catalog_fetch("get_by_id", fetch_start.elapsed().as_secs_f64());

    let product = product.ok_or_else(|| {
        AppError::NotFound(format!("Product not found: {}", request.product_id))
    })?;

    let next = state.store.dispatch(Action::Cart(CartAction::Add(product)));
    metrics::set_cart_gauges(next.cart.lines.len(), next.cart.total);

    metrics::record_http_request(
        "POST",
        "/api/v1/cart/items",
        200,
        start.elapsed().as_secs_f64(),
    );

    Ok(Json(next.cart))
}

/// Set a cart line's quantity. Zero or a negative value removes the line;
/// an id that is not in the cart leaves it unchanged.
///
/// PUT /api/v1/cart/items/:id
///
/// # Request Body
/// ```json
/// { "quantity": 3 }
/// ```
pub async fn update_cart_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCartItemRequest>,
) -> Json<CartState> {
    let start = Instant::now();

    tracing::info!(product_id = %id, quantity = request.quantity, "Updating cart quantity");

    let next = state.store.dispatch(Action::Cart(CartAction::UpdateQuantity {
        product_id: id,
        quantity: request.quantity,
    }));
    metrics::set_cart_gauges(next.cart.lines.len(), next.cart.total);

    metrics::record_http_request(
        "PUT",
        "/api/v1/cart/items/:id",
        200,
        start.elapsed().as_secs_f64(),
    );

    Json(next.cart)
}

/// Remove a product from the cart. Removing an id that is not present is a
/// no-op, answered with the unchanged cart.
///
/// DELETE /api/v1/cart/items/:id
pub async fn remove_cart_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<CartState> {
    let start = Instant::now();

    tracing::info!(product_id = %id, "Removing product from cart");

    let next = state.store.dispatch(Action::Cart(CartAction::Remove(id)));
    metrics::set_cart_gauges(next.cart.lines.len(), next.cart.total);

    metrics::record_http_request(
        "DELETE",
        "/api/v1/cart/items/:id",
        200,
        start.elapsed().as_secs_f64(),
    );

    Json(next.cart)
}

/// Empty the cart.
///
/// DELETE /api/v1/cart
pub async fn clear_cart(State(state): State<Arc<AppState>>) -> Json<CartState> {
    let start = Instant::now();

    tracing::info!("Clearing cart");

    let next = state.store.dispatch(Action::Cart(CartAction::Clear));
    metrics::set_cart_gauges(next.cart.lines.len(), next.cart.total);

    metrics::record_http_request(
        "DELETE",
        "/api/v1/cart",
        200,
        start.elapsed().as_secs_f64(),
    );

    Json(next.cart)
}

// =============================================================================
// AUTH API ENDPOINTS
// =============================================================================
// The auth flow is mocked: after the configured delay a fabricated user
// record is produced. No credentials are checked or stored.

/// Mocked login
///
/// POST /api/v1/auth/login
///
/// # Request Body
/// ```json
/// { "email": "john@example.com", "password": "secret" }
/// ```
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    tracing::info!(email = %request.email, "Login attempt");

    state.store.dispatch(Action::Auth(AuthAction::LoginStarted));

    // Simulated backend round-trip
    tokio::time::sleep(state.auth_latency).await;

    let user = User {
        id: Uuid::new_v4(),
        email: request.email,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
    };

    state
        .store
        .dispatch(Action::Auth(AuthAction::LoginSucceeded(user.clone())));
    metrics::record_auth_attempt("login", true);

    Ok(Json(LoginResponse {
        user,
        logged_in_at: Utc::now(),
    }))
}

/// Mocked registration. Cross-field validation (password confirmation) is
/// answered here and never reaches the store.
///
/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<Json<LoginResponse>> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }
    if request.password != request.confirm_password {
        metrics::record_auth_attempt("register", false);
        return Err(AppError::BadRequest("Passwords do not match".to_string()));
    }

    tracing::info!(email = %request.email, "Registration attempt");

    state.store.dispatch(Action::Auth(AuthAction::LoginStarted));

    tokio::time::sleep(state.auth_latency).await;

    let user = User {
        id: Uuid::new_v4(),
        email: request.email,
        first_name: request.first_name,
        last_name: request.last_name,
    };

    state
        .store
        .dispatch(Action::Auth(AuthAction::LoginSucceeded(user.clone())));
    metrics::record_auth_attempt("register", true);

    Ok(Json(LoginResponse {
        user,
        logged_in_at: Utc::now(),
    }))
}

/// Log out the current user.
///
/// POST /api/v1/auth/logout
pub async fn logout(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    state.store.dispatch(Action::Auth(AuthAction::LoggedOut));

    Json(serde_json::json!({ "status": "logged_out" }))
}

/// Current auth slice as seen by clients.
///
/// GET /api/v1/auth/session
pub async fn session(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    Json(session_response(state.store.snapshot().auth))
}

fn session_response(auth: AuthState) -> SessionResponse {
    match auth {
        AuthState::Idle => SessionResponse {
            status: "idle".to_string(),
            user: None,
            error: None,
        },
        AuthState::LoggingIn => SessionResponse {
            status: "logging_in".to_string(),
            user: None,
            error: None,
        },
        AuthState::Authenticated { user } => SessionResponse {
            status: "authenticated".to_string(),
            user: Some(user),
            error: None,
        },
        AuthState::Failed { error } => SessionResponse {
            status: "failed".to_string(),
            user: None,
            error: Some(error),
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_params_parse_leniently() {
        assert_eq!(parse_price_param(&Some("250".to_string())), Some(250.0));
        assert_eq!(parse_price_param(&Some(" 99.5 ".to_string())), Some(99.5));
        // Malformed input is excluded from filtering, not coerced
        assert_eq!(parse_price_param(&Some("abc".to_string())), None);
        assert_eq!(parse_price_param(&Some("".to_string())), None);
        assert_eq!(parse_price_param(&Some("NaN".to_string())), None);
        assert_eq!(parse_price_param(&None), None);
    }

    #[test]
    fn category_all_and_absent_mean_no_filter() {
        let spec = filter_spec_from_params(&ListProductsParams {
            category: Some("all".to_string()),
            ..ListProductsParams::default()
        })
        .unwrap();
        assert_eq!(spec.category, None);

        let spec = filter_spec_from_params(&ListProductsParams::default()).unwrap();
        assert_eq!(spec.category, None);
    }

    #[test]
    fn unknown_category_is_a_bad_request() {
        let result = filter_spec_from_params(&ListProductsParams {
            category: Some("ukulele".to_string()),
            ..ListProductsParams::default()
        });
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn filter_spec_carries_all_active_parts() {
        let spec = filter_spec_from_params(&ListProductsParams {
            category: Some("bass".to_string()),
            q: Some("fender".to_string()),
            min_price: Some("500".to_string()),
            max_price: Some("junk".to_string()),
            in_stock: Some(true),
        })
        .unwrap();

        assert_eq!(spec.category, Some(ProductCategory::Bass));
        assert_eq!(spec.query.as_deref(), Some("fender"));
        assert_eq!(spec.min_price, Some(500.0));
        assert_eq!(spec.max_price, None);
        assert!(spec.in_stock_only);
    }

    #[test]
    fn session_response_mirrors_the_auth_machine() {
        assert_eq!(session_response(AuthState::Idle).status, "idle");
        assert_eq!(session_response(AuthState::LoggingIn).status, "logging_in");

        let user = User {
            id: Uuid::new_v4(),
            email: "a@b.c".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        };
        let authed = session_response(AuthState::Authenticated { user: user.clone() });
        assert_eq!(authed.status, "authenticated");
        assert_eq!(authed.user, Some(user));

        let failed = session_response(AuthState::Failed {
            error: "Login failed".to_string(),
        });
        assert_eq!(failed.status, "failed");
        assert_eq!(failed.error.as_deref(), Some("Login failed"));
    }
}
