// =============================================================================
// MODELS MODULE
// =============================================================================
// This module defines the data structures used throughout the service:
// the product catalog records, cart lines, user records, and the API
// request/response shapes built from them.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// PRODUCT CATEGORY
// =============================================================================
// The catalog uses a closed category set. Anything outside these four values
// is rejected at the API boundary before it reaches the filter engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Electric,
    Acoustic,
    Classical,
    Bass,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Electric => "electric",
            ProductCategory::Acoustic => "acoustic",
            ProductCategory::Classical => "classical",
            ProductCategory::Bass => "bass",
        }
    }

    /// Parse a category name as it appears in query parameters.
    /// Returns `None` for anything outside the closed set ("all" is not a
    /// category - callers resolve it before asking for a category subset).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "electric" => Some(ProductCategory::Electric),
            "acoustic" => Some(ProductCategory::Acoustic),
            "classical" => Some(ProductCategory::Classical),
            "bass" => Some(ProductCategory::Bass),
            _ => None,
        }
    }
}

// =============================================================================
// PRODUCT
// =============================================================================
// A single catalog entry. Products are immutable once loaded: prices, stock
// flags and ratings do not change during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, unique across the whole catalog
    pub id: String,

    /// Display name, e.g. "YAMAHA PACIFICA 112J L"
    pub name: String,

    /// Manufacturer brand
    pub brand: String,

    /// Manufacturer model designation
    pub model: String,

    /// Price in the shop currency, non-negative
    pub price: f64,

    /// Free-text marketing description
    pub description: String,

    /// Image path, prefixed with the configured asset base path at seed time
    pub image_url: String,

    pub category: ProductCategory,

    pub specifications: ProductSpecs,

    /// Whether the product can currently be purchased
    pub in_stock: bool,

    /// Average review rating, 0.0 - 5.0
    pub rating: f64,

    /// Number of reviews behind the rating
    pub reviews_count: u32,
}

/// Instrument build specification attached to every product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSpecs {
    pub body_material: String,
    pub neck_material: String,
    pub fingerboard: String,
    /// Pickup configuration; absent for instruments without pickups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickups: Option<String>,
    pub strings: u32,
    pub scale: String,
}

// =============================================================================
// CART
// =============================================================================

/// One product-and-quantity pairing within the cart.
/// Quantity is always >= 1; a line that would reach zero is removed instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price contribution of this line (price x quantity).
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

// =============================================================================
// USER
// =============================================================================
// Fabricated user record returned by the mocked authentication flow.
// There are no credentials or tokens behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

// =============================================================================
// API REQUEST STRUCTURES
// =============================================================================

/// Request body for adding a product to the cart
///
/// # Example JSON
/// ```json
/// { "product_id": "1" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCartItemRequest {
    pub product_id: String,
}

/// Request body for setting a cart line quantity.
/// A quantity of zero or below removes the line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i64,
}

/// Request body for the mocked login flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for the mocked registration flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

// =============================================================================
// API RESPONSE STRUCTURES
// =============================================================================

/// Response for product listings (full catalog or a filtered subset)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    /// Number of products in this response
    pub total: usize,
}

/// Aggregate catalog statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub categories: CategoryCounts,
    pub price_range: PriceRange,
}

/// Per-category product counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub electric: usize,
    pub acoustic: usize,
    pub classical: usize,
    pub bass: usize,
}

/// Price spread across the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Response after a successful (mocked) login or registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub logged_in_at: DateTime<Utc>,
}

/// Current auth slice as seen by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// One of "idle", "logging_in", "authenticated", "failed"
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// =============================================================================
// HEALTH CHECK RESPONSES
// =============================================================================

/// Simple health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Detailed readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
}

/// Individual dependency health checks
#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub catalog_seeded: bool,
    pub store: bool,
}

// =============================================================================
// ERROR RESPONSES
// =============================================================================
// Standardized error response format for API

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details
    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}
