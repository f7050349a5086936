// =============================================================================
// CATALOG MODULE
// =============================================================================
// The product data provider: an asynchronous, read-only view over the fixed
// in-memory catalog. Every operation awaits a configurable simulated network
// latency before resolving - a placeholder for a future real backend. There
// is no retry, timeout or failure path in the provider itself; the only
// "error" it can report is an absent product id, expressed as None.
// =============================================================================

use std::sync::Arc;
use std::time::Duration;

use crate::models::{CatalogStats, CategoryCounts, PriceRange, Product, ProductCategory};

/// Minimum rating for a product to count as featured.
pub const FEATURED_MIN_RATING: f64 = 4.5;

/// Maximum number of products in the featured subset.
pub const FEATURED_LIMIT: usize = 6;

// -----------------------------------------------------------------------------
// CATALOG HANDLE
// -----------------------------------------------------------------------------
// Wrapping the product list in a struct keeps the rest of the app independent
// of where the data actually lives. Cloning is cheap: the product list is
// shared behind an Arc.
#[derive(Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
    latency: Duration,
}

impl Catalog {
    /// Create a catalog over a fixed product list.
    ///
    /// `latency` is awaited before every operation; pass `Duration::ZERO`
    /// in tests.
    pub fn new(products: Vec<Product>, latency: Duration) -> Self {
        Self {
            products: Arc::new(products),
            latency,
        }
    }

    /// Number of seeded products. Used by the readiness check.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    // -------------------------------------------------------------------------
    // READ OPERATIONS
    // -------------------------------------------------------------------------

    /// Full product list, in storage order.
    pub async fn list_all(&self) -> Vec<Product> {
        self.simulate_latency().await;
        self.products.as_ref().clone()
    }

    /// Look up a single product. Unknown ids yield `None`, never an error;
    /// callers must check for absence.
    pub async fn get_by_id(&self, id: &str) -> Option<Product> {
        self.simulate_latency().await;
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Subset matching a concrete category. The "all" selection is resolved
    /// by callers (they short-circuit to `list_all`), so this never sees it.
    pub async fn by_category(&self, category: ProductCategory) -> Vec<Product> {
        self.simulate_latency().await;
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Subset with `min <= price <= max`, both bounds inclusive.
    pub async fn by_price_range(&self, min: f64, max: f64) -> Vec<Product> {
        self.simulate_latency().await;
        self.products
            .iter()
            .filter(|p| p.price >= min && p.price <= max)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search against name, brand, model and
    /// description. An empty (or whitespace-only) query matches everything.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        self.simulate_latency().await;

        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.products.as_ref().clone();
        }

        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.brand.to_lowercase().contains(&query)
                    || p.model.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// High-rating subset for the landing view: first products in storage
    /// order with rating >= 4.5, capped at 6. No secondary sort.
    pub async fn featured(&self) -> Vec<Product> {
        self.simulate_latency().await;
        self.products
            .iter()
            .filter(|p| p.rating >= FEATURED_MIN_RATING)
            .take(FEATURED_LIMIT)
            .cloned()
            .collect()
    }

    // -------------------------------------------------------------------------
    // AGGREGATES
    // -------------------------------------------------------------------------

    /// Aggregate catalog statistics: stock and category counts plus the
    /// price spread.
    pub async fn statistics(&self) -> CatalogStats {
        self.simulate_latency().await;

        let products = self.products.as_ref();
        let in_stock = products.iter().filter(|p| p.in_stock).count();

        let count_category = |category: ProductCategory| {
            products.iter().filter(|p| p.category == category).count()
        };

        let price_range = if products.is_empty() {
            PriceRange {
                min: 0.0,
                max: 0.0,
                average: 0.0,
            }
        } else {
            let min = products.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
            let max = products
                .iter()
                .map(|p| p.price)
                .fold(f64::NEG_INFINITY, f64::max);
            let sum: f64 = products.iter().map(|p| p.price).sum();
            PriceRange {
                min,
                max,
                average: sum / products.len() as f64,
            }
        };

        CatalogStats {
            total: products.len(),
            in_stock,
            out_of_stock: products.len() - in_stock,
            categories: CategoryCounts {
                electric: count_category(ProductCategory::Electric),
                acoustic: count_category(ProductCategory::Acoustic),
                classical: count_category(ProductCategory::Classical),
                bass: count_category(ProductCategory::Bass),
            },
            price_range,
        }
    }
}
