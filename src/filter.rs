// =============================================================================
// FILTER MODULE
// =============================================================================
// The catalog filter engine: a pure function from (catalog, filter spec) to
// the matching subset. Each step is an intersection, so narrowing order only
// affects performance, never the result. Output preserves the relative order
// of the input catalog.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::models::{Product, ProductCategory};

// -----------------------------------------------------------------------------
// FILTER SPECIFICATION
// -----------------------------------------------------------------------------
/// The combination of category, free-text query and price bounds used to
/// narrow the catalog view. Ephemeral: built from request input, never
/// persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterSpec {
    /// `None` means "all" - the category step is skipped entirely
    pub category: Option<ProductCategory>,

    /// Free-text query; empty or whitespace-only skips the step
    pub query: Option<String>,

    /// Inclusive lower price bound
    pub min_price: Option<f64>,

    /// Inclusive upper price bound
    pub max_price: Option<f64>,

    /// Keep only purchasable products
    pub in_stock_only: bool,
}

impl FilterSpec {
    /// True when no step would narrow the catalog.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.effective_query().is_none()
            && price_bound(self.min_price).is_none()
            && price_bound(self.max_price).is_none()
            && !self.in_stock_only
    }

    fn effective_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

/// A price bound participates only when it is an actual number.
/// NaN would silently match nothing, so it is treated as unset.
fn price_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|b| !b.is_nan())
}

// -----------------------------------------------------------------------------
// FILTER ENGINE
// -----------------------------------------------------------------------------
/// Narrow the catalog by the active parts of the spec, in sequence:
/// category, free-text query, min price, max price, stock flag.
///
/// The query matches case-insensitively as a substring of name, brand or
/// model. When `min_price > max_price` both bounds still apply independently
/// (the result is simply empty); bounds are never swapped or rejected.
pub fn apply_filters(catalog: &[Product], spec: &FilterSpec) -> Vec<Product> {
    let mut products: Vec<Product> = catalog.to_vec();

    if let Some(category) = spec.category {
        products.retain(|p| p.category == category);
    }

    if let Some(query) = spec.effective_query() {
        products.retain(|p| matches_query(p, &query));
    }

    if let Some(min) = price_bound(spec.min_price) {
        products.retain(|p| p.price >= min);
    }

    if let Some(max) = price_bound(spec.max_price) {
        products.retain(|p| p.price <= max);
    }

    if spec.in_stock_only {
        products.retain(|p| p.in_stock);
    }

    products
}

/// Substring match against name, brand and model. `query` must already be
/// lowercased.
fn matches_query(product: &Product, query: &str) -> bool {
    product.name.to_lowercase().contains(query)
        || product.brand.to_lowercase().contains(query)
        || product.model.to_lowercase().contains(query)
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_products;

    fn catalog() -> Vec<Product> {
        seed_products("")
    }

    #[test]
    fn empty_spec_returns_catalog_unchanged() {
        let catalog = catalog();
        let result = apply_filters(&catalog, &FilterSpec::default());
        assert_eq!(result.len(), catalog.len());

        let input_ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        let output_ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(input_ids, output_ids);
    }

    #[test]
    fn output_is_a_subset_satisfying_every_active_predicate() {
        let catalog = catalog();
        let spec = FilterSpec {
            category: Some(ProductCategory::Electric),
            query: Some("ibanez".to_string()),
            min_price: Some(200.0),
            max_price: Some(400.0),
            in_stock_only: true,
        };

        let result = apply_filters(&catalog, &spec);
        assert!(!result.is_empty());
        for product in &result {
            assert!(catalog.iter().any(|p| p.id == product.id));
            assert_eq!(product.category, ProductCategory::Electric);
            assert!(
                product.name.to_lowercase().contains("ibanez")
                    || product.brand.to_lowercase().contains("ibanez")
                    || product.model.to_lowercase().contains("ibanez")
            );
            assert!(product.price >= 200.0 && product.price <= 400.0);
            assert!(product.in_stock);
        }
    }

    #[test]
    fn category_none_means_all() {
        let spec = FilterSpec {
            min_price: Some(1000.0),
            ..FilterSpec::default()
        };
        let result = apply_filters(&catalog(), &spec);
        // Expensive instruments across several categories survive
        assert!(result.iter().any(|p| p.category == ProductCategory::Acoustic));
        assert!(result.iter().any(|p| p.category == ProductCategory::Bass));
    }

    #[test]
    fn query_matches_case_insensitively() {
        let spec = FilterSpec {
            query: Some("FENDER".to_string()),
            ..FilterSpec::default()
        };
        let result = apply_filters(&catalog(), &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "10");
    }

    #[test]
    fn whitespace_query_is_skipped() {
        let spec = FilterSpec {
            query: Some("   ".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(apply_filters(&catalog(), &spec).len(), 12);
    }

    #[test]
    fn min_above_max_yields_empty_without_swapping() {
        let spec = FilterSpec {
            min_price: Some(1000.0),
            max_price: Some(500.0),
            ..FilterSpec::default()
        };
        assert!(apply_filters(&catalog(), &spec).is_empty());
    }

    #[test]
    fn nan_bounds_are_treated_as_unset() {
        let spec = FilterSpec {
            min_price: Some(f64::NAN),
            max_price: Some(f64::NAN),
            ..FilterSpec::default()
        };
        assert_eq!(apply_filters(&catalog(), &spec).len(), 12);
    }

    #[test]
    fn in_stock_only_drops_unavailable_products() {
        let spec = FilterSpec {
            in_stock_only: true,
            ..FilterSpec::default()
        };
        let result = apply_filters(&catalog(), &spec);
        assert_eq!(result.len(), 11);
        assert!(result.iter().all(|p| p.in_stock));
    }

    #[test]
    fn output_preserves_input_order() {
        let spec = FilterSpec {
            category: Some(ProductCategory::Electric),
            ..FilterSpec::default()
        };
        let result = apply_filters(&catalog(), &spec);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }
}
