// =============================================================================
// CART MODULE
// =============================================================================
// The cart ledger: an ordered collection of cart lines, unique by product id,
// plus a derived total. The total is recomputed from the lines by a pure fold
// after every mutation - it is never adjusted incrementally, so it cannot
// drift from the lines that produced it.
//
// The ledger does not enforce stock availability; the `in_stock` flag on
// every product payload exists so clients can guard the add action.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::models::{CartLine, Product};

// -----------------------------------------------------------------------------
// CART STATE
// -----------------------------------------------------------------------------
/// Session-scoped cart slice. Starts empty; not persisted beyond the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    /// Always equals the sum of `price x quantity` over `lines`
    pub total: f64,
}

impl CartState {
    /// Total number of units across all lines.
    pub fn units(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

// -----------------------------------------------------------------------------
// CART ACTIONS
// -----------------------------------------------------------------------------
/// Named transitions of the cart slice.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Merge a product into the cart: existing line gains one unit, a new
    /// product gets a fresh line with quantity 1
    Add(Product),

    /// Drop the line for this product id; absent ids are a silent no-op
    Remove(String),

    /// Set a line's quantity exactly; zero or below removes the line,
    /// absent ids are a no-op
    UpdateQuantity { product_id: String, quantity: i64 },

    /// Empty the cart
    Clear,
}

// -----------------------------------------------------------------------------
// REDUCER
// -----------------------------------------------------------------------------
/// Pure transition: previous state + action -> next state. No partial update
/// is ever observable; the returned state is consistent, total included.
pub fn reduce(state: CartState, action: CartAction) -> CartState {
    let mut lines = state.lines;

    match action {
        CartAction::Add(product) => {
            match lines.iter_mut().find(|line| line.product.id == product.id) {
                Some(line) => line.quantity += 1,
                None => lines.push(CartLine {
                    product,
                    quantity: 1,
                }),
            }
        }

        CartAction::Remove(product_id) => {
            lines.retain(|line| line.product.id != product_id);
        }

        CartAction::UpdateQuantity {
            product_id,
            quantity,
        } => {
            if quantity > 0 {
                if let Some(line) = lines.iter_mut().find(|line| line.product.id == product_id) {
                    line.quantity = quantity as u32;
                }
            } else {
                lines.retain(|line| line.product.id != product_id);
            }
        }

        CartAction::Clear => lines.clear(),
    }

    let total = recompute_total(&lines);
    CartState { lines, total }
}

/// Exact total over the current lines. A pure fold, the single place the
/// total is ever computed.
fn recompute_total(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::line_total).sum()
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_products;

    fn product(id: &str) -> Product {
        seed_products("")
            .into_iter()
            .find(|p| p.id == id)
            .unwrap_or_else(|| panic!("no seed product with id {id}"))
    }

    fn assert_total_invariant(state: &CartState) {
        let expected: f64 = state.lines.iter().map(CartLine::line_total).sum();
        assert_eq!(state.total, expected, "total drifted from lines");
    }

    #[test]
    fn add_inserts_a_line_with_quantity_one() {
        let state = reduce(CartState::default(), CartAction::Add(product("1")));

        assert_eq!(state.lines.len(), 1);
        assert_eq!(state.lines[0].product.id, "1");
        assert_eq!(state.lines[0].quantity, 1);
        assert_eq!(state.total, 299.0);
    }

    #[test]
    fn add_same_product_twice_merges_into_one_line() {
        let mut state = CartState::default();
        state = reduce(state, CartAction::Add(product("1")));
        state = reduce(state, CartAction::Add(product("1")));

        assert_eq!(state.lines.len(), 1);
        assert_eq!(state.lines[0].quantity, 2);
        assert_eq!(state.total, 598.0);
    }

    #[test]
    fn remove_drops_the_line() {
        let state = reduce(CartState::default(), CartAction::Add(product("1")));
        let state = reduce(state, CartAction::Remove("1".to_string()));

        assert!(state.lines.is_empty());
        assert_eq!(state.total, 0.0);
    }

    #[test]
    fn remove_absent_id_is_a_no_op() {
        let before = reduce(CartState::default(), CartAction::Add(product("1")));
        let after = reduce(before.clone(), CartAction::Remove("999".to_string()));

        assert_eq!(after.lines.len(), before.lines.len());
        assert_eq!(after.total, before.total);
    }

    #[test]
    fn update_quantity_sets_positive_values_exactly() {
        let state = reduce(CartState::default(), CartAction::Add(product("1")));
        let state = reduce(
            state,
            CartAction::UpdateQuantity {
                product_id: "1".to_string(),
                quantity: 5,
            },
        );

        assert_eq!(state.lines[0].quantity, 5);
        assert_eq!(state.total, 1495.0);
    }

    #[test]
    fn update_quantity_zero_or_negative_removes_the_line() {
        for quantity in [0, -3] {
            let state = reduce(CartState::default(), CartAction::Add(product("1")));
            let state = reduce(
                state,
                CartAction::UpdateQuantity {
                    product_id: "1".to_string(),
                    quantity,
                },
            );
            assert!(state.lines.is_empty(), "quantity {quantity} should remove");
            assert_eq!(state.total, 0.0);
        }
    }

    #[test]
    fn update_quantity_for_absent_id_is_a_no_op() {
        let before = reduce(CartState::default(), CartAction::Add(product("1")));
        let after = reduce(
            before.clone(),
            CartAction::UpdateQuantity {
                product_id: "999".to_string(),
                quantity: 4,
            },
        );

        assert_eq!(after.lines.len(), 1);
        assert_eq!(after.total, before.total);
    }

    #[test]
    fn clear_empties_lines_and_total() {
        let mut state = CartState::default();
        state = reduce(state, CartAction::Add(product("1")));
        state = reduce(state, CartAction::Add(product("9")));
        state = reduce(state, CartAction::Clear);

        assert!(state.lines.is_empty());
        assert_eq!(state.total, 0.0);
    }

    #[test]
    fn total_invariant_holds_after_every_operation() {
        let actions = vec![
            CartAction::Add(product("1")),
            CartAction::Add(product("9")),
            CartAction::Add(product("1")),
            CartAction::UpdateQuantity {
                product_id: "9".to_string(),
                quantity: 3,
            },
            CartAction::Remove("1".to_string()),
            CartAction::Add(product("12")),
            CartAction::UpdateQuantity {
                product_id: "12".to_string(),
                quantity: 0,
            },
            CartAction::Clear,
        ];

        let mut state = CartState::default();
        assert_total_invariant(&state);
        for action in actions {
            state = reduce(state, action);
            assert_total_invariant(&state);
        }
    }

    #[test]
    fn scenario_triple_add_of_product_one() {
        // Add id '1' (price 299) three times -> one line, quantity 3, 897.00
        let mut state = CartState::default();
        for _ in 0..3 {
            state = reduce(state, CartAction::Add(product("1")));
        }

        assert_eq!(state.lines.len(), 1);
        assert_eq!(state.lines[0].quantity, 3);
        assert_eq!(state.total, 897.0);
    }

    #[test]
    fn scenario_add_two_products_then_remove_first() {
        // Add id '1' (299) and id '9' (3199), remove '1' -> only '9' remains
        let mut state = CartState::default();
        state = reduce(state, CartAction::Add(product("1")));
        state = reduce(state, CartAction::Add(product("9")));
        state = reduce(state, CartAction::Remove("1".to_string()));

        assert_eq!(state.lines.len(), 1);
        assert_eq!(state.lines[0].product.id, "9");
        assert_eq!(state.total, 3199.0);
    }

    #[test]
    fn units_counts_across_lines() {
        let mut state = CartState::default();
        state = reduce(state, CartAction::Add(product("1")));
        state = reduce(state, CartAction::Add(product("1")));
        state = reduce(state, CartAction::Add(product("9")));

        assert_eq!(state.units(), 3);
    }
}
