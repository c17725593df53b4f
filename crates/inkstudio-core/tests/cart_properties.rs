//! Property tests for the cart reducer: determinism, derived totals, and the
//! algebraic behavior of add/remove/set-quantity/clear.

use inkstudio_core::{reduce, CartAction, CartState, Money, ProductRef, Quantity};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Small id space so random sequences hit existing entries often.
fn product_strategy() -> impl Strategy<Value = ProductRef> {
    (0u8..6, 0i64..50_000).prop_map(|(n, cents)| {
        ProductRef::new(
            format!("p{}", n),
            format!("Produto {}", n),
            Money::from_cents(cents),
            format!("/img/p{}.jpg", n),
            "loja",
        )
        .unwrap()
    })
}

fn quantity_strategy() -> impl Strategy<Value = Quantity> {
    (1i64..=50).prop_map(|q| Quantity::new(q).unwrap())
}

fn id_strategy() -> impl Strategy<Value = String> {
    (0u8..8).prop_map(|n| format!("p{}", n))
}

fn action_strategy() -> impl Strategy<Value = CartAction> {
    prop_oneof![
        4 => (product_strategy(), quantity_strategy())
            .prop_map(|(product, quantity)| CartAction::Add { product, quantity }),
        2 => id_strategy().prop_map(|id| CartAction::Remove { id }),
        2 => (id_strategy(), -5i64..=20)
            .prop_map(|(id, quantity)| CartAction::SetQuantity { id, quantity }),
        1 => Just(CartAction::Clear),
    ]
}

fn state_strategy() -> impl Strategy<Value = CartState> {
    prop::collection::vec(action_strategy(), 0..30)
        .prop_map(|actions| actions.iter().fold(CartState::empty(), |s, a| reduce(&s, a)))
}

fn assert_totals_derived(state: &CartState) -> Result<(), TestCaseError> {
    let items: u64 = state.entries().iter().map(|e| u64::from(e.quantity)).sum();
    let price: Money = state
        .entries()
        .iter()
        .map(|e| e.unit_price.multiply_quantity(e.quantity))
        .sum();

    prop_assert_eq!(state.total_items(), items);
    prop_assert_eq!(state.total_price(), price);
    Ok(())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Same (state, action) always yields the same next state.
    #[test]
    fn prop_reduce_is_deterministic(state in state_strategy(), action in action_strategy()) {
        let first = reduce(&state, &action);
        let second = reduce(&state, &action);
        prop_assert_eq!(first, second);
    }

    /// Totals equal the aggregates of the entries after every single step.
    #[test]
    fn prop_totals_always_derived(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut state = CartState::empty();
        assert_totals_derived(&state)?;

        for action in &actions {
            state = reduce(&state, action);
            assert_totals_derived(&state)?;
        }
    }

    /// No reachable entry ever holds a zero quantity, and ids stay unique.
    #[test]
    fn prop_entries_positive_and_unique(state in state_strategy()) {
        let mut seen = std::collections::HashSet::new();
        for entry in state.entries() {
            prop_assert!(entry.quantity >= 1);
            prop_assert!(seen.insert(entry.id.clone()), "duplicate id {}", entry.id);
        }
    }

    /// Removing an id that is not in the cart leaves the content unchanged.
    #[test]
    fn prop_remove_absent_is_noop(state in state_strategy()) {
        let next = reduce(&state, &CartAction::Remove { id: "absent".to_string() });
        prop_assert_eq!(next, state);
    }

    /// Add(P, q1) then Add(P, q2) equals Add(P, q1 + q2) on an empty cart.
    #[test]
    fn prop_add_is_additive(product in product_strategy(), q1 in 1i64..=100, q2 in 1i64..=100) {
        let add = |q: i64| CartAction::Add {
            product: product.clone(),
            quantity: Quantity::new(q).unwrap(),
        };

        let twice = reduce(&reduce(&CartState::empty(), &add(q1)), &add(q2));
        let once = reduce(&CartState::empty(), &add(q1 + q2));

        prop_assert_eq!(twice.entries().len(), 1);
        prop_assert_eq!(twice, once);
    }

    /// SetQuantity with zero or a negative value behaves exactly like Remove.
    #[test]
    fn prop_zero_quantity_collapses_to_remove(
        state in state_strategy(),
        id in id_strategy(),
        quantity in -100i64..=0,
    ) {
        let removed = reduce(&state, &CartAction::Remove { id: id.clone() });
        let zeroed = reduce(&state, &CartAction::SetQuantity { id, quantity });
        prop_assert_eq!(zeroed, removed);
    }

    /// Clear always produces the empty cart.
    #[test]
    fn prop_clear_resets_fully(state in state_strategy()) {
        let cleared = reduce(&state, &CartAction::Clear);
        prop_assert!(cleared.entries().is_empty());
        prop_assert_eq!(cleared.total_items(), 0);
        prop_assert!(cleared.total_price().is_zero());
    }

    /// Adding a new product appends it at the end; existing entries keep their slots.
    #[test]
    fn prop_add_preserves_order(state in state_strategy(), product in product_strategy()) {
        let next = reduce(&state, &CartAction::Add { product: product.clone(), quantity: Quantity::ONE });

        let before: Vec<&str> = state.entries().iter().map(|e| e.id.as_str()).collect();
        let after: Vec<&str> = next.entries().iter().map(|e| e.id.as_str()).collect();

        if state.contains(product.id()) {
            prop_assert_eq!(after, before);
        } else {
            prop_assert_eq!(&after[..before.len()], &before[..]);
            prop_assert_eq!(after.last().copied(), Some(product.id()));
        }
    }
}

// =============================================================================
// Literal Scenario
// =============================================================================

#[test]
fn poster_and_sticker_scenario() {
    let poster = ProductRef::new("p1", "Poster", "89.90".parse().unwrap(), "", "").unwrap();
    let sticker = ProductRef::new("p2", "Sticker", "29.90".parse().unwrap(), "", "").unwrap();

    let state = reduce(
        &CartState::empty(),
        &CartAction::Add { product: poster.clone(), quantity: Quantity::ONE },
    );
    assert_eq!(state.line_count(), 1);
    assert_eq!(state.total_items(), 1);
    assert_eq!(state.total_price(), Money::from_cents(8990));

    let state = reduce(
        &state,
        &CartAction::Add { product: poster, quantity: Quantity::new(2).unwrap() },
    );
    assert_eq!(state.line_count(), 1);
    assert_eq!(state.entry("p1").map(|e| e.quantity), Some(3));
    assert_eq!(state.total_items(), 3);
    assert_eq!(state.total_price(), Money::from_cents(26970));

    let state = reduce(
        &state,
        &CartAction::Add { product: sticker, quantity: Quantity::ONE },
    );
    assert_eq!(state.line_count(), 2);
    assert_eq!(state.total_items(), 4);
    assert_eq!(state.total_price(), Money::from_cents(29960));

    let state = reduce(&state, &CartAction::SetQuantity { id: "p1".into(), quantity: 0 });
    assert_eq!(state.line_count(), 1);
    assert!(state.contains("p2"));
    assert_eq!(state.total_items(), 1);
    assert_eq!(state.total_price(), Money::from_cents(2990));

    let state = reduce(&state, &CartAction::Clear);
    assert_eq!(state.line_count(), 0);
    assert_eq!(state.total_items(), 0);
    assert_eq!(state.total_price(), Money::zero());
}

#[test]
fn snapshot_serializes_camel_case() {
    let poster = ProductRef::new("p1", "Poster", Money::from_cents(8990), "/img/p1.jpg", "prints")
        .unwrap();
    let state = reduce(
        &CartState::empty(),
        &CartAction::Add { product: poster, quantity: Quantity::new(2).unwrap() },
    );

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["totalItems"], 2);
    assert_eq!(json["totalPrice"], 17980);
    assert_eq!(json["entries"][0]["unitPrice"], 8990);
    assert_eq!(json["entries"][0]["quantity"], 2);
}
