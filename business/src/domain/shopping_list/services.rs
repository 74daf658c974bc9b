use bigdecimal::{BigDecimal, Zero};

use crate::domain::shopping_item::model::ShoppingItem;

use super::model::ShoppingList;

/// Sum of `quantity · unit_price` over a list's items.
pub fn total_expense(items: &[ShoppingItem]) -> BigDecimal {
    items
        .iter()
        .fold(BigDecimal::zero(), |acc, item| acc + item.line_total())
}

/// Declared balance minus the current total expense. May be negative.
pub fn remaining_balance(balance: &BigDecimal, items: &[ShoppingItem]) -> BigDecimal {
    balance - total_expense(items)
}

/// Over-budget is presentational only; it never guards a transition.
pub fn is_over_budget(balance: &BigDecimal, items: &[ShoppingItem]) -> bool {
    remaining_balance(balance, items) < BigDecimal::zero()
}

/// Sum of the snapshotted totals over all history records, whatever their
/// status.
pub fn lifetime_spent(history: &[ShoppingList]) -> BigDecimal {
    history
        .iter()
        .fold(BigDecimal::zero(), |acc, record| acc + &record.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::shopping_list::value_objects::ListStatus;
    use bigdecimal::num_bigint::BigInt;
    use chrono::Utc;
    use proptest::prelude::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn item(quantity: u32, price: &str) -> ShoppingItem {
        ShoppingItem::new(
            Uuid::new_v4(),
            "Item".to_string(),
            quantity,
            BigDecimal::from_str(price).unwrap(),
        )
        .unwrap()
    }

    fn record(total: &str) -> ShoppingList {
        ShoppingList::from_repository(
            Uuid::new_v4(),
            UserId::new(Uuid::new_v4()),
            "Compra".to_string(),
            Utc::now(),
            BigDecimal::from_str(total).unwrap(),
            BigDecimal::zero(),
            ListStatus::Concluded,
        )
    }

    #[test]
    fn should_sum_quantity_times_unit_price() {
        let items = vec![item(2, "3.50"), item(1, "10"), item(3, "0.99")];
        assert_eq!(total_expense(&items), BigDecimal::from_str("19.97").unwrap());
    }

    #[test]
    fn should_be_zero_for_empty_collection() {
        assert_eq!(total_expense(&[]), BigDecimal::zero());
    }

    #[test]
    fn should_flag_over_budget_when_expense_exceeds_balance() {
        let items = vec![item(1, "7")];
        let balance = BigDecimal::from_str("5").unwrap();

        assert_eq!(
            remaining_balance(&balance, &items),
            BigDecimal::from_str("-2").unwrap()
        );
        assert!(is_over_budget(&balance, &items));
    }

    #[test]
    fn should_not_flag_over_budget_when_balance_covers_expense() {
        let items = vec![item(1, "7")];
        let balance = BigDecimal::from_str("10").unwrap();

        assert!(!is_over_budget(&balance, &items));
    }

    #[test]
    fn should_sum_history_totals_regardless_of_status() {
        let mut pending = record("12.30");
        pending.status = ListStatus::Pending;
        let history = vec![record("100"), pending];

        assert_eq!(
            lifetime_spent(&history),
            BigDecimal::from_str("112.30").unwrap()
        );
    }

    proptest! {
        #[test]
        fn total_matches_integer_cents_arithmetic(
            entries in proptest::collection::vec((1u32..50, 0i64..10_000), 0..20)
        ) {
            let items: Vec<ShoppingItem> = entries
                .iter()
                .map(|(quantity, cents)| {
                    ShoppingItem::new(
                        Uuid::new_v4(),
                        "Item".to_string(),
                        *quantity,
                        BigDecimal::new(BigInt::from(*cents), 2),
                    )
                    .unwrap()
                })
                .collect();

            let expected_cents: i64 = entries
                .iter()
                .map(|(quantity, cents)| i64::from(*quantity) * cents)
                .sum();

            prop_assert_eq!(
                total_expense(&items),
                BigDecimal::new(BigInt::from(expected_cents), 2)
            );
        }

        #[test]
        fn adding_an_item_moves_total_by_its_contribution(
            entries in proptest::collection::vec((1u32..50, 0i64..10_000), 0..20),
            quantity in 1u32..50,
            cents in 0i64..10_000,
        ) {
            let mut items: Vec<ShoppingItem> = entries
                .iter()
                .map(|(quantity, cents)| {
                    ShoppingItem::new(
                        Uuid::new_v4(),
                        "Item".to_string(),
                        *quantity,
                        BigDecimal::new(BigInt::from(*cents), 2),
                    )
                    .unwrap()
                })
                .collect();

            let before = total_expense(&items);
            let added = ShoppingItem::new(
                Uuid::new_v4(),
                "Extra".to_string(),
                quantity,
                BigDecimal::new(BigInt::from(cents), 2),
            )
            .unwrap();
            let contribution = added.line_total();
            items.push(added);

            prop_assert_eq!(total_expense(&items), before + contribution);
        }
    }
}
