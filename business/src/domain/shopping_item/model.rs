use bigdecimal::{BigDecimal, Zero};
use uuid::Uuid;

use super::errors::ShoppingItemError;

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub list_id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

impl ShoppingItem {
    pub fn new(
        list_id: Uuid,
        name: String,
        quantity: u32,
        unit_price: BigDecimal,
    ) -> Result<Self, ShoppingItemError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ShoppingItemError::NameEmpty);
        }
        if quantity == 0 {
            return Err(ShoppingItemError::QuantityNotPositive);
        }
        if unit_price < BigDecimal::zero() {
            return Err(ShoppingItemError::PriceNegative);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            list_id,
            name,
            quantity,
            unit_price,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        list_id: Uuid,
        name: String,
        quantity: u32,
        unit_price: BigDecimal,
    ) -> Self {
        Self {
            id,
            list_id,
            name,
            quantity,
            unit_price,
        }
    }

    /// Returns an edited copy with the same identity and list ownership.
    pub fn edited(
        &self,
        name: String,
        quantity: u32,
        unit_price: BigDecimal,
    ) -> Result<Self, ShoppingItemError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ShoppingItemError::NameEmpty);
        }
        if quantity == 0 {
            return Err(ShoppingItemError::QuantityNotPositive);
        }
        if unit_price < BigDecimal::zero() {
            return Err(ShoppingItemError::PriceNegative);
        }

        Ok(Self {
            id: self.id,
            list_id: self.list_id,
            name,
            quantity,
            unit_price,
        })
    }

    /// Moves the item onto another list, keeping its identity.
    pub fn reparented(mut self, list_id: Uuid) -> Self {
        self.list_id = list_id;
        self
    }

    pub fn line_total(&self) -> BigDecimal {
        BigDecimal::from(self.quantity) * &self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn price(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    #[test]
    fn should_create_item_when_fields_valid() {
        let list_id = Uuid::new_v4();
        let item = ShoppingItem::new(list_id, "Arroz".to_string(), 2, price("3.50")).unwrap();

        assert_eq!(item.name, "Arroz");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.list_id, list_id);
    }

    #[test]
    fn should_trim_name_on_create() {
        let item =
            ShoppingItem::new(Uuid::new_v4(), "  Feijão  ".to_string(), 1, price("8")).unwrap();
        assert_eq!(item.name, "Feijão");
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = ShoppingItem::new(Uuid::new_v4(), "   ".to_string(), 1, price("1"));
        assert!(matches!(result.unwrap_err(), ShoppingItemError::NameEmpty));
    }

    #[test]
    fn should_reject_when_quantity_zero() {
        let result = ShoppingItem::new(Uuid::new_v4(), "Leite".to_string(), 0, price("4.99"));
        assert!(matches!(
            result.unwrap_err(),
            ShoppingItemError::QuantityNotPositive
        ));
    }

    #[test]
    fn should_reject_when_price_negative() {
        let result = ShoppingItem::new(Uuid::new_v4(), "Leite".to_string(), 1, price("-0.01"));
        assert!(matches!(
            result.unwrap_err(),
            ShoppingItemError::PriceNegative
        ));
    }

    #[test]
    fn should_accept_zero_price() {
        let result = ShoppingItem::new(Uuid::new_v4(), "Amostra".to_string(), 1, price("0"));
        assert!(result.is_ok());
    }

    #[test]
    fn should_preserve_identity_on_edit() {
        let item = ShoppingItem::new(Uuid::new_v4(), "Leite".to_string(), 1, price("4.99")).unwrap();
        let edited = item.edited("Leite Integral".to_string(), 3, price("5.20")).unwrap();

        assert_eq!(edited.id, item.id);
        assert_eq!(edited.list_id, item.list_id);
        assert_eq!(edited.name, "Leite Integral");
        assert_eq!(edited.quantity, 3);
    }

    #[test]
    fn should_reject_edit_with_empty_name() {
        let item = ShoppingItem::new(Uuid::new_v4(), "Leite".to_string(), 1, price("4.99")).unwrap();
        let result = item.edited("".to_string(), 1, price("4.99"));
        assert!(matches!(result.unwrap_err(), ShoppingItemError::NameEmpty));
    }

    #[test]
    fn should_compute_line_total() {
        let item = ShoppingItem::new(Uuid::new_v4(), "Leite".to_string(), 2, price("3.50")).unwrap();
        assert_eq!(item.line_total(), price("7.00"));
    }

    #[test]
    fn should_keep_identity_when_reparented() {
        let item = ShoppingItem::new(Uuid::new_v4(), "Leite".to_string(), 1, price("4.99")).unwrap();
        let id = item.id;
        let new_list = Uuid::new_v4();
        let moved = item.reparented(new_list);

        assert_eq!(moved.id, id);
        assert_eq!(moved.list_id, new_list);
    }
}
