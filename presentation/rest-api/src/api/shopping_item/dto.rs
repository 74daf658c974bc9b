use poem_openapi::Object;

use business::domain::shopping_item::model::ShoppingItem;

#[derive(Debug, Clone, Object)]
pub struct ShoppingItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Units to buy (must be positive)
    pub quantity: u32,
    /// Price per unit as a decimal string, e.g. "3.50"
    pub unit_price: String,
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Item name
    pub name: String,
    /// Units to buy
    pub quantity: u32,
    /// Price per unit
    pub unit_price: String,
    /// quantity · unit_price
    pub line_total: String,
}

impl From<ShoppingItem> for ShoppingItemResponse {
    fn from(item: ShoppingItem) -> Self {
        let line_total = item.line_total();
        Self {
            id: item.id.to_string(),
            name: item.name,
            quantity: item.quantity,
            unit_price: item.unit_price.with_scale(2).to_string(),
            line_total: line_total.with_scale(2).to_string(),
        }
    }
}
