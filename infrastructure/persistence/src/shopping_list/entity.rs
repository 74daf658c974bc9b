use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::value_objects::ListStatus;

#[derive(Debug, FromRow)]
pub struct ShoppingListEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub list_name: String,
    pub date: DateTime<Utc>,
    pub total: BigDecimal,
    pub balance_at_time: BigDecimal,
    pub status: String,
}

impl ShoppingListEntity {
    pub fn into_domain(self) -> ShoppingList {
        ShoppingList::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.list_name,
            self.date,
            self.total,
            self.balance_at_time,
            self.status
                .parse::<ListStatus>()
                .unwrap_or(ListStatus::Concluded),
        )
    }
}
