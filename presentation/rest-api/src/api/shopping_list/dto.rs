use poem_openapi::Object;

use business::domain::shared::format::format_date_br;
use business::domain::shopping_list::model::{ListWithItems, ShoppingList};
use business::domain::shopping_list::services::{is_over_budget, remaining_balance, total_expense};

use crate::api::shopping_item::dto::ShoppingItemResponse;

#[derive(Debug, Clone, Object)]
pub struct CurrentListResponse {
    /// Current list identifier
    pub id: String,
    pub name: String,
    /// Declared budget for this purchase
    pub balance: String,
    pub items: Vec<ShoppingItemResponse>,
    /// Σ quantity · unit_price over the items
    pub total_expense: String,
    /// balance − total_expense; negative when over budget
    pub remaining_balance: String,
    pub is_over_budget: bool,
}

impl From<ListWithItems> for CurrentListResponse {
    fn from(snapshot: ListWithItems) -> Self {
        let total = total_expense(&snapshot.items);
        let remaining = remaining_balance(&snapshot.list.balance, &snapshot.items);
        let over_budget = is_over_budget(&snapshot.list.balance, &snapshot.items);

        Self {
            id: snapshot.list.id.to_string(),
            name: snapshot.list.name,
            balance: snapshot.list.balance.with_scale(2).to_string(),
            items: snapshot.items.into_iter().map(|i| i.into()).collect(),
            total_expense: total.with_scale(2).to_string(),
            remaining_balance: remaining.with_scale(2).to_string(),
            is_over_budget: over_budget,
        }
    }
}

impl From<ShoppingList> for CurrentListResponse {
    fn from(list: ShoppingList) -> Self {
        Self::from(ListWithItems {
            list,
            items: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct HistoryRecordResponse {
    /// Record identifier
    pub id: String,
    pub list_name: String,
    /// Seal timestamp, dd/MM/yyyy HH:mm
    pub date: String,
    /// `pendente` or `concluída`
    pub status: String,
    pub items: Vec<ShoppingItemResponse>,
    /// Snapshotted at seal time; never recomputed
    pub total: String,
    /// Budget that was declared when the list was sealed
    pub balance_at_time: String,
}

impl From<ListWithItems> for HistoryRecordResponse {
    fn from(record: ListWithItems) -> Self {
        Self {
            id: record.list.id.to_string(),
            list_name: record.list.name,
            date: format_date_br(&record.list.date),
            status: record.list.status.to_string(),
            items: record.items.into_iter().map(|i| i.into()).collect(),
            total: record.list.total.with_scale(2).to_string(),
            balance_at_time: record.list.balance.with_scale(2).to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SealListRequest {
    /// Name identifying the purchase in the history
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct SealedListResponse {
    /// The record that entered the history
    pub record: HistoryRecordResponse,
    /// The fresh empty current list that replaced it
    pub current: CurrentListResponse,
}

#[derive(Debug, Clone, Object)]
pub struct ResumeListRequest {
    /// Required when the current list still has items; confirms discarding
    /// them.
    #[oai(default)]
    pub confirm: bool,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateBalanceRequest {
    /// New budget as a decimal string, e.g. "150.00"
    pub balance: String,
}
