//! POS Order Model (nota)

use serde::{Deserialize, Serialize};

/// Order lifecycle: open on the table, then paid. Paid orders are kept as
/// the sales ledger for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Paid,
}

/// One line on an order. Name and price are snapshots taken when the line
/// was added; later menu edits never re-price an existing line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub line_id: String,
    pub menu_item_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub table: String,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    /// Unix millis
    pub opened_at: i64,
    /// Unix millis, set when the order is settled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<i64>,
}
