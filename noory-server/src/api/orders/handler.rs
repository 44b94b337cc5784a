//! POS Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{Order, OrderStatus};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Deserialize)]
pub struct OpenRequest {
    pub table: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLineRequest {
    pub menu_item_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/orders - 订单列表 (可按状态过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Order>> {
    let orders = match query.status {
        Some(OrderStatus::Open) => state.orders.open_orders(),
        Some(OrderStatus::Paid) => state.orders.settled_orders(),
        None => state.orders.list(),
    };
    Json(orders)
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.get(&id)?))
}

/// POST /api/orders - 开台
pub async fn open(
    State(state): State<ServerState>,
    Json(payload): Json<OpenRequest>,
) -> AppResult<Json<Order>> {
    if !state.config.is_known_table(&payload.table) {
        return Err(AppError::validation(format!(
            "Unknown table: {}",
            payload.table
        )));
    }
    Ok(Json(state.orders.open(&payload.table)?))
}

/// POST /api/orders/:id/lines - 点单
pub async fn add_line(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AddLineRequest>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.add_line(
        &id,
        &payload.menu_item_id,
        payload.quantity,
    )?))
}

/// DELETE /api/orders/:id/lines - 清空购物车 ("Rensa")
pub async fn clear_lines(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.clear_lines(&id)?))
}

/// DELETE /api/orders/:id/lines/:line_id - 移除单行
pub async fn remove_line(
    State(state): State<ServerState>,
    Path((id, line_id)): Path<(String, String)>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.remove_line(&id, &line_id)?))
}

/// POST /api/orders/:id/settle - 结账
pub async fn settle(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.settle(&id)?))
}
