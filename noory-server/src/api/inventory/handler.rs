//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{InventoryItem, InventoryItemCreate, InventoryItemUpdate};

fn validate_amount(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// GET /api/inventory - 库存列表
pub async fn list(State(state): State<ServerState>) -> Json<Vec<InventoryItem>> {
    Json(state.inventory.list())
}

/// GET /api/inventory/low-stock - 低库存列表 (看板告警)
pub async fn low_stock(State(state): State<ServerState>) -> Json<Vec<InventoryItem>> {
    Json(state.inventory.low_stock())
}

/// GET /api/inventory/:id - 获取单个库存项
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InventoryItem>> {
    Ok(Json(state.inventory.get(&id)?))
}

/// POST /api/inventory - 创建库存项
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryItemCreate>,
) -> AppResult<Json<InventoryItem>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.supplier, "supplier", MAX_SHORT_TEXT_LEN)?;
    validate_amount(payload.quantity, "quantity")?;
    validate_amount(payload.min_threshold, "minThreshold")?;
    validate_amount(payload.cost_price, "costPrice")?;
    Ok(Json(state.inventory.create(payload)))
}

/// PUT /api/inventory/:id - 更新库存项
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryItemUpdate>,
) -> AppResult<Json<InventoryItem>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(quantity) = payload.quantity {
        validate_amount(quantity, "quantity")?;
    }
    if let Some(threshold) = payload.min_threshold {
        validate_amount(threshold, "minThreshold")?;
    }
    if let Some(cost) = payload.cost_price {
        validate_amount(cost, "costPrice")?;
    }
    Ok(Json(state.inventory.update(&id, payload)?))
}

/// DELETE /api/inventory/:id - 删除库存项
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.inventory.remove(&id)?;
    Ok(Json(true))
}
