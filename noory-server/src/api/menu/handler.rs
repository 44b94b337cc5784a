//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text};
use shared::models::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<MenuCategory>,
}

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(crate::utils::AppError::validation(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}

/// GET /api/menu - 菜单列表 (可按分类过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<MenuItem>> {
    let items = match query.category {
        Some(category) => state.menu.list_by_category(category),
        None => state.menu.list(),
    };
    Json(items)
}

/// GET /api/menu/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.menu.get(&id)?))
}

/// POST /api/menu - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    // Empty descriptions are fine, oversized ones are not
    if payload.description.len() > MAX_NOTE_LEN {
        return Err(crate::utils::AppError::validation("description is too long"));
    }
    validate_price(payload.price)?;
    if let Some(cost) = payload.cost_price {
        validate_price(cost)?;
    }
    Ok(Json(state.menu.create(payload)))
}

/// PUT /api/menu/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(price) = payload.price {
        validate_price(price)?;
    }
    if let Some(cost) = payload.cost_price {
        validate_price(cost)?;
    }
    Ok(Json(state.menu.update(&id, payload)?))
}

/// DELETE /api/menu/:id - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.menu.remove(&id)?;
    Ok(Json(true))
}
