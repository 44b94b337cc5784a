//! Staff API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use shared::models::{StaffCreate, StaffMember, StaffUpdate};

/// GET /api/staff - 员工列表
pub async fn list(State(state): State<ServerState>) -> Json<Vec<StaffMember>> {
    Json(state.rota.staff())
}

/// GET /api/staff/:id - 获取单个员工
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<StaffMember>> {
    Ok(Json(state.rota.get_staff(&id)?))
}

/// POST /api/staff - 创建员工
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<StaffMember>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.role, "role", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.avatar, "avatar", MAX_URL_LEN)?;
    Ok(Json(state.rota.create_staff(payload)))
}

/// PUT /api/staff/:id - 更新员工 (含状态: jobbar/rast/ledig)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StaffUpdate>,
) -> AppResult<Json<StaffMember>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(role) = &payload.role {
        validate_required_text(role, "role", MAX_SHORT_TEXT_LEN)?;
    }
    Ok(Json(state.rota.update_staff(&id, payload)?))
}

/// DELETE /api/staff/:id - 删除员工 (连带其排班)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.rota.remove_staff(&id)?;
    Ok(Json(true))
}
