//! Store Info API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use shared::models::{StoreInfo, StoreInfoUpdate};

/// GET /api/store-info - 获取餐厅信息
pub async fn get_info(State(state): State<ServerState>) -> Json<StoreInfo> {
    Json(state.store_info())
}

/// PUT /api/store-info - 更新餐厅信息
pub async fn update_info(
    State(state): State<ServerState>,
    Json(payload): Json<StoreInfoUpdate>,
) -> AppResult<Json<StoreInfo>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(address) = &payload.address {
        validate_required_text(address, "address", MAX_ADDRESS_LEN)?;
    }
    if let Some(phone) = &payload.phone {
        validate_required_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(open_hours) = &payload.open_hours {
        validate_required_text(open_hours, "openHours", MAX_SHORT_TEXT_LEN)?;
    }
    Ok(Json(state.update_store_info(payload)))
}
