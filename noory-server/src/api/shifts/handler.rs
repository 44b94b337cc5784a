//! Shift API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, time};
use shared::models::{ScheduledShift, ShiftCreate, ShiftDay};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub day: Option<ShiftDay>,
}

/// GET /api/shifts - 排班列表 (可按星期过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<ScheduledShift>> {
    let shifts = match query.day {
        Some(day) => state.rota.shifts_for_day(day),
        None => state.rota.shifts(),
    };
    Json(shifts)
}

/// POST /api/shifts - 添加排班
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ShiftCreate>,
) -> AppResult<Json<ScheduledShift>> {
    let starts = time::parse_hhmm(&payload.starts)?;
    let ends = time::parse_hhmm(&payload.ends)?;
    if ends <= starts {
        return Err(AppError::validation(
            "shift must end after it starts (overnight shifts are not scheduled)",
        ));
    }
    validate_optional_text(&payload.note, "note", MAX_NOTE_LEN)?;
    Ok(Json(state.rota.add_shift(payload)?))
}

/// DELETE /api/shifts/:id - 删除排班
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.rota.remove_shift(&id)?;
    Ok(Json(true))
}
