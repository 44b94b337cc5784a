//! Booking API Handlers
//!
//! The seating endpoints are the three-message drag interface made HTTP:
//! `PUT /{id}/table` is the drop-on-table gesture, `DELETE /{id}/table` the
//! drop-on-waiting-list gesture. The drag token itself lives in the client.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::seating::SeatingOutcome;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_guests, validate_optional_text, validate_required_text,
};
use crate::utils::{AppResult, time};
use shared::models::{Booking, BookingCreate, BookingStatus, BookingUpdate};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Filter on booking date (YYYY-MM-DD)
    pub date: Option<String>,
    /// Filter on status
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}

#[derive(Debug, Deserialize)]
pub struct SeatRequest {
    pub table: String,
}

/// Result of a seating gesture
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingResult {
    /// "seated" | "swapped" | "unseated" | "noop"
    pub action: &'static str,
    pub booking: Booking,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The booking that was swapped onto the vacated slot, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapped_with: Option<String>,
}

impl SeatingResult {
    fn from_outcome(booking: Booking, outcome: SeatingOutcome) -> Self {
        let notice = outcome.notice();
        let (action, swapped_with) = match outcome {
            SeatingOutcome::Seated { .. } => ("seated", None),
            SeatingOutcome::Swapped { other_id, .. } => ("swapped", Some(other_id)),
            SeatingOutcome::Unseated { .. } => ("unseated", None),
            SeatingOutcome::AlreadySeated | SeatingOutcome::NotFound => ("noop", None),
        };
        Self {
            action,
            booking,
            notice,
            swapped_with,
        }
    }
}

fn validate_create(payload: &BookingCreate) -> AppResult<()> {
    validate_required_text(&payload.customer_name, "customerName", MAX_NAME_LEN)?;
    validate_guests(payload.guests)?;
    time::parse_hhmm(&payload.time)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}

fn validate_update(payload: &BookingUpdate) -> AppResult<()> {
    if let Some(name) = &payload.customer_name {
        validate_required_text(name, "customerName", MAX_NAME_LEN)?;
    }
    if let Some(guests) = payload.guests {
        validate_guests(guests)?;
    }
    if let Some(t) = &payload.time {
        time::parse_hhmm(t)?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/bookings - 获取预订列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let mut bookings = match &query.date {
        Some(date) => state.bookings.list_for_date(time::parse_date(date)?),
        None => state.bookings.list(),
    };
    if let Some(status) = query.status {
        bookings.retain(|b| b.status == status);
    }
    Ok(Json(bookings))
}

/// GET /api/bookings/unseated - 等位列表
pub async fn unseated(State(state): State<ServerState>) -> Json<Vec<Booking>> {
    Json(state.bookings.unseated())
}

/// GET /api/bookings/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    Ok(Json(state.bookings.get(&id)?))
}

/// POST /api/bookings - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    validate_create(&payload)?;
    Ok(Json(state.bookings.create(payload)))
}

/// PUT /api/bookings/:id - 更新预订
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BookingUpdate>,
) -> AppResult<Json<Booking>> {
    validate_update(&payload)?;
    Ok(Json(state.bookings.update(&id, payload)?))
}

/// DELETE /api/bookings/:id - 删除预订
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.bookings.remove(&id)?;
    Ok(Json(true))
}

/// PATCH /api/bookings/:id/status - 状态流转 (checka in / no-show / ...)
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Booking>> {
    Ok(Json(state.bookings.set_status(&id, payload.status)?))
}

/// PUT /api/bookings/:id/table - 安排座位 (拖到桌台)
pub async fn seat(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SeatRequest>,
) -> AppResult<Json<SeatingResult>> {
    let (booking, outcome) = state.bookings.seat(&id, &payload.table)?;
    Ok(Json(SeatingResult::from_outcome(booking, outcome)))
}

/// DELETE /api/bookings/:id/table - 撤掉座位 (拖回等位列表)
pub async fn unseat(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SeatingResult>> {
    let (booking, outcome) = state.bookings.unseat(&id)?;
    Ok(Json(SeatingResult::from_outcome(booking, outcome)))
}
