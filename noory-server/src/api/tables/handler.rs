//! Dining Table API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use shared::models::TableView;

/// GET /api/tables - 桌台地图 (含占用情况)
///
/// Tables are derived from the configured range, not stored; each entry
/// carries its active occupant, if any.
pub async fn floor_map(State(state): State<ServerState>) -> Json<Vec<TableView>> {
    Json(state.bookings.floor_map())
}
