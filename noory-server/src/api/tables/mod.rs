//! Dining Table API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Table router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/tables", get(handler::floor_map))
}
