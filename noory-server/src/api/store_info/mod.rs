//! Store Info API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Store info router
pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/store-info",
        get(handler::get_info).put(handler::update_info),
    )
}
