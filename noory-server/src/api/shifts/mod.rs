//! Shift API Module

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

/// Shift router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/shifts", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", delete(handler::delete))
}
