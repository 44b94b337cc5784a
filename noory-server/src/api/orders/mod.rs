//! POS Order API Module

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::open))
        .route("/{id}", get(handler::get_by_id))
        .route(
            "/{id}/lines",
            post(handler::add_line).delete(handler::clear_lines),
        )
        .route("/{id}/lines/{line_id}", delete(handler::remove_line))
        .route("/{id}/settle", post(handler::settle))
}
