//! Reports API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Reports router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/overview", get(handler::overview))
        .route("/weekly-sales", get(handler::weekly_sales))
        .route("/top-sellers", get(handler::top_sellers))
}
