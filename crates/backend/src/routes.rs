use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Configure all application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/adm/sales/search", post(handlers::a001_sales::search))
        .route(
            "/adm/sales/search/detail",
            post(handlers::a001_sales::detail),
        )
        .route(
            "/adm/sales/check/ticket",
            post(handlers::a001_sales::check_ticket),
        )
        .route(
            "/adm/account/toggle-status",
            post(handlers::a001_sales::toggle_status),
        )
}
