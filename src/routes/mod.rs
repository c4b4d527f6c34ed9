use axum::{
    Router,
    http::Uri,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use crate::{error::AppError, pages, session::Session, state::AppState};

pub mod appointments;
pub mod bookings;
pub mod cart;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/appointments", appointments::router())
        .nest("/orders", orders::router())
        .nest("/bookings", bookings::router())
        .nest("/cart", cart::router())
}

/// Pages, JSON API, docs and static assets with state bound. Layers are added by the binary.
pub fn create_app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(pages::router())
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .nest_service("/static", static_dir)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(session: Session, uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return AppError::NotFound.into_response();
    }
    pages::not_found::page(session, path)
}
