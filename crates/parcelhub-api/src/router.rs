//! Route definitions for the ParcelHub HTTP API.
//!
//! Parcel routes are mounted under `/api/parcels`. The detail, update and
//! delete operations share one path: `GET` reads the segment as a numeric
//! id, `PUT` and `DELETE` read it as a parcel number. Unknown paths and
//! unsupported methods answer in the uniform failure shape.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .nest("/parcels", parcel_routes())
        .route("/health", get(handlers::health::health))
        .method_not_allowed_fallback(handlers::method_not_allowed);

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

fn parcel_routes() -> Router<AppState> {
    Router::new()
        .route("/list", get(handlers::parcel::list_parcels))
        .route("/create", post(handlers::parcel::create_parcel))
        .route(
            "/{key}",
            get(handlers::parcel::get_parcel)
                .put(handlers::parcel::update_parcel)
                .delete(handlers::parcel::delete_parcel),
        )
        .method_not_allowed_fallback(handlers::method_not_allowed)
}
