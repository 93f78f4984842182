use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::healthcheck))
        .route("/api/v1/enquiries", get(handlers::list_enquiries))
        .route(
            "/api/v1/enquiries/{id}",
            delete(handlers::delete_enquiry),
        )
        .route(
            "/api/v1/demo-enquiries",
            get(handlers::list_demo_enquiries),
        )
        .route(
            "/api/v1/demo-enquiries/{id}",
            delete(handlers::delete_demo_enquiry),
        )
        .route("/api/v1/dashboard", get(handlers::get_dashboard))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
