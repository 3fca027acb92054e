//! residencia-api
//!
//! HTTP surface for the scale catalog, scoring and patient assessments.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        // Scales (public catalog data)
        .route("/scales", get(routes::scales::list_scales))
        .route("/scales/{id}", get(routes::scales::get_scale_detail))
        .route("/scales/{id}/score", post(routes::scales::score_scale))
        .route(
            "/scales/{id}/score/text",
            post(routes::scales::score_scale_text),
        )
        // Patient assessments
        .route(
            "/patients/{patient_id}/assessments",
            get(routes::assessments::list_assessments)
                .post(routes::assessments::create_assessment),
        )
        .route(
            "/patients/{patient_id}/assessments/{id}",
            get(routes::assessments::get_assessment),
        )
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .with_state(state)
}
