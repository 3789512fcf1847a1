use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all progression endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::index_handler))
        .route("/health", get(handler::health_handler))
        .route("/api/catalog", get(handler::catalog_handler))
        .route("/api/leaderboard", get(handler::leaderboard_handler))
        .route("/api/users/:user_id", get(handler::get_user_handler))
        .route(
            "/api/users/:user_id/xp",
            post(handler::add_xp_handler).patch(handler::set_xp_handler),
        )
        .route(
            "/api/users/:user_id/stories",
            get(handler::list_stories_handler).post(handler::record_story_handler),
        )
        .route(
            "/api/users/:user_id/stories/:unit_key/complete",
            post(handler::complete_story_handler),
        )
        .route(
            "/api/users/:user_id/quizzes/:unit_key/submit",
            post(handler::submit_quiz_handler),
        )
        .route(
            "/api/users/:user_id/badges",
            get(handler::list_badges_handler).post(handler::award_badge_handler),
        )
        .route("/api/users/:user_id/unlocks", get(handler::unlocks_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// [`build_router`] with permissive CORS for browser clients on other
/// origins.
pub fn build_router_with_cors(state: AppState) -> Router {
    build_router(state).layer(CorsLayer::permissive())
}
