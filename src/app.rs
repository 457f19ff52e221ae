use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/navigate", post(handlers::navigate_form))
        .route("/onboarding", post(handlers::onboarding_form))
        .route("/cognitive-setup", post(handlers::cognitive_setup_form))
        .route("/habit/complete", post(handlers::complete_form))
        .route("/habit/incomplete", post(handlers::incomplete_form))
        .route("/mood", post(handlers::mood_form))
        .route("/reflection", post(handlers::reflection_form))
        .route("/api/session", get(handlers::get_session))
        .route("/api/session/reset", post(handlers::reset_session))
        .route("/api/page", post(handlers::set_page))
        .route("/api/habit", post(handlers::set_habit))
        .route("/api/onboarding", post(handlers::onboarding))
        .route("/api/cognitive-setup", post(handlers::cognitive_setup))
        .route("/api/blocker", post(handlers::set_blocker))
        .route("/api/mood", post(handlers::set_mood))
        .route("/api/journal", post(handlers::set_journal))
        .route("/api/habit/complete", post(handlers::complete_habit))
        .route("/api/habit/incomplete", post(handlers::incomplete_habit))
        .route(
            "/api/reflection",
            get(handlers::get_reflection).post(handlers::submit_reflection),
        )
        .route("/api/insights", get(handlers::get_insights))
        .route("/api/presets", get(handlers::get_presets))
        .with_state(state)
}
