use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{prompts, runs, settings, system};
use super::state::AppState;

/// Builds the full router over `state`
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(system::health_check))
        // Cards
        .route("/api/prompts", get(prompts::list_prompts))
        .route("/api/prompts/:id", get(prompts::get_prompt))
        .route("/api/prompts/:id/variables", put(prompts::update_variables))
        .route("/api/prompts/:id/copy", post(prompts::copy_prompt))
        .route("/api/prompts/:id/seen", post(prompts::mark_seen))
        .route("/api/prompts/:id/expand", post(prompts::toggle_expanded))
        // Runs
        .route("/api/prompts/:id/run", post(runs::run_prompt))
        .route("/api/prompts/:id/cancel", post(runs::cancel_run))
        .route("/api/prompts/:id/response", delete(runs::clear_response))
        .route("/api/prompts/:id/response/copy", post(runs::copy_response))
        .route(
            "/api/prompts/:id/response/code-blocks",
            get(runs::list_code_blocks),
        )
        .route(
            "/api/prompts/:id/response/code-blocks/:index/copy",
            post(runs::copy_code_block),
        )
        .route("/api/prompts/:id/events", get(runs::card_events))
        // Settings and language
        .route(
            "/api/settings",
            get(settings::get_settings).put(settings::save_settings),
        )
        .route(
            "/api/locale",
            get(system::get_locale).put(system::set_locale),
        )
        .route("/api/locale/toggle", post(system::toggle_locale))
        .route("/api/messages", get(system::get_messages))
        .route("/api/notice", get(system::get_notice))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
