use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::demo::use_cases::root::inbound::http as root_http;
use crate::modules::demo::use_cases::work::inbound::http as work_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_http::handle))
        .route("/work", get(work_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
