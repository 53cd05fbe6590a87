use axum::extract::State;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> &'static str {
    tracing::info!("{}", state.flavor.root_log());
    state.flavor.root_body()
}
