use std::time::Duration;

use axum::extract::State;

use crate::shell::state::AppState;

/// Simulated downstream latency. Fixed on purpose; not configurable.
pub const WORK_LATENCY: Duration = Duration::from_millis(100);

/// Logs, then parks this request's task for [`WORK_LATENCY`] before answering.
///
/// The delay is an async timer, so the runtime worker keeps serving other
/// requests while this one waits.
pub async fn handle(State(state): State<AppState>) -> &'static str {
    tracing::info!("{}", state.flavor.work_log());
    tokio::time::sleep(WORK_LATENCY).await;
    state.flavor.work_body()
}
