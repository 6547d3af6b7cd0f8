use crate::simulation::SimulationState;
use axum::extract::State;
use std::sync::Arc;

/// Read-only surface over the memoized result, every route is an idempotent
/// GET and every route triggers the lazy load on first use
pub fn router(state: Arc<SimulationState>) -> axum::Router {
    axum::Router::new()
        .route("/data", axum::routing::get(data))
        .route("/positions", axum::routing::get(positions))
        .route("/events", axum::routing::get(events))
        .route("/metadata", axum::routing::get(metadata))
        .with_state(state)
}

async fn data(
    State(state): State<Arc<SimulationState>>,
) -> Result<axum::response::Json<common::SimulationData>, axum::http::StatusCode> {
    let data = load(&state).await?;

    Ok(axum::response::Json(data.as_ref().clone()))
}

async fn positions(
    State(state): State<Arc<SimulationState>>,
) -> Result<axum::response::Json<Vec<common::Snapshot>>, axum::http::StatusCode> {
    let data = load(&state).await?;

    Ok(axum::response::Json(data.positions.clone()))
}

async fn events(
    State(state): State<Arc<SimulationState>>,
) -> Result<axum::response::Json<Vec<common::KillEvent>>, axum::http::StatusCode> {
    let data = load(&state).await?;

    Ok(axum::response::Json(data.events.clone()))
}

async fn metadata(
    State(state): State<Arc<SimulationState>>,
) -> Result<axum::response::Json<common::Metadata>, axum::http::StatusCode> {
    let data = load(&state).await?;

    Ok(axum::response::Json(data.metadata.clone()))
}

async fn load(
    state: &SimulationState,
) -> Result<Arc<common::SimulationData>, axum::http::StatusCode> {
    state.data().await.map_err(|e| {
        tracing::error!("Loading simulation data: {:?}", e);
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    })
}
