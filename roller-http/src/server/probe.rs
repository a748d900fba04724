use super::AppState;
use crate::readiness::State as Lifecycle;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

/// A roll other services issue against this one, with its importance
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relation {
    name: String,
    arg: String,
    priority: u8,
}

impl Relation {
    fn new(name: &str, arg: &str, priority: u8) -> Self {
        Relation {
            name: name.to_owned(),
            arg: arg.to_owned(),
            priority,
        }
    }
}

pub(crate) fn default_relations() -> Vec<Relation> {
    vec![
        Relation::new("primary", "roll=5d1", 1),
        Relation::new("secondary", "roll=7d1", 1),
        Relation::new("ancillary", "roll=9d1", 2),
        Relation::new("notImportant", "roll=11d1", 3),
    ]
}

#[derive(Serialize)]
struct HealthResponse {
    response: u16,
}

#[derive(Serialize)]
struct ReadinessResponse {
    state: Lifecycle,
}

pub(crate) async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json([HealthResponse {
            response: StatusCode::OK.as_u16(),
        }]),
    )
}

pub(crate) async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let lifecycle = state.readiness.state();
    let status = match lifecycle {
        Lifecycle::Ready => StatusCode::OK,
        Lifecycle::Starting | Lifecycle::ShuttingDown => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json([ReadinessResponse { state: lifecycle }]))
}

pub(crate) async fn relations(State(state): State<AppState>) -> Json<Vec<Relation>> {
    Json(state.relations.to_vec())
}

pub(crate) async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
