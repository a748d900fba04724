use super::AppState;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use opentelemetry::trace::TraceContextExt;
use roller_lib::solver::Solver;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::info;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Rolled when the request doesn't name a roll, always `11`
const DEFAULT_ROLL: &str = "11d1";

#[derive(Debug, Deserialize)]
pub(crate) struct RollQuery {
    roll: Option<String>,
}

#[derive(Debug, Serialize)]
struct RollResponse {
    request: String,
    result: u64,
    audit: String,
    traceid: String,
}

#[derive(Debug, Serialize)]
struct RollError {
    error: String,
    offending: String,
}

fn trace_id(span: &Span) -> String {
    span.context().span().span_context().trace_id().to_string()
}

#[tracing::instrument(
    name = "perform_roll",
    skip_all,
    fields(
        roll.request = tracing::field::Empty,
        roll.result = tracing::field::Empty,
        roll.audit = tracing::field::Empty,
    )
)]
pub(crate) async fn roll(State(state): State<AppState>, Query(query): Query<RollQuery>) -> Response {
    let request = match query.roll {
        Some(roll) if !roll.is_empty() => roll,
        _ => DEFAULT_ROLL.to_owned(),
    };
    let span = Span::current();
    span.record("roll.request", request.as_str());

    let solver = match Solver::new(&request) {
        Ok(solver) => solver,
        Err(err) => {
            debug!(roll.request = %request, "Rejected `{}`", err);
            let body = RollError {
                error: err.reason().to_owned(),
                offending: err.offending().to_owned(),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let result = state.entropy.solve(&solver);
    span.record("roll.result", result.get_total());
    span.record("roll.audit", result.get_description());
    info!(roll.audit = result.get_description(), "roll performed");

    Json([RollResponse {
        request,
        result: result.get_total(),
        audit: result.get_description().to_owned(),
        traceid: trace_id(&span),
    }])
    .into_response()
}
