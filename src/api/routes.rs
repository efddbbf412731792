use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{EvaluationResult, Facts};
use crate::observability::metrics::{MetricsRegistry, TimingGuard};
use crate::rules::Evaluator;

use super::form::{render_page, FormOutcome};
use super::request::{EvaluationRequest, FormSubmission};
use super::response::{
    ErrorResponse, EvaluationResponse, HealthResponse, ReadyResponse, RulesResponse,
};

/// Shared application state.
pub struct AppState {
    /// Evaluator over the rules loaded at startup
    pub evaluator: Evaluator,

    /// Request and outcome counters
    pub metrics: MetricsRegistry,

    /// Application start time
    pub start_time: Instant,

    /// Application version
    pub version: String,
}

impl AppState {
    pub fn new(evaluator: Evaluator) -> Self {
        AppState {
            evaluator,
            metrics: MetricsRegistry::new(),
            start_time: Instant::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Evaluate facts, recording latency and outcome.
    fn evaluate(&self, facts: &Facts) -> (Uuid, EvaluationResult) {
        let evaluation_id = Uuid::new_v4();

        let result = {
            let _timer = TimingGuard::new(&self.metrics);
            self.evaluator.evaluate(facts)
        };
        self.metrics.record_outcome(&result);

        info!(
            evaluation_id = %evaluation_id,
            decision = result.decision().map(|d| d.as_str()),
            rule = result.rule_name(),
            "Evaluation completed"
        );

        (evaluation_id, result)
    }
}

/// Create the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_form_page))
        .route("/evaluate", post(handle_form_submit))
        .route("/v1/scholarship/evaluate", post(handle_evaluate))
        .route("/v1/rules", get(handle_rules))
        .route("/health", get(handle_health))
        .route("/ready", get(handle_ready))
        .route("/metrics", get(handle_metrics))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle JSON evaluation requests.
async fn handle_evaluate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => {
            state.metrics.record_invalid_request();
            warn!(error = %rejection.body_text(), "Malformed evaluation request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response();
        }
    };

    let facts = match req.to_facts() {
        Ok(facts) => facts,
        Err(e) => {
            state.metrics.record_invalid_request();
            warn!(error = %e, "Rejected evaluation request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::invalid_facts(&e)),
            )
                .into_response();
        }
    };

    let (evaluation_id, result) = state.evaluate(&facts);

    (
        StatusCode::OK,
        Json(EvaluationResponse::new(evaluation_id, &result)),
    )
        .into_response()
}

/// Applicant form.
async fn handle_form_page() -> Html<String> {
    Html(render_page(&FormSubmission::initial(), None))
}

/// Form submission: evaluate and re-render the page with the outcome.
async fn handle_form_submit(
    State(state): State<Arc<AppState>>,
    body: Result<Form<FormSubmission>, FormRejection>,
) -> Response {
    let submission = match body {
        Ok(Form(submission)) => submission,
        Err(rejection) => {
            state.metrics.record_invalid_request();
            warn!(error = %rejection.body_text(), "Unreadable form submission");
            let outcome = FormOutcome::Unreadable(rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Html(render_page(&FormSubmission::initial(), Some(&outcome))),
            )
                .into_response();
        }
    };

    let outcome = match submission.to_facts() {
        Ok(facts) => FormOutcome::Evaluated(state.evaluate(&facts).1),
        Err(e) => {
            state.metrics.record_invalid_request();
            warn!(error = %e, "Rejected form submission");
            FormOutcome::Invalid(e)
        }
    };

    Html(render_page(&submission, Some(&outcome))).into_response()
}

/// Loaded rules.
async fn handle_rules(State(state): State<Arc<AppState>>) -> Response {
    let rules = state.evaluator.rules();

    Json(RulesResponse {
        count: rules.len(),
        rules,
    })
    .into_response()
}

/// Health check endpoint.
async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        rule_count: state.evaluator.rule_count(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// Readiness check endpoint.
async fn handle_ready(State(state): State<Arc<AppState>>) -> Response {
    let rules = state.evaluator.rule_count();

    if rules == 0 {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new("No rules loaded", "NOT_READY")),
        )
            .into_response();
    }

    (StatusCode::OK, Json(ReadyResponse { ready: true, rules })).into_response()
}

/// Metrics endpoint (Prometheus format).
async fn handle_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let metrics = format!(
        r#"# HELP scholarship_uptime_seconds Application uptime in seconds
# TYPE scholarship_uptime_seconds counter
scholarship_uptime_seconds {}

# HELP scholarship_rules Number of rules loaded
# TYPE scholarship_rules gauge
scholarship_rules {}

{}"#,
        state.start_time.elapsed().as_secs(),
        state.evaluator.rule_count(),
        state.metrics.to_prometheus(),
    );

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}
