use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use portfolio_pricing::contact::{contact_router, ContactRelay, ContactService};
use portfolio_pricing::error::AppError;
use portfolio_pricing::pricing::{
    format_cost, format_days, EstimatorForm, EstimatorInput, EstimatorSession, LineItem,
    PricingCard, QuizForm, QuizInput, QuizSession, ScoreComponent, ScoreTable, Tier,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub(crate) const DEFAULT_MESSAGE_PLACEHOLDER: &str = "Tell me about your project...";

#[derive(Debug, Serialize)]
pub(crate) struct EstimateResponse {
    pub(crate) input: EstimatorInput,
    pub(crate) cost: u32,
    pub(crate) cost_display: String,
    pub(crate) days: u32,
    pub(crate) days_display: String,
    pub(crate) recommended_plan: Tier,
    pub(crate) plan_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) maintenance_monthly: Option<u32>,
    pub(crate) line_items: Vec<LineItem>,
    pub(crate) breakdown: String,
    pub(crate) cards: Vec<PricingCard>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuizResponse {
    pub(crate) recommendation: Tier,
    pub(crate) plan_label: &'static str,
    pub(crate) scores: ScoreTable,
    pub(crate) components: Vec<ScoreComponent>,
    pub(crate) cards: Vec<PricingCard>,
    pub(crate) message_placeholder: String,
}

pub(crate) fn with_pricing_routes<R>(contact: Arc<ContactService<R>>) -> axum::Router
where
    R: ContactRelay + 'static,
{
    contact_router(contact)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/estimate", axum::routing::post(estimate_endpoint))
        .route("/api/v1/quiz", axum::routing::post(quiz_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn estimate_endpoint(
    Json(form): Json<EstimatorForm>,
) -> Result<Json<EstimateResponse>, AppError> {
    let input = EstimatorInput::try_from(form)?;
    let session = EstimatorSession::new(input);
    let output = session.output().clone();
    debug!(cost = output.cost, days = output.days, plan = %output.recommended_plan, "estimate computed");

    Ok(Json(EstimateResponse {
        input: session.input().clone(),
        cost: output.cost,
        cost_display: format_cost(output.cost),
        days: output.days,
        days_display: format_days(output.days),
        recommended_plan: output.recommended_plan,
        plan_label: output.recommended_plan.label(),
        maintenance_monthly: output.maintenance_monthly,
        line_items: output.line_items,
        breakdown: output.breakdown,
        cards: session.cards().cards().to_vec(),
    }))
}

pub(crate) async fn quiz_endpoint(
    Json(form): Json<QuizForm>,
) -> Result<Json<QuizResponse>, AppError> {
    let input = QuizInput::try_from(form)?;
    let mut session = QuizSession::new(DEFAULT_MESSAGE_PLACEHOLDER);
    let output = session.submit(&input).clone();
    debug!(plan = %output.recommendation, "quiz scored");

    Ok(Json(QuizResponse {
        recommendation: output.recommendation,
        plan_label: output.recommendation.label(),
        scores: output.scores,
        components: output.components,
        cards: session.cards().cards().to_vec(),
        message_placeholder: session.placeholder().current().to_string(),
    }))
}
