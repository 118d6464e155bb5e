//! HTTP路由handlers

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    middleware,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::Value;
use taskwise_core::api::{analyze_tasks, generate_schedule, tasks_from_body};
use tower_http::services::ServeDir;

use crate::http::{
    middleware::{create_cors_layer, request_logger},
    models::*,
    state::AppState,
};

/// 创建所有路由（不含中间件）
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.http_server.static_dir.clone();
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/generate-schedule", post(generate_schedule_handler))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// 路由 + 中间件（CORS按配置启用）
pub fn build_app(state: AppState) -> Router {
    let cors = state.config.http_server.cors;
    let router = create_router(state).layer(middleware::from_fn(request_logger));
    if cors {
        router.layer(create_cors_layer())
    } else {
        router
    }
}

/// Browsers that post without a JSON content type, and clients that send an
/// empty body, get an empty task list; syntactically broken JSON is a client
/// error.
fn request_body(headers: &HeaderMap, body: &Bytes) -> Result<Value, HttpServerError> {
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    match Json::<Value>::from_bytes(body) {
        Ok(Json(v)) => Ok(v),
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejecting request body");
            Err(HttpServerError::InvalidRequest(rejection.body_text()))
        }
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// POST /analyze - 为未完成任务分配优先级
async fn analyze_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Bytes,
) -> Result<Json<AnalyzeResponse>, HttpServerError> {
    let body = request_body(&headers, &payload)?;
    let tasks = tasks_from_body(&body);
    let today = Utc::now().date_naive();

    let assignments =
        analyze_tasks(state.completion.as_ref(), &state.config, &tasks, today).await?;

    Ok(Json(AnalyzeResponse { assignments }))
}

/// POST /generate-schedule - 生成每日日程（纯文本）
async fn generate_schedule_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Bytes,
) -> Result<Json<ScheduleResponse>, HttpServerError> {
    let body = request_body(&headers, &payload)?;
    let tasks = tasks_from_body(&body);

    let reply = generate_schedule(state.completion.as_ref(), &state.config, &tasks).await?;

    Ok(Json(ScheduleResponse { reply }))
}

/// GET /health - 健康检查
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.config.completion.model.clone(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
