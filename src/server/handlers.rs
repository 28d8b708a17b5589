//! HTTP handlers for the chat, calendar and admin endpoints.

use crate::error::ChatError;
use crate::models::{AddQaRequest, AddQaResponse, CalendarReply, ChatRequest, ChatResponse};
use crate::observability::{MetricsSnapshot, MetricsTracker};
use crate::services::{CalendarService, ChatService};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

/// Header carrying the admin token.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<dyn ChatService>,
    pub calendar: CalendarService,
    pub metrics: MetricsTracker,
    pub admin_token: Option<String>,
}

impl AppState {
    pub fn new(
        chat: Arc<dyn ChatService>,
        metrics: MetricsTracker,
        admin_token: Option<String>,
    ) -> Self {
        Self {
            chat,
            calendar: CalendarService::new(metrics.clone()),
            metrics,
            admin_token,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = match &self {
            ChatError::MessageTooLong { .. }
            | ChatError::BadRequest(_)
            | ChatError::InvalidPair(_) => StatusCode::BAD_REQUEST,
            ChatError::Unauthorized => StatusCode::UNAUTHORIZED,
            ChatError::DuplicateQuestion(_) => StatusCode::CONFLICT,
            ChatError::Store(e) => {
                tracing::error!("Storage failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            ok: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ChatError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        ChatError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub pairs: usize,
}

/// `POST /api/chat`
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ChatError> {
    let Json(request) = payload?;
    let reply = state.chat.ask(&request.message).await?;
    Ok(Json(reply.into()))
}

/// `POST /api/calendar/chat` and `POST /chat`
pub async fn calendar_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<CalendarReply>, ChatError> {
    let Json(request) = payload?;
    Ok(Json(CalendarReply {
        reply: state.calendar.reply(&request.message),
    }))
}

/// `POST /api/admin/qa`
pub async fn add_qa(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AddQaRequest>, JsonRejection>,
) -> Result<Json<AddQaResponse>, ChatError> {
    if let Some(expected) = &state.admin_token {
        let provided = headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());
        if provided != Some(expected.as_str()) {
            tracing::warn!("Admin request with missing or wrong token");
            return Err(ChatError::Unauthorized);
        }
    }

    let Json(request) = payload?;
    let total_pairs = state
        .chat
        .add_pair(&request.question, &request.answer)
        .await?;
    Ok(Json(AddQaResponse {
        ok: true,
        total_pairs,
    }))
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        pairs: state.chat.pair_count().await,
    })
}

/// `GET /api/stats`
pub async fn stats(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
