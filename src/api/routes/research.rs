//! Research Route
//!
//! - GET /api/research?token=<id> - Forward a token to the research service

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ResearchQuery;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/research
///
/// Relays the research service's JSON body verbatim. The upstream status
/// is relayed too unless `upstream.propagate_status` is off, in which case
/// every upstream answer becomes a 200.
pub async fn research(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> ApiResult<Response> {
    let query = ResearchQuery::parse(raw.as_deref());
    let token = query.token().ok_or(ApiError::MissingToken)?;

    let upstream = state.upstream.research(token).await?;

    let status = if state.upstream.config().propagate_status {
        StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY)
    } else {
        StatusCode::OK
    };

    if !status.is_success() {
        tracing::info!(token = %token, status = upstream.status, "Upstream returned an error");
    }

    Ok((status, Json(upstream.body)).into_response())
}
