use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{
        HeaderValue, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware,
    routing::get,
};
use serde::Deserialize;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{
    auth::require_secret,
    error::{ApiError, Envelope},
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ExtractParams {
    #[serde(default)]
    url: Option<String>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // Preflight and unsupported methods are answered before the secret is checked. HEAD would
    // otherwise be served by the GET handler.
    let extract_route = get(extract)
        .route_layer(middleware::from_fn_with_state(state.clone(), require_secret))
        .head(method_not_allowed)
        .options(preflight)
        .fallback(method_not_allowed);

    Router::new()
        .route("/extract", extract_route)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn extract(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExtractParams>,
) -> Result<Json<Envelope>, ApiError> {
    let url = params
        .url
        .filter(|url| !url.is_empty())
        .ok_or(ApiError::MissingUrl)?;

    let video_id = state
        .resolver
        .extract_video_id(&url)
        .map_err(ApiError::Extract)?;

    tracing::info!(name = "Resolve", video_id);

    let manifest = state
        .resolver
        .resolve_manifest(&video_id)
        .await
        .map_err(ApiError::Resolve)?;

    Ok(Json(Envelope::success(manifest)))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
