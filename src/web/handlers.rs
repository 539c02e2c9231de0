use crate::domain::model::{KeywordQuery, KeywordRecord};
use crate::utils::validation;
use crate::web::error::{WebError, WebResult};
use crate::web::AppState;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Html;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<KeywordRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn success(record: KeywordRecord) -> Self {
        Self {
            success: true,
            data: Some(record),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Deserialize)]
pub struct KeywordParams {
    #[serde(default)]
    pub q: String,
    pub language: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    form: Result<Form<AnalyzeForm>, FormRejection>,
) -> WebResult<Json<ApiResponse>> {
    let Form(form) = form?;
    tracing::info!("Analyze request: '{}'", form.keyword);
    lookup(&state, &form.keyword, None, None).await
}

pub async fn api_keyword(
    State(state): State<Arc<AppState>>,
    params: Result<Query<KeywordParams>, QueryRejection>,
) -> WebResult<Json<ApiResponse>> {
    let Query(params) = params?;
    tracing::info!("API keyword request: '{}'", params.q);
    lookup(&state, &params.q, params.language, params.location).await
}

async fn lookup(
    state: &AppState,
    keyword: &str,
    language: Option<String>,
    location: Option<String>,
) -> WebResult<Json<ApiResponse>> {
    let keyword = validation::validate_keyword(keyword)?;

    let query = KeywordQuery::new(
        keyword,
        language.unwrap_or_else(|| state.language_id.clone()),
        location.unwrap_or_else(|| state.location_id.clone()),
    );

    match state.service.lookup(&query).await? {
        Some(record) => Ok(Json(ApiResponse::success(record))),
        None => Err(WebError::NotFound),
    }
}
