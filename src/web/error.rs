use crate::utils::error::{ErrorCategory, PlannerError};
use crate::web::handlers::ApiResponse;
use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("No keyword data found")]
    NotFound,

    /// 請求格式錯誤 (Content-Type、查詢字串等)，保留 axum 的狀態碼
    #[error("{message}")]
    BadRequest { status: StatusCode, message: String },

    #[error(transparent)]
    Planner(#[from] PlannerError),
}

impl From<FormRejection> for WebError {
    fn from(rejection: FormRejection) -> Self {
        WebError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        WebError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            WebError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            WebError::BadRequest { status, message } => {
                tracing::warn!("Rejected request ({}): {}", status, message);
                (*status, message.clone())
            }
            WebError::Planner(e @ PlannerError::ValidationError { .. }) => {
                tracing::warn!("Invalid request: {}", e);
                (StatusCode::BAD_REQUEST, e.user_friendly_message())
            }
            WebError::Planner(e) => {
                tracing::error!(
                    "Keyword lookup failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                let status = match e.category() {
                    ErrorCategory::Configuration | ErrorCategory::Io => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, e.user_friendly_message())
            }
        };

        (status, Json(ApiResponse::failure(msg))).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;
