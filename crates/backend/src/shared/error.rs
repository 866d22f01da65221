use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contracts::shared::form_body::FormError;
use serde_json::json;
use thiserror::Error;

/// Errors of the sales endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request is not an XMLHttpRequest")]
    NotAjax,

    #[error("invalid form body: {0}")]
    Form(#[from] FormError),

    #[error("fixture store is not available")]
    StoreUnavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotAjax | ApiError::Form(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, axum::Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(ApiError::NotAjax.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Form(FormError::MissingField("account_id".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::StoreUnavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
