use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nn_core::Error;
use serde_json::json;

/// Error body returned by every handler: `{"ok": false, "error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            Error::Http(_) | Error::Feed(_) => StatusCode::BAD_GATEWAY,
            Error::UnknownFeed(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("❌ {} {}", status.as_u16(), self.0);
        (status, Json(json!({"ok": false, "error": self.0.to_string()}))).into_response()
    }
}
