use axum::{
    extract::rejection::JsonRejection,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use couture_utils::{log_error, CoutureError, ErrorResponse};

/// Response-side wrapper so service errors render as JSON
#[derive(Debug)]
pub struct ApiError(pub CoutureError);

impl From<CoutureError> for ApiError {
    fn from(error: CoutureError) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CoutureError::malformed_request(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            log_error!(self.0, "Request failed");
        }

        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}

pub async fn error_handling_middleware(
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_client_error() {
        tracing::debug!(%method, %path, status = status.as_u16(), "Request rejected");
    } else if status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), "Request errored");
    }

    response
}
