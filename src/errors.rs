use crate::api::ApiError;
use axum::http::StatusCode;
use tracing::error;

pub const CONNECTION_ERROR: &str = "Connection error. Please make sure the finance API is running.";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        error!("finance api call failed: {err}");
        Self::bad_gateway(CONNECTION_ERROR)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_become_bad_gateway() {
        let err = AppError::from(ApiError::Shape {
            endpoint: "/summary".into(),
            expected: "an object",
            found: "an array",
        });
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.message, CONNECTION_ERROR);
    }

    #[test]
    fn bad_request_keeps_message() {
        let err = AppError::bad_request("category is required");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "category is required");
    }
}
