use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

// Spin rejection kinds. The status scheme is deliberately uneven and is
// part of the external contract: business rejections stay on 200 with an
// `error` field the client must inspect; only throttling and internal
// faults use non-200 codes.
#[derive(Debug, PartialEq)]
pub enum SpinError {
    NoUserId,
    RateLimited,
    NotEligible,
    Internal(String), // detail is logged server-side, never sent to the client
}

impl IntoResponse for SpinError {
    fn into_response(self) -> Response {
        match self {
            SpinError::NoUserId => {
                (StatusCode::OK, Json(json!({ "error": "No userId" }))).into_response()
            }
            SpinError::NotEligible => (
                StatusCode::OK,
                Json(json!({ "error": "Spin available in 24h" })),
            )
                .into_response(),
            SpinError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": "Too many requests - wait 2 seconds" })),
            )
                .into_response(),
            SpinError::Internal(detail) => {
                tracing::error!("internal error in /spin: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Server error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn response_body(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn missing_user_is_200_with_error_body() {
        let response = SpinError::NoUserId.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_body(response).await, r#"{"error":"No userId"}"#);
    }

    #[tokio::test]
    async fn cooldown_rejection_is_200_with_error_body() {
        let response = SpinError::NotEligible.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response_body(response).await,
            r#"{"error":"Spin available in 24h"}"#
        );
    }

    #[tokio::test]
    async fn throttling_is_429() {
        let response = SpinError::RateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response_body(response).await,
            r#"{"error":"Too many requests - wait 2 seconds"}"#
        );
    }

    #[tokio::test]
    async fn internal_fault_is_generic_500() {
        let response = SpinError::Internal("draw produced garbage".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_body(response).await;
        assert_eq!(body, r#"{"error":"Server error"}"#);
        assert!(!body.contains("garbage"));
    }
}
