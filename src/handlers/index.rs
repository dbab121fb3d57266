use axum::{http::header, response::IntoResponse};

const WHEEL_PAGE: &str = include_str!("../../assets/index.html");

// Serves the wheel page. Caching is disabled so clients always pick up the
// current asset.
pub async fn index_handler() -> impl IntoResponse {
    (
        [
            (
                header::CACHE_CONTROL,
                "no-store, no-cache, must-revalidate, max-age=0",
            ),
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
        ],
        WHEEL_PAGE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::{Request, StatusCode}, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn wheel_page_is_served_with_caching_disabled() {
        let app = Router::new().route("/", get(index_handler));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "no-store, no-cache, must-revalidate, max-age=0"
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }
}
