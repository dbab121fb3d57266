use axum::{Json, extract::State, response::{IntoResponse, Response}};
use std::sync::Arc;
use std::time::Instant;

use crate::error::SpinError;
use crate::metrics::{PRIZES_AWARDED, SPIN_LATENCY, SPIN_REQUESTS, SPINS_GRANTED, SPINS_RATE_LIMITED};
use crate::models::{SpinRequest, SpinResponse};
use crate::service;
use crate::state::AppState;

// post handler - takes the clock once, hands the rest to the service
pub async fn spin_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    SPIN_REQUESTS.inc();
    let start_time = Instant::now();

    // tolerate any JSON shape: a body without a userId string is a missing
    // userId, not a 4xx
    let request: SpinRequest = serde_json::from_value(payload).unwrap_or_default();

    let now_ms = chrono::Utc::now().timestamp_millis();
    let result = service::spin(&state, request.user_id.as_deref(), now_ms).await;

    SPIN_LATENCY.observe(start_time.elapsed().as_secs_f64());

    match result {
        Ok(prize) => {
            SPINS_GRANTED.inc();
            PRIZES_AWARDED.with_label_values(&[prize]).inc();
            Json(SpinResponse { prize }).into_response()
        }
        Err(err) => {
            if err == SpinError::RateLimited {
                SPINS_RATE_LIMITED.inc();
            }
            err.into_response()
        }
    }
}
