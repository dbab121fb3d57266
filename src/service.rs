use crate::error::SpinError;
use crate::state::AppState;

/// A user may spin again 24 hours after a successful spin.
pub const ELIGIBILITY_WINDOW_MS: i64 = 86_400_000;

/// Walks the spin gates for one request:
/// validate → rate-limit → eligibility → draw → persist.
///
/// `now_ms` is taken once by the caller so tests can drive the clock.
/// Two concurrent spins for the same user can both pass the eligibility
/// read before either write lands; that race is accepted and not guarded.
pub async fn spin(
    state: &AppState,
    user_id: Option<&str>,
    now_ms: i64,
) -> Result<&'static str, SpinError> {
    let user_id = match user_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(SpinError::NoUserId),
    };

    if !state.rate_limiter.check_and_record(user_id, now_ms) {
        return Err(SpinError::RateLimited);
    }

    if let Some(last_ms) = state.store.last_spin(user_id).await {
        if now_ms - last_ms < ELIGIBILITY_WINDOW_MS {
            return Err(SpinError::NotEligible);
        }
    }

    let prize = state.prizes.draw(&mut rand::thread_rng());
    if !state.prizes.contains(prize) {
        // invariant check on the draw result; do not persist a bad spin
        return Err(SpinError::Internal(format!(
            "draw returned unknown prize {prize:?}"
        )));
    }

    // best-effort: a failed durable write is logged, not surfaced
    state.store.record_spin(user_id, now_ms).await;

    Ok(prize)
}
