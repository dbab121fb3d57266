use std::sync::Arc;

use crate::prizes::PrizeTable;
use crate::rate_limit::RateLimiter;
use crate::store::EligibilityStore;

// app's shared state
pub struct AppState {
    pub prizes: PrizeTable,
    pub rate_limiter: RateLimiter,
    pub store: Arc<dyn EligibilityStore>,
}
