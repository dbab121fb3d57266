use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

const DEFAULT_SWEEP_THRESHOLD: usize = 10_000;
const DEFAULT_STALE_AFTER_MS: i64 = 60 * 60 * 1000;

// Per-user cooldown guard, keyed on the last accepted request time so a
// burst of rejections does not push the window forward. Entries are swept
// lazily once the table grows past a size threshold.
pub struct RateLimiter {
    entries: DashMap<String, i64>,
    cooldown_ms: i64,
    sweep_threshold: usize,
    stale_after_ms: i64,
}

impl RateLimiter {
    pub fn new(cooldown_ms: i64) -> Self {
        Self::with_limits(cooldown_ms, DEFAULT_SWEEP_THRESHOLD, DEFAULT_STALE_AFTER_MS)
    }

    pub fn with_limits(cooldown_ms: i64, sweep_threshold: usize, stale_after_ms: i64) -> Self {
        Self {
            entries: DashMap::new(),
            cooldown_ms,
            sweep_threshold,
            stale_after_ms,
        }
    }

    // Returns true if the request is admitted. Records `now_ms` only on
    // admission - a rejection leaves the previous timestamp in place.
    pub fn check_and_record(&self, user_id: &str, now_ms: i64) -> bool {
        self.sweep(now_ms);

        match self.entries.entry(user_id.to_string()) {
            Entry::Occupied(mut occupied) => {
                if now_ms - *occupied.get() < self.cooldown_ms {
                    false
                } else {
                    occupied.insert(now_ms);
                    true
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(now_ms);
                true
            }
        }
    }

    // Drop entries older than the staleness window once the table is big
    // enough to care. Amortized; correctness does not depend on it.
    fn sweep(&self, now_ms: i64) {
        if self.entries.len() > self.sweep_threshold {
            self.entries
                .retain(|_, last_ms| now_ms - *last_ms <= self.stale_after_ms);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_is_admitted() {
        let limiter = RateLimiter::new(2000);
        assert!(limiter.check_and_record("u1", 0));
    }

    #[test]
    fn second_request_within_cooldown_is_rejected() {
        let limiter = RateLimiter::new(2000);
        assert!(limiter.check_and_record("u1", 0));
        assert!(!limiter.check_and_record("u1", 1500));
    }

    #[test]
    fn rejection_does_not_reset_the_window() {
        let limiter = RateLimiter::new(2000);
        assert!(limiter.check_and_record("u1", 0));
        assert!(!limiter.check_and_record("u1", 1500));
        // measured from the accepted request at t=0, not the rejection
        assert!(limiter.check_and_record("u1", 2000));
    }

    #[test]
    fn exactly_at_cooldown_is_admitted() {
        let limiter = RateLimiter::new(2000);
        assert!(limiter.check_and_record("u1", 0));
        assert!(limiter.check_and_record("u1", 2000));
    }

    #[test]
    fn users_are_independent() {
        let limiter = RateLimiter::new(2000);
        assert!(limiter.check_and_record("u1", 0));
        assert!(limiter.check_and_record("u2", 1));
    }

    #[test]
    fn sweep_evicts_stale_entries_past_threshold() {
        let limiter = RateLimiter::with_limits(2000, 2, 1000);
        assert!(limiter.check_and_record("old1", 0));
        assert!(limiter.check_and_record("old2", 0));
        assert!(limiter.check_and_record("fresh", 5000));
        // table exceeds the threshold now; next call sweeps the stale pair
        assert!(limiter.check_and_record("newcomer", 6000));
        assert_eq!(limiter.len(), 2);
    }

    #[test]
    fn sweep_keeps_entries_within_staleness_window() {
        let limiter = RateLimiter::with_limits(2000, 1, 10_000);
        assert!(limiter.check_and_record("a", 0));
        assert!(limiter.check_and_record("b", 4000));
        assert!(limiter.check_and_record("c", 8000));
        assert_eq!(limiter.len(), 3);
    }
}
