use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Histogram, register_counter, register_counter_vec, register_histogram,
};

lazy_static! {
    pub static ref SPIN_REQUESTS: Counter =
        register_counter!("wheel_spin_requests_total", "Total spin requests received").unwrap();
    pub static ref SPINS_GRANTED: Counter =
        register_counter!("wheel_spins_granted_total", "Spins that returned a prize").unwrap();
    pub static ref SPINS_RATE_LIMITED: Counter = register_counter!(
        "wheel_spins_rate_limited_total",
        "Spin requests rejected by the cooldown guard"
    )
    .unwrap();
    pub static ref PRIZES_AWARDED: CounterVec = register_counter_vec!(
        "wheel_prizes_awarded_total",
        "Prizes awarded, by prize name",
        &["prize"]
    )
    .unwrap();
    pub static ref SPIN_LATENCY: Histogram = register_histogram!(
        "wheel_spin_latency_seconds",
        "Spin request latency in seconds"
    )
    .unwrap();
}
