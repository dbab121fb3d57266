mod health;
mod index;
mod metrics;
mod spin;

pub use health::health_handler;
pub use index::index_handler;
pub use metrics::metrics_handler;
pub use spin::spin_handler;
