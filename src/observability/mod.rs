pub mod metrics;
pub mod tracing;

pub use self::metrics::MetricsRegistry;
pub use self::tracing::init_tracing;
