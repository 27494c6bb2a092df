//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use self::metrics::{
    create_metrics_router, init_metrics, record_auth_attempt, record_http_request,
    record_signup, PrometheusMetrics, UserEventOutcome,
};
