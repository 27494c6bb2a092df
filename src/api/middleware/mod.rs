//! API middleware components

pub mod basic_auth;
pub mod logging;
pub mod metrics;

pub use basic_auth::{parse_basic_credentials, RequireBasicAuth};
pub use logging::logging_middleware;
pub use self::metrics::metrics_middleware;
