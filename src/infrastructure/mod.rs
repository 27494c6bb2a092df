//! Infrastructure layer - store implementations, logging, and metrics

pub mod logging;
pub mod observability;
pub mod user;
