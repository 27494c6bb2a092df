//! Request and response types for the HTTP API

pub mod error;
pub mod json;
pub mod response;

pub use error::ApiError;
pub use json::Json;
pub use response::ApiResponse;
