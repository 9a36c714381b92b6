// tinker-api: Async Rust client for the Tinker Space Command telemetry API

pub mod client;
pub mod error;
pub mod operation;
pub mod transport;

pub use client::ApiClient;
pub use error::Error;
pub use operation::{
    ApiClientConfig, DEFAULT_BASE_URL, HttpRequestSpec, Method, ResourceOperation,
};
pub use transport::TransportConfig;
