pub mod dtos;
pub mod handlers;
pub mod startup;

/// Name reported by the health check and used for tracing. The Flask demo
/// this replaces reported "flask-app".
pub const SERVICE_NAME: &str = "demo-service";
