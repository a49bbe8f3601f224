//! HTTP request handlers.

pub mod health_handler;
pub mod password_handler;

pub use health_handler::health_routes;
pub use password_handler::password_routes;
