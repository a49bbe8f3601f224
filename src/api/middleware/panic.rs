//! Panic recovery - Turns a panicking handler into a bare 500.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;

/// Handler invoked with the payload of a caught panic.
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Layer that converts panics raised while serving a request into
/// `panic_response`.
pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_response as PanicHandler)
}

/// Log the panic payload and answer 500 without a body.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Request handler panicked: {}", detail);

    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
