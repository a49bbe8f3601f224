//! API middleware.

mod panic;

pub use panic::{catch_panic_layer, panic_response, PanicHandler};
