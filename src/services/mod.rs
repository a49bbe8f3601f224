//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic for the API. They are exposed
//! through traits so handlers depend on abstractions.

mod validation_service;

pub use validation_service::{PasswordValidator, PolicyValidator};

#[cfg(test)]
pub use validation_service::MockPasswordValidator;
