//! Password Validator - HTTP password policy service
//!
//! Exposes `POST /api/v1/password`, which answers whether a candidate
//! password satisfies a fixed set of strength rules.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The password policy rules
//! - **services**: Validator trait and its production implementation
//! - **api**: HTTP handlers, extractors, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Check a password
//! curl -X POST 'http://localhost:3000/api/v1/password?password=Ab1%40efghi'
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{validate, Rule};
pub use errors::{AppError, AppResult};
pub use services::{PasswordValidator, PolicyValidator};
pub use types::Verdict;
