//! Application state - Dependency injection container.
//!
//! Provides handlers with the validator and runtime configuration.

use std::sync::Arc;

use crate::config::Config;
use crate::services::{PasswordValidator, PolicyValidator};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Password validator
    pub validator: Arc<dyn PasswordValidator>,
    /// Runtime configuration
    pub config: Config,
}

impl AppState {
    /// Create application state backed by the production policy.
    pub fn from_config(config: Config) -> Self {
        Self::new(Arc::new(PolicyValidator::new()), config)
    }

    /// Create application state with a manually injected validator.
    pub fn new(validator: Arc<dyn PasswordValidator>, config: Config) -> Self {
        Self { validator, config }
    }
}
