//! Validation service - Applies the password policy on behalf of the API.
//!
//! The HTTP layer depends on the `PasswordValidator` trait only, so the
//! policy can be swapped for a test double.

use crate::domain::policy;
use crate::errors::AppResult;

/// Password validation trait for dependency injection.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordValidator: Send + Sync {
    /// Check a candidate password against the policy.
    ///
    /// `Ok(false)` is a normal rejection. `Err` is reserved for faults
    /// unrelated to the candidate itself.
    fn validate(&self, candidate: &str) -> AppResult<bool>;
}

/// Production validator backed by the fixed domain policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyValidator;

impl PolicyValidator {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordValidator for PolicyValidator {
    fn validate(&self, candidate: &str) -> AppResult<bool> {
        let violations = policy::violations(candidate);

        if violations.is_empty() {
            tracing::debug!("Password accepted");
            return Ok(true);
        }

        let failed = violations
            .iter()
            .map(|rule| rule.name())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::debug!(rules = %failed, "Password rejected");

        Ok(false)
    }
}
