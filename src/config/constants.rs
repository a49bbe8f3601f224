//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Password Policy
// =============================================================================

/// Minimum number of characters a password must contain
pub const MIN_PASSWORD_LENGTH: usize = 9;

/// Characters accepted by the special-character rule
pub const SPECIAL_CHARACTERS: [char; 12] =
    ['!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '+'];

// =============================================================================
// HTTP Surface
// =============================================================================

/// Route of the password validation endpoint
pub const PASSWORD_ROUTE: &str = "/api/v1/password";

/// Default upper bound on candidate length accepted at the boundary
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 1024;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
