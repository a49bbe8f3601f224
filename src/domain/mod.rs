//! Domain layer - Core business rules
//!
//! Pure password policy logic, independent of HTTP and configuration
//! loading. Contains the rule set and the special-character lookup.

pub mod policy;

pub use policy::{is_special_character, validate, violations, Rule};
