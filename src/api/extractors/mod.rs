//! Custom request extractors.

mod candidate_password;

pub use candidate_password::{CandidatePassword, PasswordParams};
