//! Candidate password extractor - Pulls the password out of the query string.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::AppError;

/// Query parameters of the validation endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PasswordParams {
    /// Candidate password (alias: `senha`)
    #[serde(alias = "senha")]
    #[param(example = "Ab1@efghi")]
    pub password: Option<String>,
}

/// Candidate password taken from the `password` query parameter.
///
/// A missing parameter or an unreadable query string is rejected with
/// `AppError::MissingInput`, which answers like a failed validation.
///
/// # Example
///
/// ```rust,ignore
/// use password_validator::api::extractors::CandidatePassword;
///
/// async fn check(CandidatePassword(candidate): CandidatePassword) {
///     // candidate is the raw, percent-decoded string
/// }
/// ```
#[derive(Debug)]
pub struct CandidatePassword(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for CandidatePassword
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PasswordParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Unreadable query string: {}", e.body_text());
                AppError::MissingInput
            })?;

        params.password.map(CandidatePassword).ok_or_else(|| {
            tracing::debug!("Password parameter missing");
            AppError::MissingInput
        })
    }
}
