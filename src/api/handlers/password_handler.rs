//! Password validation handler.

use axum::{extract::State, routing::post, Router};

use crate::api::extractors::{CandidatePassword, PasswordParams};
use crate::api::AppState;
use crate::config::PASSWORD_ROUTE;
use crate::errors::{AppError, AppResult};
use crate::types::Verdict;

/// Create password validation routes
pub fn password_routes() -> Router<AppState> {
    Router::new().route(PASSWORD_ROUTE, post(validate_password))
}

/// Check a candidate password against the policy
#[utoipa::path(
    post,
    path = "/api/v1/password",
    tag = "Password",
    params(PasswordParams),
    responses(
        (status = 200, description = "Password satisfies every rule", body = bool, example = json!(true)),
        (status = 400, description = "Password breaks a rule or is missing", body = bool, example = json!(false)),
        (status = 413, description = "Password longer than the configured maximum"),
        (status = 500, description = "Unexpected failure during evaluation")
    )
)]
pub async fn validate_password(
    State(state): State<AppState>,
    CandidatePassword(candidate): CandidatePassword,
) -> AppResult<Verdict> {
    let max = state.config.max_password_length;
    if candidate.chars().count() > max {
        return Err(AppError::InputTooLarge { max });
    }

    let accepted = state.validator.validate(&candidate)?;
    Ok(Verdict::from(accepted))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::services::MockPasswordValidator;

    fn app(validator: MockPasswordValidator, config: Config) -> Router {
        password_routes().with_state(AppState::new(Arc::new(validator), config))
    }

    async fn call(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_accepted_password_returns_true() {
        let mut validator = MockPasswordValidator::new();
        validator
            .expect_validate()
            .withf(|candidate: &str| candidate == "Ab1@efghi")
            .times(1)
            .returning(|_| Ok(true));

        let (status, body) = call(
            app(validator, Config::default()),
            "/api/v1/password?password=Ab1%40efghi",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"true");
    }

    #[tokio::test]
    async fn test_rejected_password_returns_false() {
        let mut validator = MockPasswordValidator::new();
        validator.expect_validate().times(1).returning(|_| Ok(false));

        let (status, body) = call(
            app(validator, Config::default()),
            "/api/v1/password?password=weak",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"false");
    }

    #[tokio::test]
    async fn test_missing_password_skips_validator() {
        let mut validator = MockPasswordValidator::new();
        validator.expect_validate().never();

        let (status, body) = call(app(validator, Config::default()), "/api/v1/password").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"false");
    }

    #[tokio::test]
    async fn test_oversized_password_skips_validator() {
        let mut validator = MockPasswordValidator::new();
        validator.expect_validate().never();
        let config = Config {
            max_password_length: 4,
            ..Config::default()
        };

        let (status, body) = call(app(validator, config), "/api/v1/password?password=abcde").await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_limit_is_inclusive() {
        let mut validator = MockPasswordValidator::new();
        validator.expect_validate().times(1).returning(|_| Ok(false));
        let config = Config {
            max_password_length: 4,
            ..Config::default()
        };

        let (status, _) = call(app(validator, config), "/api/v1/password?password=abcd").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validator_fault_returns_empty_500() {
        let mut validator = MockPasswordValidator::new();
        validator
            .expect_validate()
            .times(1)
            .returning(|_| Err(AppError::internal("rule table unavailable")));

        let (status, body) = call(
            app(validator, Config::default()),
            "/api/v1/password?password=Ab1%40efghi",
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());
    }
}
