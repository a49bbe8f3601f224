use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Outcome of validating one candidate password.
///
/// The body is the bare JSON boolean, the status carries the same
/// information for clients that only inspect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}

impl IntoResponse for Verdict {
    fn into_response(self) -> Response {
        match self {
            Verdict::Accepted => (StatusCode::OK, Json(true)).into_response(),
            Verdict::Rejected => (StatusCode::BAD_REQUEST, Json(false)).into_response(),
        }
    }
}
