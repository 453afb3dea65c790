use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::model::leave_request::LeaveStatus;

/// Failure modes of ledger and roster mutations. Every variant carries the
/// human-readable message shown to the client; handlers never rephrase them.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("User not authenticated.")]
    Unauthenticated,

    #[error("Unauthorized action.")]
    Unauthorized,

    #[error("Leave request not found.")]
    NotFound,

    /// The request was already decided; Approved/Rejected are terminal.
    #[error("Leave request already {0}; only pending requests can be decided.")]
    InvalidTransition(LeaveStatus),

    #[error("Employee ID already exists.")]
    DuplicateEmployeeId,

    #[error("Failed to persist application state.")]
    Persistence(anyhow::Error),
}

impl From<anyhow::Error> for LedgerError {
    fn from(err: anyhow::Error) -> Self {
        LedgerError::Persistence(err)
    }
}

impl ResponseError for LedgerError {
    fn status_code(&self) -> StatusCode {
        match self {
            LedgerError::Unauthenticated => StatusCode::UNAUTHORIZED,
            LedgerError::Unauthorized => StatusCode::FORBIDDEN,
            LedgerError::NotFound => StatusCode::NOT_FOUND,
            LedgerError::InvalidTransition(_) | LedgerError::DuplicateEmployeeId => {
                StatusCode::CONFLICT
            }
            LedgerError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}
