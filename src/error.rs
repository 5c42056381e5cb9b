use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("{0}")]
    Gateway(String),
    #[error("seller {0} not found")]
    SellerNotFound(u64),
    #[error("payment intent {0} already recorded")]
    DuplicatePayment(String),
    #[error("{0}")]
    Signature(String),
}

impl OrchestratorError {
    pub fn status(&self) -> StatusCode {
        match self {
            OrchestratorError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrchestratorError::SellerNotFound(_) => StatusCode::NOT_FOUND,
            OrchestratorError::DuplicatePayment(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrchestratorError::Signature(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
}

impl FailureBody {
    pub fn from_error(err: &OrchestratorError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}
