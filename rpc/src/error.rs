//! RPC error types and their HTTP rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tally_governance::GovernanceError;
use tally_types::NameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Governance(#[from] GovernanceError),

    #[error("invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("server error: {0}")]
    Server(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub error: String,
}

impl RpcError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Governance(e) => e.code(),
            Self::InvalidName(_) | Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Server(_) => "SERVER_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Governance(e) => match e {
                GovernanceError::ProposalNotFound(_) | GovernanceError::NoProposalsFound => {
                    StatusCode::NOT_FOUND
                }
                GovernanceError::ProposalExists(_)
                | GovernanceError::AlreadyVoted(_)
                | GovernanceError::NoWinner
                | GovernanceError::Tie { .. } => StatusCode::CONFLICT,
            },
            Self::InvalidName(_) | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code(),
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
