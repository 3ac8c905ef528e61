//! Error types shared by the search client and the search page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure talking to the marketplace API, as seen by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum SearchBackendError {
    #[error("marketplace API unreachable: {0}")]
    Unreachable(String),
    #[error("marketplace API returned {code}: {message}")]
    Status { code: u16, message: String },
    #[error("invalid response from marketplace API: {0}")]
    InvalidResponse(String),
}

/// What the user is told when a search cannot be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchFailure {
    Connectivity,
    Failed,
}

impl SearchFailure {
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchFailure::Connectivity => "Unable to reach the marketplace. Check your connection and try again.",
            SearchFailure::Failed => "Search failed. Please try again.",
        }
    }
}

impl From<&SearchBackendError> for SearchFailure {
    fn from(err: &SearchBackendError) -> Self {
        match err {
            SearchBackendError::Unreachable(_) => SearchFailure::Connectivity,
            SearchBackendError::Status { .. } | SearchBackendError::InvalidResponse(_) => SearchFailure::Failed,
        }
    }
}

impl std::fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.user_message())
    }
}
