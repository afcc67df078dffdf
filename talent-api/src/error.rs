use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum TalentApiError {
    /// Non-success HTTP status with the raw response body
    Status(StatusCode, String),
    Internal(ApiError),
}

impl From<ApiError> for TalentApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, body) | ApiError::ServerError(status, body) => {
                TalentApiError::Status(status, body)
            }
            e => TalentApiError::Internal(e),
        }
    }
}

impl TalentApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TalentApiError::Status(status, _) => Some(*status),
            TalentApiError::Internal(_) => None,
        }
    }
}

impl std::fmt::Display for TalentApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TalentApiError::Internal(e) => write!(f, "Internal error: {}", e),
            TalentApiError::Status(status, body) if body.is_empty() => {
                write!(f, "({}) request failed", status)
            }
            TalentApiError::Status(status, body) => write!(f, "({}) {}", status, body),
        }
    }
}

impl std::error::Error for TalentApiError {}
