use thiserror::Error;

/// Errors returned by [`crate::ApiClient`]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, or a body that could not be encoded/decoded
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("error code: {status} message: {body}")]
    Status { status: u16, body: String },
}

impl ApiError {
    /// HTTP status of the response, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(err) => err.status().map(|s| s.as_u16()),
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "error code: 401 message: Unauthorized");
        assert_eq!(err.status(), Some(401));
    }
}
