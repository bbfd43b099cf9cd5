use salvo::http::StatusCode;
use salvo::{Response, writing::Json};
use serde::Serialize;
use skyhire_core::error::CoreError;
use skyhire_service::error::ServiceError;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// ## Summary
    /// Maps the error onto the HTTP status reported to the client.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            Self::ServiceError(
                ServiceError::UnknownTimezone(_)
                | ServiceError::ValidationError(_)
                | ServiceError::RRuleError(_),
            ) => StatusCode::BAD_REQUEST,
            Self::ServiceError(ServiceError::CoreError(err)) | Self::CoreError(err) => {
                core_status_code(err)
            }
        }
    }

    /// ## Summary
    /// Writes the status code and a JSON `{error}` body to the response.
    pub fn render(&self, res: &mut Response) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }
        res.status_code(status);
        res.render(Json(ErrorResponse {
            error: self.to_string(),
        }));
    }
}

const fn core_status_code(err: &CoreError) -> StatusCode {
    match err {
        CoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        CoreError::ConfigError(_) | CoreError::InvariantViolation(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// ## Summary
/// Renders a 400 response for a body that failed to parse.
pub fn render_bad_request(res: &mut Response, message: &str) {
    res.status_code(StatusCode::BAD_REQUEST);
    res.render(Json(ErrorResponse {
        error: message.to_string(),
    }));
}
