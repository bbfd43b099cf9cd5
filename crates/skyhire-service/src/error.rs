use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    CoreError(#[from] skyhire_core::error::CoreError),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("RRule error: {0}")]
    RRuleError(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
