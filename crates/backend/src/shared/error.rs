use contracts::shared::validation::ValidationErrors;

/// Failure of one service operation.
///
/// Handlers map the variants onto HTTP statuses: 404 for `NotFound`,
/// 422 with the field map for `Validation`, 500 for everything else.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("record not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(errors)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
