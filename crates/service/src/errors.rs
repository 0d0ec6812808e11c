use models::errors::{ModelError, ValidationErrors};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(ValidationErrors),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(errs) => Self::Validation(errs),
        }
    }
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{} not found with id: {}", entity, id))
    }

    pub fn email_taken(email: &str) -> Self {
        Self::Conflict(format!("Employee with email {} already exists", email))
    }

    pub fn department_name_taken(name: &str) -> Self {
        Self::Conflict(format!("Department with name {} already exists", name))
    }

    /// Classify a storage error. Unique-index violations lose the race with a
    /// concurrent writer and are reported exactly like the service's own
    /// duplicate check.
    pub fn from_db(e: DbErr, on_conflict: impl FnOnce() -> ServiceError) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => on_conflict(),
            _ => Self::Db(e.to_string()),
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Db(_) => 1200,
        }
    }
}
