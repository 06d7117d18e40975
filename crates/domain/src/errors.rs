use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown column: {0}")]
    InvalidColumn(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
